//! Pure domain logic for the form builder: question and form models,
//! answer representation, submission validation, and response aggregation.
//!
//! This crate performs no I/O. Persistence lives in `formsmith-db` and the
//! HTTP surface in `formsmith-api`; both depend on the types and functions
//! defined here.

pub mod answer;
pub mod error;
pub mod form;
pub mod question;
pub mod response;
pub mod summary;
pub mod types;
pub mod validator;
