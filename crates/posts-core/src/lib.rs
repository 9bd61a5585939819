//! # Posts Core
//!
//! The domain layer of the posts service.
//! This crate holds the post record, the model error and the `PostModel` port
//! the controller depends on. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::ModelError;
