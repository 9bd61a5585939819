//! # Posts Infrastructure
//!
//! Concrete implementations of the `PostModel` port defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostModel;

#[cfg(feature = "postgres")]
pub use database::PostgresPostModel;
