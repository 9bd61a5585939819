//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

pub mod completion;
mod post_model;

pub use completion::{CallbackPostModel, Callbacks, Done, from_callback};
pub use post_model::PostModel;
