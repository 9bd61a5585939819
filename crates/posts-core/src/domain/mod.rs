//! Domain entities - the post record and its partial field set.

mod post;

pub use post::{NewPost, Post, PostFields, PostId};
