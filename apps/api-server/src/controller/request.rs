//! Request shape handed to the post controller.

use posts_core::domain::{PostFields, PostId};

/// Route parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostParams {
    pub id: Option<String>,
}

/// A framework-agnostic post request: an optional body and route params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRequest {
    pub body: Option<PostFields>,
    pub params: PostParams,
}

impl PostRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: impl Into<Option<PostFields>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.params.id = Some(id.into());
        self
    }

    /// The `id` route parameter, if present.
    pub fn id(&self) -> Option<PostId> {
        self.params.id.as_deref().map(PostId::from)
    }
}
