use async_trait::async_trait;

use crate::domain::{Post, PostFields, PostId};
use crate::error::ModelError;

/// Post model - the persistence collaborator behind the controller.
#[async_trait]
pub trait PostModel: Send + Sync {
    /// Persist a new post, assigning its id and date.
    async fn create_post(&self, fields: PostFields) -> Result<Post, ModelError>;

    /// Replace the supplied fields of an existing post.
    async fn update_post(&self, id: PostId, fields: PostFields) -> Result<Post, ModelError>;

    /// Look up a post by id.
    async fn find_post(&self, id: PostId) -> Result<Post, ModelError>;
}
