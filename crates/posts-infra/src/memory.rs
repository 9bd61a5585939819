//! In-memory post model - used when no database is configured or reachable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::ModelError;
use posts_core::domain::{NewPost, Post, PostFields, PostId};
use posts_core::ports::PostModel;

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostModel {
    store: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostModel {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPostModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostModel for InMemoryPostModel {
    async fn create_post(&self, fields: PostFields) -> Result<Post, ModelError> {
        let post = Post::new(NewPost::try_from(fields)?);

        let mut store = self.store.write().await;
        store.insert(post.id.clone(), post.clone());

        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn update_post(&self, id: PostId, fields: PostFields) -> Result<Post, ModelError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or_else(|| ModelError::not_found(id.clone()))?;

        post.apply(fields)?;

        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn find_post(&self, id: PostId) -> Result<Post, ModelError> {
        let store = self.store.read().await;
        store.get(&id).cloned().ok_or(ModelError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> PostFields {
        PostFields::new("stswenguser", "My first test post", "Random content")
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let model = InMemoryPostModel::new();

        let first = model.create_post(fields()).await.unwrap();
        let second = model.create_post(fields()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.title, "My first test post");
        assert_eq!(model.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let model = InMemoryPostModel::new();

        let result = model
            .create_post(PostFields {
                title: Some("Only a title".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ModelError::Validation(_))));
        assert!(model.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_date() {
        let model = InMemoryPostModel::new();
        let created = model.create_post(fields()).await.unwrap();

        let updated = model
            .update_post(
                created.id.clone(),
                PostFields::new("newuser", "just updated", "new content"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.title, "just updated");
        assert_eq!(model.find_post(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let model = InMemoryPostModel::new();

        let find = model.find_post("507asdghajsdhjgasd".into()).await;
        let update = model
            .update_post("507asdghajsdhjgasd".into(), fields())
            .await;

        assert!(find.unwrap_err().is_not_found());
        assert!(update.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_is_repeatable() {
        let model = InMemoryPostModel::new();
        let created = model.create_post(fields()).await.unwrap();

        let first = model.find_post(created.id.clone()).await.unwrap();
        let second = model.find_post(created.id).await.unwrap();

        assert_eq!(first, second);
    }
}
