//! PostgreSQL post model.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Set};

use posts_core::ModelError;
use posts_core::domain::{NewPost, Post, PostFields, PostId};
use posts_core::ports::PostModel;

use super::entity::post::{self, Entity as PostEntity};

/// Post model backed by the `posts` table.
pub struct PostgresPostModel {
    db: DbConn,
}

impl PostgresPostModel {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &PostId) -> Result<Option<post::Model>, ModelError> {
        PostEntity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(persistence)
    }
}

fn persistence(err: DbErr) -> ModelError {
    tracing::warn!(error = %err, "Post query failed");
    ModelError::Persistence(err.to_string())
}

#[async_trait]
impl PostModel for PostgresPostModel {
    async fn create_post(&self, fields: PostFields) -> Result<Post, ModelError> {
        let post = Post::new(NewPost::try_from(fields)?);

        let saved = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(persistence)?;

        tracing::debug!(post_id = %saved.id, "Post created");
        Ok(saved.into())
    }

    async fn update_post(&self, id: PostId, fields: PostFields) -> Result<Post, ModelError> {
        let existing = self
            .find_model(&id)
            .await?
            .ok_or_else(|| ModelError::not_found(id.clone()))?;

        let mut post = Post::from(existing.clone());
        post.apply(fields)?;

        let mut active = existing.into_active_model();
        active.author = Set(post.author);
        active.title = Set(post.title);
        active.content = Set(post.content);

        let saved = active.update(&self.db).await.map_err(persistence)?;

        tracing::debug!(post_id = %id, "Post updated");
        Ok(saved.into())
    }

    async fn find_post(&self, id: PostId) -> Result<Post, ModelError> {
        match self.find_model(&id).await? {
            Some(model) => Ok(model.into()),
            None => Err(ModelError::NotFound { id }),
        }
    }
}
