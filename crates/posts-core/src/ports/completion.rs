//! Callback-style completion, normalized into futures.
//!
//! Some model backends report their outcome through a completion callback
//! instead of returning a future. [`from_callback`] turns one such call into
//! a `Result`, and [`Callbacks`] lifts a whole [`CallbackPostModel`] into a
//! [`PostModel`]. A backend may also mix both conventions per operation by
//! calling [`from_callback`] from its own `PostModel` impl.

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::domain::{Post, PostFields, PostId};
use crate::error::ModelError;

use super::PostModel;

/// Completion handed to a callback-style operation. Invoke it once with the outcome.
pub type Done<T> = Box<dyn FnOnce(Result<T, ModelError>) + Send>;

/// Run a callback-style operation and wait for its completion.
///
/// The completion may be invoked synchronously or later from another task.
/// Dropping it without invoking it is reported as a persistence failure.
pub async fn from_callback<T, F>(start: F) -> Result<T, ModelError>
where
    T: Send + 'static,
    F: FnOnce(Done<T>),
{
    let (tx, rx) = oneshot::channel();

    start(Box::new(move |outcome| {
        // Receiver gone means the caller stopped waiting.
        let _ = tx.send(outcome);
    }));

    rx.await.map_err(|_| {
        ModelError::Persistence("completion dropped without a result".to_string())
    })?
}

/// Post model that reports outcomes through completion callbacks.
pub trait CallbackPostModel: Send + Sync {
    fn create_post(&self, fields: PostFields, done: Done<Post>);

    fn update_post(&self, id: PostId, fields: PostFields, done: Done<Post>);

    fn find_post(&self, id: PostId, done: Done<Post>);
}

/// Adapter exposing a [`CallbackPostModel`] as a [`PostModel`].
pub struct Callbacks<M>(pub M);

#[async_trait]
impl<M> PostModel for Callbacks<M>
where
    M: CallbackPostModel,
{
    async fn create_post(&self, fields: PostFields) -> Result<Post, ModelError> {
        from_callback(|done| self.0.create_post(fields, done)).await
    }

    async fn update_post(&self, id: PostId, fields: PostFields) -> Result<Post, ModelError> {
        from_callback(|done| self.0.update_post(id, fields, done)).await
    }

    async fn find_post(&self, id: PostId) -> Result<Post, ModelError> {
        from_callback(|done| self.0.find_post(id, done)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post() -> Post {
        Post::new(NewPost {
            author: "stswenguser".to_string(),
            title: "My first test post".to_string(),
            content: "Random content".to_string(),
        })
    }

    /// Yields immediately, the way an error-first callback stub does.
    struct Immediate {
        post: Post,
    }

    impl CallbackPostModel for Immediate {
        fn create_post(&self, _fields: PostFields, done: Done<Post>) {
            done(Ok(self.post.clone()));
        }

        fn update_post(&self, id: PostId, _fields: PostFields, done: Done<Post>) {
            done(Err(ModelError::not_found(id)));
        }

        fn find_post(&self, _id: PostId, _done: Done<Post>) {
            // never completes
        }
    }

    #[tokio::test]
    async fn test_synchronous_completion() {
        let expected = post();
        let model = Callbacks(Immediate {
            post: expected.clone(),
        });

        let created = model.create_post(PostFields::default()).await.unwrap();
        assert_eq!(created, expected);

        let err = model
            .update_post("missing".into(), PostFields::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_dropped_completion_is_persistence_error() {
        let model = Callbacks(Immediate { post: post() });

        let err = model.find_post("anything".into()).await.unwrap_err();
        assert!(matches!(err, ModelError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_completion_from_another_task() {
        let expected = post();
        let sent = expected.clone();

        let found = from_callback(move |done: Done<Post>| {
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                done(Ok(sent));
            });
        })
        .await
        .unwrap();

        assert_eq!(found, expected);
    }
}
