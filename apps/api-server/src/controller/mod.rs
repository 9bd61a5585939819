//! Post controller - adapts one model call into one response write.
//!
//! Create and update failures map to 500, lookup failures map to 404.
//! Error details are logged and never written to the response.

mod request;
mod sink;

use std::sync::Arc;

use actix_web::http::StatusCode;
use posts_core::ModelError;
use posts_core::domain::PostId;
use posts_core::ports::PostModel;

pub use request::PostRequest;
pub use sink::{EndResponse, HttpSink, ResponseSink};

/// Stateless request handler over an injected post model.
#[derive(Clone)]
pub struct PostController {
    model: Arc<dyn PostModel>,
}

impl PostController {
    pub fn new(model: Arc<dyn PostModel>) -> Self {
        Self { model }
    }

    /// POST /posts
    pub async fn create<S: ResponseSink>(&self, req: PostRequest, res: S) -> S::Output {
        let Some(body) = req.body else {
            tracing::error!("Create request without a body");
            return fail(res, StatusCode::INTERNAL_SERVER_ERROR);
        };

        match self.model.create_post(body).await {
            Ok(post) => res.json(&post),
            Err(e) => {
                log_write_failure("create", None, &e);
                fail(res, StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// PUT /posts/{id}
    pub async fn update<S: ResponseSink>(&self, req: PostRequest, res: S) -> S::Output {
        let (Some(id), Some(body)) = (req.id(), req.body) else {
            tracing::error!("Update request without an id or a body");
            return fail(res, StatusCode::INTERNAL_SERVER_ERROR);
        };

        match self.model.update_post(id.clone(), body).await {
            Ok(post) => res.json(&post),
            Err(e) => {
                log_write_failure("update", Some(&id), &e);
                fail(res, StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// GET /posts/{id}
    pub async fn find_post<S: ResponseSink>(&self, req: PostRequest, res: S) -> S::Output {
        let Some(id) = req.id() else {
            tracing::debug!("Lookup request without an id");
            return fail(res, StatusCode::NOT_FOUND);
        };

        match self.model.find_post(id.clone()).await {
            Ok(post) => res.json(&post),
            Err(e) => {
                tracing::debug!(post_id = %id, error = %e, "Post lookup failed");
                fail(res, StatusCode::NOT_FOUND)
            }
        }
    }
}

/// Validation failures log at warn, every other write failure at error.
fn log_write_failure(operation: &'static str, id: Option<&PostId>, e: &ModelError) {
    let post_id = id.map(PostId::as_str);
    match e {
        ModelError::Validation(_) => {
            tracing::warn!(operation, post_id, error = %e, "Rejected post write")
        }
        _ => tracing::error!(operation, post_id, error = %e, "Failed to write post"),
    }
}

fn fail<S: ResponseSink>(res: S, code: StatusCode) -> S::Output {
    res.status(code).end()
}
