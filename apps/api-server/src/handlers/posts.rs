//! Post handlers - thin actix-web adapters around `PostController`.
//!
//! A body that is absent or fails to parse reaches the controller as `None`,
//! so it takes the operation's failure status instead of a 400.

use actix_web::{HttpResponse, web};
use posts_core::domain::PostFields;

use crate::controller::{HttpSink, PostRequest};
use crate::state::AppState;

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: Option<web::Json<PostFields>>,
) -> HttpResponse {
    let req = PostRequest::new().with_body(body.map(web::Json::into_inner));
    state.posts.create(req, HttpSink).await
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: Option<web::Json<PostFields>>,
) -> HttpResponse {
    let req = PostRequest::new()
        .with_id(id.into_inner())
        .with_body(body.map(web::Json::into_inner));
    state.posts.update(req, HttpSink).await
}

/// GET /posts/{id}
pub async fn find_post(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let req = PostRequest::new().with_id(id.into_inner());
    state.posts.find_post(req, HttpSink).await
}
