//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use mireddit_core::domain::Post;
use mireddit_core::services::DeleteOutcome;
use mireddit_shared::ApiResponse;
use mireddit_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_dto(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let dtos: Vec<PostResponse> = posts.into_iter().map(to_dto).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(dtos)))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_dto(post))))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner().title).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_dto(post))))
}

/// PATCH /api/posts/{id}
///
/// A request body without a `title` field returns the stored record
/// unchanged; `"title": ""` is a real replacement.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .update(id, body.into_inner().title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_dto(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await? {
        DeleteOutcome::Deleted => Ok(HttpResponse::NoContent().finish()),
        DeleteOutcome::NotFound => Err(AppError::NotFound(format!("post {id}"))),
    }
}
