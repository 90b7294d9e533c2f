//! User listing handler.

use actix_web::{HttpResponse, web};

use mireddit_core::domain::User;
use mireddit_shared::ApiResponse;
use mireddit_shared::dto::UserResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Build the public view of a user. The credential hash stays behind
/// this boundary.
pub(super) fn to_dto(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let dtos: Vec<UserResponse> = users.iter().map(to_dto).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(dtos)))
}
