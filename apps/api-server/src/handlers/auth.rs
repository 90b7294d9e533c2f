//! Authentication handlers.

use actix_web::{HttpResponse, web};

use mireddit_core::services::{AuthResult, FieldError};
use mireddit_shared::dto::{self, AuthResponse, LoginRequest, RegisterRequest};

use crate::handlers::users::to_dto;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_field_dtos(errors: Vec<FieldError>) -> Vec<dto::FieldError> {
    errors
        .into_iter()
        .map(|e| dto::FieldError {
            field: e.field.to_string(),
            message: e.message,
        })
        .collect()
}

/// POST /api/auth/register
///
/// Validation failures and username collisions come back in the response
/// body as field errors with status 422; only infrastructure faults
/// surface as 5xx.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    match state.users.register(&req.username, &req.password).await? {
        AuthResult::Success(user) => {
            Ok(HttpResponse::Created().json(AuthResponse::user(to_dto(&user))))
        }
        AuthResult::Failure(errors) => Ok(HttpResponse::UnprocessableEntity()
            .json(AuthResponse::errors(to_field_dtos(errors)))),
    }
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    match state.users.login(&req.username, &req.password).await? {
        AuthResult::Success(user) => Ok(HttpResponse::Ok().json(AuthResponse::user(to_dto(&user)))),
        AuthResult::Failure(errors) => {
            Ok(HttpResponse::Unauthorized().json(AuthResponse::errors(to_field_dtos(errors))))
        }
    }
}
