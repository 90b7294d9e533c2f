//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
}

/// Request to update a post. An absent `title` field means "leave the
/// stored title alone"; an empty string is a real replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A user's public information. The credential hash never crosses the
/// wire; redaction happens when this type is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub created_at: String,
}

/// A validation or lookup failure tied to a named input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of a login or register call: either a user or a non-empty
/// list of field errors, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl AuthResponse {
    pub fn user(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            errors: None,
        }
    }

    pub fn errors(errors: Vec<FieldError>) -> Self {
        Self {
            user: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let absent: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(absent.title.is_none());

        let empty: UpdatePostRequest = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert_eq!(empty.title.as_deref(), Some(""));
    }

    #[test]
    fn auth_response_omits_empty_side() {
        let ok = AuthResponse::user(UserResponse {
            id: 1,
            username: "alice".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        });
        let json = serde_json::to_string(&ok).unwrap();
        assert!(!json.contains("\"errors\""));

        let failed = AuthResponse::errors(vec![FieldError {
            field: "username".to_string(),
            message: "taken".to_string(),
        }]);
        let json = serde_json::to_string(&failed).unwrap();
        assert!(!json.contains("\"user\""));
    }
}
