use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a titled entry with a store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a post that has not been inserted yet.
/// The store assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
