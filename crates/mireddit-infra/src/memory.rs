//! In-memory repositories - used as fallback when the database is not
//! configured. Data is lost on process restart.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use mireddit_core::domain::{NewPost, NewUser, Post, User};
use mireddit_core::error::RepoError;
use mireddit_core::ports::{PostRepository, UserRepository};

/// In-memory post store backed by a Vec with async RwLock.
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
    next_id: AtomicI32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, new: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new.title,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.push(post.clone());
        Ok(post)
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        post.updated_at = Utc::now();
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *row = post.clone();
        Ok(post)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok((before - rows.len()) as u64)
    }
}

/// In-memory user store. Enforces the same unique-username constraint the
/// database migration declares, so the fallback behaves like the real store.
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, new: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.username == new.username) {
            return Err(RepoError::Constraint(format!(
                "username {} already taken",
                new.username
            )));
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new.username,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn post_ids_are_assigned_sequentially() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(NewPost::new("a")).await.unwrap();
        let second = repo.create(NewPost::new("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn save_touches_updated_at() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.create(NewPost::new("a")).await.unwrap();
        let created_at = post.created_at;

        post.title = "b".to_string();
        let saved = repo.save(post).await.unwrap();

        assert_eq!(saved.created_at, created_at);
        assert!(saved.updated_at >= created_at);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_constraint_error() {
        let repo = InMemoryUserRepository::new();
        repo.create(NewUser::new("alice", "hash")).await.unwrap();

        let err = repo.create(NewUser::new("alice", "hash")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
