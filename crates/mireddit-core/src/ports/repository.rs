use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Post repository - durable storage operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return all posts in store order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Insert a new post and return it with the store-assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist changes to an existing post.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by id, returning the number of rows removed.
    async fn delete_by_id(&self, id: i32) -> Result<u64, RepoError>;
}

/// User repository - durable storage operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return all users in store order.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user and return it with the store-assigned id.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;
}
