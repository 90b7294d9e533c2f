use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Outcome of a delete request.
///
/// "Nothing matched" and "the store faulted" are distinct: the former is
/// `NotFound` here, the latter surfaces as a `RepoError` from the caller's
/// `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// CRUD operations on posts.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Return all posts, unfiltered, in store order.
    pub async fn list(&self) -> Result<Vec<Post>, RepoError> {
        self.posts.find_all().await
    }

    /// Return the post with the given id, or `None` if it does not exist.
    pub async fn get(&self, id: i32) -> Result<Option<Post>, RepoError> {
        self.posts.find_by_id(id).await
    }

    /// Create a post with the given title. The returned record carries the
    /// store-assigned id.
    pub async fn create(&self, title: String) -> Result<Post, RepoError> {
        self.posts.create(NewPost::new(title)).await
    }

    /// Update a post's title.
    ///
    /// `None` for `title` means "not supplied": the stored record is
    /// returned unchanged with no write. `Some` replaces the title, empty
    /// string included. A missing id yields `Ok(None)`, not an error.
    pub async fn update(&self, id: i32, title: Option<String>) -> Result<Option<Post>, RepoError> {
        let Some(mut post) = self.posts.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(title) = title {
            post.title = title;
            post = self.posts.save(post).await?;
        }

        Ok(Some(post))
    }

    /// Delete the post with the given id.
    ///
    /// A non-matching id is `Ok(DeleteOutcome::NotFound)`; store faults
    /// propagate as `Err`.
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, RepoError> {
        let removed = self.posts.delete_by_id(id).await?;
        if removed == 0 {
            return Ok(DeleteOutcome::NotFound);
        }
        Ok(DeleteOutcome::Deleted)
    }
}
