//! Application state - shared across all handlers.

use std::sync::Arc;

use mireddit_core::ports::{PostRepository, UserRepository};
use mireddit_core::services::{PostService, UserService};
use mireddit_infra::auth::Argon2PasswordService;
use mireddit_infra::database::DatabaseConfig;
use mireddit_infra::memory::{InMemoryPostRepository, InMemoryUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (post_repo, user_repo) = Self::repositories(db_config).await;

        let passwords = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(PostService::new(post_repo)),
            users: Arc::new(UserService::new(user_repo, passwords)),
        }
    }

    #[cfg(feature = "postgres")]
    async fn repositories(
        db_config: Option<&DatabaseConfig>,
    ) -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        use mireddit_infra::database::{PostgresPostRepository, PostgresUserRepository, connect};

        if let Some(config) = db_config {
            match connect(config).await {
                Ok(conn) => {
                    return (
                        Arc::new(PostgresPostRepository::new(conn.clone())),
                        Arc::new(PostgresUserRepository::new(conn)),
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        Self::in_memory()
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(
        _db_config: Option<&DatabaseConfig>,
    ) -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory()
    }

    fn in_memory() -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        (
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}
