//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostModel;
use posts_infra::{DatabaseConfig, InMemoryPostModel};

use crate::controller::PostController;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostController,
    /// Name of the storage backend in use, reported by the health check.
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state, falling back to in-memory storage when
    /// the database is not configured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match posts_infra::database::connect(config).await {
                Ok(conn) => Self::with_model(
                    Arc::new(posts_infra::PostgresPostModel::new(conn)),
                    "postgres",
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory posts");
            Self::in_memory()
        };

        tracing::info!(backend = state.backend, "Application state initialized");
        state
    }

    /// Build state around an explicit post model.
    pub fn with_model(model: Arc<dyn PostModel>, backend: &'static str) -> Self {
        Self {
            posts: PostController::new(model),
            backend,
        }
    }

    fn in_memory() -> Self {
        Self::with_model(Arc::new(InMemoryPostModel::new()), "memory")
    }
}
