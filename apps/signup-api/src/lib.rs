use std::sync::Arc;

use activity_directory::{ActivityDirectory, SeedError};
use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;

use crate::config::SignupConfig;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// State backed by the built-in activity seed.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(ActivityDirectory::seeded()?))
    }

    pub fn from_config(config: &SignupConfig) -> Result<Self> {
        let directory = match &config.seed_path {
            Some(path) => {
                tracing::info!("Loading activity seed from {}", path);
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read activity seed {}", path))?;
                ActivityDirectory::from_seed(&contents)?
            }
            None => ActivityDirectory::seeded()?,
        };

        Ok(Self::new(
            directory.with_capacity_enforced(config.enforce_capacity),
        ))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::app::root_redirect))
        .route("/health", get(handlers::health::health_check))
        .route("/static/{*path}", get(handlers::app::serve_static))
        .route("/activities", get(handlers::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::activities::unregister_from_activity),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SEED: &str = r#"
        [[activity]]
        name = "Chess Club"
        description = "Learn strategies and compete in chess tournaments"
        schedule = "Fridays, 3:30 PM - 5:00 PM"
        max_participants = 1
        participants = ["michael@mergington.edu"]

        [[activity]]
        name = "Orchestra"
        description = "Rehearse and perform with the school orchestra"
        schedule = "Wednesdays, 4:00 PM - 5:30 PM"
        max_participants = 40
    "#;

    #[tokio::test]
    async fn from_config_loads_seed_file_and_capacity_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.toml");
        fs::write(&path, SEED).unwrap();

        let config = SignupConfig {
            seed_path: Some(path.display().to_string()),
            enforce_capacity: true,
            ..SignupConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();

        assert!(state.directory.enforces_capacity());
        assert!(!state.directory.is_empty().await);
        let listing = state.directory.list().await;
        assert_eq!(listing.len(), 2);
        assert!(listing.get("Orchestra").unwrap().participants.is_empty());
        assert!(listing.get("Gym Class").is_none());

        let err = state
            .directory
            .enroll("Chess Club", "late@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, activity_directory::DirectoryError::ActivityFull { .. }));
    }

    #[tokio::test]
    async fn from_config_defaults_to_built_in_seed() {
        let state = AppState::from_config(&SignupConfig::default()).unwrap();

        assert!(!state.directory.enforces_capacity());
        assert_eq!(state.directory.len().await, 10);
    }

    #[test]
    fn from_config_reports_unreadable_seed() {
        let dir = tempfile::tempdir().unwrap();
        let config = SignupConfig {
            seed_path: Some(dir.path().join("missing.toml").display().to_string()),
            ..SignupConfig::default()
        };

        let err = AppState::from_config(&config).err().unwrap();
        assert!(err.to_string().starts_with("Failed to read activity seed"));
    }

    #[test]
    fn from_config_rejects_invalid_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.toml");
        fs::write(&path, "[[activity]]\nname = \"Chess Club\"\n").unwrap();

        let config = SignupConfig {
            seed_path: Some(path.display().to_string()),
            ..SignupConfig::default()
        };

        assert!(AppState::from_config(&config).is_err());
    }
}
