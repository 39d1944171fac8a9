// Service module exports
// Backend collaborators (event store, auth) and the pure grid builders

pub mod auth;
pub mod database;
pub mod error;
pub mod event;
pub mod grid;
pub mod remote;
pub mod store;

use std::fs;

use anyhow::{Context, Result};

use crate::config::{AppConfig, BackendConfig, LocalConfig, RemoteConfig};
use auth::{AuthProvider, LocalAuth};
use database::Database;
use event::EventService;
use remote::{RemoteAuth, RestEventStore, SessionToken};
use store::EventStore;

/// The pair of collaborators the page controller talks to
pub struct Backend {
    pub store: Box<dyn EventStore>,
    pub auth: Box<dyn AuthProvider>,
}

/// Build the configured backend
pub fn connect(config: &AppConfig) -> Result<Backend> {
    match &config.backend {
        BackendConfig::Local(local) => connect_local(local),
        BackendConfig::Remote(remote) => connect_remote(remote),
    }
}

fn connect_local(config: &LocalConfig) -> Result<Backend> {
    let db_path = config.resolved_database_path();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let db_path = db_path.to_string_lossy().to_string();
    log::info!("Using local event store at {}", db_path);

    let db = Database::new(&db_path)?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;

    // The connection lives for the whole process
    let db: &'static Database = Box::leak(Box::new(db));

    Ok(Backend {
        store: Box::new(EventService::new(db.connection())),
        auth: Box::new(LocalAuth::new(config.user_name.clone())),
    })
}

fn connect_remote(config: &RemoteConfig) -> Result<Backend> {
    if config.url.trim().is_empty() {
        anyhow::bail!("Remote backend selected but no URL is configured");
    }
    if config.api_key.is_empty() {
        log::warn!("Remote backend configured without an API key");
    }
    log::info!("Using hosted event store at {}", config.url);

    let token = SessionToken::default();
    let store = RestEventStore::new(config.clone(), token.clone())
        .context("Failed to build event store client")?;
    let auth = RemoteAuth::new(config.clone(), token)
        .context("Failed to build auth client")?;

    Ok(Backend {
        store: Box::new(store),
        auth: Box::new(auth),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventDraft;
    use chrono::{Duration, Local};

    #[test]
    fn test_connect_local_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("calendar.db");
        let config = AppConfig {
            backend: BackendConfig::Local(LocalConfig {
                database_path: Some(path.clone()),
                user_name: Some("Robin".to_string()),
            }),
            ..AppConfig::default()
        };

        let backend = connect(&config).unwrap();
        assert!(path.exists());

        let session = backend.auth.current_session().unwrap().unwrap();
        assert_eq!(session.user.display_name.as_deref(), Some("Robin"));

        let start = Local::now();
        let draft = EventDraft::new("Review", start, start + Duration::hours(1));
        backend.store.insert(&session.user.id, &draft).unwrap();
        assert_eq!(backend.store.list_for_user(&session.user.id).unwrap().len(), 1);
    }

    #[test]
    fn test_connect_remote_requires_url() {
        let config = AppConfig {
            backend: BackendConfig::Remote(RemoteConfig {
                url: "  ".to_string(),
                api_key: "key".to_string(),
                timeout_secs: 5,
            }),
            ..AppConfig::default()
        };

        assert!(connect(&config).is_err());
    }
}
