//! Hosted backend: a PostgREST-style `events` table plus GoTrue-style auth.
//!
//! Both halves share one bearer token; the auth client writes it on sign-in
//! and clears it on sign-out, the store reads it for every request.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::services::error::BackendError;

mod auth;
mod store;

pub use auth::RemoteAuth;
pub use store::RestEventStore;

/// Bearer token shared between the auth client and the event store
#[derive(Debug, Clone, Default)]
pub struct SessionToken(Arc<RwLock<Option<String>>>);

impl SessionToken {
    pub fn get(&self) -> Option<String> {
        self.0.read().ok().and_then(|token| token.clone())
    }

    pub fn set(&self, token: Option<String>) {
        if let Ok(mut slot) = self.0.write() {
            *slot = token;
        }
    }
}

/// Build the blocking HTTP client used by both halves
pub(crate) fn build_client(config: &RemoteConfig) -> Result<Client, BackendError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?)
}

pub(crate) fn endpoint(config: &RemoteConfig, path: &str) -> String {
    format!("{}/{}", config.url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Error payloads from PostgREST (`message`) and GoTrue (`msg`,
/// `error_description`)
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Pass successful responses through; turn everything else into `Api`
pub(crate) fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    log::warn!("Backend request failed with {}: {}", status, message);

    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error_description)
        .or(parsed.msg)
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
}
