use std::sync::mpsc::Receiver;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::{build_client, check_status, endpoint, SessionToken};
use crate::config::RemoteConfig;
use crate::models::user::{Session, User, UserId};
use crate::services::auth::{AuthBroadcaster, AuthChange, AuthProvider};
use crate::services::error::BackendError;

const TOKEN_PATH: &str = "auth/v1/token";
const LOGOUT_PATH: &str = "auth/v1/logout";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: RemoteUser,
}

#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: UserId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        let RemoteUser {
            id,
            email,
            user_metadata,
        } = response.user;
        Session {
            user: User {
                id,
                display_name: user_metadata.full_name,
                email,
            },
            access_token: response.access_token,
        }
    }
}

/// Password sign-in against a GoTrue-style auth endpoint
pub struct RemoteAuth {
    client: Client,
    config: RemoteConfig,
    token: SessionToken,
    session: Option<Session>,
    broadcaster: AuthBroadcaster,
}

impl RemoteAuth {
    pub fn new(config: RemoteConfig, token: SessionToken) -> Result<Self, BackendError> {
        Ok(Self {
            client: build_client(&config)?,
            config,
            token,
            session: None,
            broadcaster: AuthBroadcaster::default(),
        })
    }

    fn clear_session(&mut self) {
        self.token.set(None);
        if self.session.take().is_some() {
            self.broadcaster.publish(AuthChange::SignedOut);
        }
    }
}

impl AuthProvider for RemoteAuth {
    fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Ok(self.session.clone())
    }

    fn subscribe(&mut self) -> Receiver<AuthChange> {
        self.broadcaster.subscribe()
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, BackendError> {
        let response = self
            .client
            .post(endpoint(&self.config, TOKEN_PATH))
            .query(&[("grant_type", "password")])
            .header("apikey", self.config.api_key.as_str())
            .json(&json!({ "email": email.trim(), "password": password }))
            .send()?;

        let session: Session = check_status(response)?
            .json::<TokenResponse>()
            .map_err(BackendError::decode)?
            .into();

        log::info!("Signed in as {}", session.user.id);
        self.token.set(Some(session.access_token.clone()));
        self.session = Some(session.clone());
        self.broadcaster
            .publish(AuthChange::SignedIn(session.user.clone()));
        Ok(session)
    }

    /// The local session is dropped even when the server call fails, so the
    /// user is never left half signed in.
    fn sign_out(&mut self) -> Result<(), BackendError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };

        let result = self
            .client
            .post(endpoint(&self.config, LOGOUT_PATH))
            .header("apikey", self.config.api_key.as_str())
            .bearer_auth(&session.access_token)
            .send()
            .map_err(BackendError::from)
            .and_then(check_status);

        self.clear_session();
        result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_maps_to_session() {
        let body = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": "3f1c",
                "email": "ada@example.com",
                "user_metadata": { "full_name": "Ada Lovelace" }
            }
        }"#;

        let session: Session = serde_json::from_str::<TokenResponse>(body).unwrap().into();
        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.user.id.as_str(), "3f1c");
        assert_eq!(session.user.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_token_response_without_metadata() {
        let body = r#"{"access_token": "t", "user": {"id": "u"}}"#;
        let session: Session = serde_json::from_str::<TokenResponse>(body).unwrap().into();
        assert!(session.user.display_name.is_none());
    }

    #[test]
    fn test_sign_out_without_session_is_noop() {
        let config = RemoteConfig {
            url: "http://127.0.0.1:9".to_string(),
            api_key: "anon".to_string(),
            timeout_secs: 1,
        };
        let mut auth = RemoteAuth::new(config, SessionToken::default()).unwrap();
        assert!(auth.sign_out().is_ok());
        assert!(auth.current_session().unwrap().is_none());
    }
}
