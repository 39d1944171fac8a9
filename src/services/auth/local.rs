use std::sync::mpsc::Receiver;

use super::{AuthBroadcaster, AuthChange, AuthProvider};
use crate::models::user::{Session, User};
use crate::services::error::BackendError;

/// Id every event in the local database is filed under
pub const LOCAL_USER_ID: &str = "local";

/// Single-profile auth for the SQLite backend.
///
/// Starts signed in; any credentials sign the profile back in after a
/// sign-out, with the e-mail used as display name when no profile name is
/// configured.
pub struct LocalAuth {
    profile_name: Option<String>,
    session: Option<Session>,
    broadcaster: AuthBroadcaster,
}

impl LocalAuth {
    pub fn new(profile_name: Option<String>) -> Self {
        let profile_name = profile_name.filter(|name| !name.trim().is_empty());
        let session = Some(Self::session_for(profile_name.clone(), None));
        Self {
            profile_name,
            session,
            broadcaster: AuthBroadcaster::default(),
        }
    }

    fn session_for(display_name: Option<String>, email: Option<String>) -> Session {
        let mut user = User::new(LOCAL_USER_ID, display_name);
        user.email = email;
        Session {
            user,
            access_token: String::new(),
        }
    }
}

impl AuthProvider for LocalAuth {
    fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Ok(self.session.clone())
    }

    fn subscribe(&mut self) -> Receiver<AuthChange> {
        self.broadcaster.subscribe()
    }

    fn sign_in(&mut self, email: &str, _password: &str) -> Result<Session, BackendError> {
        let email = email.trim();
        let display_name = self
            .profile_name
            .clone()
            .or_else(|| (!email.is_empty()).then(|| email.to_string()));
        let email = (!email.is_empty()).then(|| email.to_string());

        let session = Self::session_for(display_name, email);
        self.session = Some(session.clone());
        self.broadcaster
            .publish(AuthChange::SignedIn(session.user.clone()));
        Ok(session)
    }

    fn sign_out(&mut self) -> Result<(), BackendError> {
        if self.session.take().is_some() {
            self.broadcaster.publish(AuthChange::SignedOut);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_in_as_profile() {
        let auth = LocalAuth::new(Some("Robin".to_string()));
        let session = auth.current_session().unwrap().unwrap();
        assert_eq!(session.user.id.as_str(), LOCAL_USER_ID);
        assert_eq!(session.user.display_name.as_deref(), Some("Robin"));
    }

    #[test]
    fn test_sign_out_then_in_notifies_subscribers() {
        let mut auth = LocalAuth::new(None);
        let changes = auth.subscribe();

        auth.sign_out().unwrap();
        assert!(auth.current_session().unwrap().is_none());

        let session = auth.sign_in("sam@example.com", "anything").unwrap();
        assert_eq!(session.user.display_name.as_deref(), Some("sam@example.com"));

        let received: Vec<AuthChange> = changes.try_iter().collect();
        assert_eq!(
            received,
            vec![AuthChange::SignedOut, AuthChange::SignedIn(session.user)]
        );
    }

    #[test]
    fn test_second_sign_out_is_silent() {
        let mut auth = LocalAuth::new(None);
        let changes = auth.subscribe();
        auth.sign_out().unwrap();
        auth.sign_out().unwrap();
        assert_eq!(changes.try_iter().count(), 1);
    }
}
