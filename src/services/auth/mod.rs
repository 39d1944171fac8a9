//! Authentication seam.
//!
//! Providers own the session; the page controller only reads the current
//! user and listens for sign-in/sign-out changes.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::models::user::{Session, User};
use crate::services::error::BackendError;

mod local;

pub use local::LocalAuth;

/// Auth-state change delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn(User),
    SignedOut,
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider {
    /// Session restored by the provider, if any
    fn current_session(&self) -> Result<Option<Session>, BackendError>;

    /// Receive every subsequent auth-state change
    fn subscribe(&mut self) -> Receiver<AuthChange>;

    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, BackendError>;

    fn sign_out(&mut self) -> Result<(), BackendError>;
}

/// Fan-out of auth changes to every live subscriber
#[derive(Debug, Default)]
pub struct AuthBroadcaster {
    listeners: Vec<Sender<AuthChange>>,
}

impl AuthBroadcaster {
    pub fn subscribe(&mut self) -> Receiver<AuthChange> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Deliver `change`, dropping subscribers whose receiver is gone
    pub fn publish(&mut self, change: AuthChange) {
        log::info!("Auth state changed: {:?}", change);
        self.listeners
            .retain(|listener| listener.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcaster_delivers_to_every_subscriber() {
        let mut broadcaster = AuthBroadcaster::default();
        let first = broadcaster.subscribe();
        let second = broadcaster.subscribe();

        broadcaster.publish(AuthChange::SignedOut);

        assert_eq!(first.try_recv(), Ok(AuthChange::SignedOut));
        assert_eq!(second.try_recv(), Ok(AuthChange::SignedOut));
    }

    #[test]
    fn test_broadcaster_drops_closed_receivers() {
        let mut broadcaster = AuthBroadcaster::default();
        let kept = broadcaster.subscribe();
        drop(broadcaster.subscribe());

        broadcaster.publish(AuthChange::SignedOut);
        broadcaster.publish(AuthChange::SignedOut);

        assert_eq!(kept.try_iter().count(), 2);
        assert_eq!(broadcaster.listeners.len(), 1);
    }
}
