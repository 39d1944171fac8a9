//! Page controller.
//!
//! Owns the session, the fetched event list, the reference date, the view mode
//! and the modal state. Views and the header only read [`PageState`] and hand
//! back [`Intent`]s; every backend call happens here, one at a time, and every
//! successful mutation is followed by a full refetch.

use std::sync::mpsc::Receiver;

use chrono::{Duration, Local, NaiveDate};

use crate::models::event::{Event, EventDraft, EventId};
use crate::models::ui::{ModalState, ViewMode};
use crate::models::user::User;
use crate::services::auth::{AuthChange, AuthProvider};
use crate::services::error::BackendError;
use crate::services::store::EventStore;
use crate::utils::date::shift_months;

mod intent;
mod notification;

pub use intent::{Intent, Password};
pub use notification::{Notification, NotificationLevel};

/// Everything the page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub user: Option<User>,
    /// Reference date anchoring the visible grid
    pub current_date: NaiveDate,
    pub view_mode: ViewMode,
    /// Last successful fetch, ordered by start time
    pub events: Vec<Event>,
    pub modal: ModalState,
}

impl PageState {
    fn new(view_mode: ViewMode) -> Self {
        Self {
            user: None,
            current_date: today(),
            view_mode,
            events: Vec::new(),
            modal: ModalState::Closed,
        }
    }
}

pub struct PageController {
    state: PageState,
    store: Box<dyn EventStore>,
    auth: Box<dyn AuthProvider>,
    auth_changes: Receiver<AuthChange>,
    notifications: Vec<Notification>,
}

impl PageController {
    pub fn new(
        store: Box<dyn EventStore>,
        mut auth: Box<dyn AuthProvider>,
        view_mode: ViewMode,
    ) -> Self {
        let auth_changes = auth.subscribe();
        Self {
            state: PageState::new(view_mode),
            store,
            auth,
            auth_changes,
            notifications: Vec::new(),
        }
    }

    /// Restore the provider's session and load its events
    pub fn initialize(&mut self) {
        match self.auth.current_session() {
            Ok(Some(session)) => {
                log::info!("Restored session for {}", session.user.id);
                self.state.user = Some(session.user);
                self.refresh_events();
            }
            Ok(None) => {
                log::info!("No active session");
                self.state.user = None;
            }
            Err(e) => {
                log::error!("Failed to restore session: {}", e);
                self.notify_error("Error restoring session", &e);
            }
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.user.is_some()
    }

    /// Take the notifications raised since the last call
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Apply pending auth-state changes; called once per frame
    pub fn poll_auth(&mut self) {
        let changes: Vec<AuthChange> = self.auth_changes.try_iter().collect();
        for change in changes {
            match change {
                AuthChange::SignedIn(user) => {
                    self.state.user = Some(user);
                    self.refresh_events();
                }
                AuthChange::SignedOut => {
                    self.state.user = None;
                    self.state.events.clear();
                    self.state.modal = ModalState::Closed;
                }
            }
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("Dispatching {} intent", intent.name());

        match intent {
            Intent::Previous => self.step(-1),
            Intent::Next => self.step(1),
            Intent::Today => self.state.current_date = today(),
            Intent::ViewChange(mode) => self.state.view_mode = mode,
            Intent::CreateEvent => self.open_creating(today(), None),
            Intent::DateClick(date) => self.open_creating(date, None),
            Intent::TimeSlotClick(date, hour) => self.open_creating(date, Some(hour)),
            Intent::EventClick(event) => self.state.modal = ModalState::Editing { event },
            Intent::CloseModal => self.state.modal = ModalState::Closed,
            Intent::Save(draft) => self.save(draft),
            Intent::Delete(id) => self.delete(id),
            Intent::Logout => self.logout(),
            Intent::SignIn { email, password } => self.sign_in(&email, password.expose()),
        }
    }

    fn step(&mut self, direction: i32) {
        let current = self.state.current_date;
        self.state.current_date = match self.state.view_mode {
            ViewMode::Day => current + Duration::days(direction as i64),
            ViewMode::Week => current + Duration::weeks(direction as i64),
            ViewMode::Month => shift_months(current, direction),
        };
    }

    fn open_creating(&mut self, date: NaiveDate, hour: Option<u32>) {
        self.state.modal = ModalState::Creating { date, hour };
    }

    fn save(&mut self, draft: EventDraft) {
        self.state.modal = ModalState::Closed;

        let Some(user) = self.state.user.as_ref() else {
            log::warn!("Ignoring save without a signed-in user");
            return;
        };

        let result = match &draft.id {
            Some(id) => self.store.update(id, &draft).map(|()| "Event updated"),
            None => self
                .store
                .insert(&user.id, &draft)
                .map(|id| {
                    log::info!("Created event {}", id);
                    "Event created"
                }),
        };

        match result {
            Ok(title) => {
                self.notifications
                    .push(Notification::success(title, draft.title.clone()));
                self.refresh_events();
            }
            Err(e) => {
                let title = if draft.is_update() {
                    "Error updating event"
                } else {
                    "Error creating event"
                };
                log::error!("{}: {}", title, e);
                self.notify_error(title, &e);
            }
        }
    }

    fn delete(&mut self, id: EventId) {
        self.state.modal = ModalState::Closed;

        match self.store.delete(&id) {
            Ok(()) => {
                log::info!("Deleted event {}", id);
                self.notifications.push(Notification::success(
                    "Event deleted",
                    "The event has been removed",
                ));
                self.refresh_events();
            }
            Err(e) => {
                log::error!("Failed to delete event {}: {}", id, e);
                self.notify_error("Error deleting event", &e);
            }
        }
    }

    fn logout(&mut self) {
        if let Err(e) = self.auth.sign_out() {
            log::error!("Failed to sign out: {}", e);
            self.notify_error("Error signing out", &e);
        }
        self.poll_auth();
    }

    fn sign_in(&mut self, email: &str, password: &str) {
        if let Err(e) = self.auth.sign_in(email, password) {
            log::warn!("Sign-in failed: {}", e);
            self.notify_error("Error signing in", &e);
        }
        self.poll_auth();
    }

    /// Replace the event list with a fresh fetch; keep the old one on failure
    pub fn refresh_events(&mut self) {
        let Some(user_id) = self.state.user.as_ref().map(|user| user.id.clone()) else {
            self.state.events.clear();
            return;
        };

        match self.store.list_for_user(&user_id) {
            Ok(events) => {
                log::debug!("Fetched {} events for {}", events.len(), user_id);
                self.state.events = events;
            }
            Err(e) => {
                log::error!("Failed to fetch events: {}", e);
                self.notify_error("Error fetching events", &e);
            }
        }
    }

    fn notify_error(&mut self, title: &str, err: &BackendError) {
        self.notifications.push(Notification::error(title, err));
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
