// Intents surfaced by the header, the views and the event form

use chrono::NaiveDate;
use std::fmt;

use crate::models::event::{Event, EventDraft, EventId};
use crate::models::ui::ViewMode;

/// Everything the page controller can be asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Previous,
    Next,
    Today,
    ViewChange(ViewMode),
    CreateEvent,
    Logout,
    /// Empty part of a month-day cell
    DateClick(NaiveDate),
    /// Empty part of an hour slot in the week or day view
    TimeSlotClick(NaiveDate, u32),
    EventClick(Event),
    Save(EventDraft),
    Delete(EventId),
    CloseModal,
    SignIn { email: String, password: Password },
}

impl Intent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Previous => "previous",
            Intent::Next => "next",
            Intent::Today => "today",
            Intent::ViewChange(_) => "view-change",
            Intent::CreateEvent => "create-event",
            Intent::Logout => "logout",
            Intent::DateClick(_) => "date-click",
            Intent::TimeSlotClick(..) => "time-slot-click",
            Intent::EventClick(_) => "event-click",
            Intent::Save(_) => "save",
            Intent::Delete(_) => "delete",
            Intent::CloseModal => "close-modal",
            Intent::SignIn { .. } => "sign-in",
        }
    }
}

/// Password typed on the sign-in screen; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_debug_hides_password() {
        let intent = Intent::SignIn {
            email: "a@b.c".to_string(),
            password: Password::new("hunter2"),
        };
        let printed = format!("{:?}", intent);
        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter2"));
        assert_eq!(intent.name(), "sign-in");
    }
}
