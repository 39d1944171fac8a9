// UI models module
// View mode and modal purpose shared by the controller and the views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::event::Event;

/// Grid shape and navigation step of the calendar page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
}

impl ViewMode {
    /// Order used by the header's view selector
    pub const ALL: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(format!("Unknown view mode '{}'", other)),
        }
    }
}

/// What the event modal is open for.
///
/// A creation request never carries a selected event and an edit never
/// carries a pre-filled date or hour.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Creating {
        date: NaiveDate,
        hour: Option<u32>,
    },
    Editing {
        event: Event,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing_event(&self) -> Option<&Event> {
        match self {
            ModalState::Editing { event } => Some(event),
            _ => None,
        }
    }
}
