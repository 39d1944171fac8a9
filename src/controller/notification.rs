// Transient user-facing notifications raised by the page controller

use crate::services::error::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            level: NotificationLevel::Success,
        }
    }

    /// Failure notification carrying the backend's message
    pub fn error(title: impl Into<String>, err: &BackendError) -> Self {
        Self {
            title: title.into(),
            description: Some(err.to_string()),
            level: NotificationLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }

    /// Single line for the toast ("Event created: Standup")
    pub fn message(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.title, description)
            }
            _ => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;

    #[test]
    fn test_error_carries_backend_message() {
        let notification =
            Notification::error("Error deleting event", &BackendError::NotFound(EventId::new("9")));
        assert!(notification.is_error());
        assert_eq!(
            notification.message(),
            "Error deleting event: Event 9 was not found"
        );
    }

    #[test]
    fn test_message_without_description_is_title() {
        let mut notification = Notification::success("Event created", "");
        assert_eq!(notification.message(), "Event created");
        notification.description = None;
        assert_eq!(notification.message(), "Event created");
    }
}
