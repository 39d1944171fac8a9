//! Modal form for creating, editing and deleting a single event.

mod render;
mod state;

pub use render::{render_event_dialog, FormAction};
pub use state::EventFormState;
