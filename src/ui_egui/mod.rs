mod app;
pub mod event_dialog;
pub mod header;
pub mod sign_in;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
