// Module exports for models

pub mod event;
pub mod ui;
pub mod user;
