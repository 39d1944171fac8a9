mod lifecycle;
mod shortcuts;
mod toast;

use self::toast::ToastManager;
use crate::config::WeekStart;
use crate::controller::PageController;
use crate::models::ui::ModalState;
use crate::ui_egui::event_dialog::EventFormState;
use crate::ui_egui::sign_in::SignInState;
use crate::ui_egui::theme::CalendarTheme;

/// Event form bound to the modal purpose it was opened for
struct OpenForm {
    modal: ModalState,
    state: EventFormState,
}

pub struct CalendarApp {
    /// Owns the page state and talks to the backend
    controller: PageController,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    week_start: WeekStart,
    /// Form state for the open modal, rebuilt whenever the modal changes
    event_form: Option<OpenForm>,
    sign_in: SignInState,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
