//! Sign-in screen shown while no session is active.

use egui::{Color32, RichText};

use crate::controller::{Intent, Password};
use crate::ui_egui::theme::CalendarTheme;

#[derive(Debug, Default)]
pub struct SignInState {
    pub email: String,
    pub password: String,
}

impl SignInState {
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Build the intent and forget the typed password
    pub fn submit(&mut self) -> Intent {
        Intent::SignIn {
            email: self.email.trim().to_string(),
            password: Password::new(std::mem::take(&mut self.password)),
        }
    }
}

pub fn render_sign_in(
    ui: &mut egui::Ui,
    state: &mut SignInState,
    theme: &CalendarTheme,
) -> Option<Intent> {
    let mut intent = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading("Sign in to your calendar");
        ui.add_space(16.0);

        ui.add(
            egui::TextEdit::singleline(&mut state.email)
                .hint_text("Email")
                .desired_width(260.0),
        );
        let password = ui.add(
            egui::TextEdit::singleline(&mut state.password)
                .hint_text("Password")
                .password(true)
                .desired_width(260.0),
        );
        ui.add_space(12.0);

        let submitted_with_enter =
            password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let button = egui::Button::new(RichText::new("Sign In").color(Color32::WHITE))
            .fill(theme.today_border)
            .min_size(egui::vec2(260.0, 28.0));
        let clicked = ui.add_enabled(state.can_submit(), button).clicked();

        if (clicked || submitted_with_enter) && state.can_submit() {
            intent = Some(state.submit());
        }
    });

    intent
}
