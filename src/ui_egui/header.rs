//! Top bar: date navigation, view selector, create button and the user menu.

use chrono::NaiveDate;
use egui::{Color32, RichText};

use crate::controller::{Intent, PageState};
use crate::models::ui::ViewMode;
use crate::models::user::avatar_initial;
use crate::ui_egui::theme::CalendarTheme;

/// Heading for the visible range: the full date in day view, month and year
/// otherwise
pub fn header_title(view_mode: ViewMode, date: NaiveDate) -> String {
    match view_mode {
        ViewMode::Day => date.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Week | ViewMode::Month => date.format("%B %Y").to_string(),
    }
}

pub fn render_header(ui: &mut egui::Ui, state: &PageState, theme: &CalendarTheme) -> Option<Intent> {
    let mut intent = None;

    ui.horizontal(|ui| {
        if ui.button("Today").clicked() {
            intent = Some(Intent::Today);
        }
        if ui
            .button("◀")
            .on_hover_text(format!("Previous {}", state.view_mode.label().to_lowercase()))
            .clicked()
        {
            intent = Some(Intent::Previous);
        }
        if ui
            .button("▶")
            .on_hover_text(format!("Next {}", state.view_mode.label().to_lowercase()))
            .clicked()
        {
            intent = Some(Intent::Next);
        }

        ui.add_space(8.0);
        ui.heading(header_title(state.view_mode, state.current_date));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(user_intent) = render_user_menu(ui, state, theme) {
                intent = Some(user_intent);
            }

            ui.add_space(8.0);

            let mut selected = state.view_mode;
            egui::ComboBox::from_id_source("view_mode_selector")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for mode in ViewMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.label());
                    }
                });
            if selected != state.view_mode {
                intent = Some(Intent::ViewChange(selected));
            }

            let create = egui::Button::new(RichText::new("+ Create").color(Color32::WHITE))
                .fill(theme.today_border);
            if ui.add(create).clicked() {
                intent = Some(Intent::CreateEvent);
            }
        });
    });

    intent
}

fn render_user_menu(ui: &mut egui::Ui, state: &PageState, theme: &CalendarTheme) -> Option<Intent> {
    let mut intent = None;
    let display_name = state.user.as_ref().and_then(|user| user.display_name.as_deref());
    let initial = avatar_initial(display_name);

    let avatar = RichText::new(initial).strong().color(theme.today_border);
    ui.menu_button(avatar, |ui| {
        if let Some(user) = &state.user {
            ui.label(RichText::new(display_name.unwrap_or("Signed in")).strong());
            if let Some(email) = &user.email {
                ui.label(RichText::new(email).small().color(theme.text_secondary));
            }
            ui.separator();
        }
        if ui.button("Sign Out").clicked() {
            intent = Some(Intent::Logout);
            ui.close_menu();
        }
    });

    intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ViewMode::Day, "Saturday, June 15, 2024")]
    #[test_case(ViewMode::Week, "June 2024")]
    #[test_case(ViewMode::Month, "June 2024")]
    fn test_header_title(mode: ViewMode, expected: &str) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(header_title(mode, date), expected);
    }

    #[test]
    fn test_day_title_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(header_title(ViewMode::Day, date), "Tuesday, March 5, 2024");
    }
}
