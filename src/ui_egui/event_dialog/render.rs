use egui::{Color32, RichText, Vec2};

use super::state::EventFormState;
use crate::models::event::{EventColor, EventDraft, EventId};
use crate::ui_egui::theme::CalendarTheme;

/// What the user asked the form to do this frame
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Save(EventDraft),
    /// Only offered while editing
    Delete(EventId),
    Cancel,
}

const FORM_LABEL_WIDTH: f32 = 110.0;
/// Placeholder in the `YYYY-MM-DDTHH:MM` shape the fields expect
const TIMESTAMP_HINT: &str = "2024-06-15T14:00";
const REQUIRED_COLOR: Color32 = Color32::from_rgb(255, 150, 150);

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventFormState,
    theme: &CalendarTheme,
) -> Option<FormAction> {
    let mut action = None;
    let mut dialog_open = true;

    egui::Window::new(if state.is_editing() {
        "Edit Event"
    } else {
        "New Event"
    })
    .open(&mut dialog_open)
    .collapsible(false)
    .resizable(false)
    .default_width(460.0)
    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    .show(ctx, |ui| {
        render_error_banner(ui, state);
        render_fields(ui, state);
        render_color_row(ui, state, theme);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
        action = render_action_buttons(ui, state);
    });

    if !dialog_open {
        return Some(FormAction::Cancel);
    }
    action
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventFormState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_fields(ui: &mut egui::Ui, state: &mut EventFormState) {
    labeled_row(ui, required_label("Title:", state.title.trim().is_empty()), |ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.title)
                .hint_text("Add title")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            state.error_message = None;
        }
    });

    labeled_row(ui, required_label("Start:", state.start.trim().is_empty()), |ui| {
        ui.add(egui::TextEdit::singleline(&mut state.start).hint_text(TIMESTAMP_HINT));
    });
    labeled_row(ui, required_label("End:", state.end.trim().is_empty()), |ui| {
        ui.add(egui::TextEdit::singleline(&mut state.end).hint_text(TIMESTAMP_HINT));
    });

    labeled_row(ui, "All day:", |ui| {
        ui.checkbox(&mut state.all_day, "");
    });

    labeled_row(ui, "Location:", |ui| {
        ui.add(egui::TextEdit::singleline(&mut state.location).desired_width(f32::INFINITY));
    });

    labeled_row(ui, "Description:", |ui| {
        let width = ui.available_width();
        ui.add_sized([width, 80.0], egui::TextEdit::multiline(&mut state.description));
    });
}

fn render_color_row(ui: &mut egui::Ui, state: &mut EventFormState, theme: &CalendarTheme) {
    labeled_row(ui, "Color:", |ui| {
        for color in EventColor::ALL {
            let selected = state.color == color;
            let mark = if selected { "✔" } else { "" };
            let button = egui::Button::new(RichText::new(mark).color(theme.event_text(color)))
                .fill(theme.event_fill(color))
                .min_size(Vec2::splat(24.0))
                .stroke(if selected {
                    egui::Stroke::new(2.0, theme.text_primary)
                } else {
                    egui::Stroke::NONE
                });

            if ui.add(button).on_hover_text(color.name()).clicked() {
                state.color = color;
            }
        }
    });
}

fn render_action_buttons(ui: &mut egui::Ui, state: &mut EventFormState) -> Option<FormAction> {
    let mut action = None;

    indented_row(ui, |ui| {
        let can_save = state.can_save();
        let save_button = egui::Button::new("Save").fill(if can_save {
            Color32::from_rgb(70, 120, 200)
        } else {
            Color32::from_gray(60)
        });

        ui.add_enabled_ui(can_save, |ui| {
            if ui.add(save_button).clicked() {
                match state.to_draft() {
                    Ok(draft) => action = Some(FormAction::Save(draft)),
                    Err(e) => state.error_message = Some(e),
                }
            }
        });

        if !can_save {
            ui.label(
                RichText::new("(Title required)")
                    .small()
                    .color(Color32::from_gray(150)),
            );
        }

        if ui.button("Cancel").clicked() {
            action = Some(FormAction::Cancel);
        }

        if let Some(id) = state.event_id.clone() {
            ui.add_space(20.0);
            if ui
                .button(RichText::new("Delete").color(Color32::RED))
                .clicked()
            {
                action = Some(FormAction::Delete(id));
            }
        }
    });

    action
}

fn required_label(text: &str, missing: bool) -> RichText {
    if missing {
        RichText::new(text).strong().color(REQUIRED_COLOR)
    } else {
        RichText::new(text).strong()
    }
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        render_form_label(ui, label);
        add_contents(ui);
    });
}

fn render_form_label(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) {
    let text = label.into();
    ui.allocate_ui_with_layout(
        Vec2::new(FORM_LABEL_WIDTH, 24.0),
        egui::Layout::right_to_left(egui::Align::Center),
        move |ui| {
            ui.label(text);
        },
    );
}

fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}
