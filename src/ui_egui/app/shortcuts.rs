use super::CalendarApp;
use crate::controller::Intent;
use crate::models::ui::ViewMode;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let modal_open = self.controller.state().modal.is_open();
        // Plain-letter shortcuts would fire while typing in a text field
        let typing = ctx.wants_keyboard_input();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) && modal_open {
                intents.push(Intent::CloseModal);
            }

            if modal_open || typing {
                return;
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                intents.push(Intent::CreateEvent);
            }
            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                intents.push(Intent::Today);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                intents.push(Intent::Previous);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                intents.push(Intent::Next);
            }

            if !i.modifiers.ctrl {
                // D for Day view
                if i.key_pressed(egui::Key::D) {
                    intents.push(Intent::ViewChange(ViewMode::Day));
                }
                // W for Week view
                if i.key_pressed(egui::Key::W) {
                    intents.push(Intent::ViewChange(ViewMode::Week));
                }
                // M for Month view
                if i.key_pressed(egui::Key::M) {
                    intents.push(Intent::ViewChange(ViewMode::Month));
                }
            }
        });
    }
}
