use chrono::Local;

use super::toast::ToastManager;
use super::{CalendarApp, OpenForm};
use crate::config::AppConfig;
use crate::controller::{Intent, NotificationLevel, PageController};
use crate::models::ui::ViewMode;
use crate::services::grid::{build_day_grid, build_month_grid, build_week_grid, GridContext};
use crate::services::Backend;
use crate::ui_egui::event_dialog::{render_event_dialog, EventFormState, FormAction};
use crate::ui_egui::header::render_header;
use crate::ui_egui::sign_in::{render_sign_in, SignInState};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{DayView, MonthView, WeekView};

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, backend: Backend) -> Self {
        let active_theme = CalendarTheme::for_preference(config.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let mut controller = PageController::new(backend.store, backend.auth, config.default_view);
        controller.initialize();

        Self {
            controller,
            active_theme,
            week_start: config.week_starts_on,
            event_form: None,
            sign_in: SignInState::default(),
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_auth();

        let mut intents: Vec<Intent> = Vec::new();

        if self.controller.is_signed_in() {
            self.handle_keyboard_shortcuts(ctx, &mut intents);
            self.render_header_panel(ctx, &mut intents);
            self.render_main_panel(ctx, &mut intents);
            self.render_event_form(ctx, &mut intents);
        } else {
            self.event_form = None;
            self.render_sign_in_panel(ctx, &mut intents);
        }

        for intent in intents {
            self.controller.dispatch(intent);
        }

        self.show_notifications();

        // Render toast notifications (last, so they appear on top)
        let is_dark = self.active_theme.is_dark;
        self.toast_manager.render(ctx, is_dark);
    }

    fn render_header_panel(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(intent) = render_header(ui, self.controller.state(), &self.active_theme) {
                intents.push(intent);
            }
            ui.add_space(6.0);
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let state = self.controller.state();
        let grid_context = GridContext::new(self.week_start.weekday());
        let theme = &self.active_theme;

        egui::CentralPanel::default().show(ctx, |ui| {
            let intent = match state.view_mode {
                ViewMode::Month => {
                    let grid = build_month_grid(state.current_date, &state.events, &grid_context);
                    MonthView::show(ui, &grid, theme)
                }
                ViewMode::Week => {
                    let grid = build_week_grid(state.current_date, &state.events, &grid_context);
                    WeekView::show(ui, &grid, theme)
                }
                ViewMode::Day => {
                    let grid = build_day_grid(state.current_date, &state.events, &grid_context);
                    DayView::show(ui, &grid, theme)
                }
            };
            intents.extend(intent);
        });
    }

    /// Keep the form in step with the controller's modal and render it
    fn render_event_form(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let modal = &self.controller.state().modal;
        let stale = self
            .event_form
            .as_ref()
            .map_or(true, |form| &form.modal != modal);
        if stale {
            self.event_form = EventFormState::from_modal(modal, Local::now()).map(|state| OpenForm {
                modal: modal.clone(),
                state,
            });
        }

        let Some(form) = self.event_form.as_mut() else {
            return;
        };

        let action = render_event_dialog(ctx, &mut form.state, &self.active_theme);
        let intent = match action {
            Some(FormAction::Save(draft)) => Intent::Save(draft),
            Some(FormAction::Delete(id)) => Intent::Delete(id),
            Some(FormAction::Cancel) => Intent::CloseModal,
            None => return,
        };
        // The form closes before the backend answers
        self.event_form = None;
        intents.push(intent);
    }

    fn render_sign_in_panel(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(intent) = render_sign_in(ui, &mut self.sign_in, &self.active_theme) {
                intents.push(intent);
            }
        });
    }

    fn show_notifications(&mut self) {
        for notification in self.controller.drain_notifications() {
            match notification.level {
                NotificationLevel::Success => self.toast_manager.success(notification.message()),
                NotificationLevel::Error => self.toast_manager.error(notification.message()),
            }
        }
    }
}
