use super::time_grid::{show_time_grid, ChipLabel, TimeColumn};
use crate::controller::Intent;
use crate::services::grid::DayGrid;
use crate::ui_egui::theme::CalendarTheme;

pub struct DayView;

impl DayView {
    pub fn show(ui: &mut egui::Ui, grid: &DayGrid<'_>, theme: &CalendarTheme) -> Option<Intent> {
        let column = TimeColumn {
            date: grid.date,
            label: grid.date.format("%A %-d").to_string(),
            is_today: grid.is_today,
            cells: grid.hours.iter().collect(),
        };

        show_time_grid(ui, &[column], theme, ChipLabel::TitleAndTime, "day_time_grid")
    }
}
