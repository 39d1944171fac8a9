use super::time_grid::{show_time_grid, ChipLabel, TimeColumn};
use crate::controller::Intent;
use crate::services::grid::{day_column_label, WeekGrid};
use crate::ui_egui::theme::CalendarTheme;

pub struct WeekView;

impl WeekView {
    pub fn show(ui: &mut egui::Ui, grid: &WeekGrid<'_>, theme: &CalendarTheme) -> Option<Intent> {
        // Rows are hour-major; the time grid wants one column per day
        let columns: Vec<TimeColumn<'_, '_>> = grid
            .days
            .iter()
            .enumerate()
            .map(|(index, day)| TimeColumn {
                date: day.date,
                label: day_column_label(day.date),
                is_today: day.is_today,
                cells: grid
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(index))
                    .collect(),
            })
            .collect();

        show_time_grid(ui, &columns, theme, ChipLabel::Title, "week_time_grid")
    }
}
