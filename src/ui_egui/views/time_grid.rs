//! Hour-by-day grid shared by the week and day views.
//!
//! Draws the day header strip, the hour label column, one clickable slot per
//! hour and column, the event chips in their start slot and the current time
//! line.

use chrono::{Local, NaiveDate, Timelike};
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{DayStripPalette, TimeGridPalette};
use super::{event_chip, CHIP_HEIGHT};
use crate::controller::Intent;
use crate::models::event::Event;
use crate::services::grid::{hour_label, HourCell, HOURS_PER_DAY};
use crate::ui_egui::theme::CalendarTheme;

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const HOUR_HEIGHT: f32 = 48.0;
const DAY_HEADER_HEIGHT: f32 = 30.0;
const COLUMN_SPACING: f32 = 1.0;

/// One day column of the grid
pub(crate) struct TimeColumn<'g, 'a> {
    pub date: NaiveDate,
    pub label: String,
    pub is_today: bool,
    /// 24 cells, index = hour
    pub cells: Vec<&'g HourCell<'a>>,
}

/// How event chips are labelled
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChipLabel {
    Title,
    TitleAndTime,
}

pub(crate) fn show_time_grid(
    ui: &mut egui::Ui,
    columns: &[TimeColumn<'_, '_>],
    theme: &CalendarTheme,
    chip_label: ChipLabel,
    id_source: &str,
) -> Option<Intent> {
    if columns.is_empty() {
        return None;
    }

    let grid_palette = TimeGridPalette::from_theme(theme);
    let strip_palette = DayStripPalette::from_theme(theme);
    let mut intent = None;

    render_day_headers(ui, columns, &strip_palette);

    egui::ScrollArea::vertical()
        .id_source(id_source)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let grid_height = HOURS_PER_DAY as f32 * HOUR_HEIGHT;
            let (rect, _) = ui.allocate_exact_size(
                Vec2::new(ui.available_width(), grid_height),
                Sense::hover(),
            );
            let col_width = column_width(rect.width(), columns.len());

            for hour in 0..HOURS_PER_DAY {
                let top = rect.top() + hour as f32 * HOUR_HEIGHT;
                let label_rect = Rect::from_min_size(
                    Pos2::new(rect.left(), top),
                    Vec2::new(TIME_LABEL_WIDTH, HOUR_HEIGHT),
                );
                let painter = ui.painter();
                painter.rect_filled(label_rect, Rounding::ZERO, grid_palette.hour_bg);
                painter.text(
                    label_rect.right_top() + Vec2::new(-6.0, 4.0),
                    Align2::RIGHT_TOP,
                    hour_label(hour),
                    FontId::proportional(11.0),
                    grid_palette.hour_text,
                );

                for (index, column) in columns.iter().enumerate() {
                    let Some(cell) = column.cells.get(hour as usize) else {
                        continue;
                    };
                    let cell_rect = Rect::from_min_size(
                        Pos2::new(
                            rect.left() + TIME_LABEL_WIDTH + index as f32 * (col_width + COLUMN_SPACING),
                            top,
                        ),
                        Vec2::new(col_width, HOUR_HEIGHT),
                    );
                    if let Some(cell_intent) = render_time_cell(
                        ui,
                        cell_rect,
                        cell,
                        column.is_today,
                        theme,
                        &grid_palette,
                        chip_label,
                    ) {
                        intent = Some(cell_intent);
                    }
                }
            }

            let dates: Vec<NaiveDate> = columns.iter().map(|column| column.date).collect();
            draw_current_time_indicator(ui, rect, &dates, col_width);
        });

    intent
}

fn column_width(total_width: f32, columns: usize) -> f32 {
    let spacing = COLUMN_SPACING * columns.saturating_sub(1) as f32;
    ((total_width - TIME_LABEL_WIDTH - spacing) / columns as f32).max(20.0)
}

fn render_day_headers(ui: &mut egui::Ui, columns: &[TimeColumn<'_, '_>], palette: &DayStripPalette) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), DAY_HEADER_HEIGHT),
        Sense::hover(),
    );
    let col_width = column_width(rect.width(), columns.len());
    let painter = ui.painter();

    for (index, column) in columns.iter().enumerate() {
        let header_rect = Rect::from_min_size(
            Pos2::new(
                rect.left() + TIME_LABEL_WIDTH + index as f32 * (col_width + COLUMN_SPACING),
                rect.top(),
            ),
            Vec2::new(col_width, DAY_HEADER_HEIGHT - 2.0),
        );
        let fill = if column.is_today {
            palette.today_header_bg
        } else {
            palette.header_bg
        };
        painter.rect_filled(header_rect, Rounding::same(6.0), fill);
        painter.rect_stroke(header_rect, Rounding::same(6.0), Stroke::new(1.0, palette.strip_border));
        painter.text(
            header_rect.center(),
            Align2::CENTER_CENTER,
            &column.label,
            FontId::proportional(12.0),
            palette.header_text,
        );
    }
}

fn render_time_cell(
    ui: &mut egui::Ui,
    rect: Rect,
    cell: &HourCell<'_>,
    is_today: bool,
    theme: &CalendarTheme,
    palette: &TimeGridPalette,
    chip_label: ChipLabel,
) -> Option<Intent> {
    // Registered first so event chips sit above it
    let response = ui.interact(
        rect,
        ui.id().with(("time_slot", cell.date, cell.hour)),
        Sense::click(),
    );

    let painter = ui.painter();
    let background = if is_today {
        palette.today_bg
    } else {
        palette.regular_bg
    };
    painter.rect_filled(rect, Rounding::ZERO, background);
    if response.hovered() {
        painter.rect_filled(rect, Rounding::ZERO, palette.hover_overlay);
    }
    painter.line_segment(
        [rect.left_top(), rect.right_top()],
        Stroke::new(1.0, palette.hour_line),
    );
    painter.line_segment(
        [rect.left_top(), rect.left_bottom()],
        Stroke::new(1.0, palette.divider),
    );

    let mut clicked_event: Option<&Event> = None;
    if !cell.events.is_empty() {
        // Events starting in the same hour share the slot side by side
        let count = cell.events.len() as f32;
        let chip_width = ((rect.width() - 4.0) / count).max(8.0);
        let chip_height = (HOUR_HEIGHT - 4.0).max(CHIP_HEIGHT);

        for (index, &event) in cell.events.iter().enumerate() {
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 2.0 + index as f32 * chip_width, rect.top() + 2.0),
                Vec2::new(chip_width - 2.0, chip_height),
            );
            let label = match chip_label {
                ChipLabel::Title => event.title.clone(),
                ChipLabel::TitleAndTime if event.all_day => format!("{}  All day", event.title),
                ChipLabel::TitleAndTime => {
                    format!("{}  {}", event.title, event.time_range_label())
                }
            };
            if event_chip(ui, chip_rect, event, &label, theme, (cell.date, cell.hour)) {
                clicked_event = Some(event);
            }
        }
    }

    if let Some(event) = clicked_event {
        return Some(Intent::EventClick(event.clone()));
    }
    if response.clicked() {
        return Some(Intent::TimeSlotClick(cell.date, cell.hour));
    }
    None
}

/// Red line at the current time across today's column
fn draw_current_time_indicator(ui: &mut egui::Ui, rect: Rect, dates: &[NaiveDate], col_width: f32) {
    let now = Local::now();
    let Some(day_index) = dates.iter().position(|d| *d == now.date_naive()) else {
        return;
    };

    let hours_since_midnight = now.hour() as f32 + now.minute() as f32 / 60.0;
    let y_position = rect.top() + hours_since_midnight * HOUR_HEIGHT;
    let x_start = rect.left() + TIME_LABEL_WIDTH + day_index as f32 * (col_width + COLUMN_SPACING);
    let x_end = x_start + col_width;

    let line_color = Color32::from_rgb(255, 100, 100);
    let painter = ui.painter();
    painter.circle_filled(Pos2::new(x_start, y_position), 3.0, line_color);
    painter.line_segment(
        [Pos2::new(x_start, y_position), Pos2::new(x_end, y_position)],
        Stroke::new(2.0, line_color),
    );
}
