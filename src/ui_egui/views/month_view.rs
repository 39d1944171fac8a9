use chrono::{Datelike, Weekday};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{CalendarCellPalette, DayStripPalette};
use super::{event_chip, CHIP_HEIGHT};
use crate::controller::Intent;
use crate::models::event::Event;
use crate::services::grid::{MonthDayCell, MonthGrid};
use crate::ui_egui::theme::CalendarTheme;

const WEEKDAY_HEADER_HEIGHT: f32 = 28.0;
const DAY_NUMBER_HEIGHT: f32 = 22.0;
const CELL_SPACING: f32 = 2.0;
const CHIP_SPACING: f32 = 2.0;

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut egui::Ui, grid: &MonthGrid<'_>, theme: &CalendarTheme) -> Option<Intent> {
        let cell_palette = CalendarCellPalette::from_theme(theme);
        let strip_palette = DayStripPalette::from_theme(theme);

        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let col_width = rect.width() / 7.0;

        // Weekday strip
        for (col, label) in grid.weekday_labels.iter().enumerate() {
            let header_rect = Rect::from_min_size(
                Pos2::new(rect.left() + col as f32 * col_width, rect.top()),
                Vec2::new(col_width, WEEKDAY_HEADER_HEIGHT),
            )
            .shrink(CELL_SPACING / 2.0);
            let painter = ui.painter();
            painter.rect_filled(header_rect, Rounding::same(6.0), strip_palette.header_bg);
            painter.text(
                header_rect.center(),
                Align2::CENTER_CENTER,
                *label,
                FontId::proportional(12.0),
                strip_palette.header_text,
            );
        }

        let weeks = grid.week_count().max(1) as f32;
        let row_height = (rect.height() - WEEKDAY_HEADER_HEIGHT) / weeks;
        let mut intent = None;

        for (index, cell) in grid.days.iter().enumerate() {
            let row = (index / 7) as f32;
            let col = (index % 7) as f32;
            let cell_rect = Rect::from_min_size(
                Pos2::new(
                    rect.left() + col * col_width,
                    rect.top() + WEEKDAY_HEADER_HEIGHT + row * row_height,
                ),
                Vec2::new(col_width, row_height),
            )
            .shrink(CELL_SPACING / 2.0);

            if let Some(cell_intent) =
                Self::render_day_cell(ui, cell_rect, cell, theme, &cell_palette, &strip_palette)
            {
                intent = Some(cell_intent);
            }
        }

        intent
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        rect: Rect,
        cell: &MonthDayCell<'_>,
        theme: &CalendarTheme,
        palette: &CalendarCellPalette,
        strip_palette: &DayStripPalette,
    ) -> Option<Intent> {
        // Registered first so event chips sit above it
        let response = ui.interact(rect, ui.id().with(("month_cell", cell.date)), Sense::click());

        let is_weekend = matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun);
        let background = if cell.is_today {
            palette.today_bg
        } else if !cell.in_current_month {
            palette.outside_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        let border = if cell.is_today {
            Stroke::new(2.0, palette.today_border)
        } else if response.hovered() {
            Stroke::new(1.5, palette.hover_border)
        } else {
            Stroke::new(1.0, palette.border)
        };

        let painter = ui.painter();
        painter.rect_filled(rect, Rounding::same(4.0), background);
        painter.rect_stroke(rect, Rounding::same(4.0), border);

        let number_pos = rect.left_top() + Vec2::new(12.0, DAY_NUMBER_HEIGHT / 2.0 + 2.0);
        let text_color = if cell.in_current_month {
            palette.text
        } else {
            palette.muted_text
        };
        if cell.is_today {
            painter.circle_filled(number_pos, 10.0, strip_palette.badge_bg);
            painter.text(
                number_pos,
                Align2::CENTER_CENTER,
                cell.date.day().to_string(),
                FontId::proportional(12.0),
                strip_palette.badge_text,
            );
        } else {
            painter.text(
                number_pos,
                Align2::CENTER_CENTER,
                cell.date.day().to_string(),
                FontId::proportional(12.0),
                text_color,
            );
        }

        let mut clicked_event: Option<&Event> = None;
        let mut top = rect.top() + DAY_NUMBER_HEIGHT + 2.0;
        for &event in &cell.events {
            if top + CHIP_HEIGHT > rect.bottom() - 2.0 {
                break;
            }
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, top),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            let label = if event.all_day {
                event.title.clone()
            } else {
                format!("{} {}", event.start_label(), event.title)
            };
            if event_chip(ui, chip_rect, event, &label, theme, cell.date) {
                clicked_event = Some(event);
            }
            top += CHIP_HEIGHT + CHIP_SPACING;
        }

        if cell.overflow > 0 {
            ui.painter().text(
                Pos2::new(rect.left() + 6.0, top + CHIP_HEIGHT / 2.0),
                Align2::LEFT_CENTER,
                format!("+{} more", cell.overflow),
                FontId::proportional(11.0),
                palette.muted_text,
            );
        }

        if let Some(event) = clicked_event {
            return Some(Intent::EventClick(event.clone()));
        }
        if response.clicked() {
            return Some(Intent::DateClick(cell.date));
        }
        None
    }
}
