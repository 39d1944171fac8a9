//! Month, week and day grids.
//!
//! Views only paint a prebuilt grid and report at most one intent per frame.
//! Event chips are registered after the cell beneath them, so a click on a
//! chip edits the event and never also creates one at the cell.

use egui::{Align2, Color32, FontId, Rect, Rounding, Sense, Stroke, Vec2};
use std::hash::Hash;

use crate::models::event::Event;
use crate::ui_egui::theme::CalendarTheme;

pub mod day_view;
pub mod month_view;
mod palette;
mod time_grid;
pub mod week_view;

pub use day_view::DayView;
pub use month_view::MonthView;
pub use week_view::WeekView;

pub(crate) const CHIP_HEIGHT: f32 = 18.0;
const CHIP_FONT_SIZE: f32 = 11.0;

/// Paint a clickable event chip inside `rect`; true when clicked this frame
pub(crate) fn event_chip(
    ui: &mut egui::Ui,
    rect: Rect,
    event: &Event,
    label: &str,
    theme: &CalendarTheme,
    id_salt: impl Hash,
) -> bool {
    let id = ui.id().with(("event_chip", event.id.as_str(), id_salt));
    let response = ui.interact(rect, id, Sense::click());

    let fill = theme.event_fill(event.color);
    let text_color = theme.event_text(event.color);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::same(3.0), fill);
    if response.hovered() {
        painter.rect_stroke(rect.shrink(0.5), Rounding::same(3.0), Stroke::new(1.0, text_color));
    }

    let font_id = FontId::proportional(CHIP_FONT_SIZE);
    let text = truncate_single_line_to_width(ui, label, &font_id, text_color, rect.width() - 8.0);
    painter.text(
        rect.left_center() + Vec2::new(4.0, 0.0),
        Align2::LEFT_CENTER,
        text,
        font_id,
        text_color,
    );

    response
        .on_hover_text(format_event_tooltip(event))
        .clicked()
}

/// Hover text: title, time range, location and description
pub(crate) fn format_event_tooltip(event: &Event) -> String {
    let mut lines = vec![event.title.clone()];
    if event.all_day {
        lines.push("All day".to_string());
    } else {
        lines.push(event.time_range_label());
    }
    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("📍 {}", location));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }
    lines.join("\n")
}

/// Truncate text to fit within a given pixel width, appending "…" when
/// truncation is needed.
pub(crate) fn truncate_single_line_to_width(
    ui: &egui::Ui,
    text: &str,
    font_id: &FontId,
    color: Color32,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure_width = |candidate: &str| {
        let layout_job = egui::text::LayoutJob::simple(
            candidate.to_string(),
            font_id.clone(),
            color,
            f32::INFINITY,
        );
        ui.fonts(|f| f.layout_job(layout_job).size().x)
    };

    if measure_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    if measure_width(ellipsis) > max_width {
        return String::new();
    }

    let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    char_boundaries.push(text.len());

    // Binary search for the longest prefix that still fits
    let mut low = 0usize;
    let mut high = char_boundaries.len().saturating_sub(1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);
        if measure_width(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid.saturating_sub(1);
        }
    }

    if low == 0 {
        ellipsis.to_string()
    } else {
        format!("{}{}", &text[..char_boundaries[low]], ellipsis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventDraft, EventId};
    use chrono::{Local, NaiveDate, TimeZone};

    fn sample() -> Event {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let start = Local
            .from_local_datetime(&day.and_hms_opt(14, 0, 0).unwrap())
            .earliest()
            .unwrap();
        let mut draft = EventDraft::new("Dentist", start, start + chrono::Duration::hours(1));
        draft.location = Some("Main St".to_string());
        draft.into_event(EventId::new("1"))
    }

    #[test]
    fn test_tooltip_lists_time_and_location() {
        assert_eq!(
            format_event_tooltip(&sample()),
            "Dentist\n2:00 PM - 3:00 PM\n📍 Main St"
        );
    }

    #[test]
    fn test_tooltip_for_all_day_event() {
        let mut event = sample();
        event.all_day = true;
        event.location = None;
        event.description = Some("Bring forms".to_string());
        assert_eq!(format_event_tooltip(&event), "Dentist\nAll day\nBring forms");
    }
}
