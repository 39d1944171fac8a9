//! Light and dark themes for the calendar page.
//!
//! The configured preference is resolved once at startup; `system` asks the
//! OS through `dark-light`.

use egui::Color32;

use crate::config::ThemePreference;
use crate::models::event::EventColor;

/// Colors used by the header, the grids and the event chips
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Weekend day background color
    pub weekend_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Background of days padding the month grid
    pub outside_month_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Weekday strip and time column background
    pub header_background: Color32,

    pub header_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (secondary info)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(66, 133, 244),
            day_background: Color32::from_rgb(255, 255, 255),
            outside_month_background: Color32::from_rgb(240, 240, 242),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(236, 239, 244),
            header_text: Color32::from_rgb(70, 70, 80),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            outside_month_background: Color32::from_rgb(33, 33, 33),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 50, 56),
            header_text: Color32::from_rgb(210, 210, 215),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Theme for the configured preference
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.calendar_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Fill color of an event chip
    pub fn event_fill(&self, color: EventColor) -> Color32 {
        let (r, g, b) = color.rgb();
        Color32::from_rgb(r, g, b)
    }

    /// Text drawn on top of an event chip
    pub fn event_text(&self, color: EventColor) -> Color32 {
        let (r, g, b) = color.rgb();
        // Perceived luminance; yellow needs dark text
        let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        if luminance > 160.0 {
            Color32::from_rgb(30, 30, 30)
        } else {
            Color32::WHITE
        }
    }
}
