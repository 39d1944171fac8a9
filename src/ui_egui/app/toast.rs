//! Toast notifications for backend outcomes.
//!
//! Every controller notification becomes a toast in the bottom-right corner
//! that fades out on its own. Errors stay up longer than confirmations.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const SUCCESS_DURATION: Duration = Duration::from_secs(3);
const ERROR_DURATION: Duration = Duration::from_secs(6);
const FADE_OUT: Duration = Duration::from_millis(500);
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(30, 70, 40),
            (ToastLevel::Error, true) => Color32::from_rgb(80, 30, 30),
            (ToastLevel::Success, false) => Color32::from_rgb(220, 255, 220),
            (ToastLevel::Error, false) => Color32::from_rgb(255, 220, 220),
        }
    }

    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(100, 220, 120),
            (ToastLevel::Error, true) => Color32::from_rgb(255, 120, 120),
            (ToastLevel::Success, false) => Color32::from_rgb(30, 120, 50),
            (ToastLevel::Error, false) => Color32::from_rgb(180, 40, 40),
        }
    }

    fn duration(&self) -> Duration {
        match self {
            ToastLevel::Success => SUCCESS_DURATION,
            ToastLevel::Error => ERROR_DURATION,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: level.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// 1.0 until the last half second, then linearly down to 0.0
    pub fn opacity(&self) -> f32 {
        opacity_at(self.created_at.elapsed(), self.duration)
    }
}

fn opacity_at(elapsed: Duration, duration: Duration) -> f32 {
    let fade_start = duration.saturating_sub(FADE_OUT);
    if elapsed >= duration {
        0.0
    } else if elapsed >= fade_start {
        ((duration - elapsed).as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..excess);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Error));
    }

    fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while a toast fades
        ctx.request_repaint();

        // Newest at the bottom, older ones stacked above
        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg_color = toast
                        .level
                        .background_color(is_dark_theme)
                        .gamma_multiply(0.9 * opacity);
                    let text_color = toast.level.text_color(is_dark_theme).gamma_multiply(opacity);

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.set_max_width(toast_width - 24.0);
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text_color).strong());
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outlast_confirmations() {
        assert!(ToastLevel::Error.duration() > ToastLevel::Success.duration());
    }

    #[test]
    fn opacity_fades_over_the_last_half_second() {
        let duration = Duration::from_secs(3);
        assert_eq!(opacity_at(Duration::from_secs(1), duration), 1.0);
        let mid_fade = opacity_at(Duration::from_millis(2750), duration);
        assert!((mid_fade - 0.5).abs() < 0.01);
        assert_eq!(opacity_at(Duration::from_secs(3), duration), 0.0);
    }

    #[test]
    fn manager_keeps_only_the_newest_toasts() {
        let mut manager = ToastManager::new();
        for i in 0..(MAX_VISIBLE + 2) {
            manager.success(format!("toast {i}"));
        }
        assert_eq!(manager.toasts.len(), MAX_VISIBLE);
        assert_eq!(manager.toasts[0].message, "toast 2");
    }

    #[test]
    fn new_toasts_are_not_expired() {
        let toast = Toast::new("Event created", ToastLevel::Success);
        assert!(!toast.is_expired());
        assert_eq!(toast.opacity(), 1.0);
    }
}
