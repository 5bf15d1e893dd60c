//! Slide painting.
//!
//! Pure rendering: everything is derived from the slide, its resolved
//! theme, and the target rect. The only fallback is the theme lookup; an
//! unknown theme name paints with the default theme and never fails.

pub mod background;
pub mod decorations;
pub mod text;

use eframe::egui;

use crate::deck::Slide;
use crate::theme::{self, Theme, ThemeSet};

/// Logical slide coordinate space. Theme positions and font sizes are
/// authored against this and scaled to the paint rect.
pub const SLIDE_WIDTH: f32 = 960.0;
pub const SLIDE_HEIGHT: f32 = 540.0;

/// Paint one slide into `rect`.
pub fn render_slide(ui: &egui::Ui, slide: &Slide, themes: &ThemeSet, rect: egui::Rect) {
    let theme = themes.resolve(&slide.theme);
    let scale = rect.width() / SLIDE_WIDTH;

    background::draw(ui, slide, theme, rect);
    decorations::draw(ui, theme, rect, scale);
    text::draw_title(ui, slide, theme, rect, scale);
    text::draw_content(ui, slide, theme, rect, scale);

    // Closing border stroke in the accent color
    let accent = accent_color(slide, theme);
    ui.painter().rect_stroke(
        rect.shrink(4.0 * scale),
        0.0,
        egui::Stroke::new(2.0 * scale, accent),
        egui::StrokeKind::Inside,
    );
}

/// Slide override wins over the theme palette.
pub fn accent_color(slide: &Slide, theme: &Theme) -> egui::Color32 {
    slide
        .accent_color
        .as_deref()
        .and_then(theme::parse_hex_color)
        .unwrap_or(theme.accent)
}

pub fn text_color(slide: &Slide, theme: &Theme) -> egui::Color32 {
    slide
        .text_color
        .as_deref()
        .and_then(theme::parse_hex_color)
        .unwrap_or(theme.text_color)
}
