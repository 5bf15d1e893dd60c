//! Title and content text painting.

use eframe::egui::{self, Color32, Pos2, Rect, vec2};

use crate::deck::Slide;
use crate::render::{SLIDE_WIDTH, accent_color, text_color};
use crate::theme::{FontSpec, Theme, with_opacity};

const SHADOW_OFFSET: f32 = 2.0;
const LINE_SPACING: f32 = 8.0;
const BULLET_INDENT: f32 = 26.0;

/// Draw the slide title at the theme (or override) position with the fixed
/// drop shadow.
pub fn draw_title(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: Rect, scale: f32) {
    if slide.title.is_empty() {
        return;
    }

    let (font, x, y) = match slide.title_style {
        Some(style) => (
            FontSpec {
                size: style.size,
                family: theme.title_font.family.clone(),
            },
            style.x,
            style.y,
        ),
        None => (
            theme.title_font.clone(),
            theme.title_pos.0,
            theme.title_pos.1,
        ),
    };
    let font_id = font.font_id(scale);
    let color = text_color(slide, theme);
    let pos = rect.left_top() + vec2(x * scale, y * scale);
    let max_width = (SLIDE_WIDTH - 2.0 * x) * scale;

    let shadow = ui.painter().layout(
        slide.title.clone(),
        font_id.clone(),
        with_opacity(Color32::BLACK, 0.4),
        max_width,
    );
    ui.painter().galley(
        pos + vec2(SHADOW_OFFSET * scale, SHADOW_OFFSET * scale),
        shadow,
        Color32::BLACK,
    );

    let galley = ui
        .painter()
        .layout(slide.title.clone(), font_id, color, max_width);
    ui.painter().galley(pos, galley, color);
}

/// Draw the slide content with word-wrap, honoring `•`/`-`/`*` bullet
/// markers with a dot glyph and indent.
pub fn draw_content(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: Rect, scale: f32) {
    if slide.content.is_empty() {
        return;
    }

    let (font, x, y) = match slide.content_style {
        Some(style) => (
            FontSpec {
                size: style.size,
                family: theme.content_font.family.clone(),
            },
            style.x,
            style.y,
        ),
        None => (
            theme.content_font.clone(),
            theme.content_pos.0,
            theme.content_pos.1,
        ),
    };
    let size = font.size;
    let font_id = font.font_id(scale);
    let color = text_color(slide, theme);
    let accent = accent_color(slide, theme);
    let max_width = (SLIDE_WIDTH - 2.0 * x) * scale;

    let mut cursor = rect.left_top() + vec2(x * scale, y * scale);
    for line in slide.content.lines() {
        let trimmed = line.trim_end();
        if trimmed.trim().is_empty() {
            cursor.y += size * scale * 0.6;
            continue;
        }

        let (bullet, body) = split_bullet(trimmed);
        let (text_pos, wrap_width) = if bullet {
            let indent = BULLET_INDENT * scale;
            let dot_center = Pos2::new(cursor.x + indent * 0.35, cursor.y + size * scale * 0.55);
            ui.painter()
                .circle_filled(dot_center, 3.0 * scale, accent);
            (cursor + vec2(indent, 0.0), max_width - indent)
        } else {
            (cursor, max_width)
        };

        let galley = ui
            .painter()
            .layout(body.to_string(), font_id.clone(), color, wrap_width);
        let height = galley.rect.height();
        ui.painter().galley(text_pos, galley, color);
        cursor.y += height + LINE_SPACING * scale;

        if cursor.y > rect.bottom() {
            break;
        }
    }
}

/// Detect a bullet marker and return the line body without it.
fn split_bullet(line: &str) -> (bool, &str) {
    let trimmed = line.trim_start();
    for marker in ["• ", "- ", "* "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return (true, rest.trim_start());
        }
    }
    // A bare marker with no trailing space still reads as a bullet
    for marker in ["•", "-", "*"] {
        if trimmed == marker {
            return (true, "");
        }
    }
    (false, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bullet_variants() {
        assert_eq!(split_bullet("• First point"), (true, "First point"));
        assert_eq!(split_bullet("- dash style"), (true, "dash style"));
        assert_eq!(split_bullet("* star style"), (true, "star style"));
        assert_eq!(split_bullet("  • indented"), (true, "indented"));
        assert_eq!(split_bullet("plain text"), (false, "plain text"));
        assert_eq!(split_bullet("-not a bullet"), (false, "-not a bullet"));
        assert_eq!(split_bullet("•"), (true, ""));
    }
}
