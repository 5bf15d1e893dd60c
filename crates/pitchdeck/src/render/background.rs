//! Background fills: solid colors and the gradient recipes.

use eframe::egui::{self, Color32, Pos2, Rect};

use crate::deck::Slide;
use crate::theme::{self, Background, GradientKind, GradientSpec, Theme};

/// Strips per gradient; enough that banding is invisible at preview sizes.
const GRADIENT_STEPS: usize = 64;

pub fn draw(ui: &egui::Ui, slide: &Slide, theme: &Theme, rect: Rect) {
    // Per-slide override, which may itself name a gradient recipe.
    if let Some(value) = slide.background_color.as_deref() {
        if let Some(key) = value.strip_prefix("gradient:") {
            if let Some(spec) = theme::gradient(key.trim()) {
                draw_gradient(ui, &spec, rect);
                return;
            }
        } else if let Some(color) = theme::parse_hex_color(value) {
            ui.painter().rect_filled(rect, 0.0, color);
            return;
        }
    }

    match theme.background {
        Background::Solid(color) => {
            ui.painter().rect_filled(rect, 0.0, color);
        }
        Background::Gradient(key) => match theme::gradient(key) {
            Some(spec) => draw_gradient(ui, &spec, rect),
            None => {
                ui.painter().rect_filled(rect, 0.0, Color32::from_rgb(0x20, 0x20, 0x24));
            }
        },
    }
}

fn draw_gradient(ui: &egui::Ui, spec: &GradientSpec, rect: Rect) {
    let painter = ui.painter();
    match spec.kind {
        GradientKind::Vertical => {
            let step = rect.height() / GRADIENT_STEPS as f32;
            for i in 0..GRADIENT_STEPS {
                let t = i as f32 / (GRADIENT_STEPS - 1) as f32;
                let top = rect.top() + i as f32 * step;
                let strip = Rect::from_min_max(
                    Pos2::new(rect.left(), top),
                    Pos2::new(rect.right(), (top + step + 1.0).min(rect.bottom())),
                );
                painter.rect_filled(strip, 0.0, theme::sample(spec, t));
            }
        }
        GradientKind::Horizontal => {
            let step = rect.width() / GRADIENT_STEPS as f32;
            for i in 0..GRADIENT_STEPS {
                let t = i as f32 / (GRADIENT_STEPS - 1) as f32;
                let left = rect.left() + i as f32 * step;
                let strip = Rect::from_min_max(
                    Pos2::new(left, rect.top()),
                    Pos2::new((left + step + 1.0).min(rect.right()), rect.bottom()),
                );
                painter.rect_filled(strip, 0.0, theme::sample(spec, t));
            }
        }
        GradientKind::Radial => {
            // Fill with the outermost stop, then stack shrinking discs.
            painter.rect_filled(rect, 0.0, theme::sample(spec, 1.0));
            let center = rect.center();
            let max_radius = rect.width().hypot(rect.height()) / 2.0;
            for i in (0..GRADIENT_STEPS).rev() {
                let t = i as f32 / (GRADIENT_STEPS - 1) as f32;
                painter.circle_filled(center, max_radius * t, theme::sample(spec, t));
            }
        }
    }
}
