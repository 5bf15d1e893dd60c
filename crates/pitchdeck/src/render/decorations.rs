//! Decoration routines, dispatched by the theme's decoration key.
//!
//! These are ornamental painters layered between the background and the
//! text. Shapes are positioned with index arithmetic so repaints are
//! deterministic. An unrecognized key gets the corner-accent default.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, vec2};

use crate::theme::{Theme, with_opacity};

pub fn draw(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    match theme.decoration {
        "none" => {}
        "rules" => rules(ui, theme, rect, scale),
        "orbits" => orbits(ui, theme, rect, scale),
        "grid" => grid(ui, theme, rect, scale),
        "waves" => waves(ui, theme, rect, scale),
        "confetti" => confetti(ui, theme, rect, scale),
        "circuit" => circuit(ui, theme, rect, scale),
        "scanlines" => scanlines(ui, theme, rect, scale),
        "leaves" => leaves(ui, theme, rect, scale),
        "diagonals" => diagonals(ui, theme, rect, scale),
        "frame" => frame(ui, theme, rect, scale),
        "sparks" => sparks(ui, theme, rect, scale),
        "arcs" => arcs(ui, theme, rect, scale),
        "stripes" => stripes(ui, theme, rect, scale),
        "halftone" => halftone(ui, theme, rect, scale),
        "horizon" => horizon(ui, theme, rect, scale),
        "skyline" => skyline(ui, theme, rect, scale),
        "brush-stroke" => brush_stroke(ui, theme, rect, scale),
        _ => corner_accents(ui, theme, rect, scale),
    }
}

fn corner_accents(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(3.0 * scale, theme.accent);
    let len = 36.0 * scale;
    let inset = 18.0 * scale;

    let tl = rect.left_top() + vec2(inset, inset);
    painter.line_segment([tl, tl + vec2(len, 0.0)], stroke);
    painter.line_segment([tl, tl + vec2(0.0, len)], stroke);

    let br = rect.right_bottom() - vec2(inset, inset);
    painter.line_segment([br, br - vec2(len, 0.0)], stroke);
    painter.line_segment([br, br - vec2(0.0, len)], stroke);
}

fn rules(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(2.0 * scale, with_opacity(theme.accent, 0.8));
    let y = rect.top() + 130.0 * scale;
    painter.line_segment(
        [
            Pos2::new(rect.left() + 80.0 * scale, y),
            Pos2::new(rect.right() - 80.0 * scale, y),
        ],
        stroke,
    );
}

fn orbits(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let center = Pos2::new(rect.right() - 140.0 * scale, rect.top() + 110.0 * scale);
    for i in 0..4 {
        let radius = (40.0 + i as f32 * 26.0) * scale;
        let opacity = 0.35 - i as f32 * 0.07;
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(2.0 * scale, with_opacity(theme.accent, opacity)),
        );
    }
    painter.circle_filled(center, 14.0 * scale, with_opacity(theme.accent, 0.5));
}

fn grid(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(1.0 * scale, with_opacity(theme.accent, 0.18));
    let spacing = 60.0 * scale;
    let mut x = rect.left() + spacing;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += spacing;
    }
    let mut y = rect.top() + spacing;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += spacing;
    }
}

fn waves(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    for band in 0..3 {
        let base = rect.bottom() - (40.0 + band as f32 * 26.0) * scale;
        let amplitude = (8.0 + band as f32 * 4.0) * scale;
        let color = with_opacity(theme.accent, 0.35 - band as f32 * 0.1);
        let stroke = Stroke::new(2.5 * scale, color);
        let steps = 48;
        let step_x = rect.width() / steps as f32;
        let mut prev = Pos2::new(rect.left(), base);
        for i in 1..=steps {
            let x = rect.left() + i as f32 * step_x;
            let phase = i as f32 * 0.4 + band as f32 * 1.3;
            let point = Pos2::new(x, base + phase.sin() * amplitude);
            painter.line_segment([prev, point], stroke);
            prev = point;
        }
    }
}

fn confetti(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    for i in 0..24 {
        // Deterministic scatter from the index
        let fx = ((i * 73) % 97) as f32 / 97.0;
        let fy = ((i * 31) % 89) as f32 / 89.0;
        let pos = Pos2::new(
            rect.left() + fx * rect.width(),
            rect.top() + fy * rect.height() * 0.35,
        );
        let radius = (2.0 + (i % 3) as f32 * 1.5) * scale;
        let opacity = 0.25 + ((i % 4) as f32) * 0.08;
        painter.circle_filled(pos, radius, with_opacity(theme.accent, opacity));
    }
}

fn circuit(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(1.5 * scale, with_opacity(theme.accent, 0.4));
    let base_y = rect.bottom() - 60.0 * scale;
    let mut x = rect.left() + 40.0 * scale;
    let mut up = true;
    while x < rect.right() - 80.0 * scale {
        let next_x = x + 70.0 * scale;
        let y = if up { base_y - 24.0 * scale } else { base_y };
        let next_y = if up { base_y } else { base_y - 24.0 * scale };
        painter.line_segment([Pos2::new(x, y), Pos2::new(next_x, y)], stroke);
        painter.line_segment([Pos2::new(next_x, y), Pos2::new(next_x, next_y)], stroke);
        painter.circle_filled(Pos2::new(x, y), 3.0 * scale, with_opacity(theme.accent, 0.6));
        x = next_x;
        up = !up;
    }
}

fn scanlines(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(1.0, with_opacity(theme.accent, 0.08));
    let spacing = 6.0 * scale.max(0.5);
    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += spacing;
    }
}

fn leaves(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    for i in 0..10 {
        let fx = ((i * 53) % 83) as f32 / 83.0;
        let fy = ((i * 29) % 71) as f32 / 71.0;
        let center = Pos2::new(
            rect.left() + fx * rect.width(),
            rect.top() + (0.55 + fy * 0.4) * rect.height(),
        );
        let radius = (6.0 + (i % 3) as f32 * 3.0) * scale;
        let color = with_opacity(theme.accent, 0.2 + (i % 3) as f32 * 0.08);
        // Two offset discs make a rough leaf silhouette
        painter.circle_filled(center, radius, color);
        painter.circle_filled(center + vec2(radius * 0.7, -radius * 0.5), radius * 0.7, color);
    }
}

fn diagonals(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let stroke = Stroke::new(10.0 * scale, with_opacity(theme.accent, 0.25));
    for i in 0..4 {
        let offset = i as f32 * 46.0 * scale;
        painter.line_segment(
            [
                Pos2::new(rect.right() - 180.0 * scale + offset, rect.bottom()),
                Pos2::new(rect.right() + offset, rect.bottom() - 180.0 * scale),
            ],
            stroke,
        );
    }
}

fn frame(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    painter.rect_stroke(
        rect.shrink(14.0 * scale),
        0.0,
        Stroke::new(4.0 * scale, with_opacity(theme.accent, 0.7)),
        egui::StrokeKind::Inside,
    );
}

fn sparks(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    for i in 0..16 {
        let fx = ((i * 61) % 101) as f32 / 101.0;
        let fy = ((i * 37) % 103) as f32 / 103.0;
        let pos = Pos2::new(
            rect.left() + (0.1 + fx * 0.8) * rect.width(),
            rect.bottom() - fy * rect.height() * 0.5,
        );
        let len = (4.0 + (i % 4) as f32 * 2.0) * scale;
        painter.line_segment(
            [pos, pos - vec2(0.0, len)],
            Stroke::new(1.5 * scale, with_opacity(theme.accent, 0.3 + (i % 3) as f32 * 0.12)),
        );
    }
}

fn arcs(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let center = Pos2::new(rect.left() - 40.0 * scale, rect.bottom() + 40.0 * scale);
    for i in 0..3 {
        let radius = (180.0 + i as f32 * 50.0) * scale;
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(2.0 * scale, with_opacity(theme.accent, 0.3 - i as f32 * 0.08)),
        );
    }
}

fn stripes(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let colors = [
        with_opacity(theme.accent, 0.8),
        with_opacity(theme.accent, 0.5),
        with_opacity(theme.accent, 0.3),
    ];
    for (i, color) in colors.iter().enumerate() {
        let y = rect.bottom() - (36.0 - i as f32 * 10.0) * scale;
        let stripe = Rect::from_min_max(
            Pos2::new(rect.left(), y),
            Pos2::new(rect.right(), y + 6.0 * scale),
        );
        painter.rect_filled(stripe, 0.0, *color);
    }
}

fn halftone(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let spacing = 18.0 * scale;
    let rows = 5;
    for row in 0..rows {
        let y = rect.bottom() - 24.0 * scale - row as f32 * spacing;
        let radius = (5.0 - row as f32) * scale;
        if radius <= 0.0 {
            continue;
        }
        let mut x = rect.left() + 24.0 * scale;
        while x < rect.left() + rect.width() * 0.45 {
            painter.circle_filled(Pos2::new(x, y), radius, with_opacity(theme.accent, 0.3));
            x += spacing;
        }
    }
}

fn horizon(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let y = rect.bottom() - 110.0 * scale;
    painter.line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(3.0 * scale, with_opacity(theme.accent, 0.5)),
    );
    // Mesa silhouette
    let mesa = Rect::from_min_max(
        Pos2::new(rect.left() + rect.width() * 0.62, y - 38.0 * scale),
        Pos2::new(rect.left() + rect.width() * 0.8, y),
    );
    painter.rect_filled(mesa, 0.0, with_opacity(theme.accent, 0.25));
}

fn skyline(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let base = rect.bottom();
    let color = with_opacity(Color32::BLACK, 0.25);
    let heights = [60.0, 110.0, 80.0, 140.0, 95.0, 120.0, 70.0];
    let width = rect.width() / heights.len() as f32;
    for (i, h) in heights.iter().enumerate() {
        let building = Rect::from_min_max(
            Pos2::new(rect.left() + i as f32 * width + 4.0 * scale, base - h * scale),
            Pos2::new(rect.left() + (i + 1) as f32 * width - 4.0 * scale, base),
        );
        painter.rect_filled(building, 0.0, color);
        // Lit windows
        for w in 0..3 {
            let window = Pos2::new(
                building.left() + (w as f32 + 1.0) * building.width() / 4.0,
                building.top() + 14.0 * scale,
            );
            painter.circle_filled(window, 1.5 * scale, with_opacity(theme.accent, 0.6));
        }
    }
}

fn brush_stroke(ui: &egui::Ui, theme: &Theme, rect: Rect, scale: f32) {
    let painter = ui.painter();
    let y = rect.top() + 140.0 * scale;
    for i in 0..5 {
        let thickness = (14.0 - i as f32 * 2.0) * scale;
        let wobble = (i as f32 * 1.7).sin() * 6.0 * scale;
        painter.line_segment(
            [
                Pos2::new(rect.left() + 70.0 * scale, y + wobble),
                Pos2::new(rect.left() + 330.0 * scale, y + wobble - 4.0 * scale),
            ],
            Stroke::new(thickness, with_opacity(theme.accent, 0.15 + i as f32 * 0.05)),
        );
    }
}
