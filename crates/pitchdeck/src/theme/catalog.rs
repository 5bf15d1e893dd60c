//! Builtin theme catalog.
//!
//! A representative cut of the visual styles the application ships: three
//! themes per category, the first being the category's base theme. Adding a
//! theme means adding a literal here and, if it names a new decoration key,
//! a routine in `render::decorations`.

use eframe::egui::Color32;

use super::{Background, Category, FontSpec, Theme};

pub fn all() -> Vec<Theme> {
    vec![
        // Business
        Theme {
            name: "boardroom",
            category: Category::Business,
            background: Background::Solid(Color32::from_rgb(0x16, 0x21, 0x3E)),
            text_color: Color32::from_rgb(0xF2, 0xF4, 0xF8),
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 70.0),
            content_pos: (80.0, 180.0),
            decoration: "corner-accents",
            decorations: &["corner brackets", "accent rule"],
        },
        Theme {
            name: "ledger",
            category: Category::Business,
            background: Background::Solid(Color32::from_rgb(0xFA, 0xFA, 0xF5)),
            text_color: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            title_font: FontSpec::sans(42.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (80.0, 80.0),
            content_pos: (80.0, 190.0),
            decoration: "rules",
            decorations: &["horizontal rules"],
        },
        Theme {
            name: "skyline",
            category: Category::Business,
            background: Background::Gradient("dusk"),
            text_color: Color32::from_rgb(0xF5, 0xF0, 0xEA),
            accent: Color32::from_rgb(0xE8, 0xA8, 0x38),
            title_font: FontSpec::sans(46.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 60.0),
            content_pos: (80.0, 175.0),
            decoration: "skyline",
            decorations: &["city silhouette"],
        },
        // Creative
        Theme {
            name: "paper-collage",
            category: Category::Creative,
            background: Background::Solid(Color32::from_rgb(0xFB, 0xF3, 0xE4)),
            text_color: Color32::from_rgb(0x3B, 0x2F, 0x2F),
            accent: Color32::from_rgb(0xE0, 0x5D, 0x5D),
            title_font: FontSpec::sans(48.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (70.0, 65.0),
            content_pos: (70.0, 185.0),
            decoration: "confetti",
            decorations: &["torn paper", "confetti"],
        },
        Theme {
            name: "studio-ink",
            category: Category::Creative,
            background: Background::Solid(Color32::from_rgb(0x23, 0x21, 0x29)),
            text_color: Color32::from_rgb(0xEF, 0xEA, 0xE2),
            accent: Color32::from_rgb(0xF0, 0x6E, 0xAA),
            title_font: FontSpec::sans(50.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (75.0, 75.0),
            content_pos: (75.0, 195.0),
            decoration: "brush-stroke",
            decorations: &["ink brush stroke"],
        },
        Theme {
            name: "sunset-glow",
            category: Category::Creative,
            background: Background::Gradient("sunset"),
            text_color: Color32::from_rgb(0xFF, 0xF8, 0xEE),
            accent: Color32::from_rgb(0xFF, 0xD1, 0x66),
            title_font: FontSpec::sans(46.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 70.0),
            content_pos: (80.0, 185.0),
            decoration: "orbits",
            decorations: &["sun disc", "halo rings"],
        },
        // Tech
        Theme {
            name: "terminal-green",
            category: Category::Tech,
            background: Background::Solid(Color32::from_rgb(0x0A, 0x10, 0x0A)),
            text_color: Color32::from_rgb(0x5C, 0xDB, 0x95),
            accent: Color32::from_rgb(0x9A, 0xFF, 0xC3),
            title_font: FontSpec::mono(40.0),
            content_font: FontSpec::mono(19.0),
            title_pos: (70.0, 70.0),
            content_pos: (70.0, 180.0),
            decoration: "scanlines",
            decorations: &["scanlines", "prompt cursor"],
        },
        Theme {
            name: "circuit-blue",
            category: Category::Tech,
            background: Background::Solid(Color32::from_rgb(0x0D, 0x1B, 0x2A)),
            text_color: Color32::from_rgb(0xE0, 0xE9, 0xF5),
            accent: Color32::from_rgb(0x4E, 0xD4, 0xD4),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (80.0, 70.0),
            content_pos: (80.0, 180.0),
            decoration: "circuit",
            decorations: &["circuit traces", "solder nodes"],
        },
        Theme {
            name: "midnight-grid",
            category: Category::Tech,
            background: Background::Gradient("midnight"),
            text_color: Color32::from_rgb(0xD9, 0xE2, 0xF0),
            accent: Color32::from_rgb(0xC0, 0x7E, 0xF1),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (80.0, 65.0),
            content_pos: (80.0, 178.0),
            decoration: "grid",
            decorations: &["perspective grid"],
        },
        // Nature
        Theme {
            name: "forest-walk",
            category: Category::Nature,
            background: Background::Gradient("forest"),
            text_color: Color32::from_rgb(0xF0, 0xF5, 0xEC),
            accent: Color32::from_rgb(0xA3, 0xBE, 0x58),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 70.0),
            content_pos: (80.0, 185.0),
            decoration: "leaves",
            decorations: &["leaf scatter"],
        },
        Theme {
            name: "tidepool",
            category: Category::Nature,
            background: Background::Gradient("ocean"),
            text_color: Color32::from_rgb(0xEA, 0xF6, 0xF8),
            accent: Color32::from_rgb(0x5C, 0xB8, 0xFF),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 70.0),
            content_pos: (80.0, 182.0),
            decoration: "waves",
            decorations: &["wave bands"],
        },
        Theme {
            name: "high-desert",
            category: Category::Nature,
            background: Background::Solid(Color32::from_rgb(0xE8, 0xD8, 0xC3)),
            text_color: Color32::from_rgb(0x4A, 0x35, 0x2A),
            accent: Color32::from_rgb(0xC7, 0x3E, 0x1D),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 75.0),
            content_pos: (80.0, 188.0),
            decoration: "horizon",
            decorations: &["mesa horizon line"],
        },
        // Minimal
        Theme {
            name: "gallery-white",
            category: Category::Minimal,
            background: Background::Solid(Color32::WHITE),
            text_color: Color32::from_rgb(0x20, 0x20, 0x24),
            accent: Color32::from_rgb(0x88, 0x88, 0x90),
            title_font: FontSpec::sans(42.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (90.0, 90.0),
            content_pos: (90.0, 200.0),
            decoration: "none",
            decorations: &[],
        },
        Theme {
            name: "graphite",
            category: Category::Minimal,
            background: Background::Solid(Color32::from_rgb(0x1E, 0x1E, 0x1E)),
            text_color: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            accent: Color32::from_rgb(0x6E, 0x6E, 0x76),
            title_font: FontSpec::sans(42.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (90.0, 90.0),
            content_pos: (90.0, 200.0),
            decoration: "rules",
            decorations: &["thin rule"],
        },
        Theme {
            name: "linen",
            category: Category::Minimal,
            background: Background::Solid(Color32::from_rgb(0xF6, 0xF1, 0xE7)),
            text_color: Color32::from_rgb(0x33, 0x31, 0x2E),
            accent: Color32::from_rgb(0xB8, 0x7B, 0x0A),
            title_font: FontSpec::sans(42.0),
            content_font: FontSpec::sans(21.0),
            title_pos: (90.0, 85.0),
            content_pos: (90.0, 195.0),
            decoration: "none",
            decorations: &[],
        },
        // Bold
        Theme {
            name: "poster-red",
            category: Category::Bold,
            background: Background::Solid(Color32::from_rgb(0xC7, 0x2B, 0x1D)),
            text_color: Color32::from_rgb(0xFF, 0xF4, 0xE8),
            accent: Color32::from_rgb(0xFF, 0xD1, 0x66),
            title_font: FontSpec::sans(54.0),
            content_font: FontSpec::sans(24.0),
            title_pos: (70.0, 60.0),
            content_pos: (70.0, 185.0),
            decoration: "diagonals",
            decorations: &["diagonal bands"],
        },
        Theme {
            name: "blackout",
            category: Category::Bold,
            background: Background::Solid(Color32::from_rgb(0x0B, 0x0B, 0x0D)),
            text_color: Color32::from_rgb(0xF5, 0xF5, 0xF0),
            accent: Color32::from_rgb(0xFF, 0x7E, 0x67),
            title_font: FontSpec::sans(56.0),
            content_font: FontSpec::sans(23.0),
            title_pos: (70.0, 65.0),
            content_pos: (70.0, 190.0),
            decoration: "frame",
            decorations: &["heavy frame"],
        },
        Theme {
            name: "ember",
            category: Category::Bold,
            background: Background::Gradient("ember"),
            text_color: Color32::from_rgb(0xFF, 0xF1, 0xE0),
            accent: Color32::from_rgb(0xFF, 0xB0, 0x4A),
            title_font: FontSpec::sans(52.0),
            content_font: FontSpec::sans(23.0),
            title_pos: (75.0, 62.0),
            content_pos: (75.0, 186.0),
            decoration: "sparks",
            decorations: &["rising sparks"],
        },
        // Elegant
        Theme {
            name: "velvet-night",
            category: Category::Elegant,
            background: Background::Solid(Color32::from_rgb(0x1C, 0x14, 0x2C)),
            text_color: Color32::from_rgb(0xEC, 0xE6, 0xF2),
            accent: Color32::from_rgb(0xC9, 0xA2, 0x5E),
            title_font: FontSpec::sans(46.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (85.0, 75.0),
            content_pos: (85.0, 190.0),
            decoration: "arcs",
            decorations: &["gold arcs"],
        },
        Theme {
            name: "pearl",
            category: Category::Elegant,
            background: Background::Gradient("arctic"),
            text_color: Color32::from_rgb(0x2E, 0x2E, 0x38),
            accent: Color32::from_rgb(0x7B, 0x3F, 0xA0),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (85.0, 80.0),
            content_pos: (85.0, 192.0),
            decoration: "arcs",
            decorations: &["pearl arcs"],
        },
        Theme {
            name: "candlelight",
            category: Category::Elegant,
            background: Background::Solid(Color32::from_rgb(0x2A, 0x1E, 0x14)),
            text_color: Color32::from_rgb(0xF3, 0xE8, 0xD4),
            accent: Color32::from_rgb(0xE8, 0xA8, 0x38),
            title_font: FontSpec::sans(46.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (85.0, 72.0),
            content_pos: (85.0, 188.0),
            decoration: "orbits",
            decorations: &["candle halos"],
        },
        // Retro
        Theme {
            name: "cassette",
            category: Category::Retro,
            background: Background::Solid(Color32::from_rgb(0x2D, 0x26, 0x20)),
            text_color: Color32::from_rgb(0xF2, 0xE9, 0xD8),
            accent: Color32::from_rgb(0xE0, 0x5D, 0x5D),
            title_font: FontSpec::sans(46.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (75.0, 70.0),
            content_pos: (75.0, 185.0),
            decoration: "stripes",
            decorations: &["racing stripes"],
        },
        Theme {
            name: "arcade",
            category: Category::Retro,
            background: Background::Gradient("candy"),
            text_color: Color32::from_rgb(0x1F, 0x10, 0x2E),
            accent: Color32::from_rgb(0xF0, 0x6E, 0xAA),
            title_font: FontSpec::mono(44.0),
            content_font: FontSpec::mono(20.0),
            title_pos: (75.0, 65.0),
            content_pos: (75.0, 182.0),
            decoration: "halftone",
            decorations: &["halftone dots"],
        },
        Theme {
            name: "polaroid",
            category: Category::Retro,
            background: Background::Solid(Color32::from_rgb(0xEF, 0xEA, 0xDE)),
            text_color: Color32::from_rgb(0x31, 0x2C, 0x28),
            accent: Color32::from_rgb(0x18, 0x8A, 0x8D),
            title_font: FontSpec::sans(44.0),
            content_font: FontSpec::sans(22.0),
            title_pos: (80.0, 78.0),
            content_pos: (80.0, 190.0),
            decoration: "frame",
            decorations: &["photo frame"],
        },
    ]
}
