//! The theme table: named visual styles and their resolution rules.

mod catalog;
mod gradient;

pub use gradient::{GradientKind, GradientSpec, gradient, sample};

use eframe::egui::{Color32, FontFamily, FontId};

/// Theme used whenever a slide names nothing recognizable.
pub const DEFAULT_THEME: &str = "boardroom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Creative,
    Tech,
    Nature,
    Minimal,
    Bold,
    Elegant,
    Retro,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Creative => "creative",
            Self::Tech => "tech",
            Self::Nature => "nature",
            Self::Minimal => "minimal",
            Self::Bold => "bold",
            Self::Elegant => "elegant",
            Self::Retro => "retro",
        }
    }

    /// The representative theme a half-recognized name falls back to.
    pub fn base_theme(&self) -> &'static str {
        match self {
            Self::Business => "boardroom",
            Self::Creative => "paper-collage",
            Self::Tech => "terminal-green",
            Self::Nature => "forest-walk",
            Self::Minimal => "gallery-white",
            Self::Bold => "poster-red",
            Self::Elegant => "velvet-night",
            Self::Retro => "cassette",
        }
    }
}

/// Slide background: a literal color or a key into the gradient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Color32),
    Gradient(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub family: FontFamily,
}

impl FontSpec {
    pub const fn sans(size: f32) -> Self {
        Self {
            size,
            family: FontFamily::Proportional,
        }
    }

    pub const fn mono(size: f32) -> Self {
        Self {
            size,
            family: FontFamily::Monospace,
        }
    }

    pub fn font_id(&self, scale: f32) -> FontId {
        FontId::new(self.size * scale, self.family.clone())
    }
}

/// One named visual style. Immutable at runtime; positions and font sizes
/// are authored in the 960x540 logical slide space.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub category: Category,
    pub background: Background,
    pub text_color: Color32,
    pub accent: Color32,
    pub title_font: FontSpec,
    pub content_font: FontSpec,
    pub title_pos: (f32, f32),
    pub content_pos: (f32, f32),
    /// Key into the decoration registry.
    pub decoration: &'static str,
    /// Descriptive labels only; not rendered beyond the decoration routine.
    pub decorations: &'static [&'static str],
}

/// All themes the application knows, with the lookup fallback chain.
pub struct ThemeSet {
    themes: Vec<Theme>,
}

impl ThemeSet {
    pub fn builtin() -> Self {
        Self {
            themes: catalog::all(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|t| t.name).collect()
    }

    /// Case-insensitive exact lookup.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        let wanted = name.trim().to_lowercase();
        self.themes.iter().find(|t| t.name == wanted)
    }

    /// Resolve a theme name that may be garbage: exact match, then the base
    /// theme of a recognized category prefix, then the fixed default.
    pub fn resolve(&self, name: &str) -> &Theme {
        if let Some(theme) = self.get(name) {
            return theme;
        }
        let wanted = name.trim().to_lowercase();
        if let Some(prefix) = wanted.split(['-', ' ', '_']).next() {
            if let Some(category) = self.themes.iter().map(|t| t.category).find(|c| c.name() == prefix) {
                if let Some(base) = self.get(category.base_theme()) {
                    return base;
                }
            }
        }
        self.default_theme()
    }

    pub fn default_theme(&self) -> &Theme {
        self.get(DEFAULT_THEME)
            .unwrap_or_else(|| &self.themes[0])
    }
}

/// Parse `#rrggbb` (with or without the hash) into a color.
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Apply opacity to a color.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        let themes = ThemeSet::builtin();
        assert!(themes.iter().count() >= 20);
        // Names are unique and lowercase
        let names = themes.names();
        for name in &names {
            assert_eq!(*name, name.to_lowercase());
        }
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
        // Every category's base theme exists
        for theme in themes.iter() {
            assert!(
                themes.get(theme.category.base_theme()).is_some(),
                "missing base theme for {:?}",
                theme.category
            );
        }
        // Gradient backgrounds reference known recipes
        for theme in themes.iter() {
            if let Background::Gradient(key) = theme.background {
                assert!(gradient(key).is_some(), "unknown gradient {key}");
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let themes = ThemeSet::builtin();
        assert_eq!(themes.get("BOARDROOM").unwrap().name, "boardroom");
        assert_eq!(themes.get("  Boardroom  ").unwrap().name, "boardroom");
    }

    #[test]
    fn test_resolve_falls_back_by_category_then_default() {
        let themes = ThemeSet::builtin();
        // Unknown name with a recognized category prefix
        let theme = themes.resolve("tech-nonexistent-variant");
        assert_eq!(theme.name, Category::Tech.base_theme());
        // Completely unknown name
        assert_eq!(themes.resolve("flurble").name, DEFAULT_THEME);
        assert_eq!(themes.resolve("").name, DEFAULT_THEME);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0080"), Some(Color32::from_rgb(255, 0, 128)));
        assert_eq!(parse_hex_color("102030"), Some(Color32::from_rgb(16, 32, 48)));
        assert_eq!(parse_hex_color("#abc"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }
}
