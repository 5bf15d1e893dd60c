//! Gradient recipes for theme backgrounds.
//!
//! Themes (and slide overrides) reference these by key through the
//! `gradient:<key>` sentinel; the renderer paints them as interpolated
//! strips or concentric fills.

use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Vertical,
    Horizontal,
    Radial,
}

#[derive(Debug, Clone, Copy)]
pub struct GradientSpec {
    pub kind: GradientKind,
    /// Position (0..=1) and color, ordered by position.
    pub stops: &'static [(f32, Color32)],
}

/// Look up a gradient recipe by key.
pub fn gradient(key: &str) -> Option<GradientSpec> {
    let spec = match key {
        "sunset" => GradientSpec {
            kind: GradientKind::Vertical,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x2B, 0x1B, 0x42)),
                    (0.45, Color32::from_rgb(0xB4, 0x3E, 0x5A)),
                    (0.8, Color32::from_rgb(0xE8, 0x7A, 0x3D)),
                    (1.0, Color32::from_rgb(0xF5, 0xB0, 0x4A)),
                ]
            },
        },
        "ocean" => GradientSpec {
            kind: GradientKind::Vertical,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x04, 0x2A, 0x3A)),
                    (0.6, Color32::from_rgb(0x0A, 0x53, 0x66)),
                    (1.0, Color32::from_rgb(0x15, 0x84, 0x8A)),
                ]
            },
        },
        "dusk" => GradientSpec {
            kind: GradientKind::Vertical,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x1A, 0x23, 0x44)),
                    (0.7, Color32::from_rgb(0x41, 0x2F, 0x5A)),
                    (1.0, Color32::from_rgb(0x7A, 0x3B, 0x52)),
                ]
            },
        },
        "forest" => GradientSpec {
            kind: GradientKind::Vertical,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x11, 0x26, 0x16)),
                    (1.0, Color32::from_rgb(0x2D, 0x52, 0x2B)),
                ]
            },
        },
        "ember" => GradientSpec {
            kind: GradientKind::Radial,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x8A, 0x2A, 0x0E)),
                    (0.65, Color32::from_rgb(0x4A, 0x14, 0x10)),
                    (1.0, Color32::from_rgb(0x1E, 0x0A, 0x0C)),
                ]
            },
        },
        "arctic" => GradientSpec {
            kind: GradientKind::Horizontal,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0xEE, 0xF3, 0xF8)),
                    (1.0, Color32::from_rgb(0xCD, 0xDC, 0xE8)),
                ]
            },
        },
        "midnight" => GradientSpec {
            kind: GradientKind::Vertical,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0x05, 0x08, 0x14)),
                    (0.75, Color32::from_rgb(0x12, 0x1C, 0x38)),
                    (1.0, Color32::from_rgb(0x26, 0x1E, 0x4E)),
                ]
            },
        },
        "candy" => GradientSpec {
            kind: GradientKind::Horizontal,
            stops: const {
                &[
                    (0.0, Color32::from_rgb(0xF8, 0xD8, 0xE8)),
                    (0.5, Color32::from_rgb(0xE8, 0xD4, 0xF4)),
                    (1.0, Color32::from_rgb(0xCC, 0xE4, 0xF6)),
                ]
            },
        },
        _ => return None,
    };
    Some(spec)
}

/// Interpolate a gradient at position `t` (clamped to 0..=1).
pub fn sample(spec: &GradientSpec, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let stops = spec.stops;
    if stops.is_empty() {
        return Color32::BLACK;
    }
    if t <= stops[0].0 {
        return stops[0].1;
    }
    for pair in stops.windows(2) {
        let (p0, c0) = pair[0];
        let (p1, c1) = pair[1];
        if t <= p1 {
            let span = (p1 - p0).max(f32::EPSILON);
            let f = (t - p0) / span;
            return lerp(c0, c1, f);
        }
    }
    stops[stops.len() - 1].1
}

fn lerp(a: Color32, b: Color32, f: f32) -> Color32 {
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * f).round() as u8 };
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_none() {
        assert!(gradient("plaid").is_none());
    }

    #[test]
    fn test_sample_hits_endpoints() {
        let spec = gradient("forest").unwrap();
        assert_eq!(sample(&spec, 0.0), spec.stops[0].1);
        assert_eq!(sample(&spec, 1.0), spec.stops[spec.stops.len() - 1].1);
        assert_eq!(sample(&spec, -2.0), spec.stops[0].1);
        assert_eq!(sample(&spec, 2.0), spec.stops[spec.stops.len() - 1].1);
    }

    #[test]
    fn test_sample_interpolates_midpoint() {
        let spec = gradient("forest").unwrap();
        let mid = sample(&spec, 0.5);
        let (a, b) = (spec.stops[0].1, spec.stops[1].1);
        assert!(mid.r() > a.r().min(b.r()) && mid.r() < a.r().max(b.r()));
    }

    #[test]
    fn test_stops_are_ordered() {
        for key in ["sunset", "ocean", "dusk", "forest", "ember", "arctic", "midnight", "candy"] {
            let spec = gradient(key).unwrap();
            for pair in spec.stops.windows(2) {
                assert!(pair[0].0 < pair[1].0, "unordered stops in {key}");
            }
        }
    }
}
