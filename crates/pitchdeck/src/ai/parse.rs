//! Tolerant parsers for free-text model replies.
//!
//! The model is asked for a specific format but rarely guaranteed to honor
//! it, so extraction is layered: each tier only fills fields the previous
//! tiers left unresolved, and the bulk parser never returns zero slides for
//! non-empty input. Availability is deliberately prioritized over fidelity;
//! a caller gets the best slide content that could be salvaged.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::theme::ThemeSet;

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)---SLIDE STYLE---(.*?)---END STYLE---").unwrap());
static CONTENT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)---SLIDE CONTENT---(.*?)---END CONTENT---").unwrap());
static THEME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*(?:THEME|STYLE)\s*[:=]\s*(.+)$").unwrap());
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*(?:TITLE|HEADLINE)\s*[:=]\s*(.+)$").unwrap());
static CONTENT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(?:^|\n)\s*(?:CONTENT|BODY)\s*[:=]\s*(.*)$").unwrap());
static STYLE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:THEME|STYLE|FONT|COLOR|BACKGROUND|ACCENT)\s*[:=]").unwrap()
});
static SENTINEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*---.*---\s*$").unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"\n]{3,80})""#).unwrap());

static SELECTED_THEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*SELECTED_THEME\s*[:=]\s*(.+)$").unwrap());
static BULK_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*SLIDE[_\s]*(\d+)[_\s]*(TITLE|CONTENT|NOTES)\s*[:=]\s*(.*)$").unwrap()
});
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:#{1,6}\s+(.+)|(?i:slide\s*)?\d{1,2}[.):]\s+(.+))$").unwrap()
});
static BLANK_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// How much raw text a last-resort slide swallows.
const RAW_CHUNK_CHARS: usize = 400;
const MAX_TITLE_CHARS: usize = 80;

/// Fields extracted from an improve-slide reply. Anything unresolved stays
/// `None`; callers must not assume a field is populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Resolved theme name, already validated against the theme table.
    pub theme: Option<String>,
}

impl SlidePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.theme.is_none()
    }
}

/// Parse an improve-slide reply through the three tiers.
pub fn parse_improvement(text: &str, themes: &ThemeSet) -> SlidePatch {
    let mut patch = SlidePatch::default();

    // Tier 1: sentinel-delimited blocks.
    if let Some(captures) = STYLE_BLOCK.captures(text) {
        if let Some(token) = THEME_LINE.captures(&captures[1]).map(|c| c[1].trim().to_string()) {
            patch.theme = Some(themes.resolve(&token).name.to_string());
        }
    }
    if let Some(captures) = CONTENT_BLOCK.captures(text) {
        let block = captures[1].to_string();
        patch.title = TITLE_LINE
            .captures(&block)
            .map(|c| c[1].trim().to_string())
            .filter(|t| !t.is_empty());
        patch.content = content_after_label(&block);
    }

    // Tier 2: bare labeled lines anywhere in the reply.
    if patch.title.is_none() {
        patch.title = TITLE_LINE
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .filter(|t| !t.is_empty());
    }
    if patch.content.is_none() {
        patch.content = content_after_label(text);
    }
    if patch.theme.is_none() {
        if let Some(token) = THEME_LINE.captures(text).map(|c| c[1].trim().to_string()) {
            patch.theme = Some(themes.resolve(&token).name.to_string());
        }
    }

    // Tier 3: heuristics for a reply with no labels at all.
    let mut heuristic_title_line: Option<String> = None;
    if patch.title.is_none() {
        if let Some(captures) = QUOTED.captures(text) {
            patch.title = Some(captures[1].trim().to_string());
        } else if let Some(first) = plain_lines(text).into_iter().next() {
            if first.chars().count() <= MAX_TITLE_CHARS {
                heuristic_title_line = Some(first.clone());
                patch.title = Some(first);
            }
        }
    }
    if patch.content.is_none() {
        let lines: Vec<String> = plain_lines(text)
            .into_iter()
            .filter(|line| Some(line) != heuristic_title_line.as_ref())
            .collect();
        if !lines.is_empty() {
            patch.content = Some(lines.join("\n"));
        }
    }

    patch
}

/// Everything after a `CONTENT:`/`BODY:` label, with stray styling
/// directives and sentinel lines stripped out of the capture.
fn content_after_label(text: &str) -> Option<String> {
    let captures = CONTENT_LABEL.captures(text)?;
    let cleaned = strip_directives(captures.get(1)?.as_str());
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

fn strip_directives(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| !STYLE_DIRECTIVE.is_match(line) && !SENTINEL.is_match(line))
        .collect();
    kept.join("\n").trim().to_string()
}

/// Non-empty lines that are neither labels nor sentinels.
fn plain_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            !STYLE_DIRECTIVE.is_match(line)
                && !SENTINEL.is_match(line)
                && !TITLE_LINE.is_match(line)
                && !CONTENT_LABEL.is_match(line)
        })
        .map(str::to_string)
        .collect()
}

/// One slide extracted from a deck-generation reply.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSlide {
    pub title: String,
    pub content: String,
    pub notes: String,
}

/// A parsed deck-generation reply.
#[derive(Debug, Default)]
pub struct GeneratedDeck {
    /// Resolved theme applied uniformly to all slides, when the reply named one.
    pub theme: Option<String>,
    pub slides: Vec<GeneratedSlide>,
}

/// Parse a deck-generation reply.
///
/// Guarantee: empty input yields zero slides; any non-empty input yields at
/// least one slide, however rough, and the function never panics.
pub fn parse_deck(text: &str, themes: &ThemeSet) -> GeneratedDeck {
    let mut deck = GeneratedDeck::default();
    if text.trim().is_empty() {
        return deck;
    }

    if let Some(token) = SELECTED_THEME.captures(text).map(|c| c[1].trim().to_string()) {
        deck.theme = Some(themes.resolve(&token).name.to_string());
    }

    deck.slides = numbered_blocks(text);
    if deck.slides.is_empty() {
        deck.slides = header_sections(text);
    }
    if deck.slides.is_empty() {
        deck.slides = paragraph_chunks(text);
    }
    if deck.slides.is_empty() {
        deck.slides = raw_chunks(text);
    }
    deck
}

#[derive(Clone, Copy)]
enum BulkField {
    Title,
    Content,
    Notes,
}

/// Primary form: `SLIDE_<n>_TITLE/CONTENT/NOTES:` labeled blocks, with
/// unlabeled lines continuing the most recent field.
fn numbered_blocks(text: &str) -> Vec<GeneratedSlide> {
    #[derive(Default)]
    struct Partial {
        title: String,
        content: String,
        notes: String,
    }

    let mut partials: BTreeMap<u32, Partial> = BTreeMap::new();
    let mut active: Option<(u32, BulkField)> = None;

    for line in text.lines() {
        if let Some(captures) = BULK_FIELD.captures(line) {
            let number: u32 = match captures[1].parse() {
                Ok(n) => n,
                Err(_) => continue,
            };
            let field = match captures[2].to_uppercase().as_str() {
                "TITLE" => BulkField::Title,
                "CONTENT" => BulkField::Content,
                _ => BulkField::Notes,
            };
            let value = captures[3].trim().to_string();
            let partial = partials.entry(number).or_default();
            match field {
                BulkField::Title => partial.title = value,
                BulkField::Content => partial.content = value,
                BulkField::Notes => partial.notes = value,
            }
            active = Some((number, field));
        } else if SELECTED_THEME.is_match(line) {
            active = None;
        } else if let Some((number, field)) = active {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let partial = partials.entry(number).or_default();
            let target = match field {
                BulkField::Title => &mut partial.title,
                BulkField::Content => &mut partial.content,
                BulkField::Notes => &mut partial.notes,
            };
            if !target.is_empty() {
                target.push('\n');
            }
            target.push_str(trimmed);
        }
    }

    partials
        .into_iter()
        .filter(|(_, p)| !p.title.is_empty() || !p.content.is_empty())
        .map(|(number, p)| GeneratedSlide {
            title: if p.title.is_empty() {
                format!("Slide {number}")
            } else {
                p.title
            },
            content: p.content,
            notes: p.notes,
        })
        .collect()
}

/// Fallback: split on markdown headings or numbered headers.
fn header_sections(text: &str) -> Vec<GeneratedSlide> {
    let mut slides = Vec::new();
    let mut current: Option<GeneratedSlide> = None;

    for line in text.lines() {
        if let Some(title) = header_title(line) {
            if let Some(slide) = current.take() {
                slides.push(slide);
            }
            current = Some(GeneratedSlide {
                title,
                content: String::new(),
                notes: String::new(),
            });
        } else if let Some(slide) = current.as_mut() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !slide.content.is_empty() {
                slide.content.push('\n');
            }
            slide.content.push_str(trimmed);
        }
    }
    if let Some(slide) = current.take() {
        slides.push(slide);
    }
    slides
}

fn header_title(line: &str) -> Option<String> {
    let captures = HEADER_LINE.captures(line)?;
    let title = captures
        .get(1)
        .or_else(|| captures.get(2))?
        .as_str()
        .trim()
        .to_string();
    if title.is_empty() { None } else { Some(title) }
}

/// Fallback: blank-line-separated chunks, first line as title.
fn paragraph_chunks(text: &str) -> Vec<GeneratedSlide> {
    BLANK_GAP
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let mut lines = chunk.lines();
            let first = lines.next().unwrap_or_default().trim();
            let title: String = first.chars().take(MAX_TITLE_CHARS).collect();
            let content: Vec<&str> = lines.map(str::trim).filter(|l| !l.is_empty()).collect();
            GeneratedSlide {
                title,
                content: content.join("\n"),
                notes: String::new(),
            }
        })
        .collect()
}

/// Last resort: fixed-size character chunks of the raw text.
fn raw_chunks(text: &str) -> Vec<GeneratedSlide> {
    let chars: Vec<char> = text.trim().chars().collect();
    chars
        .chunks(RAW_CHUNK_CHARS)
        .enumerate()
        .map(|(index, chunk)| GeneratedSlide {
            title: format!("Slide {}", index + 1),
            content: chunk.iter().collect::<String>().trim().to_string(),
            notes: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DEFAULT_THEME, ThemeSet};

    fn themes() -> ThemeSet {
        ThemeSet::builtin()
    }

    #[test]
    fn test_improvement_sentinel_blocks() {
        let reply = "Here you go!\n\
            ---SLIDE STYLE---\n\
            THEME: Tidepool\n\
            ---END STYLE---\n\
            ---SLIDE CONTENT---\n\
            TITLE: A Better Title\n\
            CONTENT: • First point\n\
            • Second point\n\
            ---END CONTENT---\n\
            Hope that helps.";
        let patch = parse_improvement(reply, &themes());
        assert_eq!(patch.title.as_deref(), Some("A Better Title"));
        assert_eq!(patch.content.as_deref(), Some("• First point\n• Second point"));
        assert_eq!(patch.theme.as_deref(), Some("tidepool"));
    }

    #[test]
    fn test_improvement_unknown_theme_falls_back() {
        let reply = "---SLIDE STYLE---\nTHEME: neon-dreams\n---END STYLE---";
        let patch = parse_improvement(reply, &themes());
        assert_eq!(patch.theme.as_deref(), Some(DEFAULT_THEME));
    }

    #[test]
    fn test_improvement_labeled_lines_without_sentinels() {
        let reply = "HEADLINE: Market Size\nBODY: • $4B market\n• Growing 20% a year\nCOLOR: blue";
        let patch = parse_improvement(reply, &themes());
        assert_eq!(patch.title.as_deref(), Some("Market Size"));
        // The stray COLOR directive is stripped from the content capture.
        assert_eq!(patch.content.as_deref(), Some("• $4B market\n• Growing 20% a year"));
        assert!(patch.theme.is_none());
    }

    #[test]
    fn test_improvement_heuristic_quoted_title() {
        let reply = "I suggest calling it \"Traction First\" and the rest stays.\nKeep your metrics visible.";
        let patch = parse_improvement(reply, &themes());
        assert_eq!(patch.title.as_deref(), Some("Traction First"));
        assert!(patch.content.is_some());
    }

    #[test]
    fn test_improvement_heuristic_first_line_title() {
        let reply = "Strong opening\nLead with the problem.\nClose with the ask.";
        let patch = parse_improvement(reply, &themes());
        assert_eq!(patch.title.as_deref(), Some("Strong opening"));
        assert_eq!(
            patch.content.as_deref(),
            Some("Lead with the problem.\nClose with the ask.")
        );
    }

    #[test]
    fn test_improvement_empty_reply_resolves_nothing() {
        let patch = parse_improvement("", &themes());
        assert!(patch.is_empty());
        let patch = parse_improvement("   \n  ", &themes());
        assert!(patch.is_empty());
    }

    #[test]
    fn test_deck_numbered_blocks_in_order() {
        let reply = "SELECTED_THEME: circuit-blue\n\
            SLIDE_1_TITLE: The Problem\n\
            SLIDE_1_CONTENT: • Parking is scarce\n\
            • Drivers circle for 20 minutes\n\
            SLIDE_1_NOTES: Open with the anecdote.\n\
            SLIDE_2_TITLE: Our Solution\n\
            SLIDE_2_CONTENT: • Real-time spot matching\n\
            SLIDE_2_NOTES: Demo here.\n\
            SLIDE_3_TITLE: The Ask\n\
            SLIDE_3_CONTENT: • $500k seed\n\
            SLIDE_3_NOTES: End firmly.";
        let deck = parse_deck(reply, &themes());
        assert_eq!(deck.theme.as_deref(), Some("circuit-blue"));
        assert_eq!(deck.slides.len(), 3);
        assert_eq!(deck.slides[0].title, "The Problem");
        assert_eq!(
            deck.slides[0].content,
            "• Parking is scarce\n• Drivers circle for 20 minutes"
        );
        assert_eq!(deck.slides[0].notes, "Open with the anecdote.");
        assert_eq!(deck.slides[1].title, "Our Solution");
        assert_eq!(deck.slides[2].title, "The Ask");
    }

    #[test]
    fn test_deck_empty_input_yields_zero_slides() {
        let deck = parse_deck("", &themes());
        assert!(deck.slides.is_empty());
        let deck = parse_deck("  \n\t ", &themes());
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_deck_markdown_header_fallback() {
        let reply = "# The Problem\nParking is scarce.\n\n## Our Solution\nSpot matching.\n\n### The Ask\n$500k.";
        let deck = parse_deck(reply, &themes());
        assert_eq!(deck.slides.len(), 3);
        assert_eq!(deck.slides[0].title, "The Problem");
        assert_eq!(deck.slides[1].content, "Spot matching.");
    }

    #[test]
    fn test_deck_numbered_header_fallback() {
        let reply = "1. Opening\nHook them early.\n2) Middle\nKeep momentum.\nSlide 3: Closing\nLand the ask.";
        let deck = parse_deck(reply, &themes());
        assert_eq!(deck.slides.len(), 3);
        assert_eq!(deck.slides[0].title, "Opening");
        assert_eq!(deck.slides[1].title, "Middle");
        assert_eq!(deck.slides[2].title, "Closing");
        assert_eq!(deck.slides[2].content, "Land the ask.");
    }

    #[test]
    fn test_deck_paragraph_chunk_fallback() {
        let reply = "The market is enormous and nobody is serving it well.\n\nOur team shipped three products before this one.";
        let deck = parse_deck(reply, &themes());
        assert_eq!(deck.slides.len(), 2);
        assert!(deck.slides[0].title.starts_with("The market"));
    }

    #[test]
    fn test_deck_unstructured_prose_never_returns_empty() {
        let reply = "word ".repeat(300);
        let deck = parse_deck(&reply, &themes());
        assert!(!deck.slides.is_empty());
        for slide in &deck.slides {
            assert!(!slide.content.is_empty() || !slide.title.is_empty());
        }
    }

    #[test]
    fn test_deck_multibyte_text_does_not_panic() {
        let reply = "étoile ★ ".repeat(200);
        let deck = parse_deck(&reply, &themes());
        assert!(!deck.slides.is_empty());
    }

    #[test]
    fn test_deck_missing_numbers_keep_numeric_order() {
        let reply = "SLIDE_2_TITLE: Second\nSLIDE_2_CONTENT: b\nSLIDE_1_TITLE: First\nSLIDE_1_CONTENT: a";
        let deck = parse_deck(reply, &themes());
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].title, "First");
        assert_eq!(deck.slides[1].title, "Second");
    }
}
