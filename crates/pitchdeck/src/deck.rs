//! The slide store: an ordered list of slides plus a selection cursor.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme;

/// Font size and position override for one text block of a slide.
/// Coordinates are in the 960x540 logical slide space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// One deck page.
///
/// Deck files written by older builds name the theme field `style` and use
/// camelCase keys; both spellings load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_theme", alias = "style")]
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorations: Vec<String>,
}

fn default_theme() -> String {
    theme::DEFAULT_THEME.to_string()
}

impl Slide {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            notes: String::new(),
            theme: default_theme(),
            background_color: None,
            text_color: None,
            accent_color: None,
            title_style: None,
            content_style: None,
            decorations: Vec::new(),
        }
    }
}

/// On-disk deck file shape: either `{ "slides": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
struct DeckFile {
    slides: Vec<Slide>,
}

/// Ordered slides plus the selection cursor.
///
/// Invariant: `current` is `None` exactly when the deck is empty, otherwise
/// a valid index. Every structural mutation re-clamps it.
#[derive(Debug, Default)]
pub struct Deck {
    slides: Vec<Slide>,
    current: Option<usize>,
    last_id: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck with a single starter slide, shown on first launch.
    pub fn starter() -> Self {
        let mut deck = Self::new();
        let slide = deck.add();
        slide.title = "Welcome to Pitch Perfect".to_string();
        slide.content = "• Edit this slide on the right\n• Add slides from the panel\n• Ask the AI to improve or generate your deck".to_string();
        deck
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.current.map(|i| &self.slides[i])
    }

    pub fn current_slide_mut(&mut self) -> Option<&mut Slide> {
        self.current.map(|i| &mut self.slides[i])
    }

    /// Millisecond-timestamp ids, forced strictly increasing so rapid
    /// creation never hands out a duplicate.
    fn next_id(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    /// Append a new blank slide and select it.
    pub fn add(&mut self) -> &mut Slide {
        let id = self.next_id();
        self.slides.push(Slide::new(id, "New Slide"));
        let index = self.slides.len() - 1;
        self.current = Some(index);
        &mut self.slides[index]
    }

    /// Remove the selected slide. The cursor moves to the previous slide,
    /// or clears when the deck empties.
    pub fn delete_current(&mut self) -> Option<Slide> {
        let index = self.current?;
        let removed = self.slides.remove(index);
        self.current = if self.slides.is_empty() {
            None
        } else {
            Some(index.min(self.slides.len() - 1))
        };
        Some(removed)
    }

    /// Insert a copy of the selected slide right after it and select the copy.
    pub fn duplicate_current(&mut self) -> Option<&mut Slide> {
        let index = self.current?;
        let mut copy = self.slides[index].clone();
        copy.id = self.next_id();
        self.slides.insert(index + 1, copy);
        self.current = Some(index + 1);
        Some(&mut self.slides[index + 1])
    }

    pub fn select(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = Some(index);
        }
    }

    /// Replace the whole deck (AI bulk generation, file load). Incoming
    /// slides get fresh ids; the cursor lands on the first slide.
    pub fn replace_all(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        for index in 0..self.slides.len() {
            let id = self.next_id();
            self.slides[index].id = id;
        }
        self.current = if self.slides.is_empty() { None } else { Some(0) };
    }

    /// Parse a deck file and replace the store with its slides.
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let slides = parse_deck_file(json)?;
        let count = slides.len();
        self.replace_all(slides);
        Ok(count)
    }
}

fn parse_deck_file(json: &str) -> Result<Vec<Slide>> {
    if let Ok(file) = serde_json::from_str::<DeckFile>(json) {
        return Ok(file.slides);
    }
    serde_json::from_str::<Vec<Slide>>(json).context("Not a recognizable deck file")
}
