// SPDX-License-Identifier: MIT OR Apache-2.0
//! Slide records and decks.
//!
//! A [`Slide`] is an immutable banner record; a [`SlideDeck`] is the
//! ordered collection handed to a carousel once at construction. Decks are
//! authored as RON documents (the stand-in for a CMS content feed).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors while loading a slide deck from disk
#[derive(Debug, Error)]
pub enum DeckError {
    /// Reading the deck file failed
    #[error("Failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    /// The deck document did not parse
    #[error("Failed to parse deck: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Unique identifier for a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub Uuid);

impl SlideId {
    /// Create a new random slide ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

/// One immutable banner record shown by the carousel.
///
/// Every field except `image_url` is optional overlay content; a missing
/// field is simply not rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Unique, stable slide ID
    pub id: SlideId,
    /// URL or path of the banner artwork
    pub image_url: String,
    /// Headline shown over the artwork
    #[serde(default)]
    pub title: Option<String>,
    /// Secondary line under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Target of the call-to-action button
    #[serde(default)]
    pub link: Option<String>,
    /// Link target (`_blank` opens in a new tab)
    #[serde(default)]
    pub target: Option<String>,
    /// Label of the call-to-action button
    #[serde(default)]
    pub button_text: Option<String>,
    /// Fill color of the call-to-action button
    #[serde(default)]
    pub button_color: Option<[u8; 3]>,
}

impl Slide {
    /// Create a new slide with only artwork
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            id: SlideId::new(),
            image_url: image_url.into(),
            title: None,
            subtitle: None,
            link: None,
            target: None,
            button_text: None,
            button_color: None,
        }
    }

    /// Set the headline
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the secondary line
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the call-to-action button label and link
    pub fn with_button(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self.link = Some(link.into());
        self
    }
}

/// An ordered, immutable collection of slides.
///
/// Insertion order is display order. The deck is built once and handed to
/// the carousel; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDeck {
    /// Deck name (informational)
    pub name: String,
    /// Slides in display order
    slides: IndexMap<SlideId, Slide>,
}

impl SlideDeck {
    /// Create a new, empty deck
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slides: IndexMap::new(),
        }
    }

    /// Append a slide, returning its ID
    pub fn add_slide(&mut self, slide: Slide) -> SlideId {
        let id = slide.id;
        self.slides.insert(id, slide);
        id
    }

    /// Number of slides in the deck
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck holds no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether the deck holds more than one slide.
    ///
    /// Rotation, gestures and playback controls only exist for
    /// multi-slide decks; a single slide renders as a static banner.
    pub fn is_multi(&self) -> bool {
        self.slides.len() > 1
    }

    /// Get a slide by display position
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get_index(index).map(|(_, slide)| slide)
    }

    /// Get a slide by ID
    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.get(&id)
    }

    /// Display position of a slide
    pub fn position(&self, id: SlideId) -> Option<usize> {
        self.slides.get_index_of(&id)
    }

    /// Iterate over slides in display order
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.values()
    }

    /// Load a deck from a RON document on disk
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let text = std::fs::read_to_string(path)?;
        let deck = ron::from_str(&text)?;
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> SlideDeck {
        let mut deck = SlideDeck::new("test");
        for i in 0..n {
            deck.add_slide(Slide::new(format!("/banners/{i}.jpg")));
        }
        deck
    }

    #[test]
    fn test_display_order_is_insertion_order() {
        let mut deck = SlideDeck::new("ordered");
        let first = deck.add_slide(Slide::new("/a.jpg"));
        let second = deck.add_slide(Slide::new("/b.jpg"));
        let third = deck.add_slide(Slide::new("/c.jpg"));

        assert_eq!(deck.position(first), Some(0));
        assert_eq!(deck.position(second), Some(1));
        assert_eq!(deck.position(third), Some(2));
        assert_eq!(deck.get(1).map(|s| s.id), Some(second));
    }

    #[test]
    fn test_multi_slide_threshold() {
        assert!(!deck_of(0).is_multi());
        assert!(!deck_of(1).is_multi());
        assert!(deck_of(2).is_multi());
    }

    #[test]
    fn test_optional_fields_default_absent() {
        let slide = Slide::new("/hero.jpg");
        assert!(slide.title.is_none());
        assert!(slide.button_text.is_none());

        let slide = slide.with_title("Welcome").with_button("Learn more", "/about");
        assert_eq!(slide.title.as_deref(), Some("Welcome"));
        assert_eq!(slide.button_text.as_deref(), Some("Learn more"));
        assert_eq!(slide.link.as_deref(), Some("/about"));
    }

    #[test]
    fn test_ron_round_trip() {
        let mut deck = SlideDeck::new("campaign");
        deck.add_slide(
            Slide::new("/banners/spring.jpg")
                .with_title("Spring campaign")
                .with_subtitle("Fresh offers every week"),
        );
        deck.add_slide(Slide::new("/banners/summer.jpg"));

        let ron_str =
            ron::ser::to_string_pretty(&deck, ron::ser::PrettyConfig::default()).unwrap();
        let loaded: SlideDeck = ron::from_str(&ron_str).unwrap();

        assert_eq!(loaded.name, "campaign");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get(0).unwrap().title.as_deref(), Some("Spring campaign"));
    }
}
