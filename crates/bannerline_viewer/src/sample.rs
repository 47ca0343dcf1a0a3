// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in sample deck so the viewer runs standalone.

use bannerline_carousel::{Slide, SlideDeck};

/// A small multi-slide deck exercising every overlay field.
pub fn sample_deck() -> SlideDeck {
    let mut deck = SlideDeck::new("sample");

    deck.add_slide(
        Slide::new("/banners/hero-main.jpg")
            .with_title("Turning challenges into results")
            .with_subtitle("Trusted advice, tailored to every client")
            .with_button("Get in touch", "https://example.com/contact"),
    );
    deck.add_slide(
        Slide::new("/banners/hero-team.jpg")
            .with_title("A team that listens first")
            .with_subtitle("Two decades of combined practice"),
    );
    deck.add_slide(
        Slide::new("/banners/hero-offices.jpg").with_title("Now in three cities"),
    );
    deck.add_slide(Slide::new("/banners/hero-plain.jpg"));

    deck
}
