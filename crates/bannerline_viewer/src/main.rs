// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bannerline viewer - desktop host for the hero banner carousel.
//!
//! Loads a slide deck (a RON document given as the first argument, or a
//! built-in sample deck) and shows it in an auto-rotating carousel:
//! swipe to navigate, hover or press pause to hold, click a dot to jump.

mod app;
mod sample;

use app::ViewerApp;
use bannerline_carousel::SlideDeck;
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("bannerline_carousel=debug".parse().unwrap())
        .add_directive("bannerline_viewer=debug".parse().unwrap())
        .add_directive("wgpu=warn".parse().unwrap())
        .add_directive("naga=warn".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bannerline viewer v{}", env!("CARGO_PKG_VERSION"));

    let deck = match std::env::args().nth(1) {
        Some(path) => match SlideDeck::load(Path::new(&path)) {
            Ok(deck) => {
                tracing::info!("Loaded deck '{}' ({} slides) from {path}", deck.name, deck.len());
                deck
            }
            Err(e) => {
                tracing::error!("Failed to load deck from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => sample::sample_deck(),
    };

    if let Err(e) = ViewerApp::run(deck) {
        tracing::error!("Viewer crashed: {e}");
        std::process::exit(1);
    }
}
