// SPDX-License-Identifier: MIT OR Apache-2.0
//! Auto-rotating hero banner carousel.
//!
//! This crate provides the state machine behind a slide banner:
//! - Immutable slide decks with stable ids
//! - Circular slide navigation
//! - A single-task rotation scheduler with a fixed 8 second cadence
//! - Swipe gesture interpretation with a pause bracket
//! - Playback control merging manual, hover and drag pause sources
//!
//! ## Architecture
//!
//! [`Carousel`] owns all mutable state and is driven entirely by its host:
//! input handlers feed it pointer, hover, toggle and dot-selection events,
//! and a per-frame [`Carousel::tick`] polls the rotation scheduler. Time is
//! an elapsed [`std::time::Duration`] supplied by the caller, so the whole
//! machine is deterministic under test. [`CarouselWidget`] renders a
//! carousel with egui and routes egui input back into it.

pub mod carousel;
pub mod cursor;
pub mod gesture;
pub mod playback;
pub mod scheduler;
pub mod slide;
pub mod ui;

pub use carousel::{Carousel, CarouselError};
pub use gesture::{GestureInterpreter, SwipeDirection, SWIPE_THRESHOLD};
pub use playback::{PauseReason, PlaybackController};
pub use scheduler::{RotationScheduler, TaskId, ROTATION_INTERVAL};
pub use slide::{DeckError, Slide, SlideDeck, SlideId};
pub use ui::CarouselWidget;
