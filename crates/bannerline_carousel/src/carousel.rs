// SPDX-License-Identifier: MIT OR Apache-2.0
//! The carousel state machine.
//!
//! [`Carousel`] composes a slide deck, the current index, playback
//! control, gesture interpretation and the rotation scheduler behind one
//! event API. Every handler runs to completion synchronously; every
//! state-affecting mutation funnels through one `reschedule` step, which
//! cancels the armed advance task before conditionally arming a new one.
//! That single choke point is what keeps at most one task alive and
//! anchors the 8 second cadence to the most recent change.

use crate::cursor;
use crate::gesture::{GestureInterpreter, SwipeDirection};
use crate::playback::{PauseReason, PlaybackController};
use crate::scheduler::RotationScheduler;
use crate::slide::{Slide, SlideDeck};
use std::time::Duration;
use thiserror::Error;

/// Carousel construction errors
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The deck holds no slides; the host should render nothing instead
    /// of constructing a carousel
    #[error("slide deck is empty")]
    EmptyDeck,
}

/// The hero banner carousel.
///
/// Owns all mutable playback state exclusively. Time is an elapsed
/// [`Duration`] from an epoch the host picks; handlers that affect
/// scheduling take the current elapsed time so the machine stays
/// deterministic under test.
#[derive(Debug)]
pub struct Carousel {
    deck: SlideDeck,
    current: usize,
    playback: PlaybackController,
    gesture: GestureInterpreter,
    scheduler: RotationScheduler,
}

impl Carousel {
    /// Create a carousel over `deck`, playing, showing the first slide.
    ///
    /// The advance task is armed immediately for multi-slide decks.
    pub fn new(deck: SlideDeck, now: Duration) -> Result<Self, CarouselError> {
        if deck.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }

        let mut carousel = Self {
            deck,
            current: 0,
            playback: PlaybackController::new(),
            gesture: GestureInterpreter::new(),
            scheduler: RotationScheduler::new(),
        };
        carousel.reschedule(now);
        Ok(carousel)
    }

    /// The slide deck
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Display position of the active slide
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active slide
    pub fn current_slide(&self) -> &Slide {
        self.deck
            .get(self.current)
            .expect("current index stays within the deck")
    }

    /// Whether rotation, gestures and controls are enabled at all
    pub fn is_multi_slide(&self) -> bool {
        self.deck.is_multi()
    }

    /// Whether auto-advance is currently permitted
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Deadline of the pending automatic advance, if one is armed
    pub fn next_advance(&self) -> Option<Duration> {
        self.scheduler.deadline()
    }

    /// Poll the advance task; on fire, move to the next slide and re-arm.
    ///
    /// Call once per frame with the current elapsed time.
    pub fn tick(&mut self, now: Duration) {
        if self.scheduler.poll(now) {
            self.current = cursor::next(self.current, self.deck.len());
            tracing::debug!(index = self.current, "auto-advance");
            self.reschedule(now);
        }
    }

    /// Pointer or touch press at `x`: open the drag pause bracket.
    pub fn pointer_down(&mut self, x: f32, now: Duration) {
        if !self.is_multi_slide() {
            return;
        }
        self.gesture.begin(x);
        self.playback.pause(PauseReason::Drag);
        self.reschedule(now);
    }

    /// Pointer or touch release at `x`: close the drag pause bracket,
    /// navigating when the drag travelled far enough.
    ///
    /// A release with no matching press is a no-op.
    pub fn pointer_up(&mut self, x: f32, now: Duration) {
        if !self.is_multi_slide() || !self.gesture.is_active() {
            return;
        }

        match self.gesture.end(x) {
            Some(SwipeDirection::Forward) => {
                self.current = cursor::next(self.current, self.deck.len());
                tracing::debug!(index = self.current, "swipe to next");
            }
            Some(SwipeDirection::Backward) => {
                self.current = cursor::prev(self.current, self.deck.len());
                tracing::debug!(index = self.current, "swipe to previous");
            }
            None => {}
        }

        self.playback.resume(PauseReason::Drag);
        self.reschedule(now);
    }

    /// Pointer entered the banner: pause while hovering.
    pub fn hover_enter(&mut self, now: Duration) {
        if !self.is_multi_slide() {
            return;
        }
        self.playback.pause(PauseReason::Hover);
        self.reschedule(now);
    }

    /// Pointer left the banner: release the hover pause.
    pub fn hover_leave(&mut self, now: Duration) {
        if !self.is_multi_slide() {
            return;
        }
        self.playback.resume(PauseReason::Hover);
        self.reschedule(now);
    }

    /// The play/pause button: flip the manual pause reason.
    pub fn toggle_playback(&mut self, now: Duration) {
        if !self.is_multi_slide() {
            return;
        }
        self.playback.toggle_manual();
        self.reschedule(now);
    }

    /// Indicator dot `index` activated: jump straight to that slide.
    ///
    /// Leaves playback untouched but re-anchors the rotation cadence.
    /// Out-of-range indices are rejected.
    pub fn select(&mut self, index: usize, now: Duration) {
        if index >= self.deck.len() {
            tracing::warn!(index, len = self.deck.len(), "dot selection out of range");
            return;
        }
        self.current = index;
        self.reschedule(now);
    }

    /// Unmount the carousel, cancelling any pending advance task.
    pub fn teardown(&mut self) {
        self.scheduler.cancel();
    }

    /// Cancel the armed advance task, then arm a fresh one iff playback
    /// is permitted and the deck has something to rotate through.
    fn reschedule(&mut self, now: Duration) {
        self.scheduler.cancel();
        if self.playback.is_playing() && self.is_multi_slide() {
            self.scheduler.arm(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Slide;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn deck_of(n: usize) -> SlideDeck {
        let mut deck = SlideDeck::new("test");
        for i in 0..n {
            deck.add_slide(Slide::new(format!("/banners/{i}.jpg")));
        }
        deck
    }

    fn carousel_of(n: usize) -> Carousel {
        Carousel::new(deck_of(n), ms(0)).unwrap()
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        assert!(matches!(
            Carousel::new(deck_of(0), ms(0)),
            Err(CarouselError::EmptyDeck)
        ));
    }

    #[test]
    fn test_mount_state() {
        let carousel = carousel_of(3);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_playing());
        assert_eq!(carousel.next_advance(), Some(ms(8000)));
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut carousel = carousel_of(3);

        carousel.tick(ms(8000));
        assert_eq!(carousel.current_index(), 1);
        carousel.tick(ms(16_000));
        assert_eq!(carousel.current_index(), 2);
        carousel.tick(ms(24_000));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_single_slide_is_inert() {
        let mut carousel = carousel_of(1);

        assert!(carousel.next_advance().is_none());

        carousel.pointer_down(0.0, ms(10));
        carousel.pointer_up(500.0, ms(20));
        carousel.hover_enter(ms(30));
        carousel.hover_leave(ms(40));
        carousel.toggle_playback(ms(50));
        for t in (0..100_000).step_by(500) {
            carousel.tick(ms(t));
        }

        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.next_advance().is_none());
    }

    #[test]
    fn test_swipe_right_goes_to_previous() {
        let mut carousel = carousel_of(4);

        carousel.pointer_down(100.0, ms(100));
        assert!(!carousel.is_playing());
        assert!(carousel.next_advance().is_none());

        carousel.pointer_up(200.0, ms(200));
        assert_eq!(carousel.current_index(), 3);
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_swipe_left_goes_to_next() {
        let mut carousel = carousel_of(4);

        carousel.pointer_down(100.0, ms(100));
        carousel.pointer_up(40.0, ms(200));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_short_drag_keeps_index_but_closes_bracket() {
        let mut carousel = carousel_of(4);

        carousel.pointer_down(100.0, ms(100));
        carousel.pointer_up(120.0, ms(200));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_playing());
        // The bracket still counts as a state change; cadence re-anchors.
        assert_eq!(carousel.next_advance(), Some(ms(8200)));
    }

    #[test]
    fn test_stray_release_changes_nothing() {
        let mut carousel = carousel_of(3);
        let deadline = carousel.next_advance();

        carousel.pointer_up(400.0, ms(500));

        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_playing());
        assert_eq!(carousel.next_advance(), deadline);
    }

    #[test]
    fn test_dot_click_reanchors_cadence() {
        let mut carousel = carousel_of(3);

        carousel.select(2, ms(3000));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_playing());

        // Next fire at select time + interval, not mount + interval.
        carousel.tick(ms(8000));
        assert_eq!(carousel.current_index(), 2);
        carousel.tick(ms(11_000));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_dot_click_out_of_range_is_rejected() {
        let mut carousel = carousel_of(3);
        carousel.select(7, ms(100));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let mut carousel = carousel_of(3);

        carousel.hover_enter(ms(1000));
        assert!(!carousel.is_playing());
        assert!(carousel.next_advance().is_none());

        carousel.hover_leave(ms(5000));
        assert!(carousel.is_playing());
        assert_eq!(carousel.next_advance(), Some(ms(13_000)));
    }

    #[test]
    fn test_drag_end_under_hover_stays_paused() {
        let mut carousel = carousel_of(3);

        carousel.hover_enter(ms(100));
        carousel.pointer_down(100.0, ms(200));
        carousel.pointer_up(300.0, ms(300));

        // The drag bracket closed but the hover pause is still held.
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.is_playing());

        carousel.hover_leave(ms(400));
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_manual_toggle() {
        let mut carousel = carousel_of(3);

        carousel.toggle_playback(ms(1000));
        assert!(!carousel.is_playing());
        assert!(carousel.next_advance().is_none());

        carousel.toggle_playback(ms(2000));
        assert!(carousel.is_playing());
        assert_eq!(carousel.next_advance(), Some(ms(10_000)));
    }

    #[test]
    fn test_teardown_cancels_pending_advance() {
        let mut carousel = carousel_of(3);
        carousel.teardown();

        for t in (0..50_000).step_by(1000) {
            carousel.tick(ms(t));
        }
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.next_advance().is_none());
    }

    #[test]
    fn test_mount_advance_swipe_then_reanchored_advance() {
        // Four slides, mount at t=0 playing.
        let mut carousel = carousel_of(4);

        // Automatic advance to slide 1 at t=8000.
        carousel.tick(ms(8000));
        assert_eq!(carousel.current_index(), 1);

        // Drag right by 80px at t=9000: back to slide 0, playing again.
        carousel.pointer_down(100.0, ms(9000));
        carousel.pointer_up(180.0, ms(9000));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_playing());

        // The old cadence (t=16000) must not fire; the next advance is
        // anchored to the swipe at t=9000.
        carousel.tick(ms(16_000));
        assert_eq!(carousel.current_index(), 0);
        carousel.tick(ms(17_000));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_index_stays_in_range_under_event_storm() {
        for len in 1..=5 {
            let mut carousel = carousel_of(len);
            let mut t = 0u64;

            for round in 0..300u64 {
                t += 137;
                let now = ms(t);
                match round % 7 {
                    0 => carousel.pointer_down((round % 400) as f32, now),
                    1 => carousel.pointer_up((round * 3 % 400) as f32, now),
                    2 => carousel.hover_enter(now),
                    3 => carousel.toggle_playback(now),
                    4 => carousel.select(round as usize % 7, now),
                    5 => carousel.hover_leave(now),
                    _ => carousel.tick(now),
                }
                assert!(carousel.current_index() < len);
            }
        }
    }
}
