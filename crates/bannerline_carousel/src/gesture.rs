// SPDX-License-Identifier: MIT OR Apache-2.0
//! Swipe gesture interpretation.
//!
//! A drag is a pair of pointer (or touch) press/release x coordinates.
//! The press records an origin; the release compares against it and, when
//! the travel exceeds the threshold, yields a navigation direction.
//! Dragging right (positive delta) navigates backward, matching the
//! physical metaphor of pulling the previous slide in.

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction a completed swipe navigates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Advance to the next slide (drag moved left)
    Forward,
    /// Return to the previous slide (drag moved right)
    Backward,
}

/// Turns press/release coordinate pairs into navigation intents
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    origin: Option<f32>,
}

impl GestureInterpreter {
    /// Create an interpreter with no gesture in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a drag at `x`
    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
    }

    /// Whether a drag is currently in flight
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Complete the drag at `x`.
    ///
    /// Clears the origin in every case. Returns a direction only when the
    /// drag travelled further than [`SWIPE_THRESHOLD`]; a release without
    /// a matching press is a no-op.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let origin = self.origin.take()?;
        let delta = x - origin;

        if delta > SWIPE_THRESHOLD {
            tracing::trace!(delta, "swipe backward");
            Some(SwipeDirection::Backward)
        } else if delta < -SWIPE_THRESHOLD {
            tracing::trace!(delta, "swipe forward");
            Some(SwipeDirection::Forward)
        } else {
            None
        }
    }
}
