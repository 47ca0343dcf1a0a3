// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback control.
//!
//! Three independent sources can suspend rotation: the explicit
//! play/pause button, pointer hover, and an in-flight drag. Each source
//! owns exactly one [`PauseReason`] and only ever adds or removes its own,
//! so a resume from one source can never clobber a pause that another
//! source still holds. The carousel is playing iff no reason is present.

/// Why rotation is currently suspended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// The user pressed the pause button
    Manual,
    /// The pointer is hovering the banner
    Hover,
    /// A drag gesture is in flight
    Drag,
}

/// Merges the independent pause sources into one derived playing flag.
#[derive(Debug, Default)]
pub struct PlaybackController {
    manual: bool,
    hover: bool,
    drag: bool,
}

impl PlaybackController {
    /// Create a controller with no pause reasons (playing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pause reason. Idempotent per reason.
    pub fn pause(&mut self, reason: PauseReason) {
        *self.slot(reason) = true;
    }

    /// Remove a pause reason. Removing an absent reason is a no-op.
    pub fn resume(&mut self, reason: PauseReason) {
        *self.slot(reason) = false;
    }

    /// Flip the manual pause reason (the play/pause button).
    pub fn toggle_manual(&mut self) {
        self.manual = !self.manual;
        tracing::debug!(paused = self.manual, "manual playback toggle");
    }

    /// Whether auto-advance is currently permitted
    pub fn is_playing(&self) -> bool {
        !(self.manual || self.hover || self.drag)
    }

    /// Whether a specific reason is currently held
    pub fn is_paused_by(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Manual => self.manual,
            PauseReason::Hover => self.hover,
            PauseReason::Drag => self.drag,
        }
    }

    fn slot(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Manual => &mut self.manual,
            PauseReason::Hover => &mut self.hover,
            PauseReason::Drag => &mut self.drag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_playing() {
        assert!(PlaybackController::new().is_playing());
    }

    #[test]
    fn test_each_source_owns_its_reason() {
        let mut playback = PlaybackController::new();

        playback.pause(PauseReason::Hover);
        playback.pause(PauseReason::Drag);
        assert!(!playback.is_playing());

        // Ending the drag must not clear the hover pause.
        playback.resume(PauseReason::Drag);
        assert!(!playback.is_playing());
        assert!(playback.is_paused_by(PauseReason::Hover));

        playback.resume(PauseReason::Hover);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut playback = PlaybackController::new();

        playback.pause(PauseReason::Hover);
        playback.pause(PauseReason::Hover);
        playback.resume(PauseReason::Hover);
        assert!(playback.is_playing());

        playback.resume(PauseReason::Drag);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_manual_toggle_is_independent() {
        let mut playback = PlaybackController::new();

        playback.pause(PauseReason::Hover);
        playback.toggle_manual();
        assert!(playback.is_paused_by(PauseReason::Manual));

        // Leaving hover alone, the manual reason still blocks playback.
        playback.resume(PauseReason::Hover);
        assert!(!playback.is_playing());

        playback.toggle_manual();
        assert!(playback.is_playing());
    }
}
