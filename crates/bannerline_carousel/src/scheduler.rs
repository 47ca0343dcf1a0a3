// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rotation scheduling.
//!
//! [`RotationScheduler`] owns the single delayed advance task of a
//! carousel. Arming cancels any previous task first, so no sequence of
//! calls can leave two tasks alive, and the cadence is always anchored to
//! the most recent state change rather than to carousel mount.
//!
//! Time is an elapsed [`Duration`] from an epoch chosen by the driver
//! (typically the host application's start instant). Nothing here blocks
//! or spawns; the host polls once per frame.

use std::time::Duration;

/// Interval between automatic slide advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(8000);

/// Handle identifying one armed advance task.
///
/// Handles are never reused, so a stale handle can always be told apart
/// from the currently armed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy)]
struct ArmedTask {
    id: TaskId,
    deadline: Duration,
}

/// Owns at most one outstanding advance task at any time.
#[derive(Debug)]
pub struct RotationScheduler {
    interval: Duration,
    armed: Option<ArmedTask>,
    next_id: u64,
}

impl RotationScheduler {
    /// Create a scheduler with the fixed rotation interval
    pub fn new() -> Self {
        Self {
            interval: ROTATION_INTERVAL,
            armed: None,
            next_id: 0,
        }
    }

    /// Arm the advance task to fire one interval from `now`.
    ///
    /// Any previously armed task is cancelled first.
    pub fn arm(&mut self, now: Duration) -> TaskId {
        self.cancel();

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let deadline = now + self.interval;
        self.armed = Some(ArmedTask { id, deadline });
        tracing::trace!(task = id.0, ?deadline, "advance task armed");
        id
    }

    /// Cancel the armed task, if any. Idempotent; a cancelled task can
    /// never fire.
    pub fn cancel(&mut self) {
        if let Some(task) = self.armed.take() {
            tracing::trace!(task = task.id.0, "advance task cancelled");
        }
    }

    /// Fire the armed task if its deadline has passed.
    ///
    /// Returns `true` at most once per armed task; firing disarms the
    /// scheduler, leaving re-arming to the caller.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.armed {
            Some(task) if now >= task.deadline => {
                self.armed = None;
                tracing::trace!(task = task.id.0, "advance task fired");
                true
            }
            _ => false,
        }
    }

    /// Whether an advance task is currently armed
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Deadline of the armed task, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.armed.map(|task| task.deadline)
    }
}

impl Default for RotationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_arm_replaces_previous_task() {
        let mut scheduler = RotationScheduler::new();

        let first = scheduler.arm(ms(0));
        let second = scheduler.arm(ms(1000));

        assert_ne!(first, second);
        assert!(scheduler.is_armed());
        // Only the second deadline survives; the first task is gone.
        assert_eq!(scheduler.deadline(), Some(ms(9000)));
        assert!(!scheduler.poll(ms(8000)));
        assert!(scheduler.poll(ms(9000)));
    }

    #[test]
    fn test_poll_fires_at_most_once() {
        let mut scheduler = RotationScheduler::new();
        scheduler.arm(ms(0));

        assert!(!scheduler.poll(ms(7999)));
        assert!(scheduler.poll(ms(8000)));
        assert!(!scheduler.is_armed());
        assert!(!scheduler.poll(ms(8000)));
        assert!(!scheduler.poll(ms(100_000)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = RotationScheduler::new();

        scheduler.cancel();
        scheduler.arm(ms(0));
        scheduler.cancel();
        scheduler.cancel();

        assert!(!scheduler.is_armed());
        assert!(!scheduler.poll(ms(8000)));
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = RotationScheduler::new();
        scheduler.arm(ms(0));
        scheduler.cancel();

        // Poll well past the cancelled deadline.
        for t in (0..30_000).step_by(1000) {
            assert!(!scheduler.poll(ms(t)));
        }
    }

    #[test]
    fn test_at_most_one_fire_after_arbitrary_interleaving() {
        let mut scheduler = RotationScheduler::new();

        for round in 0..50u64 {
            let now = ms(round * 500);
            match round % 4 {
                0 | 1 => {
                    scheduler.arm(now);
                }
                2 => scheduler.cancel(),
                _ => {
                    scheduler.poll(now);
                }
            }
        }

        // However the arms, cancels and polls interleaved, at most one
        // task can be left pending, so draining far in the future yields
        // at most one fire.
        let fires = (0..10)
            .filter(|i| scheduler.poll(ms(1_000_000 + i * 100)))
            .count();
        assert!(fires <= 1);
    }

    #[test]
    fn test_rearm_anchors_to_latest_now() {
        let mut scheduler = RotationScheduler::new();
        scheduler.arm(ms(0));
        scheduler.arm(ms(3000));

        assert!(!scheduler.poll(ms(8000)));
        assert!(scheduler.poll(ms(11_000)));
    }
}
