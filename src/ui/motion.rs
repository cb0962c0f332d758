//! Easing curves and the slide/reveal animation math
//!
//! Everything here is a pure function of elapsed time so the UI can sample it
//! once per frame.

use crate::constants::{REVEAL_DISTANCE, REVEAL_SECS, TRANSITION_DISTANCE, TRANSITION_EXIT_SECS, TRANSITION_SECS};

/// Cubic ease-out: `1 - (1-t)³`, input clamped to `[0, 1]`
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Transition direction between two slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn between(old: usize, new: usize) -> Self {
        if new > old {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Slide change animation. The leaving slide (if any) fades out first, then
/// the active slide enters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    /// `egui` input time when the slide changed
    pub started_at: f64,
    pub enabled: bool,
    /// Index of the slide being replaced
    pub leaving: Option<usize>,
}

impl Transition {
    pub fn new(direction: Direction, started_at: f64, enabled: bool) -> Self {
        Self { direction, started_at, enabled, leaving: None }
    }

    /// Play `previous` out before the entry starts
    pub fn with_exit(mut self, previous: usize) -> Self {
        self.leaving = Some(previous);
        self
    }

    fn exit_secs(&self) -> f64 {
        if self.enabled && self.leaving.is_some() {
            TRANSITION_EXIT_SECS as f64
        } else {
            0.0
        }
    }

    /// Time the active slide starts entering
    pub fn entry_started_at(&self) -> f64 {
        self.started_at + self.exit_secs()
    }

    fn exit_progress(&self, now: f64) -> f32 {
        let secs = self.exit_secs();
        if secs == 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / secs).clamp(0.0, 1.0) as f32
    }

    fn progress(&self, now: f64) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        ((now - self.entry_started_at()) as f32 / TRANSITION_SECS).clamp(0.0, 1.0)
    }

    /// Slide still playing its exit at `now`
    pub fn exiting(&self, now: f64) -> Option<usize> {
        self.leaving.filter(|_| self.exit_progress(now) < 1.0)
    }

    /// Vertical offset of the leaving content: moves up when going forward,
    /// down when going backward
    pub fn exit_offset_y(&self, now: f64) -> f32 {
        -self.direction.sign() * TRANSITION_DISTANCE * ease_out_cubic(self.exit_progress(now))
    }

    pub fn exit_opacity(&self, now: f64) -> f32 {
        1.0 - self.exit_progress(now)
    }

    /// Vertical offset of the entering content: starts below when moving
    /// forward, above when moving backward, settles at zero
    pub fn offset_y(&self, now: f64) -> f32 {
        self.direction.sign() * TRANSITION_DISTANCE * (1.0 - ease_out_cubic(self.progress(now)))
    }

    /// Opacity fades in over the first half of the transition
    pub fn opacity(&self, now: f64) -> f32 {
        (self.progress(now) * 2.0).min(1.0)
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.progress(now) < 1.0
    }
}

/// Staggered fade + slide-up for items inside a slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    elapsed: f32,
    enabled: bool,
}

impl Reveal {
    pub fn new(transition: &Transition, now: f64) -> Self {
        Self {
            elapsed: (now - transition.entry_started_at()).max(0.0) as f32,
            enabled: transition.enabled,
        }
    }

    /// Everything already in place
    pub fn settled() -> Self {
        Self { elapsed: 0.0, enabled: false }
    }

    /// Returns (opacity, y offset) for an item that starts after `delay` seconds
    pub fn sample(&self, delay: f32) -> (f32, f32) {
        if !self.enabled {
            return (1.0, 0.0);
        }
        let t = ((self.elapsed - delay) / REVEAL_SECS).clamp(0.0, 1.0);
        let eased = ease_out_cubic(t);
        (eased, REVEAL_DISTANCE * (1.0 - eased))
    }

    pub fn is_settled(&self, max_delay: f32) -> bool {
        !self.enabled || self.elapsed >= max_delay + REVEAL_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_boundaries() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(2, 3), Direction::Forward);
        assert_eq!(Direction::between(3, 2), Direction::Backward);
        assert_eq!(Direction::between(3, 3), Direction::Backward);
    }

    #[test]
    fn test_forward_enters_from_below() {
        let t = Transition::new(Direction::Forward, 10.0, true);
        assert_eq!(t.offset_y(10.0), TRANSITION_DISTANCE);
        assert_eq!(t.offset_y(100.0), 0.0);
        assert!(t.is_running(10.1));
        assert!(!t.is_running(100.0));
    }

    #[test]
    fn test_backward_enters_from_above() {
        let t = Transition::new(Direction::Backward, 0.0, true);
        assert_eq!(t.offset_y(0.0), -TRANSITION_DISTANCE);
        assert_eq!(t.opacity(0.0), 0.0);
        assert_eq!(t.opacity(10.0), 1.0);
    }

    #[test]
    fn test_disabled_transition_is_settled() {
        let t = Transition::new(Direction::Forward, 0.0, false);
        assert_eq!(t.offset_y(0.0), 0.0);
        assert_eq!(t.opacity(0.0), 1.0);
        assert!(!t.is_running(0.0));
    }

    #[test]
    fn test_forward_exit_leaves_upward() {
        let t = Transition::new(Direction::Forward, 0.0, true).with_exit(2);
        assert_eq!(t.exiting(0.0), Some(2));
        assert_eq!(t.exit_offset_y(0.0), 0.0);
        assert_eq!(t.exit_opacity(0.0), 1.0);
        let end = TRANSITION_EXIT_SECS as f64;
        assert_eq!(t.exit_offset_y(end), -TRANSITION_DISTANCE);
        assert_eq!(t.exiting(end), None);
        // Entry waits for the exit to finish
        assert_eq!(t.offset_y(end), TRANSITION_DISTANCE);
        assert_eq!(t.opacity(end), 0.0);
    }

    #[test]
    fn test_backward_exit_leaves_downward() {
        let t = Transition::new(Direction::Backward, 1.0, true).with_exit(4);
        let midway = 1.0 + TRANSITION_EXIT_SECS as f64 / 2.0;
        assert!(t.exit_offset_y(midway) > 0.0);
        assert!(t.exit_opacity(midway) < 1.0);
        assert_eq!(t.exit_offset_y(10.0), TRANSITION_DISTANCE);
        assert!(t.is_running(midway));
    }

    #[test]
    fn test_disabled_transition_skips_exit() {
        let t = Transition::new(Direction::Forward, 0.0, false).with_exit(1);
        assert_eq!(t.exiting(0.0), None);
        assert_eq!(t.entry_started_at(), 0.0);
    }

    #[test]
    fn test_reveal_staggers() {
        let t = Transition::new(Direction::Forward, 0.0, true);
        let reveal = Reveal::new(&t, 0.2);
        let (early, _) = reveal.sample(0.1);
        let (late, late_offset) = reveal.sample(0.3);
        assert!(early > 0.0);
        assert_eq!(late, 0.0);
        assert_eq!(late_offset, REVEAL_DISTANCE);
        assert!(!reveal.is_settled(0.3));
        assert!(Reveal::new(&t, 5.0).is_settled(0.3));
    }
}
