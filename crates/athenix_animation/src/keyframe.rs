//! Keyframe animations
//!
//! Single-value keyframe tracks with an explicit millisecond clock. Used for
//! the fixed-duration entrance tween and, with alternating infinite
//! iterations, for the pulse loop.

use crate::easing::Easing;

/// A single keyframe
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Target value at this keyframe
    pub value: f32,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, value: f32, easing: Easing) -> Self {
        Self { time, value, easing }
    }
}

/// Playback direction for animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayDirection {
    /// Play forward (0.0 -> 1.0)
    #[default]
    Forward,
    /// Alternate between forward and reverse each iteration
    Alternate,
}

/// How many passes a track plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Forever,
}

impl Repeat {
    fn allows(&self, completed: u32) -> bool {
        match *self {
            Repeat::Times(n) => completed < n,
            Repeat::Forever => true,
        }
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Times(1)
    }
}

/// A keyframe-based animation over one value
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: u32,
    keyframes: Vec<Keyframe>,
    /// Time into the current pass
    elapsed_ms: f32,
    playing: bool,
    direction: PlayDirection,
    repeat: Repeat,
    completed: u32,
    /// The current pass runs backwards (alternate playback only)
    reversed: bool,
}

impl KeyframeAnimation {
    pub fn new(duration_ms: u32, mut keyframes: Vec<Keyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            duration_ms,
            keyframes,
            elapsed_ms: 0.0,
            playing: false,
            direction: PlayDirection::Forward,
            repeat: Repeat::default(),
            completed: 0,
            reversed: false,
        }
    }

    /// Two-keyframe tween from `from` to `to`
    pub fn tween(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self::new(
            duration_ms,
            vec![
                Keyframe::new(0.0, from, Easing::Linear),
                Keyframe::new(1.0, to, easing),
            ],
        )
    }

    pub fn direction(mut self, direction: PlayDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Restart from the first keyframe
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.completed = 0;
        self.reversed = false;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether playback ran to completion (never true for infinite loops)
    pub fn is_finished(&self) -> bool {
        !self.playing && self.completed > 0 && !self.repeat.allows(self.completed)
    }

    /// Fraction of the current pass played, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        match self.duration_ms {
            0 => 1.0,
            d => (self.elapsed_ms / d as f32).clamp(0.0, 1.0),
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let progress = self.progress();
        self.sample_at(if self.reversed { 1.0 - progress } else { progress })
    }

    /// Sample the track at a specific progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return 0.0;
        };

        let progress = progress.clamp(0.0, 1.0);
        if progress <= first.time {
            return first.value;
        }
        if progress >= last.time {
            return last.value;
        }

        let next_idx = self
            .keyframes
            .iter()
            .position(|kf| kf.time >= progress)
            .unwrap_or(self.keyframes.len() - 1);
        let next = &self.keyframes[next_idx];
        let prev = &self.keyframes[next_idx.saturating_sub(1)];

        let span = next.time - prev.time;
        if span <= f32::EPSILON {
            return next.value;
        }

        let local = (progress - prev.time) / span;
        prev.value + (next.value - prev.value) * next.easing.apply(local)
    }

    /// Advance by `dt_ms`.
    ///
    /// Time past the end of a pass carries into the next one, so a loop stays
    /// phase-locked to wall-clock time whatever the frame size.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        if self.duration_ms == 0 {
            // An empty pass would loop forever without advancing
            self.completed = match self.repeat {
                Repeat::Times(n) => n.max(1),
                Repeat::Forever => 1,
            };
            self.playing = false;
            return;
        }

        let duration = self.duration_ms as f32;
        // NaN becomes 0
        let dt = dt_ms.max(0.0);
        self.elapsed_ms += match self.repeat {
            // Whole forward-and-back cycles change nothing
            Repeat::Forever if dt.is_finite() => dt % (2.0 * duration),
            Repeat::Forever => 0.0,
            // Never more than what is left to play
            Repeat::Times(n) => dt.min(n.saturating_sub(self.completed) as f32 * duration),
        };

        while self.elapsed_ms >= duration {
            self.completed = self.completed.saturating_add(1);
            if self.repeat.allows(self.completed) {
                self.elapsed_ms -= duration;
                if self.direction == PlayDirection::Alternate {
                    self.reversed = !self.reversed;
                }
            } else {
                self.elapsed_ms = duration;
                self.playing = false;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints() {
        let mut anim = KeyframeAnimation::tween(0.0, 10.0, 200, Easing::Linear);
        anim.start();
        assert_eq!(anim.value(), 0.0);

        anim.tick(100.0);
        assert!((anim.value() - 5.0).abs() < 1e-4);

        anim.tick(150.0);
        assert_eq!(anim.value(), 10.0);
        assert!(anim.is_finished());
        assert!(!anim.is_playing());
    }

    #[test]
    fn test_not_started_does_not_advance() {
        let mut anim = KeyframeAnimation::tween(0.0, 1.0, 100, Easing::Linear);
        anim.tick(50.0);
        assert_eq!(anim.value(), 0.0);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_multi_keyframe_interpolation() {
        let anim = KeyframeAnimation::new(
            1000,
            vec![
                Keyframe::new(1.0, 0.0, Easing::Linear),
                Keyframe::new(0.0, 0.0, Easing::Linear),
                Keyframe::new(0.5, 1.0, Easing::Linear),
            ],
        );

        assert_eq!(anim.sample_at(0.0), 0.0);
        assert!((anim.sample_at(0.25) - 0.5).abs() < 1e-5);
        assert_eq!(anim.sample_at(0.5), 1.0);
        assert!((anim.sample_at(0.75) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_alternate_infinite_loop_carries_remainder() {
        let mut anim = KeyframeAnimation::tween(1.0, 2.0, 100, Easing::Linear)
            .direction(PlayDirection::Alternate)
            .repeat(Repeat::Forever);
        anim.start();

        // 150ms: one forward pass done, halfway back
        anim.tick(150.0);
        assert!(anim.is_playing());
        assert!((anim.value() - 1.5).abs() < 1e-4);

        // 200ms total: back at start of cycle
        anim.tick(50.0);
        assert!((anim.value() - 1.0).abs() < 1e-4);

        // A single huge frame keeps the phase
        anim.tick(1050.0);
        assert!((anim.value() - 1.5).abs() < 1e-4);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut anim = KeyframeAnimation::tween(0.0, 1.0, 0, Easing::EaseOut);
        anim.start();
        anim.tick(0.0);
        assert!(anim.is_finished());
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn test_overlong_frames() {
        let mut once = KeyframeAnimation::tween(0.0, 1.0, 600, Easing::EaseOut);
        once.start();
        once.tick(f32::INFINITY);
        assert!(once.is_finished());
        assert_eq!(once.value(), 1.0);

        let mut looped = KeyframeAnimation::tween(1.0, 2.0, 100, Easing::Linear)
            .direction(PlayDirection::Alternate)
            .repeat(Repeat::Forever);
        looped.start();
        looped.tick(f32::INFINITY);
        looped.tick(f32::NAN);
        assert_eq!(looped.value(), 1.0);

        looped.tick(432_000_050.0);
        assert!(looped.is_playing());
        assert!(looped.value().is_finite());
    }
}
