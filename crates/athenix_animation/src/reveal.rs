//! Reveal animator
//!
//! Owns the animation state of one element: the one-shot entrance (fade and
//! slide on a single clock), optional press feedback, and an optional pulse.
//!
//! # Example
//!
//! ```rust
//! use athenix_animation::{AnimationScheduler, RevealAnimator, RevealConfig};
//! use athenix_core::ElementId;
//!
//! let mut scheduler = AnimationScheduler::new();
//! let mut card = RevealAnimator::new(ElementId(1), RevealConfig::landing());
//!
//! card.start_entrance(&mut scheduler, 200);
//! for fired in scheduler.advance(250.0) {
//!     card.on_timer(&fired);
//! }
//! card.tick(800.0);
//! assert!(card.state().is_revealed());
//! ```

use athenix_core::ElementId;

use crate::keyframe::KeyframeAnimation;
use crate::presets::{PressScale, PulseConfig, RevealConfig};
use crate::press::PressFeedback;
use crate::pulse::Pulse;
use crate::scheduler::{AnimationScheduler, FiredTimer, TimerId};
use crate::state::{AnimationState, SCALE_MAX, SCALE_MIN};

/// Whether the host wants motion played or skipped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    /// Snap every animation to its final value
    Reduced,
}

/// Where an element is in its entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Not triggered yet
    Idle,
    /// Waiting on a scheduled delay
    Pending(TimerId),
    Running,
    Settled,
}

pub struct RevealAnimator {
    id: ElementId,
    config: RevealConfig,
    motion: MotionPreference,
    phase: EntrancePhase,
    /// Eased entrance progress, 0.0 to 1.0. Opacity and offset are both
    /// derived from it so they can never drift apart.
    clock: KeyframeAnimation,
    press: Option<PressFeedback>,
    pulse: Option<Pulse>,
}

impl RevealAnimator {
    /// An element that starts hidden and waits for `start_entrance`
    pub fn new(id: ElementId, config: RevealConfig) -> Self {
        Self {
            id,
            config,
            motion: MotionPreference::Full,
            phase: EntrancePhase::Idle,
            clock: KeyframeAnimation::tween(0.0, 1.0, config.duration_ms, config.easing),
            press: None,
            pulse: None,
        }
    }

    /// An element with no entrance of its own (already visible)
    pub fn visible(id: ElementId) -> Self {
        let mut animator = Self::new(id, RevealConfig::default());
        animator.phase = EntrancePhase::Settled;
        animator
    }

    pub fn with_press(mut self, scale: PressScale) -> Self {
        self.press = Some(PressFeedback::new(scale));
        self
    }

    pub fn with_pulse(mut self, config: PulseConfig) -> Self {
        self.pulse = Some(Pulse::new(config));
        self
    }

    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Change the motion preference of a live element. Switching to reduced
    /// motion settles anything already triggered; untriggered entrances
    /// settle when they are started.
    pub fn set_motion(&mut self, scheduler: &mut AnimationScheduler, motion: MotionPreference) {
        self.motion = motion;
        if motion == MotionPreference::Reduced && self.phase != EntrancePhase::Idle {
            self.snap_to_final(scheduler);
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    /// Begin the entrance after `delay_ms`.
    ///
    /// An entrance plays at most once: calling this while pending, running
    /// or settled does nothing.
    pub fn start_entrance(&mut self, scheduler: &mut AnimationScheduler, delay_ms: u32) {
        if self.phase != EntrancePhase::Idle {
            tracing::debug!(element = %self.id, phase = ?self.phase, "entrance already triggered");
            return;
        }

        if self.motion == MotionPreference::Reduced {
            self.phase = EntrancePhase::Settled;
            return;
        }

        if delay_ms == 0 {
            self.begin(0.0);
        } else {
            self.phase = EntrancePhase::Pending(scheduler.schedule(self.id, delay_ms));
        }
    }

    /// Deliver a fired timer. Returns true if it was this element's pending
    /// entrance trigger.
    pub fn on_timer(&mut self, fired: &FiredTimer) -> bool {
        match self.phase {
            EntrancePhase::Pending(id) if id == fired.id => {
                self.begin(fired.overshoot_ms);
                true
            }
            _ => false,
        }
    }

    fn begin(&mut self, lead_ms: f32) {
        tracing::trace!(element = %self.id, duration_ms = self.config.duration_ms, "entrance started");
        self.phase = EntrancePhase::Running;
        self.clock.start();
        self.advance_entrance(lead_ms);
    }

    fn advance_entrance(&mut self, dt_ms: f32) {
        self.clock.tick(dt_ms);
        if self.clock.is_finished() {
            self.phase = EntrancePhase::Settled;
        }
    }

    pub fn on_press_start(&mut self) {
        if let Some(press) = &mut self.press {
            press.on_press_start();
        }
    }

    pub fn on_press_end(&mut self) {
        if let Some(press) = &mut self.press {
            press.on_press_end();
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.as_ref().is_some_and(PressFeedback::is_pressed)
    }

    /// Start the pulse loop, if this element has one. Under reduced motion
    /// the element stays at rest scale instead.
    pub fn start_pulse(&mut self) {
        if self.motion == MotionPreference::Reduced {
            return;
        }
        if let Some(pulse) = &mut self.pulse {
            pulse.start();
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse.as_ref().is_some_and(Pulse::is_running)
    }

    /// Advance every channel by one frame
    pub fn tick(&mut self, dt_ms: f32) {
        if self.phase == EntrancePhase::Running {
            self.advance_entrance(dt_ms);
        }
        if let Some(press) = &mut self.press {
            press.tick(dt_ms);
        }
        if let Some(pulse) = &mut self.pulse {
            pulse.tick(dt_ms);
        }
    }

    /// Jump to the final visual state and stop all motion
    pub fn snap_to_final(&mut self, scheduler: &mut AnimationScheduler) {
        if let EntrancePhase::Pending(id) = self.phase {
            scheduler.cancel(id);
        }
        self.phase = EntrancePhase::Settled;
        if let Some(press) = &mut self.press {
            press.reset();
        }
        if let Some(pulse) = &mut self.pulse {
            pulse.cancel();
        }
    }

    /// Cancel everything this element has scheduled or looping. Called when
    /// the owning element unmounts.
    pub fn teardown(&mut self, scheduler: &mut AnimationScheduler) {
        if let EntrancePhase::Pending(_) = self.phase {
            self.phase = EntrancePhase::Idle;
        }
        scheduler.cancel_owner(self.id);
        if let Some(pulse) = &mut self.pulse {
            pulse.cancel();
        }
    }

    /// Whether any channel still needs frames
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            EntrancePhase::Pending(_) | EntrancePhase::Running
        ) || self.press.as_ref().is_some_and(|p| !p.is_settled())
            || self.is_pulsing()
    }

    /// Current visual values
    pub fn state(&self) -> AnimationState {
        let mut state = match self.phase {
            EntrancePhase::Idle | EntrancePhase::Pending(_) => {
                AnimationState::hidden(self.config.distance)
            }
            EntrancePhase::Running => {
                let progress = self.clock.value();
                AnimationState {
                    opacity: progress,
                    offset: self.config.distance * (1.0 - progress),
                    scale: 1.0,
                }
            }
            EntrancePhase::Settled => AnimationState::settled(),
        };

        let press = self.press.as_ref().map_or(1.0, PressFeedback::scale);
        let pulse = self.pulse.as_ref().map_or(1.0, Pulse::scale);
        state.scale = (press * pulse).clamp(SCALE_MIN, SCALE_MAX);
        state
    }
}
