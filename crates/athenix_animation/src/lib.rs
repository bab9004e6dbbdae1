//! Athenix Reveal Animator
//!
//! Entrance tweens, press springs, pulse loops, and staggered scheduling for
//! the marketing screens.
//!
//! # Features
//!
//! - **Entrance**: fade-in and slide-in driven by one shared clock, so both
//!   properties settle on the same frame
//! - **Press Feedback**: critically damped springs toward a contraction scale
//! - **Pulse**: cancellable, unbounded scale oscillation for call-to-action
//!   elements
//! - **Stagger**: `index * step` start delays for card rows and lists
//! - **Scheduler**: delayed starts owned by an element and cancelled with it
//! - **Reduced Motion**: optional snap-to-final-state behavior
//!
//! Everything advances through explicit `tick(dt_ms)` calls from the host
//! frame loop; nothing here sleeps or spawns.

pub mod easing;
pub mod error;
pub mod keyframe;
pub mod presets;
pub mod press;
pub mod pulse;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod state;

pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use keyframe::{Keyframe, KeyframeAnimation, PlayDirection, Repeat};
pub use presets::{PressScale, PulseConfig, RevealConfig};
pub use press::PressFeedback;
pub use pulse::Pulse;
pub use reveal::{EntrancePhase, MotionPreference, RevealAnimator};
pub use scheduler::{AnimationScheduler, FiredTimer, TimerId};
pub use spring::{Spring, SpringConfig};
pub use stagger::StaggerPolicy;
pub use state::AnimationState;
