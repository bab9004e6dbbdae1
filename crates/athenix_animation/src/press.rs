//! Press feedback
//!
//! Springs an element's scale down while it is held and back to 1.0 when
//! released. The press state machine keeps unbalanced host events (a second
//! press-in, a stray press-out) from retargeting the spring.

use athenix_core::fsm::{press, StateMachine};

use crate::presets::PressScale;
use crate::spring::{Spring, SpringConfig};
use crate::state::{SCALE_MAX, SCALE_MIN};

pub struct PressFeedback {
    spring: Spring,
    pressed_scale: f32,
    machine: StateMachine,
}

impl PressFeedback {
    pub fn new(scale: PressScale) -> Self {
        Self::with_spring(scale, SpringConfig::press())
    }

    pub fn with_spring(scale: PressScale, config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, 1.0),
            pressed_scale: scale.value().clamp(SCALE_MIN, SCALE_MAX),
            machine: press::machine(),
        }
    }

    pub fn on_press_start(&mut self) {
        if self.machine.send(press::PRESS_IN).is_some() {
            self.spring.set_target(self.pressed_scale);
        }
    }

    pub fn on_press_end(&mut self) {
        if self.machine.send(press::PRESS_OUT).is_some() {
            self.spring.set_target(1.0);
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.machine.is_in(press::PRESSED)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Where the spring is heading
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Current scale, always within the drawable range
    pub fn scale(&self) -> f32 {
        self.spring.value().clamp(SCALE_MIN, SCALE_MAX)
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.spring.step(dt_ms / 1000.0);
    }

    /// Release and rest at 1.0 immediately
    pub fn reset(&mut self) {
        self.on_press_end();
        self.spring.snap_to(1.0);
    }
}
