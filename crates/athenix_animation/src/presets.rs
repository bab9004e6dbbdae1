//! Animation presets used by the marketing screens

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use crate::state::{DEFAULT_SLIDE_DISTANCE, SCALE_MAX, SCALE_MIN};

/// Entrance configuration: fade from 0 to 1 while sliding up by `distance`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub duration_ms: u32,
    pub distance: f32,
    pub easing: Easing,
}

impl RevealConfig {
    /// Landing screen sections and cards
    pub const LANDING_DURATION_MS: u32 = 800;

    /// Features screen header and guide cards
    pub const FEATURES_DURATION_MS: u32 = 600;

    /// Validated constructor
    pub fn try_new(duration_ms: u32, distance: f32, easing: Easing) -> Result<Self> {
        if duration_ms == 0 {
            return Err(AnimationError::ZeroDuration { what: "entrance" });
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(AnimationError::InvalidDistance(distance));
        }
        Ok(Self {
            duration_ms,
            distance,
            easing,
        })
    }

    pub const fn landing() -> Self {
        Self {
            duration_ms: Self::LANDING_DURATION_MS,
            distance: DEFAULT_SLIDE_DISTANCE,
            easing: Easing::EaseOut,
        }
    }

    pub const fn features() -> Self {
        Self {
            duration_ms: Self::FEATURES_DURATION_MS,
            distance: DEFAULT_SLIDE_DISTANCE,
            easing: Easing::EaseOut,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::landing()
    }
}

/// Contraction factor applied while an element is held down
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressScale {
    /// Buttons and call-to-action controls
    Primary,
    /// Card-style containers
    Card,
    Custom(f32),
}

impl PressScale {
    pub fn value(&self) -> f32 {
        match self {
            PressScale::Primary => 0.95,
            PressScale::Card => 0.98,
            PressScale::Custom(scale) => *scale,
        }
    }

    /// Reject custom factors outside the drawable scale range
    pub fn validate(self) -> Result<Self> {
        let value = self.value();
        if (SCALE_MIN..=SCALE_MAX).contains(&value) {
            Ok(self)
        } else {
            Err(AnimationError::ScaleOutOfRange {
                value,
                min: SCALE_MIN,
                max: SCALE_MAX,
            })
        }
    }
}

/// Looping scale oscillation between 1.0 and `peak`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    /// Time for one leg (1.0 -> peak, or peak -> 1.0)
    pub half_cycle_ms: u32,
    pub peak: f32,
    pub easing: Easing,
}

impl PulseConfig {
    pub const DEFAULT_PEAK: f32 = 1.05;

    pub fn try_new(half_cycle_ms: u32, peak: f32) -> Result<Self> {
        if half_cycle_ms == 0 {
            return Err(AnimationError::ZeroDuration { what: "pulse" });
        }
        if !(1.0..=SCALE_MAX).contains(&peak) {
            return Err(AnimationError::ScaleOutOfRange {
                value: peak,
                min: 1.0,
                max: SCALE_MAX,
            });
        }
        Ok(Self {
            half_cycle_ms,
            peak,
            easing: Easing::EaseInOut,
        })
    }

    /// Hero logo: slow breathing
    pub const fn hero() -> Self {
        Self {
            half_cycle_ms: 2000,
            peak: Self::DEFAULT_PEAK,
            easing: Easing::EaseInOut,
        }
    }

    /// Closing call-to-action button
    pub const fn cta() -> Self {
        Self {
            half_cycle_ms: 1500,
            peak: Self::DEFAULT_PEAK,
            easing: Easing::EaseInOut,
        }
    }

    /// Full oscillation period
    pub fn period_ms(&self) -> u32 {
        self.half_cycle_ms.saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_durations() {
        assert_eq!(RevealConfig::landing().duration_ms, 800);
        assert_eq!(RevealConfig::features().duration_ms, 600);
        assert_eq!(RevealConfig::landing().distance, 30.0);
    }

    #[test]
    fn test_reveal_validation() {
        assert_eq!(
            RevealConfig::try_new(0, 30.0, Easing::EaseOut),
            Err(AnimationError::ZeroDuration { what: "entrance" })
        );
        assert!(RevealConfig::try_new(700, -1.0, Easing::EaseOut).is_err());
        assert!(RevealConfig::try_new(700, f32::NAN, Easing::EaseOut).is_err());
        assert!(RevealConfig::try_new(700, 12.0, Easing::Linear).is_ok());
    }

    #[test]
    fn test_press_scales() {
        assert_eq!(PressScale::Primary.value(), 0.95);
        assert_eq!(PressScale::Card.value(), 0.98);
        assert!(PressScale::Custom(0.5).validate().is_err());
        assert!(PressScale::Custom(0.92).validate().is_ok());
    }

    #[test]
    fn test_pulse_presets() {
        assert_eq!(PulseConfig::hero().period_ms(), 4000);
        assert_eq!(PulseConfig::cta().period_ms(), 3000);
        assert!(PulseConfig::try_new(0, 1.05).is_err());
        assert!(PulseConfig::try_new(500, 1.3).is_err());
        assert!(PulseConfig::try_new(500, 1.02).is_ok());
    }
}
