//! Entrance, pulse and press parameters the screens are built with

use athenix_animation::{PressScale, PulseConfig, RevealConfig};

/// Per-site motion parameters.
///
/// The defaults are the production presets. Hosts that want to preview other
/// timings build their values with the validating constructors
/// ([`RevealConfig::try_new`], [`PulseConfig::try_new`], [`PressScale::validate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTuning {
    /// Entrance used by every animated landing element
    pub landing: RevealConfig,
    /// Entrance used by the features header and cards
    pub features: RevealConfig,
    pub hero_pulse: PulseConfig,
    pub cta_pulse: PulseConfig,
    /// Press scale of the two primary buttons
    pub primary_press: PressScale,
    /// Press scale of pricing and guide cards
    pub card_press: PressScale,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            landing: RevealConfig::landing(),
            features: RevealConfig::features(),
            hero_pulse: PulseConfig::hero(),
            cta_pulse: PulseConfig::cta(),
            primary_press: PressScale::Primary,
            card_press: PressScale::Card,
        }
    }
}
