//! Pulse loop
//!
//! An unbounded scale oscillation 1.0 -> peak -> 1.0. It has no terminal
//! state; the owner must cancel it (or drop it) on teardown.

use crate::keyframe::{KeyframeAnimation, PlayDirection, Repeat};
use crate::presets::PulseConfig;

pub struct Pulse {
    config: PulseConfig,
    track: KeyframeAnimation,
}

impl Pulse {
    pub fn new(config: PulseConfig) -> Self {
        let track = KeyframeAnimation::tween(1.0, config.peak, config.half_cycle_ms, config.easing)
            .direction(PlayDirection::Alternate)
            .repeat(Repeat::Forever);
        Self { config, track }
    }

    pub fn config(&self) -> PulseConfig {
        self.config
    }

    /// Start from scale 1.0. Restarting a running pulse resets its phase.
    pub fn start(&mut self) {
        self.track.start();
    }

    pub fn cancel(&mut self) {
        if self.track.is_playing() {
            tracing::debug!(period_ms = self.config.period_ms(), "pulse cancelled");
        }
        self.track.stop();
    }

    pub fn is_running(&self) -> bool {
        self.track.is_playing()
    }

    /// Current scale; 1.0 when not running
    pub fn scale(&self) -> f32 {
        if self.track.is_playing() {
            self.track.value()
        } else {
            1.0
        }
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.track.tick(dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_between_bounds() {
        let mut pulse = Pulse::new(PulseConfig::cta());
        pulse.start();

        for _ in 0..1000 {
            pulse.tick(7.0);
            let scale = pulse.scale();
            assert!((1.0..=1.05).contains(&scale), "scale {scale}");
        }
    }

    #[test]
    fn test_pulse_peaks_at_half_cycle() {
        let mut pulse = Pulse::new(PulseConfig::hero());
        pulse.start();
        pulse.tick(1999.0);
        assert!((pulse.scale() - 1.05).abs() < 1e-4);

        pulse.tick(2001.0);
        assert!((pulse.scale() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_cancel_returns_to_rest() {
        let mut pulse = Pulse::new(PulseConfig::hero());
        pulse.start();
        pulse.tick(900.0);
        assert!(pulse.scale() > 1.0);

        pulse.cancel();
        assert!(!pulse.is_running());
        assert_eq!(pulse.scale(), 1.0);

        pulse.tick(500.0);
        assert_eq!(pulse.scale(), 1.0);
    }

    fn scale_at(config: PulseConfig, steps: &[f32]) -> f32 {
        let mut pulse = Pulse::new(config);
        pulse.start();
        for dt in steps {
            pulse.tick(*dt);
        }
        pulse.scale()
    }

    #[test]
    fn test_period_is_two_half_cycles() {
        let config = PulseConfig::hero();
        let period = config.period_ms() as f32;

        for offset in [0.0, 250.0, 1000.0, 1999.0, 2500.0, 3700.0] {
            let now = scale_at(config, &[offset]);
            let one_later = scale_at(config, &[offset, period]);
            let two_later = scale_at(config, &[offset, period, period]);
            assert!((now - one_later).abs() < 1e-4, "offset {offset}");
            assert!((now - two_later).abs() < 1e-4, "offset {offset}");
        }

        // Half a period away is the mirror point, not the same value
        let quarter = scale_at(config, &[1000.0]);
        let three_quarters = scale_at(config, &[3000.0]);
        assert!((quarter - three_quarters).abs() < 1e-4);
        assert!((scale_at(config, &[0.0]) - scale_at(config, &[2000.0])).abs() > 0.04);
    }

    #[test]
    fn test_hero_bounds_over_three_periods() {
        let config = PulseConfig::hero();
        let mut pulse = Pulse::new(config);
        pulse.start();

        let mut elapsed = 0.0;
        let (mut low, mut high) = (f32::MAX, f32::MIN);
        while elapsed < 3.0 * config.period_ms() as f32 {
            pulse.tick(16.0);
            elapsed += 16.0;
            let scale = pulse.scale();
            assert!((1.0..=1.05).contains(&scale), "scale {scale} at {elapsed}ms");
            low = low.min(scale);
            high = high.max(scale);
        }

        // Both ends of the swing are actually reached
        assert!(low < 1.001);
        assert!(high > 1.049);
    }
}
