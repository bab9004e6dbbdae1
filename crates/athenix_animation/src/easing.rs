//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-out: fast start, soft landing (entrances)
    EaseOut,
    /// Cubic ease-in-out (pulse legs)
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value.
    ///
    /// Input is clamped to `0.0..=1.0`, so every curve maps 0 to 0 and 1 to 1
    /// exactly and never leaves that range.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOut, Easing::EaseInOut];

    #[test]
    fn test_endpoints_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.7), 1.0);
    }

    #[test]
    fn test_curves_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=200 {
                let v = easing.apply(i as f32 / 200.0);
                assert!(v >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loaded() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }
}
