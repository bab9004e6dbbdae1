//! Athenix configuration file handling

use anyhow::{Context, Result};
use athenix_animation::{MotionPreference, PressScale, PulseConfig, RevealConfig};
use athenix_site::{MotionTuning, SiteLinks, SiteOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "athenix.toml";

/// Top-level Athenix configuration (athenix.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AthenixConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

/// Headless preview defaults, overridable per invocation
#[derive(Debug, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Route to preview ("home" or "features")
    #[serde(default = "default_screen")]
    pub screen: String,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// How much timeline to simulate
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// Viewport width used to pick the breakpoint
    #[serde(default = "default_width")]
    pub width: f32,
    /// Pace frames against the wall clock instead of running flat out
    #[serde(default)]
    pub realtime: bool,
}

fn default_screen() -> String {
    "home".to_string()
}

fn default_fps() -> u32 {
    60
}

fn default_duration_ms() -> u32 {
    2500
}

fn default_width() -> f32 {
    1280.0
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            screen: default_screen(),
            fps: default_fps(),
            duration_ms: default_duration_ms(),
            width: default_width(),
            realtime: false,
        }
    }
}

/// Motion preference plus optional overrides of the production timings
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MotionConfig {
    /// Show every element at its final state instead of animating
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_entrance_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_entrance_ms: Option<u32>,
    /// Upward slide of every entrance, in logical pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_distance: Option<f32>,
    /// Half cycle of the hero logo pulse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_pulse_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_pulse_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse_peak: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_press_scale: Option<f32>,
}

impl MotionConfig {
    /// Production timings with this section's overrides applied
    pub fn tuning(&self) -> Result<MotionTuning> {
        let defaults = MotionTuning::default();
        let reveal = |base: RevealConfig, duration_ms: Option<u32>| {
            RevealConfig::try_new(
                duration_ms.unwrap_or(base.duration_ms),
                self.slide_distance.unwrap_or(base.distance),
                base.easing,
            )
        };
        let pulse = |base: PulseConfig, half_cycle_ms: Option<u32>| {
            PulseConfig::try_new(
                half_cycle_ms.unwrap_or(base.half_cycle_ms),
                self.pulse_peak.unwrap_or(base.peak),
            )
        };

        let card_press = match self.card_press_scale {
            Some(scale) => PressScale::Custom(scale)
                .validate()
                .context("Invalid motion.card_press_scale")?,
            None => defaults.card_press,
        };

        Ok(MotionTuning {
            landing: reveal(defaults.landing, self.landing_entrance_ms)
                .context("Invalid landing entrance in [motion]")?,
            features: reveal(defaults.features, self.features_entrance_ms)
                .context("Invalid features entrance in [motion]")?,
            hero_pulse: pulse(defaults.hero_pulse, self.hero_pulse_ms)
                .context("Invalid hero pulse in [motion]")?,
            cta_pulse: pulse(defaults.cta_pulse, self.cta_pulse_ms)
                .context("Invalid call-to-action pulse in [motion]")?,
            card_press,
            ..defaults
        })
    }
}

/// Overrides for the external destinations
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl AthenixConfig {
    /// Load configuration from a directory (looks for athenix.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `athenix init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load from a directory, falling back to defaults when no file exists
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if config_path(path).exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!(dir = %path.display(), "no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn motion_preference(&self) -> MotionPreference {
        if self.motion.reduced_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Options the screens are built with
    pub fn site_options(&self) -> Result<SiteOptions> {
        let mut links = SiteLinks::default();
        if let Some(url) = &self.links.app_url {
            links.app_url = url.clone();
        }
        if let Some(email) = &self.links.contact_email {
            links.contact_email = email.clone();
        }
        Ok(SiteOptions {
            links,
            motion: self.motion_preference(),
            tuning: self.motion.tuning()?,
        })
    }
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenix_animation::AnimationError;
    use athenix_site::APP_URL;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AthenixConfig::parse("").unwrap();
        assert_eq!(config.preview.screen, "home");
        assert_eq!(config.preview.fps, 60);
        assert!(!config.preview.realtime);
        assert_eq!(config.motion_preference(), MotionPreference::Full);
        assert_eq!(config.site_options().unwrap().links.app_url, APP_URL);
        assert_eq!(config.site_options().unwrap().tuning, MotionTuning::default());
    }

    #[test]
    fn test_overrides() {
        let config = AthenixConfig::parse(
            r#"
            [preview]
            screen = "features"
            fps = 30

            [motion]
            reduced_motion = true

            [links]
            app_url = "https://staging.athenixflow.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.preview.screen, "features");
        assert_eq!(config.preview.fps, 30);
        assert_eq!(config.preview.duration_ms, 2500);

        let options = config.site_options().unwrap();
        assert_eq!(options.motion, MotionPreference::Reduced);
        assert_eq!(options.links.app_url, "https://staging.athenixflow.com");
        assert_eq!(options.links.contact_email, "help@athenixflow.com");
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let text = AthenixConfig::default().to_toml().unwrap();
        assert!(text.contains("[preview]"));
        assert!(text.contains("[motion]"));
        let parsed = AthenixConfig::parse(&text).unwrap();
        assert_eq!(parsed.preview.duration_ms, 2500);
    }

    #[test]
    fn test_bad_type_is_an_error() {
        assert!(AthenixConfig::parse("[preview]\nfps = \"fast\"").is_err());
    }

    #[test]
    fn test_motion_overrides() {
        let config = AthenixConfig::parse(
            r#"
            [motion]
            landing_entrance_ms = 400
            slide_distance = 12.0
            hero_pulse_ms = 900
            card_press_scale = 0.9
            "#,
        )
        .unwrap();

        let tuning = config.site_options().unwrap().tuning;
        assert_eq!(tuning.landing.duration_ms, 400);
        assert_eq!(tuning.landing.distance, 12.0);
        assert_eq!(tuning.features.duration_ms, 600);
        assert_eq!(tuning.features.distance, 12.0);
        assert_eq!(tuning.hero_pulse.period_ms(), 1800);
        assert_eq!(tuning.cta_pulse, PulseConfig::cta());
        assert_eq!(tuning.card_press.value(), 0.9);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = AthenixConfig::parse("[motion]\nlanding_entrance_ms = 0").unwrap();
        let err = config.site_options().unwrap_err();

        assert!(err.to_string().contains("landing entrance"), "{err}");
        assert_eq!(
            err.downcast_ref::<AnimationError>(),
            Some(&AnimationError::ZeroDuration { what: "entrance" })
        );
    }

    #[test]
    fn test_out_of_range_motion_values_rejected() {
        for text in [
            "[motion]\npulse_peak = 2.0",
            "[motion]\nhero_pulse_ms = 0",
            "[motion]\ncard_press_scale = 1.5",
            "[motion]\nslide_distance = -4.0",
        ] {
            let config = AthenixConfig::parse(text).unwrap();
            assert!(config.site_options().is_err(), "{text}");
        }
    }
}
