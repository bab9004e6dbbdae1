//! Athenix Site
//!
//! The marketing presentation for Athenix, modelled headlessly. Each screen
//! is a [`Stage`] of labelled elements, every one owning a
//! [`RevealAnimator`](athenix_animation::RevealAnimator), plus the static
//! copy those elements show.
//!
//! # Example
//!
//! ```rust
//! use athenix_platform::{LayoutScrollSurface, LinkRecorder};
//! use athenix_site::{Site, SiteOptions};
//!
//! let mut site = Site::new(LinkRecorder::new(), LayoutScrollSurface::new(), SiteOptions::default());
//! while !site.entrances_settled() {
//!     site.tick(16.0);
//! }
//! // The hero logo keeps pulsing after every entrance has settled
//! assert!(site.is_animating());
//! ```

pub mod content;
pub mod features;
pub mod landing;
pub mod meta;
pub mod screen;
pub mod site;
pub mod stage;
pub mod theme;
pub mod tuning;

pub use content::{LegalAnchor, SiteContent, APP_URL, CONTACT_EMAIL};
pub use features::FeaturesScreen;
pub use landing::LandingScreen;
pub use meta::{head_tags, HeadTag};
pub use screen::{perform, scroll_to_section, Action, Host, Screen, SiteLinks};
pub use site::{screen_for, Site, SiteOptions};
pub use stage::{ElementSnapshot, Stage};
pub use theme::{Breakpoint, Metrics, Rgb};
pub use tuning::MotionTuning;
