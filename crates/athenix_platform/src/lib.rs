//! Athenix Platform
//!
//! The host-side collaborators a screen talks to. Each is a trait so the
//! screens run headless in tests and in the preview CLI:
//!
//! - [`LinkDispatcher`]: fire-and-forget external URL and `mailto:` opens
//! - [`ScrollSurface`]: section measurement and scroll commands
//! - [`Navigator`]: the two-route stack between the home and features screens

pub mod error;
pub mod links;
pub mod navigation;
pub mod scroll;

pub use error::{PlatformError, Result};
pub use links::{dispatch, mailto, LinkDispatcher, LinkRecorder, SystemLinkOpener};
pub use navigation::{Navigator, Route};
pub use scroll::{LayoutScrollSurface, ScrollRequest, ScrollSurface};
