//! Scroll surface
//!
//! In-page anchor navigation is a layout read followed by a scroll command.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{PlatformError, Result};

/// A scroll command issued to the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub y: f32,
    pub animated: bool,
}

/// The scroll container a screen lives in
pub trait ScrollSurface {
    /// Vertical offset of a section relative to the scroll container's
    /// content origin
    fn measure(&self, section: &str) -> Result<f32>;

    fn scroll_to(&mut self, request: ScrollRequest);
}

/// Headless surface backed by a table of laid-out section offsets.
///
/// Scrolls jump immediately; requests are kept so callers can inspect them.
#[derive(Debug, Default)]
pub struct LayoutScrollSurface {
    sections: FxHashMap<String, f32>,
    position: f32,
    requests: SmallVec<[ScrollRequest; 4]>,
}

impl LayoutScrollSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the laid-out offset of a section
    pub fn set_section(&mut self, section: impl Into<String>, y: f32) {
        self.sections.insert(section.into(), y);
    }

    pub fn with_section(mut self, section: impl Into<String>, y: f32) -> Self {
        self.set_section(section, y);
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }
}

impl ScrollSurface for LayoutScrollSurface {
    fn measure(&self, section: &str) -> Result<f32> {
        self.sections
            .get(section)
            .copied()
            .ok_or_else(|| PlatformError::Layout(format!("section '{section}' is not laid out")))
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        tracing::debug!(y = request.y, animated = request.animated, "scroll");
        self.position = request.y.max(0.0);
        self.requests.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_known_section() {
        let surface = LayoutScrollSurface::new().with_section("terms", 4200.0);
        assert_eq!(surface.measure("terms"), Ok(4200.0));
        assert!(matches!(
            surface.measure("privacy"),
            Err(PlatformError::Layout(_))
        ));
    }

    #[test]
    fn test_scroll_records_request() {
        let mut surface = LayoutScrollSurface::new();
        surface.scroll_to(ScrollRequest {
            y: 120.0,
            animated: true,
        });

        assert_eq!(surface.position(), 120.0);
        assert_eq!(surface.requests().len(), 1);
        assert!(surface.requests()[0].animated);
    }
}
