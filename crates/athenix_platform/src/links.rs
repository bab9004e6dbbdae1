//! External link dispatch
//!
//! Opening a URL is fire-and-forget from the UI's point of view: failures are
//! logged and never surfaced to the user.

use std::cell::RefCell;

use crate::error::{PlatformError, Result};

/// Something that can hand a URL to the system
pub trait LinkDispatcher {
    fn open(&self, url: &str) -> Result<()>;
}

/// Build a `mailto:` URL for an address
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// Open `url`, logging instead of propagating failure
pub fn dispatch(dispatcher: &dyn LinkDispatcher, url: &str) {
    tracing::debug!(url, "dispatching external link");
    if let Err(e) = dispatcher.open(url) {
        tracing::warn!("{}", e);
    }
}

/// Opens URLs in the system's default browser or mail client
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLinkOpener;

impl LinkDispatcher for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
        {
            open::that(url).map_err(|e| PlatformError::LinkDispatch {
                url: url.to_string(),
                reason: e.to_string(),
            })
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            Err(PlatformError::Unsupported(format!("opening {url}")))
        }
    }
}

/// Records every URL instead of opening it. Used by the headless preview and
/// by tests.
#[derive(Debug, Default)]
pub struct LinkRecorder {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl LinkRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose every open fails (after recording the attempt)
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// Number of times `url` was requested
    pub fn count(&self, url: &str) -> usize {
        self.opened.borrow().iter().filter(|u| *u == url).count()
    }
}

impl LinkDispatcher for LinkRecorder {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(PlatformError::LinkDispatch {
                url: url.to_string(),
                reason: "no handler registered".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("help@athenixflow.com"), "mailto:help@athenixflow.com");
    }

    #[test]
    fn test_recorder_counts() {
        let recorder = LinkRecorder::new();
        dispatch(&recorder, "https://app.athenixflow.com");
        dispatch(&recorder, "mailto:help@athenixflow.com");
        dispatch(&recorder, "https://app.athenixflow.com");

        assert_eq!(recorder.count("https://app.athenixflow.com"), 2);
        assert_eq!(recorder.opened().len(), 3);
    }

    #[test]
    fn test_failed_dispatch_is_swallowed() {
        let recorder = LinkRecorder::failing();
        dispatch(&recorder, "https://app.athenixflow.com");
        assert_eq!(recorder.count("https://app.athenixflow.com"), 1);
        assert!(recorder.open("x").is_err());
    }
}
