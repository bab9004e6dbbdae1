//! Screen lifecycle and element actions

use athenix_core::events::event_types;
use athenix_core::Event;
use athenix_platform::{dispatch, mailto, LinkDispatcher, Navigator, Route, ScrollRequest, ScrollSurface};

use crate::content::{LegalAnchor, APP_URL, CONTACT_EMAIL};
use crate::stage::{ElementSnapshot, Stage};

/// What pressing an element does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Open the web application
    OpenApp,
    /// Open a mail composer to the contact address
    Email,
    /// Smooth-scroll to an in-page legal section
    ScrollTo(LegalAnchor),
    Navigate(Route),
    Back,
}

/// External destinations, overridable from configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteLinks {
    pub app_url: String,
    pub contact_email: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            app_url: APP_URL.to_string(),
            contact_email: CONTACT_EMAIL.to_string(),
        }
    }
}

/// Host collaborators an event handler may call out to
pub struct Host<'a> {
    pub links: &'a dyn LinkDispatcher,
    pub scroll: &'a mut dyn ScrollSurface,
    pub navigator: &'a mut Navigator,
}

/// A mounted screen
pub trait Screen {
    fn route(&self) -> Route;

    fn stage(&self) -> &Stage;

    fn stage_mut(&mut self) -> &mut Stage;

    fn links(&self) -> &SiteLinks;

    /// Schedule entrances and start loops. Mounting twice does nothing.
    fn mount(&mut self);

    fn tick(&mut self, dt_ms: f32) {
        self.stage_mut().tick(dt_ms);
    }

    /// Cancel everything the screen scheduled
    fn unmount(&mut self) {
        self.stage_mut().teardown();
    }

    fn is_animating(&self) -> bool {
        self.stage().is_animating()
    }

    fn entrances_settled(&self) -> bool {
        self.stage().entrances_settled()
    }

    fn snapshot(&self) -> Vec<ElementSnapshot> {
        self.stage().snapshot()
    }

    /// Route a host event to the target element.
    ///
    /// Returns the action performed for a completed press.
    fn handle_event(&mut self, event: &Event, host: &mut Host<'_>) -> Option<Action> {
        if !self.stage().is_mounted() && event.event_type != event_types::MOUNT {
            tracing::trace!(route = %self.route(), event = event.event_type, "event on unmounted screen");
            return None;
        }

        match event.event_type {
            event_types::PRESS_IN => self.stage_mut().press_in(event.target),
            event_types::PRESS_OUT => self.stage_mut().press_out(event.target),
            event_types::PRESS => {
                let action = self.stage().action(event.target)?;
                perform(action, self.links(), host);
                return Some(action);
            }
            event_types::MOUNT => self.mount(),
            event_types::UNMOUNT => self.unmount(),
            _ => {}
        }
        None
    }
}

/// Carry out an element's action against the host
pub fn perform(action: Action, links: &SiteLinks, host: &mut Host<'_>) {
    match action {
        Action::None => {}
        Action::OpenApp => dispatch(host.links, &links.app_url),
        Action::Email => dispatch(host.links, &mailto(&links.contact_email)),
        Action::ScrollTo(anchor) => {
            scroll_to_section(anchor.id(), host.scroll);
        }
        Action::Navigate(route) => host.navigator.push(route),
        Action::Back => {
            host.navigator.back();
        }
    }
}

/// Measure a legal section and smooth-scroll to it.
///
/// Unknown ids and sections that cannot be measured issue no scroll.
/// Returns whether a scroll was requested.
pub fn scroll_to_section(section: &str, scroll: &mut dyn ScrollSurface) -> bool {
    let anchor = match section.parse::<LegalAnchor>() {
        Ok(anchor) => anchor,
        Err(e) => {
            tracing::debug!("{}", e);
            return false;
        }
    };

    match scroll.measure(anchor.id()) {
        Ok(y) => {
            scroll.scroll_to(ScrollRequest { y, animated: true });
            true
        }
        Err(e) => {
            tracing::debug!(%anchor, "{}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenix_platform::{LayoutScrollSurface, LinkRecorder};

    #[test]
    fn test_scroll_to_known_section() {
        let mut surface = LayoutScrollSurface::new()
            .with_section("privacy", 3100.0)
            .with_section("terms", 3600.0);

        assert!(scroll_to_section("privacy", &mut surface));
        assert_eq!(
            surface.requests(),
            &[ScrollRequest {
                y: 3100.0,
                animated: true
            }]
        );
    }

    #[test]
    fn test_scroll_to_unknown_or_unmeasured() {
        let mut surface = LayoutScrollSurface::new().with_section("privacy", 3100.0);

        assert!(!scroll_to_section("pricing", &mut surface));
        assert!(!scroll_to_section("terms", &mut surface));
        assert!(surface.requests().is_empty());
    }

    #[test]
    fn test_perform_uses_configured_links() {
        let recorder = LinkRecorder::new();
        let mut surface = LayoutScrollSurface::new();
        let mut navigator = Navigator::new();
        let links = SiteLinks {
            app_url: "https://staging.example".to_string(),
            contact_email: "ops@example.com".to_string(),
        };

        let mut host = Host {
            links: &recorder,
            scroll: &mut surface,
            navigator: &mut navigator,
        };
        perform(Action::OpenApp, &links, &mut host);
        perform(Action::Email, &links, &mut host);
        perform(Action::Navigate(Route::Features), &links, &mut host);

        assert_eq!(
            recorder.opened(),
            vec!["https://staging.example", "mailto:ops@example.com"]
        );
        assert_eq!(navigator.current(), Route::Features);
    }
}
