//! The whole site: a navigation stack of mounted screens

use athenix_animation::MotionPreference;
use athenix_core::Event;
use athenix_platform::{LinkDispatcher, Navigator, Route, ScrollSurface};
use smallvec::SmallVec;

use crate::features::FeaturesScreen;
use crate::landing::LandingScreen;
use crate::screen::{Action, Host, Screen, SiteLinks};
use crate::tuning::MotionTuning;

#[derive(Clone, Debug, Default)]
pub struct SiteOptions {
    pub links: SiteLinks,
    pub motion: MotionPreference,
    pub tuning: MotionTuning,
}

/// Build an unmounted screen for a route
pub fn screen_for(route: Route, options: &SiteOptions) -> Box<dyn Screen> {
    match route {
        Route::Home => Box::new(LandingScreen::with_tuning(
            options.links.clone(),
            options.motion,
            options.tuning,
        )),
        Route::Features => Box::new(FeaturesScreen::with_tuning(
            options.links.clone(),
            options.motion,
            options.tuning,
        )),
    }
}

/// Screens stacked in navigation order, the top one receiving events.
///
/// Screens below the top stay mounted and keep ticking, so returning to one
/// does not replay its entrances.
pub struct Site<L: LinkDispatcher, S: ScrollSurface> {
    options: SiteOptions,
    navigator: Navigator,
    screens: SmallVec<[Box<dyn Screen>; 4]>,
    links: L,
    scroll: S,
}

impl<L: LinkDispatcher, S: ScrollSurface> Site<L, S> {
    /// Create the site with the home screen mounted
    pub fn new(links: L, scroll: S, options: SiteOptions) -> Self {
        let mut home = screen_for(Route::Home, &options);
        home.mount();
        let mut screens = SmallVec::new();
        screens.push(home);
        Self {
            options,
            navigator: Navigator::new(),
            screens,
            links,
            scroll,
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn links(&self) -> &L {
        &self.links
    }

    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    pub fn current(&self) -> Option<&dyn Screen> {
        self.screens.last().map(|screen| screen.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.screens.last_mut().map(|screen| screen.as_mut())
    }

    /// Navigate forward, mounting the new screen
    pub fn push(&mut self, route: Route) {
        self.navigator.push(route);
        self.sync();
    }

    /// Navigate back, unmounting the top screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        let popped = self.navigator.back();
        self.sync();
        popped
    }

    /// Deliver a host event to the top screen
    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let screen = self.screens.last_mut()?;
        let mut host = Host {
            links: &self.links,
            scroll: &mut self.scroll,
            navigator: &mut self.navigator,
        };
        let action = screen.handle_event(event, &mut host);
        self.sync();
        action
    }

    pub fn tick(&mut self, dt_ms: f32) {
        for screen in &mut self.screens {
            screen.tick(dt_ms);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.screens.iter().any(|screen| screen.is_animating())
    }

    pub fn entrances_settled(&self) -> bool {
        self.screens.iter().all(|screen| screen.entrances_settled())
    }

    /// Unmount every screen
    pub fn shutdown(&mut self) {
        while let Some(mut screen) = self.screens.pop() {
            screen.unmount();
        }
    }

    fn sync(&mut self) {
        while self.screens.len() > self.navigator.depth() {
            if let Some(mut screen) = self.screens.pop() {
                tracing::debug!(route = %screen.route(), "unmounting screen");
                screen.unmount();
            }
        }
        if self.screens.len() < self.navigator.depth() {
            let mut screen = screen_for(self.navigator.current(), &self.options);
            screen.mount();
            self.screens.push(screen);
        }
    }
}
