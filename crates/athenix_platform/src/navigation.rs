//! Screen navigation
//!
//! A plain stack: push forward, pop back. No parameters travel between
//! routes.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::PlatformError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Features,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Features => "/features",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('/') {
            "" | "index" | "/index" | "home" => Ok(Route::Home),
            "/features" | "features" => Ok(Route::Features),
            _ => Err(PlatformError::UnknownRoute(s.to_string())),
        }
    }
}

/// Navigation history, rooted at the home screen
#[derive(Clone, Debug)]
pub struct Navigator {
    stack: SmallVec<[Route; 4]>,
}

impl Navigator {
    pub fn new() -> Self {
        let mut stack = SmallVec::new();
        stack.push(Route::Home);
        Self { stack }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(from = %self.current(), to = %route, "navigate");
        self.stack.push(route);
    }

    /// Pop the current route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        tracing::debug!(to = %self.current(), "navigate back");
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.back());

        nav.push(Route::Features);
        assert_eq!(nav.current(), Route::Features);
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/features".parse::<Route>(), Ok(Route::Features));
        assert_eq!("features/".parse::<Route>(), Ok(Route::Features));
        assert!("/pricing".parse::<Route>().is_err());
        assert_eq!(Route::Features.to_string(), "/features");
    }
}
