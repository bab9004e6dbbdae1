//! Pressing a labelled element outside any renderer
//!
//! Drives a full [`Site`] so the element's action reaches a real link
//! dispatcher and scroll surface.

use anyhow::{Context, Result};
use athenix_core::Event;
use athenix_platform::{LayoutScrollSurface, LinkDispatcher, Route, ScrollSurface};
use athenix_site::{Action, Site, SiteOptions};

/// Parse a `name=y` section offset
pub fn parse_section(text: &str) -> Result<(String, f32)> {
    let (name, y) = text
        .split_once('=')
        .with_context(|| format!("Expected name=offset, got '{text}'"))?;
    let y: f32 = y
        .trim()
        .parse()
        .with_context(|| format!("Bad offset for section '{name}'"))?;
    Ok((name.trim().to_string(), y))
}

/// A scroll surface with the given sections laid out
pub fn layout(sections: &[(String, f32)]) -> LayoutScrollSurface {
    sections
        .iter()
        .fold(LayoutScrollSurface::new(), |surface, (name, y)| {
            surface.with_section(name.clone(), *y)
        })
}

/// Open `route`, then tap the element labelled `label` on it: press-in,
/// release, then the press itself.
pub fn press<L: LinkDispatcher, S: ScrollSurface>(
    site: &mut Site<L, S>,
    route: Route,
    label: &str,
) -> Result<Action> {
    if route != site.route() {
        site.push(route);
    }

    let target = site
        .current()
        .and_then(|screen| screen.stage().find(label))
        .with_context(|| format!("No element labelled '{label}' on {route}"))?;

    tracing::debug!(label, %target, %route, "pressing element");
    site.handle_event(&Event::press_in(target));
    site.handle_event(&Event::press_out(target));
    site.handle_event(&Event::press(target))
        .with_context(|| format!("'{label}' did not handle the press"))
}

/// Build a site on `links` and press one element on it
pub fn press_on<L: LinkDispatcher>(
    links: L,
    scroll: LayoutScrollSurface,
    options: SiteOptions,
    route: Route,
    label: &str,
) -> Result<(Action, Site<L, LayoutScrollSurface>)> {
    let mut site = Site::new(links, scroll, options);
    let action = press(&mut site, route, label)?;
    Ok((action, site))
}
