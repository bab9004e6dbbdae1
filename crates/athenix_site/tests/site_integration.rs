//! Integration tests for the two screens driven through the site stack
//!
//! These tests verify that:
//! - Activating "Launch Athenix App" opens the app exactly once however many
//!   press-in/press-out events came first
//! - Footer legal links scroll to the measured section and nowhere else
//! - Navigating to the features screen and back mounts and unmounts it
//! - Unmounting mid-cascade stops delayed entrances and pulses
//! - Reduced motion lands every element on its final values at mount

use athenix_animation::{EntrancePhase, MotionPreference};
use athenix_core::{ElementId, Event};
use athenix_platform::{LayoutScrollSurface, LinkRecorder, Route, ScrollRequest};
use athenix_site::{
    Action, FeaturesScreen, LandingScreen, Screen, Site, SiteLinks, SiteOptions, APP_URL,
};

fn surface() -> LayoutScrollSurface {
    LayoutScrollSurface::new()
        .with_section("privacy", 3120.0)
        .with_section("terms", 3580.0)
        .with_section("disclaimer", 4010.0)
}

fn site() -> Site<LinkRecorder, LayoutScrollSurface> {
    Site::new(LinkRecorder::new(), surface(), SiteOptions::default())
}

fn element(site: &Site<LinkRecorder, LayoutScrollSurface>, label: &str) -> ElementId {
    site.current()
        .and_then(|screen| screen.stage().find(label))
        .unwrap_or_else(|| panic!("no element labelled {label}"))
}

#[test]
fn test_launch_app_opens_once() {
    let mut site = site();
    let button = element(&site, "hero.button");

    for _ in 0..5 {
        site.handle_event(&Event::press_in(button));
        site.tick(16.0);
        site.handle_event(&Event::press_out(button));
    }
    assert!(site.links().opened().is_empty());

    site.handle_event(&Event::press_in(button));
    let action = site.handle_event(&Event::press(button));
    site.handle_event(&Event::press_out(button));

    assert_eq!(action, Some(Action::OpenApp));
    assert_eq!(site.links().count(APP_URL), 1);
    assert_eq!(site.links().opened().len(), 1);
}

#[test]
fn test_pricing_card_and_cta_open_app() {
    let mut site = site();
    let card = element(&site, "pricing.pro");
    let cta = element(&site, "cta.button");

    site.handle_event(&Event::press(card));
    site.handle_event(&Event::press(cta));

    assert_eq!(site.links().count(APP_URL), 2);
}

#[test]
fn test_footer_contact_opens_mail() {
    let mut site = site();
    let contact = element(&site, "footer.contact");
    site.handle_event(&Event::press(contact));
    assert_eq!(site.links().opened(), vec!["mailto:help@athenixflow.com"]);
}

#[test]
fn test_privacy_link_scrolls_once() {
    let mut site = site();
    let privacy = element(&site, "footer.privacy");

    site.handle_event(&Event::press(privacy));

    assert_eq!(
        site.scroll().requests(),
        &[ScrollRequest {
            y: 3120.0,
            animated: true
        }]
    );
    assert!(site.links().opened().is_empty());
}

#[test]
fn test_unmeasured_section_issues_no_scroll() {
    let mut site = Site::new(
        LinkRecorder::new(),
        LayoutScrollSurface::new().with_section("privacy", 3120.0),
        SiteOptions::default(),
    );
    let terms = element(&site, "footer.terms");

    site.handle_event(&Event::press(terms));
    assert!(site.scroll().requests().is_empty());
}

#[test]
fn test_features_round_trip() {
    let mut site = site();
    let link = element(&site, "footer.features");

    let action = site.handle_event(&Event::press(link));
    assert_eq!(action, Some(Action::Navigate(Route::Features)));
    assert_eq!(site.route(), Route::Features);
    assert_eq!(site.depth(), 2);

    let features = site.current().map(|s| s.route());
    assert_eq!(features, Some(Route::Features));
    assert!(site
        .current()
        .is_some_and(|s| s.stage().is_mounted() && s.stage().pending_timers() == 6));

    let back = element(&site, "header.back");
    assert_eq!(site.handle_event(&Event::press(back)), Some(Action::Back));
    assert_eq!(site.route(), Route::Home);
    assert_eq!(site.depth(), 1);

    // Home stayed mounted underneath
    assert!(site.current().is_some_and(|s| s.stage().is_mounted()));
}

#[test]
fn test_feature_cards_start_on_dense_stagger() {
    let mut screen = FeaturesScreen::default();
    screen.mount();

    let cards = screen.cards().to_vec();
    let mut started_at: Vec<Option<u32>> = vec![None; cards.len()];
    let mut elapsed = 0u32;
    loop {
        for (i, id) in cards.iter().enumerate() {
            let phase = screen.stage().animator(*id).map(|a| a.phase());
            if started_at[i].is_none() && phase == Some(EntrancePhase::Running) {
                started_at[i] = Some(elapsed);
            }
        }
        if elapsed >= 1000 {
            break;
        }
        screen.tick(10.0);
        elapsed += 10;
    }

    let expected: Vec<Option<u32>> = (0..7).map(|i| Some(i * 100)).collect();
    assert_eq!(started_at, expected);
}

#[test]
fn test_unmount_mid_cascade() {
    let mut screen = FeaturesScreen::default();
    screen.mount();
    screen.tick(250.0);
    screen.unmount();

    assert_eq!(screen.stage().pending_timers(), 0);
    screen.tick(2000.0);

    for (i, id) in screen.cards().iter().enumerate() {
        let state = screen.stage().state(*id);
        if i < 3 {
            // Already running at unmount, so they finish
            assert!(state.is_some_and(|s| s.is_revealed()), "card {i}");
        } else {
            assert_eq!(state.map(|s| s.opacity), Some(0.0), "card {i}");
        }
    }
}

#[test]
fn test_unmount_stops_pulses() {
    let mut screen = LandingScreen::default();
    screen.mount();
    screen.tick(700.0);

    let logo = screen.hero_logo();
    assert!(screen.stage().animator(logo).is_some_and(|a| a.is_pulsing()));

    screen.unmount();
    assert!(!screen.stage().animator(logo).is_some_and(|a| a.is_pulsing()));
    assert_eq!(screen.stage().state(logo).map(|s| s.scale), Some(1.0));
    assert_eq!(screen.stage().pending_timers(), 0);
}

#[test]
fn test_events_ignored_after_unmount() {
    let mut site = site();
    let button = element(&site, "hero.button");
    site.shutdown();
    assert_eq!(site.handle_event(&Event::press(button)), None);
    assert!(site.links().opened().is_empty());
}

#[test]
fn test_reduced_motion_snaps_on_mount() {
    let mut screen = LandingScreen::new(SiteLinks::default(), MotionPreference::Reduced);
    screen.mount();

    assert_eq!(screen.stage().pending_timers(), 0);
    assert!(!screen.is_animating());
    for element in screen.snapshot() {
        assert_eq!(element.opacity, 1.0, "{}", element.label);
        assert_eq!(element.offset, 0.0, "{}", element.label);
        assert_eq!(element.scale, 1.0, "{}", element.label);
    }
}
