//! Landing screen
//!
//! Hero, highlights, about, testimonials, pricing, closing call-to-action,
//! legal sections and footer. Card rows cascade in with a 200ms stagger.

use athenix_animation::{MotionPreference, RevealAnimator, StaggerPolicy};
use athenix_core::ElementId;
use athenix_platform::Route;

use crate::content::{LegalAnchor, HIGHLIGHTS, PRICING, TESTIMONIALS};
use crate::screen::{Action, Screen, SiteLinks};
use crate::stage::Stage;
use crate::tuning::MotionTuning;

pub struct LandingScreen {
    stage: Stage,
    links: SiteLinks,
    hero: ElementId,
    hero_logo: ElementId,
    hero_button: ElementId,
    highlights: [ElementId; 3],
    about: ElementId,
    testimonials: [ElementId; 3],
    pricing: [ElementId; 3],
    cta_button: ElementId,
    legal_links: [ElementId; 3],
    contact_link: ElementId,
    features_link: ElementId,
}

impl LandingScreen {
    pub const STAGGER: StaggerPolicy = StaggerPolicy::SPARSE;

    /// The about section fades in shortly after the hero
    pub const ABOUT_DELAY_MS: u32 = 300;

    pub fn new(links: SiteLinks, motion: MotionPreference) -> Self {
        Self::with_tuning(links, motion, MotionTuning::default())
    }

    pub fn with_tuning(links: SiteLinks, motion: MotionPreference, tuning: MotionTuning) -> Self {
        let mut stage = Stage::new(motion);
        let reveal = move |id| RevealAnimator::new(id, tuning.landing);

        let hero = stage.add("hero", Action::None, reveal);
        let hero_logo = stage.add("hero.logo", Action::None, |id| {
            RevealAnimator::visible(id).with_pulse(tuning.hero_pulse)
        });
        let hero_button = stage.add("hero.button", Action::OpenApp, |id| {
            RevealAnimator::visible(id).with_press(tuning.primary_press)
        });

        let highlights = std::array::from_fn(|i| {
            stage.add(format!("highlights.{}", slug(HIGHLIGHTS[i].title)), Action::None, reveal)
        });

        let about = stage.add("about", Action::None, reveal);

        let testimonials = std::array::from_fn(|i| {
            stage.add(
                format!("testimonials.{}", slug(TESTIMONIALS[i].author)),
                Action::None,
                reveal,
            )
        });

        let pricing = std::array::from_fn(|i| {
            stage.add(
                format!("pricing.{}", slug(PRICING[i].title)),
                Action::OpenApp,
                |id| reveal(id).with_press(tuning.card_press),
            )
        });

        let cta_button = stage.add("cta.button", Action::OpenApp, |id| {
            RevealAnimator::visible(id)
                .with_press(tuning.primary_press)
                .with_pulse(tuning.cta_pulse)
        });

        let legal_links = LegalAnchor::ALL.map(|anchor| {
            stage.add(
                format!("footer.{}", anchor.id()),
                Action::ScrollTo(anchor),
                RevealAnimator::visible,
            )
        });
        let contact_link = stage.add("footer.contact", Action::Email, RevealAnimator::visible);
        let features_link = stage.add(
            "footer.features",
            Action::Navigate(Route::Features),
            RevealAnimator::visible,
        );

        Self {
            stage,
            links,
            hero,
            hero_logo,
            hero_button,
            highlights,
            about,
            testimonials,
            pricing,
            cta_button,
            legal_links,
            contact_link,
            features_link,
        }
    }

    pub fn hero(&self) -> ElementId {
        self.hero
    }

    pub fn hero_logo(&self) -> ElementId {
        self.hero_logo
    }

    /// "Launch Athenix App" in the hero
    pub fn launch_button(&self) -> ElementId {
        self.hero_button
    }

    pub fn highlight_cards(&self) -> &[ElementId] {
        &self.highlights
    }

    pub fn about(&self) -> ElementId {
        self.about
    }

    pub fn testimonial_cards(&self) -> &[ElementId] {
        &self.testimonials
    }

    pub fn pricing_cards(&self) -> &[ElementId] {
        &self.pricing
    }

    pub fn cta_button(&self) -> ElementId {
        self.cta_button
    }

    pub fn legal_link(&self, anchor: LegalAnchor) -> ElementId {
        match anchor {
            LegalAnchor::Privacy => self.legal_links[0],
            LegalAnchor::Terms => self.legal_links[1],
            LegalAnchor::Disclaimer => self.legal_links[2],
        }
    }

    pub fn contact_link(&self) -> ElementId {
        self.contact_link
    }

    pub fn features_link(&self) -> ElementId {
        self.features_link
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new(SiteLinks::default(), MotionPreference::Full)
    }
}

impl Screen for LandingScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn links(&self) -> &SiteLinks {
        &self.links
    }

    fn mount(&mut self) {
        if self.stage.is_mounted() {
            return;
        }
        tracing::debug!(elements = self.stage.len(), "mounting landing screen");

        self.stage.reveal(self.hero, 0);
        self.stage.pulse(self.hero_logo);
        self.stage.reveal_row(&self.highlights, Self::STAGGER);
        self.stage.reveal(self.about, Self::ABOUT_DELAY_MS);
        self.stage.reveal_row(&self.testimonials, Self::STAGGER);
        self.stage.reveal_row(&self.pricing, Self::STAGGER);
        self.stage.pulse(self.cta_button);
        self.stage.set_mounted();
    }
}

/// Lowercase ascii label fragment: "Marcus O." -> "marcus-o"
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}
