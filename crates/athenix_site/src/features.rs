//! Features screen
//!
//! Header with a back button, then seven how-to cards that cascade in with a
//! 100ms stagger.

use athenix_animation::{MotionPreference, RevealAnimator, StaggerPolicy};
use athenix_core::ElementId;
use athenix_platform::Route;

use crate::content::{FeatureGuide, FEATURE_GUIDES, FEATURE_GUIDE_COUNT};
use crate::screen::{Action, Screen, SiteLinks};
use crate::stage::Stage;
use crate::tuning::MotionTuning;

pub struct FeaturesScreen {
    stage: Stage,
    links: SiteLinks,
    header: ElementId,
    back_button: ElementId,
    cards: [ElementId; FEATURE_GUIDE_COUNT],
}

impl FeaturesScreen {
    pub const STAGGER: StaggerPolicy = StaggerPolicy::DENSE;

    pub fn new(links: SiteLinks, motion: MotionPreference) -> Self {
        Self::with_tuning(links, motion, MotionTuning::default())
    }

    pub fn with_tuning(links: SiteLinks, motion: MotionPreference, tuning: MotionTuning) -> Self {
        let mut stage = Stage::new(motion);

        let header = stage.add("header", Action::None, |id| {
            RevealAnimator::new(id, tuning.features)
        });
        let back_button = stage.add("header.back", Action::Back, RevealAnimator::visible);
        let cards = std::array::from_fn(|i| {
            stage.add(format!("guide.{}", FEATURE_GUIDES[i].badge()), Action::None, |id| {
                RevealAnimator::new(id, tuning.features).with_press(tuning.card_press)
            })
        });

        Self {
            stage,
            links,
            header,
            back_button,
            cards,
        }
    }

    pub fn header(&self) -> ElementId {
        self.header
    }

    pub fn back_button(&self) -> ElementId {
        self.back_button
    }

    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    /// Cards paired with the guide each one shows
    pub fn guides(&self) -> impl Iterator<Item = (ElementId, &'static FeatureGuide)> + '_ {
        self.cards.iter().copied().zip(FEATURE_GUIDES.iter())
    }
}

impl Default for FeaturesScreen {
    fn default() -> Self {
        Self::new(SiteLinks::default(), MotionPreference::Full)
    }
}

impl Screen for FeaturesScreen {
    fn route(&self) -> Route {
        Route::Features
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
        tracing::debug!(cards = self.cards.len(), "mounting features screen");

        self.stage.reveal(self.header, 0);
        self.stage.reveal_row(&self.cards, Self::STAGGER);
        self.stage.set_mounted();
    }
}
