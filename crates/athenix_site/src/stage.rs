//! Element registry shared by both screens
//!
//! A stage owns every animated element of one screen instance together with
//! the scheduler their delayed entrances run on. Element ids are indices
//! into the stage, so they are only meaningful within it.

use athenix_animation::{
    AnimationScheduler, AnimationState, EntrancePhase, MotionPreference, RevealAnimator,
    StaggerPolicy,
};
use athenix_core::ElementId;
use serde::Serialize;

use crate::screen::Action;

struct StageElement {
    label: String,
    action: Action,
    animator: RevealAnimator,
}

/// Per-frame view of one element, for previews and logging
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub id: u32,
    pub label: String,
    pub phase: &'static str,
    pub opacity: f32,
    pub offset: f32,
    pub scale: f32,
}

pub struct Stage {
    scheduler: AnimationScheduler,
    elements: Vec<StageElement>,
    motion: MotionPreference,
    mounted: bool,
}

impl Stage {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            scheduler: AnimationScheduler::new(),
            elements: Vec::new(),
            motion,
            mounted: false,
        }
    }

    /// Register an element. `build` receives the id the element will have.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        action: Action,
        build: impl FnOnce(ElementId) -> RevealAnimator,
    ) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        let animator = build(id).with_motion(self.motion);
        self.elements.push(StageElement {
            label: label.into(),
            action,
            animator,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Apply a new motion preference to every element, settling whatever is
    /// mid-flight when motion becomes reduced
    pub fn set_motion(&mut self, motion: MotionPreference) {
        if motion == self.motion {
            return;
        }
        tracing::debug!(?motion, "motion preference changed");
        self.motion = motion;
        for element in &mut self.elements {
            element.animator.set_motion(&mut self.scheduler, motion);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn set_mounted(&mut self) {
        self.mounted = true;
    }

    pub fn animator(&self, id: ElementId) -> Option<&RevealAnimator> {
        self.elements.get(id.0 as usize).map(|e| &e.animator)
    }

    fn animator_mut(&mut self, id: ElementId) -> Option<&mut RevealAnimator> {
        self.elements.get_mut(id.0 as usize).map(|e| &mut e.animator)
    }

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id.0 as usize).map(|e| e.label.as_str())
    }

    pub fn action(&self, id: ElementId) -> Option<Action> {
        self.elements.get(id.0 as usize).map(|e| e.action)
    }

    pub fn state(&self, id: ElementId) -> Option<AnimationState> {
        self.animator(id).map(RevealAnimator::state)
    }

    /// Find an element by label
    pub fn find(&self, label: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.label == label)
            .map(|i| ElementId(i as u32))
    }

    pub fn reveal(&mut self, id: ElementId, delay_ms: u32) {
        let Some(element) = self.elements.get_mut(id.0 as usize) else {
            return;
        };
        element
            .animator
            .start_entrance(&mut self.scheduler, delay_ms);
    }

    /// Reveal a row with `index * step` delays
    pub fn reveal_row(&mut self, ids: &[ElementId], stagger: StaggerPolicy) {
        for (i, id) in ids.iter().enumerate() {
            self.reveal(*id, stagger.delay_for(i));
        }
    }

    pub fn pulse(&mut self, id: ElementId) {
        if let Some(animator) = self.animator_mut(id) {
            animator.start_pulse();
        }
    }

    pub fn press_in(&mut self, id: ElementId) {
        if let Some(animator) = self.animator_mut(id) {
            animator.on_press_start();
        }
    }

    pub fn press_out(&mut self, id: ElementId) {
        if let Some(animator) = self.animator_mut(id) {
            animator.on_press_end();
        }
    }

    /// Advance all elements, then start entrances whose delay elapsed this
    /// frame (with the leftover frame time already applied).
    pub fn tick(&mut self, dt_ms: f32) {
        for element in &mut self.elements {
            element.animator.tick(dt_ms);
        }
        for fired in self.scheduler.advance(dt_ms) {
            if let Some(animator) = self.animator_mut(fired.owner) {
                animator.on_timer(&fired);
            }
        }
    }

    /// Cancel every delayed start and loop. Entrances already running are
    /// left to finish.
    pub fn teardown(&mut self) {
        for element in &mut self.elements {
            element.animator.teardown(&mut self.scheduler);
        }
        self.mounted = false;
        tracing::debug!(
            elements = self.elements.len(),
            pending = self.scheduler.pending_count(),
            "stage torn down"
        );
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn is_animating(&self) -> bool {
        self.elements.iter().any(|e| e.animator.is_animating())
    }

    /// No entrance is pending or running. Pulses may still loop.
    pub fn entrances_settled(&self) -> bool {
        self.elements.iter().all(|e| {
            !matches!(
                e.animator.phase(),
                EntrancePhase::Pending(_) | EntrancePhase::Running
            )
        })
    }

    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let state = e.animator.state();
                ElementSnapshot {
                    id: i as u32,
                    label: e.label.clone(),
                    phase: match e.animator.phase() {
                        EntrancePhase::Idle => "idle",
                        EntrancePhase::Pending(_) => "pending",
                        EntrancePhase::Running => "running",
                        EntrancePhase::Settled => "settled",
                    },
                    opacity: state.opacity,
                    offset: state.offset,
                    scale: state.scale,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athenix_animation::RevealConfig;

    #[test]
    fn test_ids_are_sequential() {
        let mut stage = Stage::new(MotionPreference::Full);
        let a = stage.add("a", Action::None, RevealAnimator::visible);
        let b = stage.add("b", Action::OpenApp, |id| {
            RevealAnimator::new(id, RevealConfig::landing())
        });

        assert_eq!((a, b), (ElementId(0), ElementId(1)));
        assert_eq!(stage.find("b"), Some(b));
        assert_eq!(stage.action(b), Some(Action::OpenApp));
        assert_eq!(stage.animator(b).map(|a| a.id()), Some(b));
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut stage = Stage::new(MotionPreference::Full);
        stage.reveal(ElementId(9), 0);
        stage.press_in(ElementId(9));
        assert!(stage.state(ElementId(9)).is_none());
    }

    #[test]
    fn test_reduced_motion_mid_cascade() {
        let mut stage = Stage::new(MotionPreference::Full);
        let ids: Vec<_> = (0..3)
            .map(|i| {
                stage.add(format!("card.{i}"), Action::None, |id| {
                    RevealAnimator::new(id, RevealConfig::landing())
                })
            })
            .collect();
        stage.reveal_row(&ids, StaggerPolicy::SPARSE);
        stage.tick(250.0);

        stage.set_motion(MotionPreference::Reduced);

        assert_eq!(stage.pending_timers(), 0);
        assert!(stage.entrances_settled());
        assert!(ids
            .iter()
            .all(|id| stage.state(*id).is_some_and(|s| s.is_revealed())));
    }

    #[test]
    fn test_teardown_clears_timers() {
        let mut stage = Stage::new(MotionPreference::Full);
        let ids: Vec<_> = (0..3)
            .map(|i| {
                stage.add(format!("card.{i}"), Action::None, |id| {
                    RevealAnimator::new(id, RevealConfig::landing())
                })
            })
            .collect();

        stage.reveal_row(&ids, StaggerPolicy::SPARSE);
        assert_eq!(stage.pending_timers(), 2);

        stage.teardown();
        assert_eq!(stage.pending_timers(), 0);
        stage.tick(1000.0);
        assert_eq!(stage.state(ids[2]).map(|s| s.opacity), Some(0.0));
    }
}
