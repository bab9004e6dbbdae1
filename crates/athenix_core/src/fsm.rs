//! State Machines
//!
//! Flat, table-driven state machines for element interaction states. A
//! machine maps `(state, event)` to the next state; events with no entry are
//! dropped. Callers react to the [`Transition`] that `send` hands back rather
//! than registering hooks.
//!
//! The [`press`] module defines the two-state machine every pressable
//! element uses to keep press-in/press-out pairs consistent.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// Recent transitions kept per machine
pub const HISTORY_LIMIT: usize = 16;

/// A transition taken (or declared) by a machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
}

impl Transition {
    pub const fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self { from, event, to }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial: StateId,
    table: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachineBuilder {
    pub fn new(initial: StateId) -> Self {
        Self {
            initial,
            table: FxHashMap::default(),
        }
    }

    /// Declare `from --event--> to`. A later declaration for the same
    /// `(from, event)` replaces the earlier one.
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        if let Some(previous) = self.table.insert((from, event), to) {
            tracing::debug!(from, event, previous, to, "fsm transition redeclared");
        }
        self
    }

    pub fn transition(self, transition: Transition) -> Self {
        self.on(transition.from, transition.event, transition.to)
    }

    pub fn build(self) -> StateMachine {
        StateMachine {
            state: self.initial,
            initial: self.initial,
            table: self.table,
            history: SmallVec::new(),
        }
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine {
    state: StateId,
    initial: StateId,
    table: FxHashMap<(StateId, EventId), StateId>,
    history: SmallVec<[Transition; HISTORY_LIMIT]>,
}

impl StateMachine {
    pub fn new(initial: StateId, transitions: impl IntoIterator<Item = Transition>) -> Self {
        transitions
            .into_iter()
            .fold(StateMachineBuilder::new(initial), StateMachineBuilder::transition)
            .build()
    }

    pub fn builder(initial: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial)
    }

    pub fn current_state(&self) -> StateId {
        self.state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.state == state
    }

    /// The most recent transitions, oldest first
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    pub fn can_send(&self, event: EventId) -> bool {
        self.table.contains_key(&(self.state, event))
    }

    /// Feed an event. Returns the transition taken, or `None` when the
    /// current state has no entry for it.
    pub fn send(&mut self, event: EventId) -> Option<Transition> {
        let to = *self.table.get(&(self.state, event))?;
        let transition = Transition::new(self.state, event, to);

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(transition);
        self.state = to;

        tracing::trace!(from = transition.from, event, to, "fsm transition");
        Some(transition)
    }

    /// Return to the initial state without recording a transition
    pub fn reset(&mut self) {
        self.state = self.initial;
    }
}

/// Press interaction states shared by buttons and pressable cards.
pub mod press {
    use super::{EventId, StateId, StateMachine};

    pub const IDLE: StateId = 0;
    pub const PRESSED: StateId = 1;

    pub const PRESS_IN: EventId = 1;
    pub const PRESS_OUT: EventId = 2;

    /// Idle <-> Pressed. A second press-in while pressed, or a press-out
    /// while idle, has no transition and is dropped.
    pub fn machine() -> StateMachine {
        StateMachine::builder(IDLE)
            .on(IDLE, PRESS_IN, PRESSED)
            .on(PRESSED, PRESS_OUT, IDLE)
            .build()
    }
}
