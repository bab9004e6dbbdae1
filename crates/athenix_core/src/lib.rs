//! Athenix Core
//!
//! Foundational primitives shared by the Athenix presentation crates:
//!
//! - **Element identity**: stable ids for animated elements, used as owners
//!   of scheduled work so teardown can cancel everything an element started
//! - **Events**: the small vocabulary of lifecycle and press events a host
//!   surface delivers to a screen
//! - **State Machines**: flat state machines for press interaction states
//!
//! # Example
//!
//! ```rust
//! use athenix_core::fsm::press;
//!
//! let mut machine = press::machine();
//! assert!(machine.is_in(press::IDLE));
//!
//! machine.send(press::PRESS_IN);
//! assert!(machine.is_in(press::PRESSED));
//! ```

pub mod events;
pub mod fsm;

pub use events::{ElementId, Event, EventType};
pub use fsm::{EventId, StateId, StateMachine, StateMachineBuilder, Transition};
