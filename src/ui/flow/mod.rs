//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits and the store that drive a
//! screen's state machine.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ View
//!    ↑                    │
//!    └───── Feedback ◄────┘
//! ```
//!
//! - **State**: Immutable representation of the screen state
//! - **Event**: User actions or effect outcomes
//! - **Reducer**: Pure function that transforms state based on events
//! - **Feedback**: Maps each new state to side-effecting work whose
//!   outcome re-enters the loop as further events
//! - **Store**: The single task that owns the state and runs the loop

mod feedback;
mod reducer;
mod store;

pub use feedback::{EventSink, Feedback};
pub use reducer::{Event, Reducer, State};
pub use store::Store;
