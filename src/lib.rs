//! Presentation-state controller for a trending-movies list screen.
//!
//! The crate wires a pure state/event reducer to one side-effecting
//! feedback loop (the trending fetch) and publishes every state change
//! to the embedding view layer. Rendering and navigation live in the
//! host application; this crate only owns the screen's state machine.

pub mod api;
pub mod config;
pub mod logging;
pub mod ui;
