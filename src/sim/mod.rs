//! Physics core
//!
//! All simulation logic lives here. This module is pure and deterministic:
//! - One tick per invocation, one simulated time unit per tick (no wall
//!   clock, no delta time - simulation speed is the caller's frame rate)
//! - Stable body order (pairs resolve in index order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod tick;

pub use body::Body;
pub use collision::resolve;
pub use tick::Simulation;
