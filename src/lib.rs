//! Drift Discs - an ambient two-disc collision toy
//!
//! Core modules:
//! - `sim`: the physics (explicit-Euler integration, wall bounces, pairwise
//!   elastic disc collisions with overlap correction)
//! - `scene`: data-driven initial layouts with seeded velocity randomization
//! - `render`: the read-only contract a renderer consumes each frame
//!
//! The crate owns no clock and no surface. An external driver calls
//! [`sim::Simulation::tick`] once per frame with the current bounds and then
//! reads each body back through [`render::Surface`]; see `src/main.rs` for a
//! headless example driver.

pub mod render;
pub mod scene;
pub mod sim;

pub use render::{Color, Surface};
pub use scene::{BodySpec, Scene};
pub use sim::{Body, Simulation};

/// Simulation defaults
pub mod consts {
    use crate::render::Color;

    /// Disc radius used by the stock two-body scene
    pub const DISC_RADIUS: f64 = 40.0;

    /// Muted orange, as rendered by the stock scene
    pub const ORANGE: Color = Color::rgba(255, 165, 100, 0.6);
    /// Muted cyan, as rendered by the stock scene
    pub const CYAN: Color = Color::rgba(100, 200, 220, 0.6);

    /// Frame rate the demo driver paces itself at
    pub const DEMO_FRAME_RATE: u32 = 60;
}
