//! Read-only rendering contract
//!
//! The physics never draws. Each frame the external driver hands a
//! [`Surface`] to [`crate::sim::Simulation::draw`] (or per body to
//! [`crate::sim::Body::draw`]) and receives one filled-circle call per disc.
//! Nothing here feeds back into the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color carried by each body.
///
/// Opaque to the physics: it is stored at construction and read back at draw
/// time, never inspected in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0, 1]
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// Render target abstraction.
///
/// Implementors receive one call per disc per frame, in body list order.
pub trait Surface {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}

/// A [`Surface`] that records every call, for tests and headless drivers.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub circles: Vec<(DVec2, f64, Color)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.circles.push((center, radius, color));
    }
}
