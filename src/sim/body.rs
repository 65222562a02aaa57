//! A single rigid disc
//!
//! Position and velocity are in surface coordinates: origin top-left, x
//! right, y down. Radius and mass are fixed at construction; mass is the
//! area surrogate `radius²`, which is what biases the post-collision split
//! between unequal discs.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::render::{Color, Surface};

/// Mutable physical state of one disc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Center of the disc
    pub pos: DVec2,
    /// Displacement applied per tick (unconstrained in sign and magnitude)
    pub vel: DVec2,
    radius: f64,
    mass: f64,
    /// Render attribute, never read by the physics
    pub color: Color,
}

impl Body {
    /// Create a disc. `radius` must be strictly positive; mass is derived as
    /// `radius²` and neither changes afterwards.
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Color) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos,
            vel,
            radius,
            mass: radius * radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance one tick inside the given bounds.
    ///
    /// Integrates position, then reflects off each wall independently: a
    /// crossed wall negates that axis' velocity and clamps the center back
    /// into `[radius, extent - radius]`. A corner hit reflects both axes in
    /// the same call. Bounds may change between ticks (surface resize); no
    /// state depends on previous bounds.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos += self.vel;

        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= width {
            self.vel.x = -self.vel.x;
            self.pos.x = clamp_to_span(self.pos.x, self.radius, width);
        }

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= height {
            self.vel.y = -self.vel.y;
            self.pos.y = clamp_to_span(self.pos.y, self.radius, height);
        }
    }

    /// Emit this disc to the render surface. Pure read, no state change.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Clamp a center coordinate into `[radius, extent - radius]`.
///
/// When the disc cannot fit (`extent < 2 * radius`) that range is inverted;
/// park the center at the midpoint instead of feeding `clamp` a reversed
/// interval.
#[inline]
fn clamp_to_span(center: f64, radius: f64, extent: f64) -> f64 {
    if extent < 2.0 * radius {
        extent / 2.0
    } else {
        center.clamp(radius, extent - radius)
    }
}
