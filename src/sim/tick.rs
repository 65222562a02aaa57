//! Per-frame simulation step
//!
//! The simulation owns an ordered body list and nothing else. One tick is
//! one advance pass followed by one collision pass over all unordered pairs;
//! the caller drives it once per frame and reads the bodies back afterwards.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision;
use crate::render::Surface;

/// An ordered, fixed-size collection of discs plus the tick driver.
///
/// Order only matters as the tie-break for same-tick multi-collisions: pairs
/// resolve in `(i, j)` index order with `i < j`, so a later resolution sees
/// the velocities already updated by an earlier one. Bodies are supplied
/// once at construction; there is no add/remove during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    bodies: Vec<Body>,
    time_ticks: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            time_ticks: 0,
        }
    }

    /// Advance the whole simulation by one tick inside the given bounds.
    ///
    /// Bounds are re-supplied every call, so a surface resize needs no
    /// callback: the next tick clamps any body the new bounds strand
    /// outside.
    pub fn tick(&mut self, width: f64, height: f64) {
        for body in &mut self.bodies {
            body.advance(width, height);
        }

        // Every unordered pair exactly once, in index order.
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            for other in tail.iter_mut() {
                collision::resolve(&mut head[i], other);
            }
        }

        self.time_ticks += 1;
    }

    /// Body list in iteration order, for rendering.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Ticks elapsed since construction.
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Emit every body to the render surface, in list order.
    pub fn draw(&self, surface: &mut impl Surface) {
        for body in &self.bodies {
            body.draw(surface);
        }
    }
}
