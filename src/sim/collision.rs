//! Pairwise elastic disc collision
//!
//! Discrete detection: two discs interact iff their centers are closer than
//! the sum of their radii at the instant of the check. Response is the exact
//! 1-D elastic formula applied in the contact frame (normal along the line
//! of centers, tangent perpendicular), so momentum and kinetic energy are
//! both conserved along the normal and tangential motion passes through
//! untouched. A positional nudge then removes the residual overlap so
//! repeated ticks don't leave the pair interpenetrating.

use glam::DVec2;

use super::body::Body;

/// Resolve a potential collision between two discs.
///
/// No-op when the discs are separated (`distance >= r_a + r_b`). On contact,
/// overwrites both velocities with the post-collision values and pushes each
/// body `overlap / 2` apart along the contact normal. Radius, mass and color
/// are never touched.
///
/// Coincident centers leave the contact direction undefined; the fallback is
/// to resolve along the x axis rather than let the normal computation
/// produce NaN.
pub fn resolve(a: &mut Body, b: &mut Body) {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance >= a.radius() + b.radius() {
        return;
    }

    let theta = if distance > 0.0 {
        delta.y.atan2(delta.x)
    } else {
        0.0
    };
    let (sin, cos) = theta.sin_cos();

    // Rotate both velocities into the contact frame: n along the line of
    // centers, t perpendicular.
    let a_n = a.vel.x * cos + a.vel.y * sin;
    let a_t = a.vel.y * cos - a.vel.x * sin;
    let b_n = b.vel.x * cos + b.vel.y * sin;
    let b_t = b.vel.y * cos - b.vel.x * sin;

    // 1-D elastic collision along the normal only.
    let total_mass = a.mass() + b.mass();
    let a_n_after = ((a.mass() - b.mass()) * a_n + 2.0 * b.mass() * b_n) / total_mass;
    let b_n_after = ((b.mass() - a.mass()) * b_n + 2.0 * a.mass() * a_n) / total_mass;

    // Rotate back to world axes.
    a.vel = DVec2::new(a_n_after * cos - a_t * sin, a_t * cos + a_n_after * sin);
    b.vel = DVec2::new(b_n_after * cos - b_t * sin, b_t * cos + b_n_after * sin);

    // Split the overlap evenly along the unit normal. May transiently push a
    // body outside the bounds; the next advance clamps it back.
    let overlap = a.radius() + b.radius() - distance;
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        DVec2::X
    };
    let separation = normal * (overlap * 0.5);
    a.pos -= separation;
    b.pos += separation;
}
