//! Drift Discs headless demo driver
//!
//! Stands in for the animation-frame loop of a real frontend: paces itself
//! at a fixed frame rate, calls `tick` once per frame with the current
//! bounds, and reads the bodies back through the `Surface` contract.
//!
//! Usage: `drift-discs [seed] [width] [height] [frames]`
//! (`frames = 0` runs until interrupted).

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use drift_discs::consts::DEMO_FRAME_RATE;
use drift_discs::render::RecordingSurface;
use drift_discs::scene::Scene;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = parse_or(args.next(), 42);
    let width: f64 = parse_or(args.next(), 1280.0);
    let height: f64 = parse_or(args.next(), 720.0);
    let frames: u64 = parse_or(args.next(), 600);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut sim = Scene::default().spawn(width, height, &mut rng);
    log::info!(
        "drift-discs: seed {seed}, bounds {width}x{height}, {} bodies",
        sim.bodies().len()
    );

    let frame_budget = Duration::from_secs(1) / DEMO_FRAME_RATE;
    let mut surface = RecordingSurface::new();

    while frames == 0 || sim.time_ticks() < frames {
        let frame_start = Instant::now();

        sim.tick(width, height);

        // Read-out once a second, the way a renderer would every frame
        if sim.time_ticks() % u64::from(DEMO_FRAME_RATE) == 0 {
            surface.clear();
            sim.draw(&mut surface);
            for (center, radius, _color) in &surface.circles {
                log::info!(
                    "tick {:>6}: disc r={radius} at ({:7.1}, {:7.1})",
                    sim.time_ticks(),
                    center.x,
                    center.y
                );
            }
        }

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("drift-discs: done after {} ticks", sim.time_ticks());
}

fn parse_or<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}
