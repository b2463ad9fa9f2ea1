//! Void Rush headless demo runner
//!
//! Steps a session at a fixed 60 Hz with a scripted weaving input and logs a
//! diagnostics line once per simulated second. Useful for tuning configs and
//! watching the difficulty curve without a renderer attached.
//!
//! Usage: `void-rush [seed] [config.json]`

use glam::Vec2;

use void_rush::SimConfig;
use void_rush::consts::DEMO_DT;
use void_rush::sim::{GameState, SessionPhase, TickInput, tick};

/// Stop a run that survives this long (20 simulated minutes)
const MAX_FRAMES: u64 = 60 * 60 * 20;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let config = match args.next() {
        Some(path) => SimConfig::load(&path),
        None => SimConfig::default(),
    };

    log::info!("Void Rush demo starting, seed {seed}");
    let mut state = GameState::new(seed, config);

    let mut frame: u64 = 0;
    let mut next_report = 1.0;
    while frame < MAX_FRAMES {
        let input = TickInput {
            movement: scripted_weave(state.elapsed),
        };
        tick(&mut state, &input, DEMO_DT);
        frame += 1;

        if state.elapsed >= next_report {
            next_report += 1.0;
            let d = state.diagnostics();
            log::info!(
                "t={:>5.1}s speed={:>5.1} rate={:.2}/s active={}/{} eligible={} attempts={} parked={}",
                d.elapsed,
                d.speed,
                d.spawn_rate,
                d.active_hazards,
                d.pool_size,
                d.eligible_hazards,
                d.total_spawn_attempts,
                d.particles_parked,
            );
        }

        if state.phase == SessionPhase::GameOver {
            break;
        }
    }

    let d = state.diagnostics();
    match state.phase {
        SessionPhase::GameOver => println!(
            "Game over: hit hazard {} after {:.1}s ({} spawn attempts, top speed {:.0})",
            state.collided_with.unwrap_or_default(),
            d.elapsed,
            d.total_spawn_attempts,
            d.speed,
        ),
        SessionPhase::Running => println!(
            "Survived the full run: {:.1}s, {} spawn attempts",
            d.elapsed, d.total_spawn_attempts
        ),
    }
}

/// Deterministic weaving pattern standing in for a player
fn scripted_weave(t: f32) -> Vec2 {
    Vec2::new((t * 0.7).sin(), (t * 0.4).cos() * 0.5)
}
