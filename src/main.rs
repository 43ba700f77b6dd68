//! Cube Dodge entry point
//!
//! Headless reference host: drives the simulation at display cadence with a
//! small dodge autopilot standing in for keyboard input, logs score changes,
//! and stops scheduling ticks once the run ends. A graphical host would do
//! the same, reading body transforms off the world after each tick.

use std::time::{Duration, Instant};

use cube_dodge::consts::*;
use cube_dodge::sim::{GamePhase, TickInput, World, tick};

const TICK_RATE: u32 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut seed = 42u64;
    let mut snapshot = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args
                    .next()
                    .ok_or("--seed requires a value")?
                    .parse::<u64>()?;
            }
            "--snapshot" => snapshot = true,
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let mut world = World::new(seed)?;
    log::info!("starting run with seed {seed}");

    let frame_budget = Duration::from_secs(1) / TICK_RATE;
    let mut last_score = 0;
    loop {
        let frame_start = Instant::now();

        let input = autopilot(&world);
        let report = tick(&mut world, &input);

        if report.score != last_score {
            log::info!("score {}", report.score);
            last_score = report.score;
        }

        if report.just_ended {
            println!(
                "game over after {} frames - final score {}",
                world.frames, report.score
            );
            if snapshot {
                println!("{}", serde_json::to_string_pretty(&world)?);
            }
            break;
        }
        debug_assert_eq!(report.phase, GamePhase::Running);

        std::thread::sleep(frame_budget.saturating_sub(frame_start.elapsed()));
    }

    Ok(())
}

/// Stand-in for a human at the keyboard: sidestep the enemy that will reach
/// the player's track soonest, hop if it is already close, and drift back
/// toward the center of the ground when no threat is near.
fn autopilot(world: &World) -> TickInput {
    let mut input = TickInput::default();
    let player = &world.player;

    let threat = world
        .enemies
        .iter()
        .filter(|e| e.pos.z < player.pos.z)
        .max_by(|a, b| a.pos.z.total_cmp(&b.pos.z));

    match threat {
        Some(threat) if (threat.pos.x - player.pos.x).abs() < 1.5 => {
            // Same lane: step toward the wider side of the ground
            if threat.pos.x >= player.pos.x {
                input.left = true;
            } else {
                input.right = true;
            }
            if player.pos.z - threat.pos.z < 3.0 {
                input.jump = true;
            }
        }
        _ => {
            // No immediate threat: re-center
            if player.pos.x > 0.5 {
                input.left = true;
            } else if player.pos.x < -0.5 {
                input.right = true;
            }
        }
    }

    // Stay on the slab
    let half_width = GROUND_SIZE.x / 2.0 - PLAYER_SIZE.x;
    if player.pos.x < -half_width {
        input.left = false;
        input.right = true;
    } else if player.pos.x > half_width {
        input.right = false;
        input.left = true;
    }

    input
}
