//! Per-frame simulation tick
//!
//! One tick per rendered frame, driven by the host. Each tick samples the
//! input snapshot, integrates the player, retires or advances every enemy,
//! maybe spawns a new one, and reports score and phase back to the host.

use super::body::Body;
use super::collision::overlaps;
use super::state::{GamePhase, TickReport, World};
use crate::consts::*;

/// Input snapshot for a single tick
///
/// Direction flags are level-triggered "held" states; releasing a key resets
/// that axis contribution to zero. `jump` is edge-triggered: the host sets it
/// on key-down and clears it once a tick has consumed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub jump: bool,
}

/// Advance the world by one tick.
///
/// Ticks received after game over leave the world untouched and report the
/// frozen score, so a host may keep rendering the terminal scene.
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    if world.phase == GamePhase::GameOver {
        return TickReport {
            score: world.score,
            phase: GamePhase::GameOver,
            just_ended: false,
        };
    }

    apply_input(&mut world.player, input);
    world.player.integrate(&world.ground);

    // Retire-and-score happens before an enemy integrates; survivors are
    // collected into a fresh list so a removal never skips the next enemy.
    let mut hit_player = false;
    let ground_front = world.ground.faces().front;
    let live = std::mem::take(&mut world.enemies);
    let mut survivors = Vec::with_capacity(live.len());
    for mut enemy in live {
        if enemy.faces().back >= ground_front {
            world.score += 1;
            log::debug!("enemy cleared the track, score {}", world.score);
            continue;
        }
        enemy.integrate(&world.ground);
        // The player is the moving box here: its vertical velocity feeds the
        // collision lookahead
        if overlaps(&world.player, &enemy) {
            hit_player = true;
        }
        survivors.push(enemy);
    }
    world.enemies = survivors;

    if let Some(enemy) = world.spawner.maybe_spawn(world.frames, &mut world.rng) {
        world.enemies.push(enemy);
    }

    world.frames = world.frames.wrapping_add(1);

    if hit_player {
        world.phase = GamePhase::GameOver;
        log::info!(
            "game over at frame {}, final score {}",
            world.frames,
            world.score
        );
    }

    TickReport {
        score: world.score,
        phase: world.phase,
        just_ended: hit_player,
    }
}

/// Map the input snapshot onto the player's instantaneous velocity.
///
/// The jump impulse only lands when the player sits at ground rest height.
fn apply_input(player: &mut Body, input: &TickInput) {
    player.vel.x = 0.0;
    player.vel.z = 0.0;
    if input.left {
        player.vel.x = -PLAYER_MOVE_SPEED;
    }
    if input.right {
        player.vel.x = PLAYER_MOVE_SPEED;
    }
    if input.forward {
        player.vel.z = -PLAYER_MOVE_SPEED;
    }
    if input.backward {
        player.vel.z = PLAYER_MOVE_SPEED;
    }
    if input.jump && player.pos.y < JUMP_REST_EPSILON {
        player.vel.y = JUMP_VELOCITY;
    }
}
