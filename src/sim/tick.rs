//! Per-frame simulation tick
//!
//! One call advances the whole world by one frame. Order matters:
//! spawn timers, player, platforms, coins, enemies, particles, fall check,
//! difficulty.

use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::input::InputState;
use super::spawn::{spawn_coin, spawn_enemy, spawn_platform};
use super::state::World;
use crate::consts::*;

/// The two time sources a tick consumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Milliseconds since the previous frame (drives physics and timers)
    pub elapsed_ms: f32,
    /// Absolute wall-clock milliseconds (drives cosmetic oscillation)
    pub wall_clock_ms: f64,
}

impl FrameTime {
    pub fn new(elapsed_ms: f32, wall_clock_ms: f64) -> Self {
        Self {
            elapsed_ms,
            wall_clock_ms,
        }
    }
}

/// Advance the world by one frame. No-op unless running.
pub fn tick(world: &mut World, input: &InputState, time: FrameTime) {
    if !world.is_running() {
        return;
    }
    world.ticks += 1;
    let dt = time.elapsed_ms;

    world.platform_timer += dt;
    world.coin_timer += dt;
    world.enemy_timer += dt;

    if world.platform_timer > PLATFORM_SPAWN_MS {
        spawn_platform(world);
        world.platform_timer = 0.0;
    }
    if world.coin_timer > COIN_SPAWN_MS {
        spawn_coin(world);
        world.coin_timer = 0.0;
    }
    if world.enemy_timer > ENEMY_SPAWN_MS / world.game_speed {
        spawn_enemy(world);
        world.enemy_timer = 0.0;
    }

    let bounds = world.bounds();
    let cull_y = bounds.y + FALL_MARGIN;

    world.player.update(dt, input, &world.platforms, bounds);

    for platform in &mut world.platforms {
        platform.update(bounds.x);
    }
    world.platforms.retain(|p| p.pos.y < cull_y);

    // Coins: collect after the pass so scoring can borrow the world
    let player_box = world.player.aabb();
    let mut collected = Vec::new();
    world.coins.retain_mut(|coin| {
        coin.update(time.wall_clock_ms);
        if coin.aabb().overlaps(&player_box) {
            collected.push(coin.aabb().center());
            false
        } else {
            true
        }
    });
    for center in collected {
        world.collect_coin(center);
    }

    // Enemies: a hit makes the player invincible, which must shield them from
    // the rest of this pass, so resolve in place
    let mut i = 0;
    while i < world.enemies.len() {
        let enemy = &mut world.enemies[i];
        enemy.update(time.wall_clock_ms);
        if !world.player.invincible && enemy.collides_with(&world.player) {
            let enemy = world.enemies.remove(i);
            world.damage_player(enemy.aabb().center());
            continue;
        }
        i += 1;
    }
    world.enemies.retain(|e| e.in_bounds(bounds.x));

    for particle in &mut world.particles {
        particle.update();
    }
    world.particles.retain(|p| p.is_alive());

    if world.player.pos.y > cull_y {
        world.lose_life();
    }

    world.update_difficulty();
}
