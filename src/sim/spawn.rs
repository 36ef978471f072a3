//! Procedural generation of platforms, coins and enemies
//!
//! All randomness comes from the world's seeded RNG. Positions are drawn so
//! every spawned entity starts inside the canvas horizontally (enemies start
//! just outside the edge they walk in from).

use glam::Vec2;
use rand::Rng;

use super::entities::{Coin, Enemy, Platform};
use super::state::World;
use crate::consts::*;

/// Ground plus a column of plain platforms stepping up from the bottom
pub fn create_initial_platforms(world: &mut World) {
    let (width, height) = (world.width(), world.height());
    world.platforms.push(Platform::ground(width, height));

    for i in 0..INITIAL_PLATFORM_COUNT {
        let w = INITIAL_PLATFORM_MIN_WIDTH
            + world.rng.random::<f32>() * (PLATFORM_MAX_WIDTH - INITIAL_PLATFORM_MIN_WIDTH);
        let x = world.rng.random::<f32>() * (width - w);
        let y = height - SPAWN_OFFSET_Y - i as f32 * INITIAL_PLATFORM_SPACING;
        world.platforms.push(Platform::plain(Vec2::new(x, y), w));
    }
}

/// New platform just above the top edge: 70% plain, 15% spring, 15% moving
pub fn spawn_platform(world: &mut World) {
    let w = PLATFORM_MIN_WIDTH + world.rng.random::<f32>() * (PLATFORM_MAX_WIDTH - PLATFORM_MIN_WIDTH);
    let x = world.rng.random::<f32>() * (world.width() - w);
    let pos = Vec2::new(x, PLATFORM_SPAWN_Y);

    let roll = world.rng.random::<f32>();
    let platform = if roll < PLAIN_PLATFORM_CHANCE {
        Platform::plain(pos, w)
    } else if roll < PLAIN_PLATFORM_CHANCE + SPRING_PLATFORM_CHANCE {
        Platform::spring(pos, w)
    } else {
        let speed = (world.rng.random::<f32>() - 0.5) * 2.0 * MOVING_PLATFORM_MAX_SPEED;
        Platform::moving(pos, w, speed)
    };

    log::debug!("Spawned {:?} platform at ({:.0}, {:.0})", platform.kind, x, pos.y);
    world.platforms.push(platform);
}

pub fn spawn_coin(world: &mut World) {
    let x = world.rng.random::<f32>() * (world.width() - COIN_SIZE);
    let y = world.rng.random::<f32>() * (world.height() - SPAWN_BOTTOM_CLEARANCE);
    world.coins.push(Coin::new(Vec2::new(x, y)));
}

/// Enemy entering from a random side, faster at higher levels
pub fn spawn_enemy(world: &mut World) {
    let x = if world.rng.random::<f32>() > 0.5 {
        -ENEMY_SPAWN_INSET
    } else {
        world.width() + ENEMY_SPAWN_INSET
    };
    let y = world.rng.random::<f32>() * (world.height() - SPAWN_BOTTOM_CLEARANCE);
    let speed = ENEMY_BASE_SPEED + world.level as f32 * ENEMY_SPEED_PER_LEVEL;

    log::debug!("Spawned enemy at ({:.0}, {:.0}) speed {:.1}", x, y, speed);
    world.enemies.push(Enemy::new(Vec2::new(x, y), speed));
}
