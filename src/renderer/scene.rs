//! Scene drawing
//!
//! Draw order: background, platforms, coins, enemies, particles, player,
//! then the pause or game-over overlay.

use std::f32::consts::PI;

use glam::Vec2;

use super::{Circle, Color, DrawSurface, Font};
use crate::sim::{BurstKind, Coin, Enemy, GamePhase, Particle, Platform, PlatformKind, Player, World};

const SKY_TOP: Color = Color("#87CEEB");
const SKY_BOTTOM: Color = Color("#E0F7FF");
const CLOUD: Color = Color("rgba(255, 255, 255, 0.7)");
/// (x, y, size)
const CLOUDS: [(f32, f32, f32); 3] = [(100.0, 50.0, 60.0), (300.0, 80.0, 80.0), (600.0, 60.0, 70.0)];

const PLAYER_BODY: Color = Color("#FF6B6B");
const PLAYER_LEGS: Color = Color("#4A4A4A");
const ENEMY_BODY: Color = Color("#8B0000");
const ENEMY_MOUTH: Color = Color("#4B0082");
const COIN_OUTER: Color = Color("#FFD700");
const COIN_INNER: Color = Color("#FFF8DC");
const COIN_SHINE: Color = Color("rgba(255, 255, 255, 0.8)");
const EDGE_SHADE: f32 = 3.0;

/// Draw the full frame for the current world state
pub fn render(world: &World, surface: &mut impl DrawSurface) {
    surface.clear();
    draw_background(surface);

    for platform in &world.platforms {
        draw_platform(platform, surface);
    }
    for coin in &world.coins {
        draw_coin(coin, surface);
    }
    for enemy in &world.enemies {
        draw_enemy(enemy, surface);
    }
    for particle in &world.particles {
        draw_particle(particle, surface);
    }
    draw_player(&world.player, surface);

    match world.phase {
        GamePhase::Paused => draw_pause_overlay(surface),
        GamePhase::GameOver => draw_game_over_overlay(world.score, surface),
        GamePhase::Idle | GamePhase::Running => {}
    }
}

fn draw_background(surface: &mut impl DrawSurface) {
    let size = surface.size();
    surface.fill_vertical_gradient(Vec2::ZERO, size, SKY_TOP, SKY_BOTTOM);

    for (x, y, s) in CLOUDS {
        let puffs = [
            Circle::new(Vec2::new(x, y), s * 0.3),
            Circle::new(Vec2::new(x + s * 0.3, y - s * 0.1), s * 0.4),
            Circle::new(Vec2::new(x + s * 0.6, y), s * 0.35),
        ];
        surface.fill_circles(&puffs, CLOUD);
    }
}

/// Fill and edge shade per platform kind
fn platform_colors(kind: PlatformKind) -> (Color, Color) {
    match kind {
        PlatformKind::Ground => (Color("#8B4513"), Color("#6B3410")),
        PlatformKind::Plain => (Color("#228B22"), Color("#1A6B1A")),
        PlatformKind::Spring => (Color("#4169E1"), Color("#3150B0")),
        PlatformKind::Moving => (Color("#FFD700"), Color("#CCAC00")),
    }
}

fn draw_platform(platform: &Platform, surface: &mut impl DrawSurface) {
    let (fill, shade) = platform_colors(platform.kind);
    let (pos, size) = (platform.pos, platform.size);
    surface.fill_rect(pos, size, fill);

    surface.fill_rect(pos, Vec2::new(size.x, EDGE_SHADE), shade);
    surface.fill_rect(pos, Vec2::new(EDGE_SHADE, size.y), shade);
    surface.fill_rect(
        Vec2::new(pos.x + size.x - EDGE_SHADE, pos.y),
        Vec2::new(EDGE_SHADE, size.y),
        shade,
    );

    let center = pos + size / 2.0;
    if platform.is_spring() {
        surface.fill_circle(center, 5.0, Color::WHITE);
    }
    if platform.kind == PlatformKind::Moving {
        // Arrow pointing the way it slides
        let dir = platform.vel.x.signum();
        surface.fill_polygon(
            &[
                center + Vec2::new(-5.0 * dir, -5.0),
                center + Vec2::new(5.0 * dir, 0.0),
                center + Vec2::new(-5.0 * dir, 5.0),
            ],
            Color::WHITE,
        );
    }
}

fn draw_coin(coin: &Coin, surface: &mut impl DrawSurface) {
    let r = coin.size.x / 2.0;
    let center = coin.pos + coin.size / 2.0 + Vec2::new(0.0, coin.float_offset);

    surface.save();
    surface.transform(center, coin.rotation);
    surface.fill_circle(Vec2::ZERO, r, COIN_OUTER);
    surface.fill_circle(Vec2::ZERO, coin.size.x / 3.0, COIN_INNER);
    surface.fill_circle(Vec2::new(-3.0, -3.0), coin.size.x / 6.0, COIN_SHINE);
    surface.restore();
}

fn draw_enemy(enemy: &Enemy, surface: &mut impl DrawSurface) {
    let (p, w) = (enemy.pos, enemy.size.x);
    surface.fill_rect(p, enemy.size, ENEMY_BODY);

    surface.fill_rect(p + Vec2::new(8.0, 8.0), Vec2::splat(6.0), Color::WHITE);
    surface.fill_rect(p + Vec2::new(w - 14.0, 8.0), Vec2::splat(6.0), Color::WHITE);
    surface.fill_rect(p + Vec2::new(10.0, 10.0), Vec2::splat(2.0), Color::BLACK);
    surface.fill_rect(p + Vec2::new(w - 12.0, 10.0), Vec2::splat(2.0), Color::BLACK);

    surface.fill_rect(p + Vec2::new(10.0, 22.0), Vec2::new(w - 20.0, 4.0), ENEMY_MOUTH);
}

fn particle_color(kind: BurstKind) -> Color {
    match kind {
        BurstKind::Coin => Color("#FFD700"),
        BurstKind::Enemy => Color("#FF0000"),
    }
}

fn draw_particle(particle: &Particle, surface: &mut impl DrawSurface) {
    surface.save();
    surface.set_alpha(particle.alpha());
    surface.fill_circle(particle.pos, particle.size, particle_color(particle.kind));
    surface.restore();
}

fn draw_player(player: &Player, surface: &mut impl DrawSurface) {
    let (p, w, h) = (player.pos, player.size.x, player.size.y);

    surface.save();
    if player.flicker_dimmed() {
        surface.set_alpha(0.5);
    }

    surface.fill_rect(p, player.size, PLAYER_BODY);

    let eye_x = if player.facing_right { p.x + w - 15.0 } else { p.x + 15.0 };
    surface.fill_rect(Vec2::new(eye_x, p.y + 15.0), Vec2::splat(8.0), Color::WHITE);
    surface.fill_rect(Vec2::new(eye_x + 2.0, p.y + 17.0), Vec2::splat(4.0), Color::BLACK);

    let mouth_x = if player.facing_right { p.x + w - 25.0 } else { p.x + 25.0 };
    surface.fill_rect(Vec2::new(mouth_x, p.y + 35.0), Vec2::new(10.0, 3.0), Color::BLACK);

    let stride = if player.moving {
        (player.animation_frame as f32 * PI / 2.0).sin() * 5.0
    } else {
        0.0
    };
    surface.fill_rect(Vec2::new(p.x + 5.0, p.y + h), Vec2::new(8.0, 15.0 + stride), PLAYER_LEGS);
    surface.fill_rect(
        Vec2::new(p.x + w - 13.0, p.y + h),
        Vec2::new(8.0, 15.0 - stride),
        PLAYER_LEGS,
    );

    surface.restore();
}

fn draw_pause_overlay(surface: &mut impl DrawSurface) {
    let size = surface.size();
    let mid = size / 2.0;
    surface.fill_rect(Vec2::ZERO, size, Color("rgba(0, 0, 0, 0.7)"));
    surface.fill_text("PAUSED", mid, Font::bold(48), Color::WHITE);
    surface.fill_text(
        "Press P to resume",
        mid + Vec2::new(0.0, 50.0),
        Font::regular(24),
        Color::WHITE,
    );
}

fn draw_game_over_overlay(score: u32, surface: &mut impl DrawSurface) {
    let size = surface.size();
    let mid = size / 2.0;
    surface.fill_rect(Vec2::ZERO, size, Color("rgba(0, 0, 0, 0.8)"));
    surface.fill_text(
        "GAME OVER",
        mid - Vec2::new(0.0, 50.0),
        Font::bold(48),
        Color("#FF4757"),
    );
    surface.fill_text(
        &format!("Score: {score}"),
        mid + Vec2::new(0.0, 20.0),
        Font::regular(36),
        Color::WHITE,
    );
    surface.fill_text(
        "Press R for a new game",
        mid + Vec2::new(0.0, 80.0),
        Font::regular(24),
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::GameConfig;

    fn world() -> World {
        World::new(GameConfig::default()).unwrap()
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new(800.0, 600.0)
    }

    #[test]
    fn test_render_is_deterministic() {
        let world = world();
        let mut a = surface();
        let mut b = surface();
        render(&world, &mut a);
        render(&world, &mut b);
        assert_eq!(a.commands, b.commands);
        assert_eq!(a.commands[0], DrawCommand::Clear);
    }

    #[test]
    fn test_background_first_player_last() {
        let world = world();
        let mut s = surface();
        render(&world, &mut s);

        assert!(matches!(s.commands[1], DrawCommand::Gradient { .. }));
        // Player legs are the last rect before the closing restore
        let n = s.commands.len();
        assert_eq!(s.commands[n - 1], DrawCommand::Restore);
        assert!(matches!(
            s.commands[n - 2],
            DrawCommand::Rect { color: PLAYER_LEGS, .. }
        ));
        assert!(s.texts().is_empty());
    }

    #[test]
    fn test_overlays() {
        let mut world = world();
        world.start();
        world.toggle_pause();
        let mut s = surface();
        render(&world, &mut s);
        assert_eq!(s.texts(), vec!["PAUSED", "Press P to resume"]);

        world.toggle_pause();
        world.score = 70;
        for _ in 0..3 {
            world.lose_life();
        }
        render(&world, &mut s);
        assert_eq!(
            s.texts(),
            vec!["GAME OVER", "Score: 70", "Press R for a new game"]
        );
    }

    #[test]
    fn test_spring_and_moving_markers() {
        let mut world = world();
        world.platforms = vec![
            Platform::spring(Vec2::new(10.0, 10.0), 100.0),
            Platform::moving(Vec2::new(10.0, 100.0), 100.0, -1.0),
        ];
        let mut s = surface();
        render(&world, &mut s);

        assert!(s.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Circles { circles, color: Color::WHITE } if circles[0].center == Vec2::new(60.0, 20.0)
        )));
        let arrow = s
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        // Tip points left for a platform sliding left
        assert_eq!(arrow[1], Vec2::new(55.0, 110.0));
    }

    #[test]
    fn test_invincible_player_flickers() {
        let mut world = world();
        world.player.hit();
        let mut s = surface();
        render(&world, &mut s);
        assert!(s.commands.contains(&DrawCommand::Alpha(0.5)));

        world.player.invincibility_timer = 950.0;
        render(&world, &mut s);
        assert!(!s.commands.contains(&DrawCommand::Alpha(0.5)));
    }

    #[test]
    fn test_particle_alpha_from_life() {
        let mut world = world();
        world.burst(Vec2::new(100.0, 100.0), 1, BurstKind::Enemy);
        world.particles[0].life = 25.0;
        let mut s = surface();
        render(&world, &mut s);
        assert!(s.commands.contains(&DrawCommand::Alpha(0.25)));
    }
}
