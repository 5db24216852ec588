use bevy::prelude::*;

use super::components::Player;
use super::movement::clamp_to_walkable;
use crate::camera::CameraAttachment;
use crate::world::{Platform, WALK_MAX_X, WALK_MAX_Z, WALK_MIN_X, WALK_MIN_Z};

/// Nudge past the rim so float rounding never leaves the player inside.
const RIM_CLEARANCE: f32 = 1e-4;

/// Pushes `position` out of a circular collider onto its rim.
///
/// Standing exactly on the center resolves toward +X.
pub fn resolve_platform_collision(position: Vec2, center: Vec2, radius: f32) -> Vec2 {
    let offset = position - center;
    let distance = offset.length();

    if distance.is_nan() || distance >= radius {
        return position;
    }
    if distance == 0.0 {
        return center + Vec2::X * radius;
    }

    center + offset / distance * radius
}

/// Moves a player pinned against a wall along that wall until they clear the collider.
///
/// Used after the walkable clamp has pulled a pushed-out position back inside a rim.
pub fn slide_along_wall(position: Vec2, center: Vec2, radius: f32) -> Vec2 {
    let offset = position - center;
    if !(offset.length() < radius) {
        return position;
    }

    let along = |across: f32| (radius * radius - across * across).max(0.0).sqrt() + RIM_CLEARANCE;
    let side = |d: f32| if d < 0.0 { -1.0 } else { 1.0 };

    if position.y <= WALK_MIN_Z || position.y >= WALK_MAX_Z {
        Vec2::new(center.x + side(offset.x) * along(offset.y), position.y)
    } else if position.x <= WALK_MIN_X || position.x >= WALK_MAX_X {
        Vec2::new(position.x, center.y + side(offset.y) * along(offset.x))
    } else {
        position
    }
}

/// Keeps the walking player outside every platform. Skipped while seated.
pub fn resolve_collisions(
    mut player_query: Query<(&mut Transform, &CameraAttachment), With<Player>>,
    platforms: Query<(&Platform, &Transform), Without<Player>>,
) {
    let Ok((mut transform, attachment)) = player_query.get_single_mut() else {
        return;
    };

    if attachment.is_seated() {
        return;
    }

    let mut position = Vec2::new(transform.translation.x, transform.translation.z);
    for (platform, platform_transform) in platforms.iter() {
        position = resolve_platform_collision(
            position,
            Vec2::new(platform_transform.translation.x, platform_transform.translation.z),
            platform.collision_radius,
        );
    }

    // Walls win over platform rims, so a rim that crosses a wall is dodged along it
    let clamped = clamp_to_walkable(Vec3::new(position.x, transform.translation.y, position.y));
    let mut position = Vec2::new(clamped.x, clamped.z);
    for (platform, platform_transform) in platforms.iter() {
        position = slide_along_wall(
            position,
            Vec2::new(platform_transform.translation.x, platform_transform.translation.z),
            platform.collision_radius,
        );
    }
    let resolved = clamp_to_walkable(Vec3::new(position.x, clamped.y, position.y));
    if transform.translation != resolved {
        transform.translation = resolved;
    }
}
