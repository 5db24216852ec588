use bevy::prelude::*;

use super::components::{Platform, DEFAULT_PLATFORM_SPEED, INTERACT_SPEED_MULTIPLIER};
use super::zones::ProximityReport;

/// Spin rate for a platform, faster while someone stands in its zone.
pub fn target_rotation_speed(occupied: bool) -> f32 {
    if occupied {
        DEFAULT_PLATFORM_SPEED * INTERACT_SPEED_MULTIPLIER
    } else {
        DEFAULT_PLATFORM_SPEED
    }
}

/// Each platform follows its own zone. With no car zone active this leaves every
/// platform at the default speed.
pub fn apply_platform_speeds(
    report: Res<ProximityReport>,
    mut platforms: Query<(Entity, &mut Platform)>,
) {
    for (entity, mut platform) in platforms.iter_mut() {
        let speed = target_rotation_speed(report.is_occupied(entity));
        if platform.rotation_speed != speed {
            platform.rotation_speed = speed;
        }
    }
}

/// Turns `rotation` about +Y, renormalized so long sessions don't drift.
pub fn spun(rotation: Quat, angle: f32) -> Quat {
    (Quat::from_rotation_y(angle) * rotation).normalize()
}

pub fn spin_platforms(time: Res<Time>, mut platforms: Query<(&Platform, &mut Transform)>) {
    let delta = time.delta_secs();
    for (platform, mut transform) in platforms.iter_mut() {
        transform.rotation = spun(transform.rotation, platform.rotation_speed * delta);
    }
}
