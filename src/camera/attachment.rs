use bevy::prelude::*;
use thiserror::Error;

use crate::hud::Hud;
use crate::player::{CameraController, Player, Velocity};
use crate::world::{Platform, ProximityReport};

pub const SEAT_KEY: KeyCode = KeyCode::KeyK;

/// Which frame the camera lives in.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub enum CameraAttachment {
    #[default]
    World,
    /// Seated in a car, riding its platform.
    Platform {
        platform: Entity,
        offset: Vec3,
        yaw: f32,
    },
}

impl CameraAttachment {
    pub fn is_seated(&self) -> bool {
        matches!(self, CameraAttachment::Platform { .. })
    }
}

/// World pose saved on entering a car, restored on exit.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct SeatMemory {
    pub position: Vec3,
    pub yaw: f32,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeatError {
    #[error("already seated")]
    AlreadySeated,
    #[error("no interior camera placement for {0}")]
    NoInterior(String),
}

/// Player pieces touched by a seat change.
pub struct Rider<'a> {
    pub transform: &'a mut Transform,
    pub controller: &'a mut CameraController,
    pub attachment: &'a mut CameraAttachment,
    pub memory: &'a mut SeatMemory,
}

pub fn camera_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// World transform of a camera sitting at `offset` on a platform, looking along local `yaw`/`pitch`.
pub fn seated_transform(platform: &Transform, offset: Vec3, yaw: f32, pitch: f32) -> Transform {
    Transform {
        translation: platform.translation + platform.rotation * offset,
        rotation: platform.rotation * camera_rotation(yaw, pitch),
        ..default()
    }
}

/// Climbs into the car on `platform`. Leaves everything untouched on error.
pub fn enter_seat(
    rider: Rider,
    platform_entity: Entity,
    platform: &Platform,
    platform_transform: &Transform,
) -> Result<(), SeatError> {
    if rider.attachment.is_seated() {
        return Err(SeatError::AlreadySeated);
    }
    let Some(interior) = platform.interior else {
        return Err(SeatError::NoInterior(platform.car_name.clone()));
    };

    *rider.memory = SeatMemory {
        position: rider.transform.translation,
        yaw: rider.controller.yaw,
    };

    let offset = interior.offset();
    *rider.attachment = CameraAttachment::Platform {
        platform: platform_entity,
        offset,
        yaw: interior.yaw,
    };
    rider.controller.yaw = interior.yaw;
    rider.controller.pitch = 0.0;

    // Place the camera in the same step so no frame sees a stale world pose
    *rider.transform = seated_transform(platform_transform, offset, interior.yaw, 0.0);
    Ok(())
}

/// Steps back out to where the player stood. No-op when not seated.
pub fn exit_seat(rider: Rider) {
    if !rider.attachment.is_seated() {
        return;
    }

    *rider.attachment = CameraAttachment::World;
    rider.controller.yaw = rider.memory.yaw;
    rider.controller.pitch = 0.0;
    rider.transform.translation = rider.memory.position;
    rider.transform.rotation = camera_rotation(rider.memory.yaw, 0.0);
}

pub fn handle_seat_key(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    report: Res<ProximityReport>,
    mut hud: ResMut<Hud>,
    platforms: Query<(&Platform, &Transform), Without<Player>>,
    mut player_query: Query<
        (
            &mut Transform,
            &mut CameraController,
            &mut CameraAttachment,
            &mut SeatMemory,
            &mut Velocity,
        ),
        With<Player>,
    >,
) {
    if !keyboard_input.just_pressed(SEAT_KEY) {
        return;
    }

    let Ok((mut transform, mut controller, mut attachment, mut memory, mut velocity)) =
        player_query.get_single_mut()
    else {
        return;
    };

    let rider = Rider {
        transform: &mut transform,
        controller: &mut controller,
        attachment: &mut attachment,
        memory: &mut memory,
    };

    if rider.attachment.is_seated() {
        exit_seat(rider);
        info!("Exiting car");
        return;
    }

    let Some(platform_entity) = report.car_zone() else {
        return;
    };
    let Ok((platform, platform_transform)) = platforms.get(platform_entity) else {
        return;
    };

    match enter_seat(rider, platform_entity, platform, platform_transform) {
        Ok(()) => {
            velocity.0 = Vec2::ZERO;
            hud.hide_all();
            info!("Entering {}", platform.car_name);
        }
        Err(e) => warn!("Cannot enter car: {}", e),
    }
}

/// Writes the camera transform from its controller and attachment.
pub fn apply_camera_attachment(
    mut player_query: Query<(&mut Transform, &CameraController, &CameraAttachment), With<Player>>,
    platforms: Query<&Transform, (With<Platform>, Without<Player>)>,
) {
    let Ok((mut transform, controller, attachment)) = player_query.get_single_mut() else {
        return;
    };

    match *attachment {
        CameraAttachment::World => {
            transform.rotation = camera_rotation(controller.yaw, controller.pitch);
        }
        CameraAttachment::Platform {
            platform, offset, ..
        } => {
            let Ok(platform_transform) = platforms.get(platform) else {
                return;
            };
            *transform =
                seated_transform(platform_transform, offset, controller.yaw, controller.pitch);
        }
    }
}
