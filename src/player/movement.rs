use bevy::prelude::*;

use super::components::{
    CameraController, MovementInput, Player, Velocity, BASE_SPEED, DAMPING_RATE, EYE_HEIGHT,
    RUN_MULTIPLIER,
};
use crate::camera::CameraAttachment;
use crate::world::{WALK_MAX_X, WALK_MAX_Z, WALK_MIN_X, WALK_MIN_Z};

pub const FORWARD_KEY: KeyCode = KeyCode::KeyW;
pub const BACKWARD_KEY: KeyCode = KeyCode::KeyS;
pub const LEFT_KEY: KeyCode = KeyCode::KeyA;
pub const RIGHT_KEY: KeyCode = KeyCode::KeyD;

impl MovementInput {
    /// Unit direction in the camera frame (x right, y forward), or zero.
    pub fn direction(&self) -> Vec2 {
        let x = self.right as i8 - self.left as i8;
        let y = self.forward as i8 - self.backward as i8;
        Vec2::new(x as f32, y as f32).normalize_or_zero()
    }

    pub fn speed(&self) -> f32 {
        if self.running {
            BASE_SPEED * RUN_MULTIPLIER
        } else {
            BASE_SPEED
        }
    }
}

/// Negative, NaN and infinite frame times count as no time at all.
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

/// Damps the velocity and accelerates it along the held direction.
pub fn integrate_velocity(velocity: Vec2, input: &MovementInput, delta: f32) -> Vec2 {
    let delta = sanitize_delta(delta);
    // Capped at 1 so a long frame stops the player instead of reversing them
    let decay = (DAMPING_RATE * delta).min(1.0);
    let damped = velocity - velocity * decay;
    damped + input.direction() * input.speed() * delta
}

/// Horizontal (forward, right) unit vectors for a camera yaw.
pub fn horizontal_basis(yaw: f32) -> (Vec3, Vec3) {
    let (sin, cos) = yaw.sin_cos();
    (Vec3::new(-sin, 0.0, -cos), Vec3::new(cos, 0.0, -sin))
}

/// Keeps the eye inside the walkable rectangle at a fixed height.
pub fn clamp_to_walkable(position: Vec3) -> Vec3 {
    Vec3::new(
        position.x.clamp(WALK_MIN_X, WALK_MAX_X),
        EYE_HEIGHT,
        position.z.clamp(WALK_MIN_Z, WALK_MAX_Z),
    )
}

/// Moves `position` by `velocity` along the camera's facing, then clamps it.
pub fn step_position(position: Vec3, velocity: Vec2, yaw: f32, delta: f32) -> Vec3 {
    let delta = sanitize_delta(delta);
    let (forward, right) = horizontal_basis(yaw);
    let displacement = (forward * velocity.y + right * velocity.x) * delta;
    clamp_to_walkable(position + displacement)
}

pub fn read_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MovementInput, With<Player>>,
) {
    let Ok(mut input) = query.get_single_mut() else {
        return;
    };

    let next = MovementInput {
        forward: keyboard_input.pressed(FORWARD_KEY),
        backward: keyboard_input.pressed(BACKWARD_KEY),
        left: keyboard_input.pressed(LEFT_KEY),
        right: keyboard_input.pressed(RIGHT_KEY),
        running: keyboard_input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
    };
    if *input != next {
        *input = next;
    }
}

pub fn move_player(
    time: Res<Time>,
    mut query: Query<
        (
            &mut Transform,
            &mut Velocity,
            &MovementInput,
            &CameraController,
            &CameraAttachment,
        ),
        With<Player>,
    >,
) {
    let Ok((mut transform, mut velocity, input, controller, attachment)) = query.get_single_mut()
    else {
        return;
    };

    // Seated players don't walk
    if attachment.is_seated() {
        velocity.0 = Vec2::ZERO;
        return;
    }

    let delta = time.delta_secs();
    velocity.0 = integrate_velocity(velocity.0, input, delta);
    transform.translation = step_position(transform.translation, velocity.0, controller.yaw, delta);
}
