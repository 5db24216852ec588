use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use crate::game_state::AppState;
use crate::player::{CameraController, Player, MOUSE_SENSITIVITY, PITCH_LIMIT};

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Confined;
    window.cursor_options.visible = false;
}

pub fn release_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
}

/// Clicking the blocker captures the pointer.
pub fn resume_on_click(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if mouse_input.just_pressed(MouseButton::Left) {
        next_state.set(AppState::Exploring);
    }
}

/// Escape or losing focus releases the pointer.
pub fn pause_on_release(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let lost_focus = windows.get_single().map(|w| !w.focused).unwrap_or(false);

    if keyboard_input.just_pressed(KeyCode::Escape) || lost_focus {
        info!("Pointer released");
        next_state.set(AppState::Paused);
    }
}

pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    mut query: Query<&mut CameraController, With<Player>>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.get_single() else {
        mouse_motion.clear();
        return;
    };

    // Only process mouse look when cursor is grabbed
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    let Ok(mut controller) = query.get_single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        controller.yaw -= event.delta.x * MOUSE_SENSITIVITY;
        controller.pitch -= event.delta.y * MOUSE_SENSITIVITY;

        // Clamp pitch to prevent flipping
        controller.pitch = controller.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

pub fn center_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    // Only center cursor when it's grabbed and window is focused
    if window.cursor_options.grab_mode != CursorGrabMode::None && window.focused {
        let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
        window.set_cursor_position(Some(center));
    }
}
