//! Headless walkthroughs of a whole showroom visit, driven frame by frame.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::camera::attachment::{apply_camera_attachment, handle_seat_key, seated_transform};
use crate::camera::{CameraAttachment, SeatMemory};
use crate::catalog::SeatPlacement;
use crate::game_state::{AppState, FrameOrderPlugin, ShowroomSet};
use crate::hud::{Hud, HudPanel, NO_CAR_SELECTED_TEXT, ZERO_TOTAL_TEXT};
use crate::player::{CameraController, MovementInput, Player, PlayerPlugin, Velocity, EYE_HEIGHT};
use crate::purchase::machine::{PurchasePhase, PurchaseState};
use crate::purchase::PurchasePlugin;
use crate::world::components::{COLLISION_MARGIN, DEFAULT_PLATFORM_SPEED, PLATFORM_RADIUS};
use crate::world::door::{animate_door, DoorState};
use crate::world::platforms::{apply_platform_speeds, spin_platforms};
use crate::world::zones::{update_proximity, Zone};
use crate::world::{Platform, ProximityReport, ZoneRegistry};

const STEP: Duration = Duration::from_millis(100);

const MUSTANG_AT: Vec2 = Vec2::new(-8.0, -15.0);
const PORSCHE_AT: Vec2 = Vec2::new(8.0, -3.0);
const BILLING_AT: Vec3 = Vec3::new(11.0, EYE_HEIGHT, 17.75);

struct Showroom {
    app: App,
    mustang: Entity,
    porsche: Entity,
    player: Entity,
}

impl Showroom {
    fn new() -> Self {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(STEP))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ZoneRegistry>()
            .init_resource::<ProximityReport>()
            .init_resource::<DoorState>()
            .add_plugins((FrameOrderPlugin, PlayerPlugin, PurchasePlugin))
            .add_systems(
                Update,
                (
                    (update_proximity, apply_platform_speeds)
                        .chain()
                        .in_set(ShowroomSet::Proximity),
                    handle_seat_key.in_set(ShowroomSet::Reaction),
                    animate_door.in_set(ShowroomSet::Animation),
                )
                    .run_if(in_state(AppState::Exploring)),
            )
            .add_systems(
                Update,
                (
                    spin_platforms.in_set(ShowroomSet::Animation),
                    apply_camera_attachment.in_set(ShowroomSet::Camera),
                ),
            );

        let mustang = spawn_platform(&mut app, "Mustang GTR", 75_000, MUSTANG_AT, None);
        let porsche = spawn_platform(
            &mut app,
            "911",
            350_000,
            PORSCHE_AT,
            Some(SeatPlacement {
                offset: [-0.3, 0.7, -1.3],
                yaw: -std::f32::consts::PI / 10.0,
            }),
        );
        {
            let mut zones = app.world_mut().resource_mut::<ZoneRegistry>();
            zones.register(Zone::car(mustang, MUSTANG_AT));
            zones.register(Zone::car(porsche, PORSCHE_AT));
            zones.register(Zone::billing(BILLING_AT));
            zones.register(Zone::door());
        }

        let player = app
            .world_mut()
            .spawn((
                Player,
                CameraController::default(),
                Velocity::default(),
                MovementInput::default(),
                CameraAttachment::default(),
                SeatMemory::default(),
                Transform::from_xyz(0.0, EYE_HEIGHT, 15.0),
            ))
            .id();

        let mut showroom = Self {
            app,
            mustang,
            porsche,
            player,
        };
        showroom.set_state(AppState::Exploring);
        showroom
    }

    fn set_state(&mut self, state: AppState) {
        self.app
            .world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(state);
        self.app.update();
    }

    fn teleport(&mut self, x: f32, z: f32) {
        let mut player = self.app.world_mut().entity_mut(self.player);
        if let Some(mut velocity) = player.get_mut::<Velocity>() {
            velocity.0 = Vec2::ZERO;
        }
        if let Some(mut transform) = player.get_mut::<Transform>() {
            transform.translation = Vec3::new(x, EYE_HEIGHT, z);
        }
        self.app.update();
    }

    /// Presses and releases `key` over one frame.
    fn tap(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.app.update();
        let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(key);
        input.clear();
    }

    fn hold(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release_all(&mut self) {
        let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release_all();
        input.clear();
    }

    fn wait(&mut self, secs: f32) {
        let frames = (secs / STEP.as_secs_f32()).ceil() as usize;
        for _ in 0..frames {
            self.app.update();
        }
    }

    fn purchase(&self) -> &PurchaseState {
        self.app.world().resource::<PurchaseState>()
    }

    fn hud(&self) -> &Hud {
        self.app.world().resource::<Hud>()
    }

    fn player_transform(&self) -> Transform {
        *self.app.world().get::<Transform>(self.player).unwrap()
    }

    fn attachment(&self) -> CameraAttachment {
        *self.app.world().get::<CameraAttachment>(self.player).unwrap()
    }

    fn platform(&self, entity: Entity) -> &Platform {
        self.app.world().get::<Platform>(entity).unwrap()
    }
}

fn spawn_platform(
    app: &mut App,
    name: &str,
    price: u64,
    at: Vec2,
    interior: Option<SeatPlacement>,
) -> Entity {
    app.world_mut()
        .spawn((
            Platform {
                car_name: name.to_string(),
                car_price: price,
                collision_radius: PLATFORM_RADIUS + COLLISION_MARGIN,
                rotation_speed: DEFAULT_PLATFORM_SPEED,
                interior,
            },
            Transform::from_xyz(at.x, 0.1, at.y),
        ))
        .id()
}

/// Standing spot inside a car zone, just clear of the platform edge.
fn beside(at: Vec2) -> (f32, f32) {
    (at.x + PLATFORM_RADIUS + 0.3, at.y)
}

#[test]
fn test_buy_mustang_start_to_finish() {
    let mut showroom = Showroom::new();

    let (x, z) = beside(MUSTANG_AT);
    showroom.teleport(x, z);
    assert!(showroom.hud().is_showing(HudPanel::PurchasePrompt));
    assert_eq!(showroom.hud().car_name, "Mustang GTR");
    assert_eq!(showroom.hud().car_price, "$75,000");

    showroom.tap(KeyCode::KeyI);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Selected);
    assert_eq!(showroom.purchase().selected_car, Some(showroom.mustang));
    assert_eq!(showroom.hud().panel, None);

    showroom.teleport(BILLING_AT.x, BILLING_AT.z);
    assert!(showroom.hud().is_showing(HudPanel::BillingPrompt));
    assert_eq!(showroom.hud().billing_total, "Total: $75,000");

    showroom.tap(KeyCode::KeyE);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Confirmed);
    assert!(showroom.hud().is_showing(HudPanel::Confirmation));

    // Still on screen well into the display window
    showroom.wait(3.0);
    assert!(showroom.hud().is_showing(HudPanel::Confirmation));
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Confirmed);

    showroom.wait(1.5);
    let purchase = showroom.purchase();
    assert_eq!(purchase.phase(), PurchasePhase::Idle);
    assert_eq!(purchase.selected_car, None);
    assert_eq!(purchase.car_price, 0);
    // Back to the plain counter prompt with an empty total
    assert!(showroom.hud().is_showing(HudPanel::BillingPrompt));
    assert_eq!(showroom.hud().billing_total, ZERO_TOTAL_TEXT);
}

#[test]
fn test_confirm_with_nothing_selected_shows_notice() {
    let mut showroom = Showroom::new();
    showroom.teleport(BILLING_AT.x, BILLING_AT.z);

    showroom.tap(KeyCode::KeyE);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Idle);
    assert!(showroom.hud().is_showing(HudPanel::BillingPrompt));
    assert_eq!(showroom.hud().billing_total, NO_CAR_SELECTED_TEXT);

    showroom.wait(1.0);
    assert_eq!(showroom.hud().billing_total, NO_CAR_SELECTED_TEXT);

    // Notice clears, then the counter prompt comes back on the next frame
    showroom.wait(1.5);
    assert_eq!(showroom.hud().billing_total, ZERO_TOTAL_TEXT);
    assert!(showroom.hud().is_showing(HudPanel::BillingPrompt));
}

#[test]
fn test_decline_at_counter_clears_selection() {
    let mut showroom = Showroom::new();
    let (x, z) = beside(MUSTANG_AT);
    showroom.teleport(x, z);
    showroom.tap(KeyCode::KeyI);
    showroom.teleport(BILLING_AT.x, BILLING_AT.z);

    showroom.tap(KeyCode::KeyQ);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Declined);
    assert!(showroom.hud().is_showing(HudPanel::Declined));

    // Confirm is ignored while the decline is on screen
    showroom.tap(KeyCode::KeyE);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Declined);

    showroom.wait(2.5);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Idle);
    assert!(!showroom.purchase().is_selected);
}

#[test]
fn test_releasing_pointer_drops_selection() {
    let mut showroom = Showroom::new();
    let (x, z) = beside(MUSTANG_AT);
    showroom.teleport(x, z);
    showroom.tap(KeyCode::KeyI);
    assert!(showroom.purchase().is_selected);

    showroom.set_state(AppState::Paused);
    assert_eq!(showroom.purchase().phase(), PurchasePhase::Idle);
    assert_eq!(showroom.hud().panel, None);
    assert_eq!(showroom.hud().billing_total, ZERO_TOTAL_TEXT);

    // Keys do nothing until the pointer is captured again
    showroom.tap(KeyCode::KeyI);
    assert!(!showroom.purchase().is_selected);

    showroom.set_state(AppState::Exploring);
    assert!(showroom.hud().is_showing(HudPanel::PurchasePrompt));
}

#[test]
fn test_standing_in_car_zone_speeds_up_only_that_platform() {
    let mut showroom = Showroom::new();
    let (x, z) = beside(MUSTANG_AT);
    showroom.teleport(x, z);

    let boosted = showroom.platform(showroom.mustang).rotation_speed;
    let idle = showroom.platform(showroom.porsche).rotation_speed;
    assert!((boosted - DEFAULT_PLATFORM_SPEED * 3.0).abs() < 1e-6);
    assert!((idle - DEFAULT_PLATFORM_SPEED).abs() < 1e-6);

    showroom.teleport(0.0, 15.0);
    let speed = showroom.platform(showroom.mustang).rotation_speed;
    assert!((speed - DEFAULT_PLATFORM_SPEED).abs() < 1e-6);
}

#[test]
fn test_walking_into_platform_stops_at_its_edge() {
    let mut showroom = Showroom::new();
    // Facing -Z, straight at the Mustang
    showroom.teleport(MUSTANG_AT.x, MUSTANG_AT.y + 12.0);
    let radius = showroom.platform(showroom.mustang).collision_radius;
    let start = showroom.player_transform().translation;

    showroom.hold(KeyCode::KeyW);
    showroom.hold(KeyCode::ShiftLeft);
    for _ in 0..40 {
        showroom.app.update();
        let position = showroom.player_transform().translation;
        let offset = Vec2::new(position.x - MUSTANG_AT.x, position.z - MUSTANG_AT.y);
        assert!(offset.length() >= radius - 1e-5);
        assert!((position.y - EYE_HEIGHT).abs() < 1e-6);
    }
    showroom.release_all();

    let end = showroom.player_transform().translation;
    assert!(end.z < start.z - 5.0);
}

#[test]
fn test_door_opens_while_player_stands_in_doorway() {
    let mut showroom = Showroom::new();
    let closed = DoorState::targets(false);
    let open = DoorState::targets(true);

    showroom.teleport(15.0, 0.0);
    showroom.wait(5.0);
    let door = *showroom.app.world().resource::<DoorState>();
    assert!(door.target_open);
    assert!(door.left_z < closed.0 && door.left_z >= open.0);
    assert!(door.right_z > closed.1 && door.right_z <= open.1);

    showroom.teleport(0.0, 15.0);
    showroom.wait(10.0);
    let door = *showroom.app.world().resource::<DoorState>();
    assert!(!door.target_open);
    assert!((door.left_z - closed.0).abs() < 0.01);
}

#[test]
fn test_ride_in_car_and_step_back_out() {
    let mut showroom = Showroom::new();
    let (x, z) = beside(PORSCHE_AT);
    showroom.teleport(x, z);
    let standing = showroom.player_transform().translation;

    showroom.tap(KeyCode::KeyK);
    assert!(showroom.attachment().is_seated());
    assert_eq!(showroom.hud().panel, None);

    // Walking keys don't move a seated player, the camera rides the platform
    showroom.hold(KeyCode::KeyW);
    showroom.wait(2.0);
    showroom.release_all();

    let platform = *showroom.app.world().get::<Transform>(showroom.porsche).unwrap();
    assert!(platform.rotation.to_euler(EulerRot::YXZ).0.abs() > 0.0);
    let CameraAttachment::Platform { offset, yaw, .. } = showroom.attachment() else {
        panic!("expected to be seated");
    };
    let expected = seated_transform(&platform, offset, yaw, 0.0);
    let camera = showroom.player_transform();
    assert!(camera.translation.distance(expected.translation) < 1e-4);
    assert!(camera.rotation.abs_diff_eq(expected.rotation, 1e-5));

    showroom.tap(KeyCode::KeyK);
    assert_eq!(showroom.attachment(), CameraAttachment::World);
    assert!(showroom.player_transform().translation.distance(standing) < 1e-4);
}

#[test]
fn test_car_without_interior_cannot_be_entered() {
    let mut showroom = Showroom::new();
    let (x, z) = beside(MUSTANG_AT);
    showroom.teleport(x, z);

    showroom.tap(KeyCode::KeyK);
    assert_eq!(showroom.attachment(), CameraAttachment::World);
    assert!(showroom.hud().is_showing(HudPanel::PurchasePrompt));
}
