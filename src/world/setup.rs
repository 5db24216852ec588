use bevy::prelude::*;

use crate::camera::{CameraAttachment, SeatMemory};
use crate::catalog::Catalog;
use crate::player::{CameraController, MovementInput, Player, Velocity, EYE_HEIGHT};

use super::components::{DoorPanel, Platform, PLATFORM_HEIGHT, PLATFORM_RADIUS};
use super::door::{LEFT_CLOSED_Z, RIGHT_CLOSED_Z};
use super::zones::{Zone, ZoneRegistry};
use super::{
    ANNEX_DEPTH, ANNEX_OFFSET_X, ANNEX_WIDTH, DOORWAY_HEIGHT, DOORWAY_WIDTH, DOORWAY_X, DOORWAY_Y,
    SHOWROOM_DEPTH, SHOWROOM_HEIGHT, SHOWROOM_WIDTH,
};

/// Billing desk in the front-right corner of the main hall.
pub const DESK_POSITION: Vec3 = Vec3::new(SHOWROOM_WIDTH / 2.0 - 4.0, 0.5, SHOWROOM_DEPTH / 2.0 - 4.0);
pub const DESK_SIZE: Vec3 = Vec3::new(3.0, 1.0, 1.5);

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut zones: ResMut<ZoneRegistry>,
    catalog: Res<Catalog>,
) {
    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.05, 0.05),
        perceptual_roughness: 0.4,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.85, 0.88),
        ..default()
    });
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        metallic: 1.0,
        perceptual_roughness: 0.05,
        ..default()
    });
    let car_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.25, 0.35),
        metallic: 0.6,
        ..default()
    });
    let desk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.2, 0.1),
        ..default()
    });
    let glass_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.68, 0.85, 0.9, 0.5),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    // Floors
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(SHOWROOM_WIDTH, SHOWROOM_DEPTH))),
        MeshMaterial3d(floor_material.clone()),
        Transform::IDENTITY,
    ));
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ANNEX_WIDTH, ANNEX_DEPTH))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(ANNEX_OFFSET_X, 0.0, 0.0),
    ));

    // Walls. The east wall of the main hall is split around the doorway.
    let wall = |width: f32, height: f32| Cuboid::new(width, height, 0.2);
    let side_width = (SHOWROOM_DEPTH - DOORWAY_WIDTH) / 2.0;
    let walls = [
        (wall(SHOWROOM_WIDTH, SHOWROOM_HEIGHT), Vec3::new(0.0, SHOWROOM_HEIGHT / 2.0, -SHOWROOM_DEPTH / 2.0), 0.0),
        (wall(SHOWROOM_WIDTH, SHOWROOM_HEIGHT), Vec3::new(0.0, SHOWROOM_HEIGHT / 2.0, SHOWROOM_DEPTH / 2.0), 0.0),
        (wall(SHOWROOM_DEPTH, SHOWROOM_HEIGHT), Vec3::new(-SHOWROOM_WIDTH / 2.0, SHOWROOM_HEIGHT / 2.0, 0.0), std::f32::consts::FRAC_PI_2),
        (
            wall(side_width, SHOWROOM_HEIGHT),
            Vec3::new(DOORWAY_X, SHOWROOM_HEIGHT / 2.0, -(DOORWAY_WIDTH + side_width) / 2.0),
            std::f32::consts::FRAC_PI_2,
        ),
        (
            wall(side_width, SHOWROOM_HEIGHT),
            Vec3::new(DOORWAY_X, SHOWROOM_HEIGHT / 2.0, (DOORWAY_WIDTH + side_width) / 2.0),
            std::f32::consts::FRAC_PI_2,
        ),
        (
            wall(DOORWAY_WIDTH, SHOWROOM_HEIGHT - DOORWAY_HEIGHT),
            Vec3::new(DOORWAY_X, DOORWAY_HEIGHT + (SHOWROOM_HEIGHT - DOORWAY_HEIGHT) / 2.0, 0.0),
            std::f32::consts::FRAC_PI_2,
        ),
        // Annex
        (wall(ANNEX_WIDTH, SHOWROOM_HEIGHT), Vec3::new(ANNEX_OFFSET_X, SHOWROOM_HEIGHT / 2.0, -ANNEX_DEPTH / 2.0), 0.0),
        (wall(ANNEX_WIDTH, SHOWROOM_HEIGHT), Vec3::new(ANNEX_OFFSET_X, SHOWROOM_HEIGHT / 2.0, ANNEX_DEPTH / 2.0), 0.0),
        (
            wall(ANNEX_DEPTH, SHOWROOM_HEIGHT),
            Vec3::new(ANNEX_OFFSET_X + ANNEX_WIDTH / 2.0, SHOWROOM_HEIGHT / 2.0, 0.0),
            std::f32::consts::FRAC_PI_2,
        ),
    ];
    for (shape, position, yaw) in walls {
        commands.spawn((
            Mesh3d(meshes.add(shape)),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_y(yaw)),
        ));
    }

    // Car platforms, each with a stand-in body until real models are wired up
    let platform_mesh = meshes.add(Cylinder::new(PLATFORM_RADIUS, PLATFORM_HEIGHT));
    let car_mesh = meshes.add(Cuboid::new(2.0, 1.2, 4.5));
    for listing in &catalog.cars {
        let [x, z] = listing.position;
        let platform = commands
            .spawn((
                Name::new(listing.name.clone()),
                Platform::from_listing(listing),
                Mesh3d(platform_mesh.clone()),
                MeshMaterial3d(platform_material.clone()),
                Transform::from_xyz(x, PLATFORM_HEIGHT / 2.0, z),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(car_mesh.clone()),
                    MeshMaterial3d(car_material.clone()),
                    Transform::from_xyz(0.0, PLATFORM_HEIGHT / 2.0 + 0.6, 0.0),
                ));
            })
            .id();

        zones.register(Zone::car(platform, Vec2::new(x, z)));
    }

    // Billing desk, with its zone just in front of the chair side
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(DESK_SIZE))),
        MeshMaterial3d(desk_material),
        Transform::from_translation(DESK_POSITION),
    ));
    zones.register(Zone::billing(Vec3::new(
        DESK_POSITION.x,
        EYE_HEIGHT,
        DESK_POSITION.z + DESK_SIZE.z / 2.0 + 1.0,
    )));

    // Sliding glass door between the hall and the annex
    let panel_mesh = meshes.add(Cuboid::new(0.05, DOORWAY_HEIGHT, DOORWAY_WIDTH / 2.0));
    for (panel, z) in [(DoorPanel::Left, LEFT_CLOSED_Z), (DoorPanel::Right, RIGHT_CLOSED_Z)] {
        commands.spawn((
            panel,
            Mesh3d(panel_mesh.clone()),
            MeshMaterial3d(glass_material.clone()),
            Transform::from_xyz(DOORWAY_X - 0.01, DOORWAY_Y, z),
        ));
    }
    zones.register(Zone::door());

    // Lights
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });
    for x in [0.0, ANNEX_OFFSET_X] {
        commands.spawn((
            PointLight {
                shadows_enabled: false,
                intensity: 8_000_000.0,
                range: 40.0,
                ..default()
            },
            Transform::from_xyz(x, SHOWROOM_HEIGHT - 0.5, 0.0),
        ));
    }

    info!(
        "Showroom ready: {} cars, {} trigger zones",
        catalog.cars.len(),
        zones.zones().len()
    );

    // Player (Camera)
    commands.spawn((
        Player,
        CameraController::default(),
        Velocity::default(),
        MovementInput::default(),
        CameraAttachment::default(),
        SeatMemory::default(),
        Camera3d::default(),
        Transform::from_xyz(0.0, EYE_HEIGHT, SHOWROOM_DEPTH / 2.0 - 5.0),
    ));
}
