use crate::core::camera::components::MainCamera;
use bevy::log::info;
use bevy::math::{EulerRot, Quat, Vec3};
use bevy::prelude::{Camera3d, Commands, DirectionalLight, Transform, default};
use std::f32::consts::PI;

/// Where the camera sits relative to the flower, looking down at the bloom
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 100.0, 50.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 10.0, 0.0);

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -PI / 4.)),
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
    ));

    // fill from the opposite side so the petal undersides are not black
    commands.spawn((
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, -2.0, PI / 6.)),
        DirectionalLight {
            illuminance: 2_500.0,
            ..default()
        },
    ));

    info!("Camera spawned");
}
