use crate::flower::components::FlowerRoot;
use crate::helpers::mesh::petal_mesh;
use crate::wind::resources::WindAnimator;
use bevy::math::{EulerRot, Quat};
use bevy::prelude::*;

const FLOWER_SIZE: f32 = 10.0;
const PETALS_PER_RING: usize = 16;
const PETAL_RINGS: usize = 2;

pub fn spawn_flower(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stem_height = FLOWER_SIZE * 3.0;
    let stem_mesh = meshes.add(Cylinder::new(1.0, stem_height));
    let pistil_mesh = meshes.add(Sphere::new(2.0).mesh().uv(32, 16));
    let petal_handle = meshes.add(petal_mesh(10.0, 8.0, 24));

    let stem_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x6D, 0x8B, 0x0D),
        perceptual_roughness: 0.8,
        ..default()
    });
    let pistil_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xC8, 0x9C, 0x35),
        ..default()
    });
    let petal_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xE2, 0xA2, 0xB6),
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((Transform::default(), Visibility::default(), FlowerRoot))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(stem_mesh),
                MeshMaterial3d(stem_material),
                Transform::from_xyz(0.0, FLOWER_SIZE / 2.0, 0.0),
            ));

            parent.spawn((
                Mesh3d(pistil_mesh),
                MeshMaterial3d(pistil_material),
                Transform::from_xyz(0.0, FLOWER_SIZE * 2.0, 0.0),
            ));

            // two offset rings of petals, each petal leaning out at 60°
            for ring in 0..PETAL_RINGS {
                for i in 0..PETALS_PER_RING {
                    let around = (22.0 * ring as f32 + 22.5 * i as f32).to_radians();
                    let petal_transform = Transform::from_xyz(
                        0.0,
                        FLOWER_SIZE * 2.02 - ring as f32,
                        1.5,
                    )
                    .with_rotation(Quat::from_euler(
                        EulerRot::YXZ,
                        0.0,
                        60f32.to_radians(),
                        0.0,
                    ));

                    parent
                        .spawn((
                            Transform::from_rotation(Quat::from_rotation_y(around)),
                            Visibility::default(),
                        ))
                        .with_children(|pivot| {
                            pivot.spawn((
                                Mesh3d(petal_handle.clone()),
                                MeshMaterial3d(petal_material.clone()),
                                petal_transform,
                            ));
                        });
                }
            }
        });

    info!("Flower spawned");
}

/// Copy the animator's rotation onto the flower root
pub fn apply_flower_orientation(
    animator: Res<WindAnimator>,
    mut flowers: Query<&mut Transform, With<FlowerRoot>>,
) {
    let rotation = animator.rotation().to_quat();
    for mut transform in flowers.iter_mut() {
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}
