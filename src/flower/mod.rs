pub mod components;
pub mod systems;

use crate::flower::systems::*;
use crate::wind::AnimateWind;
use bevy::prelude::*;

pub struct FlowerPlugin;

impl Plugin for FlowerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_flower)
            .add_systems(Update, apply_flower_orientation.after(AnimateWind));
    }
}

#[cfg(test)]
mod tests {
    use super::components::FlowerRoot;
    use super::systems::apply_flower_orientation;
    use crate::wind::resources::WindAnimator;
    use bevy::prelude::*;
    use windvane::animator::Animator;
    use windvane::sample::WindSample;

    #[test]
    fn test_root_follows_animator_rotation() {
        let mut animator = Animator::default();
        animator.request_reset();
        animator.push_sample(WindSample::new(90.0, 10.0));
        for _ in 0..6 {
            animator.tick(0.0);
        }
        let expected = animator.rotation().to_quat();

        let mut app = App::new();
        app.insert_resource(WindAnimator(animator))
            .add_systems(Update, apply_flower_orientation);
        let flower = app
            .world_mut()
            .spawn((Transform::default(), FlowerRoot))
            .id();
        app.update();

        let transform = app.world().get::<Transform>(flower).unwrap();
        assert!(transform.rotation.abs_diff_eq(expected, 1e-6));
        assert!(!transform.rotation.abs_diff_eq(Quat::IDENTITY, 1e-3));
    }
}
