use crate::core::config::AppSettings;
use bevy::prelude::*;
use windvane::prelude::{Animator, WindSample};

/// The orientation animator, ticked once per frame
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct WindAnimator(pub Animator);

impl FromWorld for WindAnimator {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<AppSettings>()
            .map(|settings| settings.animator.clone())
            .unwrap_or_default();
        Self(Animator::new(config))
    }
}

/// Direction and speed text shown next to the flower
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct WindReadout {
    pub direction: String,
    pub speed: String,
}

impl WindReadout {
    pub fn for_sample(sample: &WindSample) -> Self {
        Self {
            direction: format!("{:.0}° ({})", sample.direction, sample.compass_point()),
            speed: format!("{:.1} km/h", sample.speed),
        }
    }

    pub fn clear(&mut self) {
        self.direction.clear();
        self.speed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.direction.is_empty() && self.speed.is_empty()
    }
}
