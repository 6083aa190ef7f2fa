use bevy::prelude::*;

/// Root of the flower hierarchy; the wind orientation is applied here
#[derive(Component)]
pub struct FlowerRoot;
