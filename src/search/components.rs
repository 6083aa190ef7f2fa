use crate::search::cities::{CityDirectory, CityError};
use bevy::prelude::*;
use bevy::tasks::Task;

/// City dataset being read on the IO task pool
#[derive(Component)]
pub struct CityDirectoryLoad(pub Task<Result<CityDirectory, CityError>>);
