use crate::weather::client::WeatherError;
use bevy::prelude::*;
use bevy::tasks::Task;
use windvane::sample::WindSample;
use windvane::sequence::LookupTicket;

/// A forecast request running on the IO task pool
#[derive(Component)]
pub struct WeatherLookup {
    pub ticket: LookupTicket,
    pub city: String,
    pub task: Task<Result<WindSample, WeatherError>>,
}
