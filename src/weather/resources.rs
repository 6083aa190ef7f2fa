use bevy::prelude::*;
use windvane::sequence::LookupSequence;

/// Tickets for in-flight weather requests; only the newest may deliver
#[derive(Resource, Debug, Default)]
pub struct WeatherLookups {
    pub sequence: LookupSequence,
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub enum WeatherStatus {
    #[default]
    Idle,
    Fetching(String),
    Ready(String),
    Failed { city: String, reason: String },
}
