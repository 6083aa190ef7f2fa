use bevy::prelude::*;
use windvane::sample::WindSample;

/// A city lookup succeeded. Raised once per successful search.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct LocationSelected {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// Current wind for the selected location, already folded to a signed direction
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct WindSampleReceived {
    pub sample: WindSample,
}
