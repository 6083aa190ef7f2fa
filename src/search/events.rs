use bevy::prelude::*;

/// The user asked for a city by name
#[derive(Message, Debug, Clone, PartialEq)]
pub struct SearchSubmitted {
    pub name: String,
}
