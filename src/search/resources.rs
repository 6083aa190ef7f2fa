use bevy::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum SearchStatus {
    #[default]
    LoadingCities,
    Ready,
    Selected(String),
    UnknownCity(String),
    LoadFailed(String),
}

/// Text of the search box plus the outcome of the last search
#[derive(Resource, Debug, Default, Clone)]
pub struct SearchState {
    pub query: String,
    pub status: SearchStatus,
}
