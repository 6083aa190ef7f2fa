use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum AppState {
    // the city directory is read on the IO pool before search is possible
    #[default]
    LoadingCities,
    Ready,
}
