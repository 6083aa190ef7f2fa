pub mod cities;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

use crate::core::state::AppState;
use crate::search::events::*;
use crate::search::resources::*;
use crate::search::systems::*;
use crate::wind::SelectLocation;
use crate::wind::events::LocationSelected;
use bevy::prelude::*;

pub struct SearchPlugin;

impl Plugin for SearchPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SearchSubmitted>()
            .add_message::<LocationSelected>()
            .init_resource::<SearchState>()
            .add_systems(OnEnter(AppState::LoadingCities), start_loading_cities)
            .add_systems(
                Update,
                finish_loading_cities.run_if(in_state(AppState::LoadingCities)),
            )
            .add_systems(
                Update,
                resolve_search
                    .run_if(in_state(AppState::Ready))
                    .in_set(SelectLocation),
            );
    }
}
