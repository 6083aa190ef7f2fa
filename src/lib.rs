mod core;
mod flower;
mod helpers;
mod search;
mod ui;
mod weather;
mod wind;

use crate::core::camera::CameraPlugin;
use crate::core::config::AppSettings;
use crate::core::state::AppState;
use crate::flower::FlowerPlugin;
use crate::search::SearchPlugin;
use crate::ui::UIPlugin;
use crate::weather::WeatherPlugin;
use crate::wind::WindPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

pub struct WindFlowerPlugin;

impl Plugin for WindFlowerPlugin {
    fn build(&self, app: &mut App) {
        // settings first: the wind and weather plugins read them while building
        app.insert_resource(AppSettings::load())
            .init_state::<AppState>()
            .add_plugins((
                CameraPlugin,
                WindPlugin,
                WeatherPlugin,
                SearchPlugin,
                FlowerPlugin,
                UIPlugin,
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins((
                FrameTimeDiagnosticsPlugin::default(),
                LogDiagnosticsPlugin::default(),
            ));
        }
    }
}
