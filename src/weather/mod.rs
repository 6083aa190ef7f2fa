pub mod client;
pub mod components;
pub mod resources;
pub mod systems;

use crate::core::config::AppSettings;
use crate::weather::client::WeatherClient;
use crate::weather::resources::*;
use crate::weather::systems::*;
use crate::wind::FetchWind;
use bevy::prelude::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        let client = {
            let settings = app.world().get_resource::<AppSettings>();
            let config = settings.map(|settings| settings.weather.clone()).unwrap_or_default();
            WeatherClient::new(&config)
        };

        app.insert_resource(client)
            .init_resource::<WeatherLookups>()
            .init_resource::<WeatherStatus>()
            .add_systems(
                Update,
                (spawn_weather_lookups, poll_weather_lookups)
                    .chain()
                    .in_set(FetchWind),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;
    use crate::helpers::tasks::finished_task;
    use crate::search::SearchPlugin;
    use crate::search::cities::{CityDirectory, CityRecord};
    use crate::search::events::SearchSubmitted;
    use crate::weather::components::WeatherLookup;
    use crate::wind::WindPlugin;
    use crate::wind::resources::{WindAnimator, WindReadout};
    use bevy::ecs::message::Messages;
    use bevy::state::app::StatesPlugin;
    use windvane::WindvaneConfig;
    use windvane::sample::WindSample;

    fn test_app() -> App {
        let mut config = WindvaneConfig::default();
        // nothing listens there, new lookups fail fast
        config.weather.base_url = "http://127.0.0.1:9/v1/forecast".to_string();
        config.weather.timeout_secs = 1;

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(AppSettings(config))
            .insert_state(AppState::Ready)
            .insert_resource(CityDirectory::new(vec![CityRecord {
                city: "Lyon".to_string(),
                lat: 45.76,
                lng: 4.84,
            }]))
            .add_plugins((WindPlugin, WeatherPlugin, SearchPlugin));
        app
    }

    #[test]
    fn test_previous_city_response_does_not_drive_new_selection() {
        let mut app = test_app();
        let paris = app
            .world_mut()
            .resource_mut::<WeatherLookups>()
            .sequence
            .issue();
        app.world_mut().spawn(WeatherLookup {
            ticket: paris,
            city: "Paris".to_string(),
            task: finished_task(Ok(WindSample::new(-150.0, 40.0))),
        });
        app.world_mut()
            .resource_mut::<Messages<SearchSubmitted>>()
            .write(SearchSubmitted {
                name: "Lyon".to_string(),
            });

        app.update();
        app.update();

        let animator = app.world().resource::<WindAnimator>();
        assert!(animator.location_selected());
        assert_eq!(animator.state().target, None);
        assert!(animator.state().is_at_rest());
        assert!(app.world().resource::<WindReadout>().is_empty());
        assert_ne!(
            *app.world().resource::<WeatherStatus>(),
            WeatherStatus::Ready("Paris".to_string())
        );
    }
}
