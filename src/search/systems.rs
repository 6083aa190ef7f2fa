use crate::core::config::AppSettings;
use crate::core::state::AppState;
use crate::search::cities::CityDirectory;
use crate::search::components::CityDirectoryLoad;
use crate::search::events::SearchSubmitted;
use crate::search::resources::{SearchState, SearchStatus};
use crate::wind::events::LocationSelected;
use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, block_on};

pub fn start_loading_cities(mut commands: Commands, settings: Res<AppSettings>) {
    let path = settings.search.cities_path.clone();
    info!("Loading cities from {path}");
    let task = IoTaskPool::get().spawn(async move { CityDirectory::load_from_file(path) });
    commands.spawn(CityDirectoryLoad(task));
}

pub fn finish_loading_cities(
    mut commands: Commands,
    mut loads: Query<(Entity, &mut CityDirectoryLoad)>,
    mut search: ResMut<SearchState>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (entity, mut load) in loads.iter_mut() {
        let Some(result) = block_on(future::poll_once(&mut load.0)) else {
            continue;
        };
        commands.entity(entity).despawn();

        match result {
            Ok(directory) if directory.is_empty() => {
                warn!("City dataset contains no cities");
                commands.insert_resource(directory);
                search.status = SearchStatus::LoadFailed("the city list is empty".to_string());
            }
            Ok(directory) => {
                info!("Loaded {} cities", directory.len());
                commands.insert_resource(directory);
                search.status = SearchStatus::Ready;
            }
            Err(err) => {
                // searching still works, every name is just unknown
                warn!("Could not load city dataset: {err}");
                commands.insert_resource(CityDirectory::default());
                search.status = SearchStatus::LoadFailed(err.to_string());
            }
        }
        next_state.set(AppState::Ready);
    }
}

/// Resolve submitted names. Only a known city raises [`LocationSelected`];
/// an unknown one changes nothing but the status line.
pub fn resolve_search(
    mut submissions: MessageReader<SearchSubmitted>,
    directory: Res<CityDirectory>,
    mut search: ResMut<SearchState>,
    mut selections: MessageWriter<LocationSelected>,
) {
    for submitted in submissions.read() {
        match directory.find(&submitted.name) {
            Ok(record) => {
                search.status = SearchStatus::Selected(record.city.clone());
                selections.write(LocationSelected {
                    city: record.city.clone(),
                    lat: record.lat,
                    lng: record.lng,
                });
            }
            Err(err) => {
                warn!("{err}");
                search.status = SearchStatus::UnknownCity(submitted.name.trim().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tasks::finished_task;
    use crate::search::cities::{CityError, CityRecord};
    use bevy::ecs::message::Messages;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_message::<SearchSubmitted>()
            .add_message::<LocationSelected>()
            .init_resource::<SearchState>()
            .insert_resource(CityDirectory::new(vec![CityRecord {
                city: "Nantes".to_string(),
                lat: 47.2181,
                lng: -1.5528,
            }]))
            .add_systems(Update, resolve_search);
        app
    }

    fn submit(app: &mut App, name: &str) {
        app.world_mut()
            .resource_mut::<Messages<SearchSubmitted>>()
            .write(SearchSubmitted {
                name: name.to_string(),
            });
    }

    fn selections(app: &mut App) -> Vec<LocationSelected> {
        app.world_mut()
            .resource_mut::<Messages<LocationSelected>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_known_city_raises_selection() {
        let mut app = test_app();
        submit(&mut app, "nantes");
        app.update();

        let selected = selections(&mut app);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].city, "Nantes");
        assert_eq!(selected[0].lng, -1.5528);
        assert_eq!(
            app.world().resource::<SearchState>().status,
            SearchStatus::Selected("Nantes".to_string())
        );
    }

    #[test]
    fn test_unknown_city_raises_nothing() {
        let mut app = test_app();
        submit(&mut app, "Gotham ");
        app.update();

        assert!(selections(&mut app).is_empty());
        assert_eq!(
            app.world().resource::<SearchState>().status,
            SearchStatus::UnknownCity("Gotham".to_string())
        );
    }

    fn loading_app(result: Result<CityDirectory, CityError>) -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .insert_state(AppState::LoadingCities)
            .init_resource::<SearchState>()
            .add_systems(Update, finish_loading_cities);
        app.world_mut().spawn(CityDirectoryLoad(finished_task(result)));
        app
    }

    #[test]
    fn test_loaded_directory_enables_search() {
        let mut app = loading_app(CityDirectory::from_json(
            r#"[{"city": "Nantes", "lat": 47.2181, "lng": -1.5528}]"#,
        ));
        app.update();
        app.update();

        assert_eq!(app.world().resource::<SearchState>().status, SearchStatus::Ready);
        assert_eq!(app.world().resource::<CityDirectory>().len(), 1);
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Ready
        );
    }

    #[test]
    fn test_empty_directory_is_reported() {
        let mut app = loading_app(Ok(CityDirectory::default()));
        app.update();
        app.update();

        assert!(matches!(
            app.world().resource::<SearchState>().status,
            SearchStatus::LoadFailed(_)
        ));
        assert!(app.world().resource::<CityDirectory>().is_empty());
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Ready
        );
    }
}
