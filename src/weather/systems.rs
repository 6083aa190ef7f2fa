use crate::weather::client::WeatherClient;
use crate::weather::components::WeatherLookup;
use crate::weather::resources::{WeatherLookups, WeatherStatus};
use crate::wind::events::{LocationSelected, WindSampleReceived};
use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, block_on};

/// Start one forecast request per selected location
pub fn spawn_weather_lookups(
    mut commands: Commands,
    mut selections: MessageReader<LocationSelected>,
    client: Res<WeatherClient>,
    mut lookups: ResMut<WeatherLookups>,
    mut status: ResMut<WeatherStatus>,
) {
    let pool = IoTaskPool::get();
    for selection in selections.read() {
        let ticket = lookups.sequence.issue();
        let client = client.clone();
        let (lat, lng) = (selection.lat, selection.lng);
        let task = pool.spawn(async move { client.fetch_wind(lat, lng) });

        info!(
            "Fetching wind for {} ({lat}, {lng}), request #{}",
            selection.city,
            ticket.id()
        );
        commands.spawn(WeatherLookup {
            ticket,
            city: selection.city.clone(),
            task,
        });
        *status = WeatherStatus::Fetching(selection.city.clone());
    }
}

/// Collect finished requests. Responses that lost the race against a newer
/// selection are dropped; failures leave the animator on its last sample.
pub fn poll_weather_lookups(
    mut commands: Commands,
    mut pending: Query<(Entity, &mut WeatherLookup)>,
    lookups: Res<WeatherLookups>,
    mut samples: MessageWriter<WindSampleReceived>,
    mut status: ResMut<WeatherStatus>,
) {
    for (entity, mut lookup) in pending.iter_mut() {
        let Some(result) = block_on(future::poll_once(&mut lookup.task)) else {
            continue;
        };
        commands.entity(entity).despawn();

        if !lookups.sequence.is_current(lookup.ticket) {
            debug!(
                "Dropping stale weather response for {} (request #{})",
                lookup.city,
                lookup.ticket.id()
            );
            continue;
        }

        match result {
            Ok(sample) => {
                info!(
                    "Wind in {}: {:.0}° at {:.1}",
                    lookup.city, sample.direction, sample.speed
                );
                samples.write(WindSampleReceived { sample });
                *status = WeatherStatus::Ready(lookup.city.clone());
            }
            Err(err) => {
                warn!("Weather lookup for {} failed: {err}", lookup.city);
                *status = WeatherStatus::Failed {
                    city: lookup.city.clone(),
                    reason: err.to_string(),
                };
            }
        }
    }
}
