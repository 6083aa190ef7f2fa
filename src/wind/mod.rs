pub mod events;
pub mod resources;
pub mod systems;

use crate::wind::events::*;
use crate::wind::resources::*;
use crate::wind::systems::*;
use bevy::prelude::*;

/// Turns a submitted search into [`LocationSelected`]
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectLocation;

/// Issues weather lookups for new selections and collects their
/// [`WindSampleReceived`] results. Runs after [`SelectLocation`] so a new
/// selection always invalidates older lookups before they are polled.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchWind;

/// Systems that feed and tick the orientation animator. Anything reading the
/// rotation runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimateWind;

pub struct WindPlugin;

impl Plugin for WindPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LocationSelected>()
            .add_message::<WindSampleReceived>()
            .init_resource::<WindAnimator>()
            .init_resource::<WindReadout>()
            .configure_sets(Update, (SelectLocation, FetchWind, AnimateWind).chain())
            .add_systems(
                Update,
                (
                    request_reset_on_selection,
                    queue_wind_samples,
                    tick_wind_animator,
                )
                    .chain()
                    .in_set(AnimateWind),
            );
    }
}
