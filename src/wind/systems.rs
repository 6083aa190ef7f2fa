use crate::wind::events::{LocationSelected, WindSampleReceived};
use crate::wind::resources::{WindAnimator, WindReadout};
use bevy::prelude::*;
use windvane::animator::TickOutcome;

pub fn request_reset_on_selection(
    mut selections: MessageReader<LocationSelected>,
    mut animator: ResMut<WindAnimator>,
) {
    for selection in selections.read() {
        info!("Location selected: {}, resetting orientation", selection.city);
        animator.request_reset();
    }
}

pub fn queue_wind_samples(
    mut samples: MessageReader<WindSampleReceived>,
    mut animator: ResMut<WindAnimator>,
) {
    for received in samples.read() {
        debug!("Queued wind sample {:?}", received.sample);
        animator.push_sample(received.sample);
    }
}

/// Advance the animator one frame and keep the readout in step with its target
pub fn tick_wind_animator(
    time: Res<Time>,
    mut animator: ResMut<WindAnimator>,
    mut readout: ResMut<WindReadout>,
) {
    let outcome = animator.tick(time.delta_secs());
    // the reset tick always shows an empty readout, even if a sample is already staged
    if outcome == TickOutcome::Reset {
        readout.clear();
        return;
    }

    match animator.state().target {
        Some(sample) => {
            let next = WindReadout::for_sample(&sample);
            // only touch the resource when the text changes
            if *readout != next {
                *readout = next;
            }
        }
        None => {
            if !readout.is_empty() {
                readout.clear();
            }
        }
    }
}
