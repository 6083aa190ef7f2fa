use crate::sample::WindSample;

/// Accumulated orientation of the model.
///
/// Plain data: the bounds on `tilt` and the no-overshoot rule on `yaw_offset`
/// are enforced by the animator that owns this state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationState {
    pub tilt: f32,
    pub yaw_offset: f32,
    pub target: Option<WindSample>,
}

impl OrientationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.tilt = 0.0;
        self.yaw_offset = 0.0;
        self.target = None;
    }

    pub fn is_at_rest(&self) -> bool {
        self.tilt == 0.0 && self.yaw_offset == 0.0
    }
}
