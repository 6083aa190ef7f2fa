/// Wind conditions for a location, as consumed by the animator.
///
/// Convention: `direction` is a signed compass angle in degrees, folded into
/// `[-180, 180]` so that 0 means "no turn" and the sign picks the turn side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindSample {
    pub direction: f32,
    pub speed: f32,
}

impl WindSample {
    /// Sample with an already signed direction
    pub const fn new(direction: f32, speed: f32) -> Self {
        Self { direction, speed }
    }

    /// Sample from a raw compass reading in `[0, 360)`
    pub fn from_compass(raw_direction: f32, speed: f32) -> Self {
        Self {
            direction: fold_compass(raw_direction),
            speed,
        }
    }

    /// Speed usable by the animator: negative and NaN readings count as calm
    pub fn effective_speed(&self) -> f32 {
        if self.speed.is_nan() {
            0.0
        } else {
            self.speed.max(0.0)
        }
    }

    /// Human-readable compass point (N, NE, E, ...) for the direction
    pub fn compass_point(&self) -> &'static str {
        let deg = self.direction.rem_euclid(360.0);
        match deg as u32 {
            0..=22 | 338..=360 => "N",
            23..=67 => "NE",
            68..=112 => "E",
            113..=157 => "SE",
            158..=202 => "S",
            203..=247 => "SW",
            248..=292 => "W",
            293..=337 => "NW",
            _ => "?",
        }
    }
}

/// Fold a raw compass reading into the signed range centered on 0.
/// Anything above 180 wraps to its negative counterpart (270 -> -90).
pub fn fold_compass(raw: f32) -> f32 {
    if raw > 180.0 { raw - 360.0 } else { raw }
}
