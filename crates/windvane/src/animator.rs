use crate::config::{AnimatorConfig, StepMode};
use crate::latch::ResetLatch;
use crate::sample::WindSample;
use crate::state::OrientationState;
use glam::Quat;
use std::collections::VecDeque;

/// Input pushed by the weather and search collaborators, drained once per tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindEvent {
    Sample(WindSample),
    ResetRequested,
}

/// What a tick did, so the caller can update whatever mirrors the animator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No location selected yet, idle spin applied
    Idle,
    /// Pending reset consumed; displayed readouts must be cleared
    Reset,
    /// Moved toward the current sample
    Tracking { reached: bool },
    /// Location selected but no sample to follow
    Holding,
}

/// Rotation to apply to the model root, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub tilt_degrees: f32,
    pub effective_yaw_degrees: f32,
}

impl Rotation {
    /// Yaw about world Y first, then tilt about the rotated X axis
    pub fn to_quat(&self) -> Quat {
        Quat::from_rotation_y(self.effective_yaw_degrees.to_radians())
            * Quat::from_rotation_x(self.tilt_degrees.to_radians())
    }
}

/// Turns wind samples into a bounded, continuously updated orientation.
///
/// The animator is driven by calling [`Animator::tick`] once per rendered
/// frame. Collaborators never touch [`OrientationState`] directly; they push
/// [`WindEvent`]s which are applied at the start of the next tick.
#[derive(Debug)]
pub struct Animator {
    config: AnimatorConfig,
    state: OrientationState,
    latch: ResetLatch,
    queue: VecDeque<WindEvent>,
    location_selected: bool,
}

impl Animator {
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            state: OrientationState::new(),
            latch: ResetLatch::default(),
            queue: VecDeque::new(),
            location_selected: false,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn state(&self) -> &OrientationState {
        &self.state
    }

    pub fn location_selected(&self) -> bool {
        self.location_selected
    }

    pub fn push(&mut self, event: WindEvent) {
        self.queue.push_back(event);
    }

    pub fn push_sample(&mut self, sample: WindSample) {
        self.push(WindEvent::Sample(sample));
    }

    /// Ask for one reset on the next tick. Repeated calls before that tick collapse into one.
    pub fn request_reset(&mut self) {
        self.push(WindEvent::ResetRequested);
    }

    pub fn is_reset_pending(&self) -> bool {
        self.latch.is_pending() || self.queue.contains(&WindEvent::ResetRequested)
    }

    pub fn rotation(&self) -> Rotation {
        Rotation {
            tilt_degrees: self.state.tilt,
            effective_yaw_degrees: self.config.baseline_yaw_degrees - self.state.yaw_offset,
        }
    }

    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        let staged = self.drain_events();
        let scale = self.step_scale(dt);

        if self.latch.take() {
            self.state.reset();
            self.state.target = staged;
            log::debug!("orientation reset, next target {:?}", staged);
            return TickOutcome::Reset;
        }

        if let Some(sample) = staged {
            self.state.target = Some(sample);
        }

        if !self.location_selected {
            // kept in one turn so small steps never vanish into f32 precision
            self.state.yaw_offset =
                (self.state.yaw_offset + self.config.idle_yaw_step * scale).rem_euclid(360.0);
            return TickOutcome::Idle;
        }

        match self.state.target {
            Some(sample) => {
                let reached = self.advance(sample, scale);
                TickOutcome::Tracking { reached }
            }
            None => TickOutcome::Holding,
        }
    }

    /// Apply queued events in arrival order. Samples queued before a reset
    /// belong to the previous location and are dropped.
    fn drain_events(&mut self) -> Option<WindSample> {
        let mut staged = None;
        while let Some(event) = self.queue.pop_front() {
            self.location_selected = true;
            match event {
                WindEvent::ResetRequested => {
                    self.latch.request();
                    staged = None;
                }
                WindEvent::Sample(sample) => staged = Some(sample),
            }
        }
        staged
    }

    fn step_scale(&self, dt: f32) -> f32 {
        match self.config.step_mode {
            StepMode::PerTick => 1.0,
            StepMode::TimeScaled { reference_hz } => dt.max(0.0) * reference_hz,
        }
    }

    fn advance(&mut self, sample: WindSample, scale: f32) -> bool {
        let speed = sample.effective_speed();
        let tilt_step = self.config.tilt_step_per_speed * speed * scale;
        let yaw_step = self.config.yaw_step_per_speed * speed * scale;

        let max_tilt = self.config.max_tilt_degrees;
        if self.state.tilt < max_tilt {
            self.state.tilt = (self.state.tilt + tilt_step).min(max_tilt);
        }

        let target = sample.direction;
        let remaining = target - self.state.yaw_offset;
        let was_reached = remaining == 0.0;
        // Land exactly on the target instead of stepping past it
        self.state.yaw_offset = if remaining.abs() <= yaw_step {
            target
        } else {
            self.state.yaw_offset + yaw_step.copysign(remaining)
        };

        let reached = self.state.yaw_offset == target;
        if reached && !was_reached {
            log::debug!("yaw reached wind direction {target}");
        }
        reached
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}
