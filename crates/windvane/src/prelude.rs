pub use crate::animator::{Animator, Rotation, TickOutcome, WindEvent};
pub use crate::config::{AnimatorConfig, StepMode, WindvaneConfig};
pub use crate::latch::ResetLatch;
pub use crate::sample::WindSample;
pub use crate::sequence::{LookupSequence, LookupTicket};
pub use crate::state::OrientationState;
