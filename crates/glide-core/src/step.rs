//! Step-size policy for frame-by-frame scroll consumption

use crate::settings::WheelDivisor;
use std::num::NonZeroU32;

/// How much of the pending distance a single frame may consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Step shrinks with the remaining distance (wheel input)
    #[default]
    Adaptive,
    /// Constant step for the whole glide (discrete commands)
    Fixed(NonZeroU32),
}

impl StepPolicy {
    /// Build a policy from a raw step size, where 0 selects adaptive mode
    pub fn from_step_size(step_size: u32) -> Self {
        NonZeroU32::new(step_size).map_or(StepPolicy::Adaptive, StepPolicy::Fixed)
    }

    /// Raw step size (0 for adaptive)
    pub fn step_size(self) -> u32 {
        match self {
            StepPolicy::Adaptive => 0,
            StepPolicy::Fixed(step) => step.get(),
        }
    }
}

impl From<u32> for StepPolicy {
    fn from(step_size: u32) -> Self {
        StepPolicy::from_step_size(step_size)
    }
}

/// Compute the portion of `pending` to apply this frame.
///
/// The result always has the sign of `pending` and never exceeds it in
/// magnitude, so repeatedly subtracting it drains to exactly zero.
pub fn compute_step(pending: i64, policy: StepPolicy, divisor: WheelDivisor) -> i64 {
    if pending == 0 {
        return 0;
    }

    match policy {
        StepPolicy::Fixed(step) => {
            if pending.unsigned_abs() < u64::from(step.get()) {
                pending
            } else {
                pending.signum() * i64::from(step.get())
            }
        }
        StepPolicy::Adaptive => {
            if pending.unsigned_abs() < u64::from(divisor.get()) {
                // Small residue: at least one unit of progress
                pending.signum().max(pending / 3)
            } else {
                pending / i64::from(divisor.get())
            }
        }
    }
}
