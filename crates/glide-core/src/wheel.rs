//! Wheel input to scroll requests

use crate::accumulator::ScrollRequest;

/// A wheel event with DOM-style delta: positive scrolls up (toward the start)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    /// Shift held: the wheel drives the horizontal axis
    pub shift: bool,
}

impl WheelEvent {
    /// Delta reported for one notch of a classic mouse wheel
    pub const NOTCH: f64 = 120.0;

    pub fn new(delta_y: f64, shift: bool) -> Self {
        Self { delta_y, shift }
    }

    pub fn notch_up(shift: bool) -> Self {
        Self::new(Self::NOTCH, shift)
    }

    pub fn notch_down(shift: bool) -> Self {
        Self::new(-Self::NOTCH, shift)
    }

    /// Scale by `sensitivity` percent and merge into any running glide
    pub fn request(&self, sensitivity: f64) -> ScrollRequest {
        let amount = (-self.delta_y * sensitivity / 100.0) as i64;
        if self.shift {
            ScrollRequest::merge(amount, 0)
        } else {
            ScrollRequest::merge(0, amount)
        }
    }
}
