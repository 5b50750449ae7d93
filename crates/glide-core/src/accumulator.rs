//! Per-target pending scroll distance

use crate::frame::FrameHandle;
use crate::step::StepPolicy;

/// A scroll request produced by wheel input or a discrete command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRequest {
    pub delta_x: i64,
    pub delta_y: i64,
    /// Fixed per-frame step, 0 for adaptive
    pub step_size: u32,
    /// Replace pending distance instead of adding to it
    pub reset: bool,
}

impl ScrollRequest {
    /// A request that accumulates with leftover motion (wheel input)
    pub fn merge(delta_x: i64, delta_y: i64) -> Self {
        Self {
            delta_x,
            delta_y,
            step_size: 0,
            reset: false,
        }
    }

    /// A request that defines one absolute glide (discrete commands)
    pub fn replace(delta_x: i64, delta_y: i64, step_size: u32) -> Self {
        Self {
            delta_x,
            delta_y,
            step_size,
            reset: true,
        }
    }
}

/// Animation state for one scroll target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub(crate) pending_x: i64,
    pub(crate) pending_y: i64,
    pub(crate) policy: StepPolicy,
    /// Scheduled frame; `Some` exactly while the glide is running
    pub(crate) frame: Option<FrameHandle>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a request into the pending distance and adopt its step policy
    pub fn apply(&mut self, request: ScrollRequest) {
        if request.reset {
            self.pending_x = request.delta_x;
            self.pending_y = request.delta_y;
        } else {
            self.pending_x = self.pending_x.saturating_add(request.delta_x);
            self.pending_y = self.pending_y.saturating_add(request.delta_y);
        }
        self.policy = StepPolicy::from_step_size(request.step_size);
    }

    pub fn pending(&self) -> (i64, i64) {
        (self.pending_x, self.pending_y)
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_drained(&self) -> bool {
        self.pending_x == 0 && self.pending_y == 0
    }

    pub(crate) fn clear(&mut self) {
        self.pending_x = 0;
        self.pending_y = 0;
    }
}
