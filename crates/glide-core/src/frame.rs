//! Frame scheduling primitive
//!
//! The engine advances every running glide once per frame. Hosts with a
//! display-refresh callback implement [`FrameScheduler`] over it; hosts
//! without one use [`FrameQueue`] and drain it from a fixed-interval timer.

use std::time::Duration;

/// Tick rate used by hosts that emulate frames with a timer (~60 fps)
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

/// Opaque handle of a scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler<K> {
    /// Request one frame callback for `target`
    fn schedule(&mut self, target: K) -> FrameHandle;

    /// Drop a scheduled callback; unknown handles are ignored
    fn cancel(&mut self, handle: FrameHandle);
}

/// Single-threaded queue of frame callbacks, fired in batches by the host
#[derive(Debug)]
pub struct FrameQueue<K> {
    next_id: u64,
    due: Vec<(FrameHandle, K)>,
}

impl<K> Default for FrameQueue<K> {
    fn default() -> Self {
        Self {
            next_id: 1,
            due: Vec::new(),
        }
    }
}

impl<K> FrameQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every callback scheduled so far.
    ///
    /// Callbacks scheduled while the returned batch is being fired land in
    /// the next batch, so each target advances at most once per frame.
    pub fn take_due(&mut self) -> Vec<(FrameHandle, K)> {
        std::mem::take(&mut self.due)
    }

    pub fn is_scheduled(&self, handle: FrameHandle) -> bool {
        self.due.iter().any(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }
}

impl<K> FrameScheduler<K> for FrameQueue<K> {
    fn schedule(&mut self, target: K) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.due.push((handle, target));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.due.retain(|(h, _)| *h != handle);
    }
}
