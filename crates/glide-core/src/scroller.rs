//! Frame-stepped scroll animation over a set of targets

use crate::accumulator::{Accumulator, ScrollRequest};
use crate::frame::{FrameHandle, FrameScheduler};
use crate::settings::WheelDivisor;
use crate::step::compute_step;
use crate::surface::{Axis, ScrollSurface};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Result of firing one frame for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Distance remains; the next frame is scheduled
    Continue { step_x: i64, step_y: i64 },
    /// Pending distance is drained and the glide is idle
    Finished { step_x: i64, step_y: i64 },
    /// Handle no longer belongs to a running glide (detached or superseded)
    Stale,
}

impl FrameOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, FrameOutcome::Finished { .. })
    }
}

/// Owns one [`Accumulator`] per scroll target
#[derive(Debug)]
pub struct Scroller<K> {
    accumulators: FxHashMap<K, Accumulator>,
}

impl<K> Default for Scroller<K> {
    fn default() -> Self {
        Self {
            accumulators: FxHashMap::default(),
        }
    }
}

impl<K> Scroller<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `target` has an accumulator
    pub fn ensure(&mut self, target: K) -> &Accumulator {
        self.accumulators.entry(target).or_default()
    }

    pub fn get(&self, target: K) -> Option<&Accumulator> {
        self.accumulators.get(&target)
    }

    pub fn is_running(&self, target: K) -> bool {
        self.get(target).is_some_and(Accumulator::is_running)
    }

    pub fn targets(&self) -> impl Iterator<Item = K> + '_ {
        self.accumulators.keys().copied()
    }

    /// Queue a request for `target`, starting its glide if idle.
    ///
    /// Returns true when this push started a new glide. A push into a
    /// running glide only updates what the already scheduled frame reads.
    pub fn push<S>(&mut self, target: K, request: ScrollRequest, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<K> + ?Sized,
    {
        let acc = self.accumulators.entry(target).or_default();
        acc.apply(request);

        if acc.is_running() {
            trace!(?target, pending = ?acc.pending(), "merged into running glide");
            return false;
        }

        acc.frame = Some(scheduler.schedule(target));
        debug!(?target, pending = ?acc.pending(), policy = ?acc.policy(), "glide started");
        true
    }

    /// Advance the glide of `target` by one frame.
    pub fn on_frame<T, S>(
        &mut self,
        target: K,
        handle: FrameHandle,
        divisor: WheelDivisor,
        surface: &mut T,
        scheduler: &mut S,
    ) -> FrameOutcome
    where
        T: ScrollSurface + ?Sized,
        S: FrameScheduler<K> + ?Sized,
    {
        let Some(acc) = self.accumulators.get_mut(&target) else {
            trace!(?target, ?handle, "frame for detached target");
            return FrameOutcome::Stale;
        };
        if acc.frame != Some(handle) {
            trace!(?target, ?handle, "stale frame");
            return FrameOutcome::Stale;
        }
        // This callback has fired
        acc.frame = None;

        let step_x = compute_step(acc.pending_x, acc.policy, divisor);
        let step_y = compute_step(acc.pending_y, acc.policy, divisor);

        let mut changed = false;
        if step_x != 0 {
            acc.pending_x -= step_x;
            changed |= step_surface(surface, Axis::Horizontal, step_x);
        }
        if step_y != 0 {
            acc.pending_y -= step_y;
            changed |= step_surface(surface, Axis::Vertical, step_y);
        }

        // One moving axis keeps the whole glide alive
        if changed {
            surface.commit_visual_update();
        } else {
            if !acc.is_drained() {
                debug!(?target, pending = ?acc.pending(), "surface pinned, dropping glide");
            }
            acc.clear();
        }

        trace!(?target, step_x, step_y, pending = ?acc.pending(), "frame");

        if !acc.is_drained() {
            acc.frame = Some(scheduler.schedule(target));
            FrameOutcome::Continue { step_x, step_y }
        } else {
            debug!(?target, "glide finished");
            FrameOutcome::Finished { step_x, step_y }
        }
    }

    /// Tear down `target`: cancel its scheduled frame and drop its state.
    pub fn detach<S>(&mut self, target: K, scheduler: &mut S) -> Option<Accumulator>
    where
        S: FrameScheduler<K> + ?Sized,
    {
        let mut acc = self.accumulators.remove(&target)?;
        if let Some(handle) = acc.frame.take() {
            scheduler.cancel(handle);
            debug!(?target, "detached during glide");
        }
        Some(acc)
    }
}

fn step_surface<T>(surface: &mut T, axis: Axis, step: i64) -> bool
where
    T: ScrollSurface + ?Sized,
{
    let position = surface.scroll_position(axis);
    surface.set_scroll_position(axis, position.saturating_add(step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameQueue;
    use crate::testing::TestSurface;

    const TARGET: u32 = 1;

    /// Fire frames until the queue empties, returning applied (x, y) steps
    fn run_to_idle(
        scroller: &mut Scroller<u32>,
        queue: &mut FrameQueue<u32>,
        surface: &mut TestSurface,
    ) -> Vec<(i64, i64)> {
        let divisor = WheelDivisor::default();
        let mut steps = Vec::new();
        while !queue.is_empty() {
            for (handle, target) in queue.take_due() {
                match scroller.on_frame(target, handle, divisor, surface, queue) {
                    FrameOutcome::Continue { step_x, step_y } => {
                        assert!(scroller.is_running(target));
                        steps.push((step_x, step_y));
                    }
                    FrameOutcome::Finished { step_x, step_y } => {
                        assert!(!scroller.is_running(target));
                        steps.push((step_x, step_y));
                    }
                    FrameOutcome::Stale => {}
                }
            }
            assert!(steps.len() < 10_000);
        }
        steps
    }

    #[test]
    fn test_push_starts_single_loop() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();

        assert!(scroller.push(TARGET, ScrollRequest::merge(0, 48), &mut queue));
        assert!(!scroller.push(TARGET, ScrollRequest::merge(0, 48), &mut queue));
        assert_eq!(queue.len(), 1);
        assert!(scroller.is_running(TARGET));
        assert_eq!(scroller.get(TARGET).map(Accumulator::pending), Some((0, 96)));
    }

    #[test]
    fn test_reset_push_replaces_pending() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        scroller.push(TARGET, ScrollRequest::merge(0, 500), &mut queue);
        scroller.push(TARGET, ScrollRequest::replace(0, -40, 10), &mut queue);
        assert_eq!(scroller.get(TARGET).map(Accumulator::pending), Some((0, -40)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_fixed_glide_runs_to_completion() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(1_000, 1_000);

        scroller.push(TARGET, ScrollRequest::replace(23, 0, 10), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        assert_eq!(steps, vec![(10, 0), (10, 0), (3, 0)]);
        assert_eq!(surface.x, 23);
        assert_eq!(surface.commits, 3);
        assert!(!scroller.is_running(TARGET));
        assert!(scroller.get(TARGET).is_some_and(Accumulator::is_drained));
    }

    #[test]
    fn test_adaptive_glide_lands_exactly() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 10_000);
        surface.y = 500;

        scroller.push(TARGET, ScrollRequest::merge(0, -100), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        assert_eq!(steps[0], (0, -14));
        assert!(steps.iter().all(|(_, y)| *y < 0));
        assert_eq!(surface.y, 400);
    }

    #[test]
    fn test_running_clears_in_draining_frame() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(1_000, 1_000);
        let divisor = WheelDivisor::default();

        scroller.push(TARGET, ScrollRequest::replace(0, 5, 10), &mut queue);
        let (handle, target) = queue.take_due()[0];
        let outcome = scroller.on_frame(target, handle, divisor, &mut surface, &mut queue);

        assert_eq!(outcome, FrameOutcome::Finished { step_x: 0, step_y: 5 });
        assert!(!scroller.is_running(TARGET));
        assert!(queue.is_empty());

        // Idle again, so the next push starts a fresh loop
        assert!(scroller.push(TARGET, ScrollRequest::merge(0, 5), &mut queue));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_merge_mid_glide_extends_motion() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 10_000);
        let divisor = WheelDivisor::default();

        scroller.push(TARGET, ScrollRequest::merge(0, 70), &mut queue);
        let (handle, target) = queue.take_due()[0];
        scroller.on_frame(target, handle, divisor, &mut surface, &mut queue);
        assert_eq!(surface.y, 10);

        // Wheel tick lands while the next frame is pending
        assert!(!scroller.push(TARGET, ScrollRequest::merge(0, 70), &mut queue));
        assert_eq!(scroller.get(TARGET).map(Accumulator::pending), Some((0, 130)));
        assert_eq!(queue.len(), 1);

        run_to_idle(&mut scroller, &mut queue, &mut surface);
        assert_eq!(surface.y, 140);
    }

    #[test]
    fn test_pinned_surface_stops_in_one_frame() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 0);

        scroller.push(TARGET, ScrollRequest::merge(-5_000, 1_000_000), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        assert_eq!(steps.len(), 1);
        assert_eq!(surface.commits, 0);
        assert!(scroller.get(TARGET).is_some_and(Accumulator::is_drained));
        assert!(!scroller.is_running(TARGET));
    }

    #[test]
    fn test_one_free_axis_keeps_glide_alive() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        // Horizontal is pinned at 0, vertical has room
        let mut surface = TestSurface::new(0, 1_000);

        scroller.push(TARGET, ScrollRequest::replace(-30, 30, 10), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        assert_eq!(steps, vec![(-10, 10), (-10, 10), (-10, 10)]);
        assert_eq!((surface.x, surface.y), (0, 30));
        assert_eq!(surface.commits, 3);
    }

    #[test]
    fn test_glide_stops_at_bound() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 25);

        scroller.push(TARGET, ScrollRequest::replace(0, 100, 10), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        // Third step clamps to 25, fourth reports no change
        assert_eq!(steps.len(), 4);
        assert_eq!(surface.y, 25);
        assert!(scroller.get(TARGET).is_some_and(Accumulator::is_drained));
    }

    #[test]
    fn test_zero_push_finishes_on_first_frame() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(100, 100);

        scroller.push(TARGET, ScrollRequest::merge(0, 0), &mut queue);
        let steps = run_to_idle(&mut scroller, &mut queue, &mut surface);

        assert_eq!(steps, vec![(0, 0)]);
        assert_eq!(surface.sets, 0);
    }

    #[test]
    fn test_detach_cancels_scheduled_frame() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 1_000);
        let divisor = WheelDivisor::default();

        scroller.push(TARGET, ScrollRequest::merge(0, 300), &mut queue);
        let (handle, target) = queue.take_due()[0];
        scroller.on_frame(target, handle, divisor, &mut surface, &mut queue);
        assert_eq!(queue.len(), 1);

        let detached = scroller.detach(TARGET, &mut queue);
        assert!(detached.is_some_and(|acc| !acc.is_running()));
        assert!(queue.is_empty());
        assert!(scroller.get(TARGET).is_none());
        assert!(scroller.detach(TARGET, &mut queue).is_none());
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 1_000);
        let divisor = WheelDivisor::default();

        scroller.push(TARGET, ScrollRequest::merge(0, 300), &mut queue);
        let (handle, target) = queue.take_due()[0];
        scroller.detach(TARGET, &mut queue);

        let outcome = scroller.on_frame(target, handle, divisor, &mut surface, &mut queue);
        assert_eq!(outcome, FrameOutcome::Stale);
        assert_eq!(surface.y, 0);

        scroller.push(TARGET, ScrollRequest::merge(0, 300), &mut queue);
        let outcome = scroller.on_frame(target, handle, divisor, &mut surface, &mut queue);
        assert_eq!(outcome, FrameOutcome::Stale);
        assert!(scroller.is_running(TARGET));
    }

    #[test]
    fn test_targets_are_independent() {
        let mut scroller = Scroller::new();
        let mut queue = FrameQueue::new();
        let mut surface = TestSurface::new(0, 1_000);

        scroller.push(1, ScrollRequest::merge(0, 50), &mut queue);
        scroller.push(2, ScrollRequest::replace(0, 20, 10), &mut queue);
        assert_eq!(queue.len(), 2);

        scroller.detach(1, &mut queue);
        assert_eq!(queue.len(), 1);
        assert!(scroller.is_running(2));

        run_to_idle(&mut scroller, &mut queue, &mut surface);
        assert_eq!(surface.y, 20);
        assert_eq!(scroller.targets().collect::<Vec<_>>(), vec![2]);
    }
}
