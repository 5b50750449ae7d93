//! Smooth-scroll session: settings, wheel listeners and the scroller

use crate::accumulator::ScrollRequest;
use crate::command::ScrollCommand;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::scroller::{FrameOutcome, Scroller};
use crate::settings::ScrollSettings;
use crate::surface::ScrollSurface;
use crate::wheel::WheelEvent;
use rustc_hash::FxHashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, info};

/// Everything the host talks to.
///
/// Targets are attached when the host first sees them (which registers the
/// wheel listener) and detached on teardown. Settings are replaced whole
/// through [`SmoothScroll::apply_settings`].
#[derive(Debug)]
pub struct SmoothScroll<K> {
    settings: ScrollSettings,
    scroller: Scroller<K>,
    listeners: FxHashSet<K>,
}

impl<K> Default for SmoothScroll<K> {
    fn default() -> Self {
        Self {
            settings: ScrollSettings::default(),
            scroller: Scroller::default(),
            listeners: FxHashSet::default(),
        }
    }
}

impl<K> SmoothScroll<K>
where
    K: Copy + Eq + Hash + Debug,
{
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    /// Swap in new settings; running glides pick them up on their next frame
    pub fn apply_settings(&mut self, settings: ScrollSettings) {
        if settings != self.settings {
            info!(?settings, "scroll settings updated");
            self.settings = settings;
        }
    }

    pub fn scroller(&self) -> &Scroller<K> {
        &self.scroller
    }

    /// Start listening to wheel input for `target`. Returns false if already attached.
    pub fn attach(&mut self, target: K) -> bool {
        self.scroller.ensure(target);
        let added = self.listeners.insert(target);
        if added {
            debug!(?target, "attached");
        }
        added
    }

    pub fn is_attached(&self, target: K) -> bool {
        self.listeners.contains(&target)
    }

    /// Route a wheel event. Ignored when `target` has no listener.
    pub fn wheel<T, S>(
        &mut self,
        target: K,
        event: WheelEvent,
        surface: &T,
        scheduler: &mut S,
    ) -> bool
    where
        T: ScrollSurface + ?Sized,
        S: FrameScheduler<K> + ?Sized,
    {
        if !self.is_attached(target) {
            return false;
        }
        let request = event.request(surface.scroll_sensitivity());
        self.scroller.push(target, request, scheduler);
        true
    }

    /// Run a discrete command. Returns true when it started a new glide.
    pub fn command<T, S>(
        &mut self,
        target: K,
        command: ScrollCommand,
        surface: &T,
        scheduler: &mut S,
    ) -> bool
    where
        T: ScrollSurface + ?Sized,
        S: FrameScheduler<K> + ?Sized,
    {
        let request = command.request(surface, &self.settings);
        debug!(?target, %command, ?request, "command");
        self.scroller.push(target, request, scheduler)
    }

    pub fn push<S>(&mut self, target: K, request: ScrollRequest, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<K> + ?Sized,
    {
        self.scroller.push(target, request, scheduler)
    }

    pub fn on_frame<T, S>(
        &mut self,
        target: K,
        handle: FrameHandle,
        surface: &mut T,
        scheduler: &mut S,
    ) -> FrameOutcome
    where
        T: ScrollSurface + ?Sized,
        S: FrameScheduler<K> + ?Sized,
    {
        let divisor = self.settings.wheel_divisor();
        self.scroller
            .on_frame(target, handle, divisor, surface, scheduler)
    }

    /// Tear down `target`: remove its wheel listener and cancel its glide.
    pub fn detach<S>(&mut self, target: K, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<K> + ?Sized,
    {
        let listened = self.listeners.remove(&target);
        let tracked = self.scroller.detach(target, scheduler).is_some();
        listened || tracked
    }

    /// Detach every target
    pub fn deactivate<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler<K> + ?Sized,
    {
        let targets: FxHashSet<K> = self
            .scroller
            .targets()
            .chain(self.listeners.iter().copied())
            .collect();
        for target in targets {
            self.detach(target, scheduler);
        }
        debug!("deactivated");
    }

    pub fn is_running(&self, target: K) -> bool {
        self.scroller.is_running(target)
    }

    pub fn pending(&self, target: K) -> Option<(i64, i64)> {
        self.scroller.get(target).map(|acc| acc.pending())
    }
}
