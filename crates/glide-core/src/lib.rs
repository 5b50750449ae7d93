//! Glide Core - smooth scrolling engine
//!
//! Turns discrete scroll input (wheel notches, page and line commands) into
//! glides: the requested distance is parked in a per-target accumulator and
//! applied over several frames in bounded steps.
//!
//! The engine never touches a real view. Hosts provide a [`ScrollSurface`]
//! for each target and a [`FrameScheduler`], then call
//! [`SmoothScroll::on_frame`] for every frame that comes due.

pub mod accumulator;
pub mod command;
pub mod error;
pub mod frame;
pub mod scroller;
pub mod session;
pub mod settings;
pub mod step;
pub mod surface;
pub mod wheel;

#[cfg(test)]
mod testing;

pub use accumulator::{Accumulator, ScrollRequest};
pub use command::ScrollCommand;
pub use error::{CommandError, SettingsError};
pub use frame::{FrameHandle, FrameQueue, FrameScheduler, DEFAULT_TICK_RATE};
pub use scroller::{FrameOutcome, Scroller};
pub use session::SmoothScroll;
pub use settings::{ScrollSettings, WheelDivisor};
pub use step::{compute_step, StepPolicy};
pub use surface::{Axis, ScrollSurface};
pub use wheel::WheelEvent;
