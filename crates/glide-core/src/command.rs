//! Discrete scroll commands (line and page glides)

use crate::accumulator::ScrollRequest;
use crate::error::CommandError;
use crate::settings::ScrollSettings;
use crate::surface::ScrollSurface;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix accepted in front of command names (`smooth-scroll:page-down`)
pub const COMMAND_NAMESPACE: &str = "smooth-scroll:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollCommand {
    LineUp,
    LineDown,
    LineLeft,
    LineRight,
    PageUp,
    PageDown,
}

impl ScrollCommand {
    pub const ALL: [ScrollCommand; 6] = [
        ScrollCommand::LineUp,
        ScrollCommand::LineDown,
        ScrollCommand::LineLeft,
        ScrollCommand::LineRight,
        ScrollCommand::PageUp,
        ScrollCommand::PageDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScrollCommand::LineUp => "line-up",
            ScrollCommand::LineDown => "line-down",
            ScrollCommand::LineLeft => "line-left",
            ScrollCommand::LineRight => "line-right",
            ScrollCommand::PageUp => "page-up",
            ScrollCommand::PageDown => "page-down",
        }
    }

    /// Build the glide for this command on `surface`.
    ///
    /// Every command replaces leftover motion and uses a fixed step of
    /// `speed`% of the total distance, so a glide takes about `100 / speed`
    /// frames whatever its length.
    pub fn request<T>(self, surface: &T, settings: &ScrollSettings) -> ScrollRequest
    where
        T: ScrollSurface + ?Sized,
    {
        let page = surface.viewport_height();
        let lines = (surface.line_height() * f64::from(settings.line_count())) as i64;
        let page_speed = settings.page_speed_factor();
        let line_speed = settings.line_speed_factor();

        match self {
            ScrollCommand::PageUp => glide(0, -page, page_speed),
            ScrollCommand::PageDown => glide(0, page, page_speed),
            ScrollCommand::LineUp => glide(0, -lines, line_speed),
            ScrollCommand::LineDown => glide(0, lines, line_speed),
            ScrollCommand::LineLeft => glide(-lines, 0, line_speed),
            ScrollCommand::LineRight => glide(lines, 0, line_speed),
        }
    }
}

fn glide(delta_x: i64, delta_y: i64, speed_factor: u32) -> ScrollRequest {
    let offset = if delta_x != 0 { delta_x } else { delta_y };
    ScrollRequest::replace(delta_x, delta_y, step_size(offset, speed_factor))
}

/// `|trunc(offset * speed / 100)|`, 0 when the glide is too short for a fixed step
fn step_size(offset: i64, speed_factor: u32) -> u32 {
    let step = (offset.saturating_mul(i64::from(speed_factor)) / 100).unsigned_abs();
    u32::try_from(step).unwrap_or(u32::MAX)
}

impl fmt::Display for ScrollCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrollCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(COMMAND_NAMESPACE).unwrap_or(name);
        ScrollCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == name)
            .ok_or_else(|| CommandError::Unknown(s.to_string()))
    }
}
