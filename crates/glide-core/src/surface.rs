//! Boundary between the engine and the scrollable surface it drives

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A scrollable target as seen by the engine and the request producers.
///
/// Positions and metrics are in the surface's own pixel units.
pub trait ScrollSurface {
    fn scroll_position(&self, axis: Axis) -> i64;

    /// Move to `value`, returning false when the position did not change
    /// (typically because the surface clamps at its scroll bounds).
    fn set_scroll_position(&mut self, axis: Axis, value: i64) -> bool;

    /// Flush pending position changes to the visible state.
    fn commit_visual_update(&mut self);

    fn viewport_height(&self) -> i64;

    fn line_height(&self) -> f64;

    /// Wheel sensitivity in percent
    fn scroll_sensitivity(&self) -> f64;
}
