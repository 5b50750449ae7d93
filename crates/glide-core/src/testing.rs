use crate::surface::{Axis, ScrollSurface};

/// Surface clamped to `[0, max]` per axis that counts setter and commit calls
#[derive(Debug, Clone)]
pub(crate) struct TestSurface {
    pub x: i64,
    pub y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub viewport_height: i64,
    pub line_height: f64,
    pub sensitivity: f64,
    pub sets: usize,
    pub commits: usize,
}

impl TestSurface {
    pub fn new(max_x: i64, max_y: i64) -> Self {
        Self {
            x: 0,
            y: 0,
            max_x,
            max_y,
            viewport_height: 400,
            line_height: 16.0,
            sensitivity: 40.0,
            sets: 0,
            commits: 0,
        }
    }
}

impl ScrollSurface for TestSurface {
    fn scroll_position(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn set_scroll_position(&mut self, axis: Axis, value: i64) -> bool {
        self.sets += 1;
        let (slot, max) = match axis {
            Axis::Horizontal => (&mut self.x, self.max_x),
            Axis::Vertical => (&mut self.y, self.max_y),
        };
        let value = value.clamp(0, max);
        let changed = *slot != value;
        *slot = value;
        changed
    }

    fn commit_visual_update(&mut self) {
        self.commits += 1;
    }

    fn viewport_height(&self) -> i64 {
        self.viewport_height
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }

    fn scroll_sensitivity(&self) -> f64 {
        self.sensitivity
    }
}
