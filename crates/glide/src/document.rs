//! Text documents as scroll targets
//!
//! Scroll positions live in virtual pixels so glides can move in steps
//! smaller than a terminal row; rendering snaps them to whole cells.

use anyhow::{Context, Result};
use glide_core::{Axis, ScrollSurface};
use std::path::{Path, PathBuf};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TAB_WIDTH: usize = 4;

/// Scroll target identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(pub u32);

/// Cell size and wheel scaling for a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Pixels per row
    pub line_height: i64,
    /// Pixels per column
    pub column_width: i64,
    /// Wheel sensitivity in percent
    pub sensitivity: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            line_height: 16,
            column_width: 8,
            sensitivity: 40.0,
        }
    }
}

impl Metrics {
    pub fn new(line_height: u16, column_width: u16, sensitivity: f64) -> Self {
        Self {
            line_height: i64::from(line_height.max(1)),
            column_width: i64::from(column_width.max(1)),
            sensitivity,
        }
    }
}

pub struct Document {
    pub id: DocId,
    pub path: PathBuf,
    pub name: String,
    lines: Vec<String>,
    /// Widest line in display columns
    max_width: usize,
    scroll_x: i64,
    scroll_y: i64,
    viewport_rows: u16,
    viewport_cols: u16,
    metrics: Metrics,
    /// Set by `commit_visual_update`, cleared when drawn
    dirty: bool,
}

impl Document {
    pub fn from_text(id: DocId, path: PathBuf, text: &str, metrics: Metrics) -> Self {
        let lines: Vec<String> = text.lines().map(expand_tabs).collect();
        let max_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id,
            path,
            name,
            lines,
            max_width,
            scroll_x: 0,
            scroll_y: 0,
            viewport_rows: 0,
            viewport_cols: 0,
            metrics,
            dirty: true,
        }
    }

    pub fn load(id: DocId, path: &Path, metrics: Metrics) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        Ok(Self::from_text(id, path.to_path_buf(), &text, metrics))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: Metrics) {
        if metrics != self.metrics {
            // Keep the same row/column in view across a cell size change
            let row = self.top_line() as i64;
            let col = self.first_column() as i64;
            self.metrics = metrics;
            self.scroll_y = row * metrics.line_height;
            self.scroll_x = col * metrics.column_width;
            self.clamp();
            self.dirty = true;
        }
    }

    /// First visible line
    pub fn top_line(&self) -> usize {
        (self.scroll_y / self.metrics.line_height) as usize
    }

    /// First visible display column
    pub fn first_column(&self) -> usize {
        (self.scroll_x / self.metrics.column_width) as usize
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.viewport_rows, self.viewport_cols)
    }

    /// Record the text area size; positions are re-clamped to the new bounds
    pub fn set_viewport(&mut self, rows: u16, cols: u16) {
        if (rows, cols) != (self.viewport_rows, self.viewport_cols) {
            self.viewport_rows = rows;
            self.viewport_cols = cols;
            self.clamp();
            self.dirty = true;
        }
    }

    pub fn max_scroll(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => {
                let cols = self.max_width.saturating_sub(self.viewport_cols as usize);
                cols as i64 * self.metrics.column_width
            }
            Axis::Vertical => {
                let rows = self.lines.len().saturating_sub(self.viewport_rows as usize);
                rows as i64 * self.metrics.line_height
            }
        }
    }

    /// Scroll progress in percent
    pub fn progress(&self) -> u16 {
        let max = self.max_scroll(Axis::Vertical);
        if max == 0 {
            return 100;
        }
        (self.scroll_y * 100 / max) as u16
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    fn clamp(&mut self) {
        self.scroll_x = self.scroll_x.clamp(0, self.max_scroll(Axis::Horizontal));
        self.scroll_y = self.scroll_y.clamp(0, self.max_scroll(Axis::Vertical));
    }
}

impl ScrollSurface for Document {
    fn scroll_position(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Horizontal => self.scroll_x,
            Axis::Vertical => self.scroll_y,
        }
    }

    fn set_scroll_position(&mut self, axis: Axis, value: i64) -> bool {
        let value = value.clamp(0, self.max_scroll(axis));
        let slot = match axis {
            Axis::Horizontal => &mut self.scroll_x,
            Axis::Vertical => &mut self.scroll_y,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }

    fn commit_visual_update(&mut self) {
        self.dirty = true;
    }

    fn viewport_height(&self) -> i64 {
        i64::from(self.viewport_rows) * self.metrics.line_height
    }

    fn line_height(&self) -> f64 {
        self.metrics.line_height as f64
    }

    fn scroll_sensitivity(&self) -> f64 {
        self.metrics.sensitivity
    }
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Cut `width` display columns out of `line` starting at column `start`.
/// A wide character split by the left edge shows as padding; one split by
/// the right edge is dropped.
pub(crate) fn slice_columns(line: &str, start: usize, width: usize) -> String {
    let end = start + width;
    let mut out = String::new();
    let mut col = 0;
    for ch in line.chars() {
        if col >= end {
            break;
        }
        let w = ch.width().unwrap_or(0);
        let next = col + w;
        if col >= start {
            if next <= end {
                out.push(ch);
            }
        } else if next > start {
            out.extend(std::iter::repeat(' ').take(next.min(end) - start));
        }
        col = next;
    }
    out
}
