//! Application state and logic

use crate::config::Config;
use crate::document::{DocId, Document, Metrics};
use anyhow::Result;
use glide_core::{
    Axis, FrameOutcome, FrameQueue, ScrollCommand, ScrollRequest, ScrollSettings, ScrollSurface,
    SmoothScroll, WheelEvent,
};
use std::collections::HashMap;
use std::path::Path;

mod input;

/// The main application state
pub struct App {
    /// Open documents, one scroll target each
    pub documents: Vec<Document>,
    /// Index of the visible document
    pub active: usize,
    /// Smooth-scroll engine
    scroll: SmoothScroll<DocId>,
    /// Frames waiting for the next tick
    frames: FrameQueue<DocId>,
    /// Extra key bindings from config
    keys: HashMap<char, ScrollCommand>,
    /// Cell size and wheel sensitivity for new documents
    metrics: Metrics,
    next_id: u32,
    /// Show line numbers
    pub line_numbers: bool,
    /// Show scrollbar
    pub scrollbar_visible: bool,
    /// Whether to show the help popover
    pub show_help: bool,
    /// Whether to quit
    pub should_quit: bool,
    /// Redraw needed for reasons other than a scroll commit
    needs_redraw: bool,
}

impl App {
    pub fn new(settings: ScrollSettings, metrics: Metrics) -> Self {
        Self {
            documents: Vec::new(),
            active: 0,
            scroll: SmoothScroll::new(settings),
            frames: FrameQueue::new(),
            keys: HashMap::new(),
            metrics,
            next_id: 1,
            line_numbers: true,
            scrollbar_visible: true,
            show_help: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let metrics = Metrics::new(
            config.view.line_height,
            config.view.column_width,
            config.scroll.sensitivity(),
        );
        let mut app = Self::new(config.scroll.settings(), metrics);
        app.line_numbers = config.view.line_numbers;
        app.scrollbar_visible = config.view.scrollbar;
        app.keys = config.key_bindings();
        app
    }

    /// Re-apply a reloaded config
    pub fn apply_config(&mut self, config: &Config) {
        self.scroll.apply_settings(config.scroll.settings());
        self.metrics = Metrics::new(
            config.view.line_height,
            config.view.column_width,
            config.scroll.sensitivity(),
        );
        for doc in &mut self.documents {
            doc.set_metrics(self.metrics);
        }
        self.line_numbers = config.view.line_numbers;
        self.scrollbar_visible = config.view.scrollbar;
        self.keys = config.key_bindings();
        self.needs_redraw = true;
    }

    pub fn settings(&self) -> &ScrollSettings {
        self.scroll.settings()
    }

    pub fn open(&mut self, path: &Path) -> Result<DocId> {
        let id = self.allocate_id();
        let doc = Document::load(id, path, self.metrics)?;
        Ok(self.insert(doc))
    }

    pub fn open_text(&mut self, name: &str, text: &str) -> DocId {
        let id = self.allocate_id();
        let doc = Document::from_text(id, name.into(), text, self.metrics);
        self.insert(doc)
    }

    fn allocate_id(&mut self) -> DocId {
        let id = DocId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, doc: Document) -> DocId {
        let id = doc.id;
        self.scroll.attach(id);
        self.documents.push(doc);
        tracing::debug!(?id, "opened document");
        id
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.documents.get(self.active)
    }

    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.active)
    }

    pub fn is_multi_document(&self) -> bool {
        self.documents.len() > 1
    }

    /// True while the visible document is gliding
    pub fn is_gliding(&self) -> bool {
        self.active_document()
            .is_some_and(|doc| self.scroll.is_running(doc.id))
    }

    pub fn pending(&self, id: DocId) -> Option<(i64, i64)> {
        self.scroll.pending(id)
    }

    pub fn is_running(&self, id: DocId) -> bool {
        self.scroll.is_running(id)
    }

    pub fn scheduled_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn run_command(&mut self, command: ScrollCommand) {
        let Some(doc) = self.documents.get(self.active) else {
            return;
        };
        self.scroll.command(doc.id, command, doc, &mut self.frames);
    }

    pub fn wheel(&mut self, event: WheelEvent) {
        let Some(doc) = self.documents.get(self.active) else {
            return;
        };
        self.scroll.wheel(doc.id, event, doc, &mut self.frames);
    }

    /// Jump without animating, dropping any glide in flight
    pub fn jump(&mut self, axis: Axis, to_end: bool) {
        let Some(doc) = self.documents.get_mut(self.active) else {
            return;
        };
        let target = if to_end { doc.max_scroll(axis) } else { 0 };
        if doc.set_scroll_position(axis, target) {
            doc.commit_visual_update();
        }
        if self.scroll.is_running(doc.id) {
            self.scroll
                .push(doc.id, ScrollRequest::replace(0, 0, 0), &mut self.frames);
        }
    }

    /// Fire every frame that came due. Returns how many glides advanced.
    pub fn tick(&mut self) -> usize {
        let mut advanced = 0;
        for (handle, target) in self.frames.take_due() {
            let Some(doc) = self.documents.iter_mut().find(|doc| doc.id == target) else {
                tracing::trace!(?target, "frame for closed document");
                continue;
            };
            let outcome = self.scroll.on_frame(target, handle, doc, &mut self.frames);
            if outcome != FrameOutcome::Stale {
                advanced += 1;
            }
        }
        advanced
    }

    pub fn next_document(&mut self) {
        if !self.documents.is_empty() {
            self.active = (self.active + 1) % self.documents.len();
            self.needs_redraw = true;
        }
    }

    pub fn prev_document(&mut self) {
        if !self.documents.is_empty() {
            self.active = (self.active + self.documents.len() - 1) % self.documents.len();
            self.needs_redraw = true;
        }
    }

    /// Close the visible document, tearing down its glide
    pub fn close_active(&mut self) {
        if self.active >= self.documents.len() {
            return;
        }
        let doc = self.documents.remove(self.active);
        self.scroll.detach(doc.id, &mut self.frames);
        tracing::debug!(id = ?doc.id, "closed document");

        if self.documents.is_empty() {
            self.should_quit = true;
        } else if self.active >= self.documents.len() {
            self.active = self.documents.len() - 1;
        }
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.scroll.deactivate(&mut self.frames);
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_redraw = true;
    }

    pub fn toggle_line_numbers(&mut self) {
        self.line_numbers = !self.line_numbers;
        self.needs_redraw = true;
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
            || self
                .active_document()
                .is_some_and(Document::needs_redraw)
    }

    pub fn mark_drawn(&mut self) {
        self.needs_redraw = false;
        for doc in &mut self.documents {
            doc.mark_drawn();
        }
    }
}
