use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::{ClassHint, Rect, Screen, Window, WindowId};

/// Trait for querying window properties from the window system.
/// This abstraction allows mocking in tests.
pub trait WindowSystem {
    fn class_hint(&self, window_id: WindowId) -> ClassHint;
}

/// Trait for the external collaborators driven by state changes.
/// This abstraction allows mocking in tests.
pub trait WindowManipulator {
    fn persist_window_tags(&self, window: &Window, tag_count: usize);
    fn persist_screen_tags(&self, screen: &Screen);
    /// Runs the layout pass for `screen` over its visible windows.
    fn relayout(&self, screen: &Screen, visible: &[&Window]);
    fn resize_window(&self, window_id: WindowId, frame: &Rect, force: bool);
}

/// Window system backed by class hints registered up front.
#[derive(Debug, Default)]
pub struct HeadlessWindowSystem {
    hints: RefCell<HashMap<WindowId, ClassHint>>,
}

impl HeadlessWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, window_id: WindowId, hint: ClassHint) {
        self.hints.borrow_mut().insert(window_id, hint);
    }

    pub fn forget(&self, window_id: WindowId) {
        self.hints.borrow_mut().remove(&window_id);
    }
}

impl WindowSystem for HeadlessWindowSystem {
    fn class_hint(&self, window_id: WindowId) -> ClassHint {
        self.hints
            .borrow()
            .get(&window_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// Manipulator that only reports what it was asked to do.
#[derive(Debug, Default)]
pub struct LoggingManipulator;

impl WindowManipulator for LoggingManipulator {
    fn persist_window_tags(&self, window: &Window, tag_count: usize) {
        tracing::info!(
            "Persist window {} tags: {} ({} tags)",
            window.id,
            window.tags,
            tag_count
        );
    }

    fn persist_screen_tags(&self, screen: &Screen) {
        tracing::info!(
            "Persist screen {} selection: {}",
            screen.id,
            screen.tags.selection()
        );
    }

    fn relayout(&self, screen: &Screen, visible: &[&Window]) {
        let ids: Vec<WindowId> = visible.iter().map(|w| w.id).collect();
        tracing::info!(
            "Relayout screen {} with layout {}: {:?}",
            screen.id,
            screen.current_layout,
            ids
        );
    }

    fn resize_window(&self, window_id: WindowId, frame: &Rect, force: bool) {
        tracing::info!(
            "Resize window {} to {}x{} @ ({},{}) force={}",
            window_id,
            frame.width,
            frame.height,
            frame.x,
            frame.y,
            force
        );
    }
}
