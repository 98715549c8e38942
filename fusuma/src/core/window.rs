use super::{ScreenId, TagList, TagSet};

pub type WindowId = u32;

#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub screen: ScreenId,
    pub tags: TagSet,
    pub title: String,
    pub frame: Rect,
    /// Last known floating geometry, restored when the window floats again.
    pub float_frame: Rect,
    pub is_floating: bool,
}

impl Window {
    pub fn new(id: WindowId, screen: ScreenId, title: String, frame: Rect, tag_count: usize) -> Self {
        Self {
            id,
            screen,
            tags: TagSet::empty(tag_count),
            title,
            frame,
            float_frame: frame,
            is_floating: false,
        }
    }

    /// True if the window lives on `screen` and shares a selected tag with it.
    pub fn is_visible(&self, screen: ScreenId, tags: &TagList) -> bool {
        if self.screen != screen {
            return false;
        }
        self.tags
            .iter()
            .zip(tags.iter())
            .any(|(member, tag)| member && tag.selected)
    }
}

/// Window class hint as reported by the window system.
/// Either part may be unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHint {
    pub class: Option<String>,
    pub instance: Option<String>,
}

impl ClassHint {
    pub fn new(class: &str, instance: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            instance: Some(instance.to_string()),
        }
    }

    /// `"<class>:<instance>:<title>"`, with missing parts left empty.
    pub fn composite_key(&self, title: &str) -> String {
        format!(
            "{}:{}:{}",
            self.class.as_deref().unwrap_or(""),
            self.instance.as_deref().unwrap_or(""),
            title
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
