use super::{TagList, WindowId};

pub type ScreenId = u32;

#[derive(Debug, Clone)]
pub struct Screen {
    pub id: ScreenId,
    pub tags: TagList,
    pub current_layout: String,
    /// Windows on this screen in management order.
    pub window_order: Vec<WindowId>,
}

impl Screen {
    pub fn new(id: ScreenId, tags: TagList, default_layout: &str) -> Self {
        let current_layout = tags
            .get(0)
            .map(|t| t.layout.clone())
            .unwrap_or_else(|| default_layout.to_string());
        Self {
            id,
            tags,
            current_layout,
            window_order: Vec::new(),
        }
    }
}
