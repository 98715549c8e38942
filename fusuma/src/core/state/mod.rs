use std::collections::HashMap;

use super::{Config, Rect, Screen, ScreenId, Window, WindowId};
use crate::effect::Effect;
use crate::platform::WindowSystem;

mod layout;
mod rules;
mod tags;

use layout::*;
use rules::*;
use tags::*;

pub struct State {
    pub windows: HashMap<WindowId, Window>,
    pub screens: HashMap<ScreenId, Screen>,
    pub focused: Option<WindowId>,
    pub focused_screen: ScreenId,
    pub config: Config,
}

impl State {
    pub fn new(config: Config) -> Self {
        let screens = (0..config.screen_count)
            .map(|id| {
                (
                    id,
                    Screen::new(id, config.tag_list(), &config.default_layout),
                )
            })
            .collect();
        Self {
            windows: HashMap::new(),
            screens,
            focused: None,
            focused_screen: 0,
            config,
        }
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.screens.get(&self.focused_screen)
    }

    /// Screen ids in ascending order.
    pub fn screen_ids(&self) -> Vec<ScreenId> {
        let mut ids: Vec<ScreenId> = self.screens.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn set_focused(&mut self, window_id: Option<WindowId>) {
        if self.focused != window_id {
            tracing::info!("Focus changed: {:?} -> {:?}", self.focused, window_id);
            self.focused = window_id;
        }
        if let Some(window) = window_id.and_then(|id| self.windows.get(&id)) {
            self.focused_screen = window.screen;
        }
    }

    pub fn focus_screen(&mut self, screen_id: ScreenId) -> bool {
        if !self.screens.contains_key(&screen_id) {
            return false;
        }
        if self.focused_screen != screen_id {
            tracing::info!("Screen focus changed: {} -> {}", self.focused_screen, screen_id);
            self.focused_screen = screen_id;
            let keep_focus = self
                .focused
                .and_then(|id| self.windows.get(&id))
                .is_some_and(|w| w.screen == screen_id);
            if !keep_focus {
                self.focused = None;
            }
        }
        true
    }

    pub fn set_window_frame(&mut self, window_id: WindowId, frame: Rect) {
        if let Some(window) = self.windows.get_mut(&window_id) {
            window.frame = frame;
        }
    }

    // Window lifecycle - delegated to state/rules.rs

    pub fn manage_window<W: WindowSystem>(
        &mut self,
        ws: &W,
        window_id: WindowId,
        screen_id: ScreenId,
        title: String,
        frame: Rect,
    ) -> Vec<Effect> {
        manage_window(self, ws, window_id, screen_id, title, frame)
    }

    pub fn unmanage_window(&mut self, window_id: WindowId) -> Vec<Effect> {
        unmanage_window(self, window_id)
    }

    // Tag selection - delegated to state/tags.rs

    pub fn view(&mut self, name: Option<&str>) -> Vec<Effect> {
        let screen_id = self.focused_screen;
        view_on_screen(self, name, screen_id)
    }

    pub fn view_on_screen(&mut self, name: Option<&str>, screen_id: ScreenId) -> Vec<Effect> {
        view_on_screen(self, name, screen_id)
    }

    pub fn toggle_view(&mut self, name: Option<&str>) -> Vec<Effect> {
        let screen_id = self.focused_screen;
        toggle_view_on_screen(self, name, screen_id)
    }

    pub fn toggle_view_on_screen(
        &mut self,
        name: Option<&str>,
        screen_id: ScreenId,
    ) -> Vec<Effect> {
        toggle_view_on_screen(self, name, screen_id)
    }

    pub fn view_prev_selected(&mut self) -> Vec<Effect> {
        let screen_id = self.focused_screen;
        view_prev_selected_on_screen(self, screen_id)
    }

    pub fn view_next(&mut self) -> Vec<Effect> {
        let screen_id = self.focused_screen;
        view_next_on_screen(self, screen_id)
    }

    pub fn view_prev(&mut self) -> Vec<Effect> {
        let screen_id = self.focused_screen;
        view_prev_on_screen(self, screen_id)
    }

    // Focused window tags - delegated to state/tags.rs

    pub fn tag_focused(&mut self, name: Option<&str>) -> Vec<Effect> {
        tag_focused(self, name)
    }

    pub fn toggle_focused_tag(&mut self, name: Option<&str>) -> Vec<Effect> {
        toggle_focused_tag(self, name)
    }

    pub fn toggle_focused_floating(&mut self) -> Vec<Effect> {
        toggle_focused_floating(self)
    }

    // Layout queries - delegated to state/layout.rs

    pub fn visible_windows_on_screen(&self, screen_id: ScreenId) -> Vec<&Window> {
        visible_windows_on_screen(self, screen_id)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::new())
    }
}
