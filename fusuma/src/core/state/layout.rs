use super::super::{ScreenId, Window, WindowId};

use super::State;

/// Windows the layout engine should arrange on `screen_id`, in management order.
pub fn visible_windows_on_screen(state: &State, screen_id: ScreenId) -> Vec<&Window> {
    let Some(screen) = state.screens.get(&screen_id) else {
        return vec![];
    };
    let mut windows: Vec<&Window> = state
        .windows
        .values()
        .filter(|w| w.is_visible(screen_id, &screen.tags))
        .collect();

    windows.sort_by_key(|w| {
        screen
            .window_order
            .iter()
            .position(|&id| id == w.id)
            .map(|p| (0, p))
            .unwrap_or((1, w.id as usize))
    });
    windows
}

pub fn add_to_window_order(state: &mut State, window_id: WindowId, screen_id: ScreenId) {
    if let Some(screen) = state.screens.get_mut(&screen_id) {
        if !screen.window_order.contains(&window_id) {
            screen.window_order.push(window_id);
        }
    }
}

pub fn remove_from_window_order(state: &mut State, window_id: WindowId) {
    for screen in state.screens.values_mut() {
        screen.window_order.retain(|&id| id != window_id);
    }
}
