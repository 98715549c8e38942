use super::super::{ClassHint, Rect, ScreenId, Window, WindowId};
use crate::effect::Effect;
use crate::platform::WindowSystem;

use super::layout::{add_to_window_order, remove_from_window_order};
use super::State;

/// Starts managing a window and classifies it once.
pub fn manage_window<W: WindowSystem>(
    state: &mut State,
    ws: &W,
    window_id: WindowId,
    screen_id: ScreenId,
    title: String,
    frame: Rect,
) -> Vec<Effect> {
    if state.windows.contains_key(&window_id) {
        tracing::warn!("Window {} is already managed", window_id);
        return vec![];
    }
    let screen_id = if state.screens.contains_key(&screen_id) {
        screen_id
    } else {
        tracing::warn!(
            "Unknown screen {} for window {}, using screen {}",
            screen_id,
            window_id,
            state.focused_screen
        );
        state.focused_screen
    };
    let Some(tag_count) = state.screens.get(&screen_id).map(|s| s.tags.len()) else {
        return vec![];
    };

    let hint = ws.class_hint(window_id);
    let mut window = Window::new(window_id, screen_id, title, frame, tag_count);
    apply_rules_to_new_window(state, &mut window, &hint);

    tracing::info!(
        "Managing window {} ({}) on screen {}: tags={}, floating={}",
        window_id,
        hint.composite_key(&window.title),
        screen_id,
        window.tags,
        window.is_floating
    );
    state.windows.insert(window_id, window);
    add_to_window_order(state, window_id, screen_id);

    vec![
        Effect::PersistWindowTags { window_id },
        Effect::Relayout { screen_id },
    ]
}

pub fn unmanage_window(state: &mut State, window_id: WindowId) -> Vec<Effect> {
    let Some(window) = state.windows.remove(&window_id) else {
        return vec![];
    };
    tracing::info!("Unmanaged window {}", window_id);
    remove_from_window_order(state, window_id);
    if state.focused == Some(window_id) {
        state.focused = None;
    }
    vec![Effect::Relayout {
        screen_id: window.screen,
    }]
}

/// Assigns initial tags and floating state to a window that is not yet
/// in `state`. Without a rule providing tags, the window inherits its
/// screen's current selection.
pub fn apply_rules_to_new_window(state: &State, window: &mut Window, hint: &ClassHint) {
    let Some(screen) = state.screens.get(&window.screen) else {
        return;
    };
    let key = hint.composite_key(&window.title);
    let result = state.config.rules_engine().classify(&key, &screen.tags);

    if let Some(floating) = result.is_floating {
        window.is_floating = floating;
        tracing::info!(
            "Applied rule: window {} set to floating={}",
            window.id,
            floating
        );
    }
    window.tags = match result.tags {
        Some(tags) if tags.any() => {
            tracing::info!("Applied rule: window {} tags set to {}", window.id, tags);
            tags
        }
        _ => screen.tags.selection(),
    };
}
