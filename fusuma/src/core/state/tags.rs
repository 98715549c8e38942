use super::super::{ScreenId, TagSet, WindowId};
use crate::effect::Effect;

use super::State;

fn screen_effects(screen_id: ScreenId) -> Vec<Effect> {
    vec![
        Effect::PersistScreenTags { screen_id },
        Effect::Relayout { screen_id },
    ]
}

fn window_effects(window_id: WindowId, screen_id: ScreenId) -> Vec<Effect> {
    vec![
        Effect::PersistWindowTags { window_id },
        Effect::Relayout { screen_id },
    ]
}

/// Views exactly one tag, or every tag when `name` is `None`.
pub fn view_on_screen(state: &mut State, name: Option<&str>, screen_id: ScreenId) -> Vec<Effect> {
    let Some(screen) = state.screens.get_mut(&screen_id) else {
        return vec![];
    };
    let before = screen.tags.selection();
    let all = name.is_none();
    for tag in screen.tags.iter_mut() {
        tag.was_selected = tag.selected;
        tag.selected = all;
    }
    let index = screen.tags.resolve(name);
    if let Some(tag) = screen.tags.get_mut(index) {
        tag.selected = true;
        screen.current_layout = tag.layout.clone();
    }
    tracing::info!(
        "View {:?} on screen {}: {} -> {}, layout: {}",
        name,
        screen_id,
        before,
        screen.tags.selection(),
        screen.current_layout
    );
    screen_effects(screen_id)
}

pub fn toggle_view_on_screen(
    state: &mut State,
    name: Option<&str>,
    screen_id: ScreenId,
) -> Vec<Effect> {
    let Some(screen) = state.screens.get_mut(&screen_id) else {
        return vec![];
    };
    let before = screen.tags.selection();
    let index = screen.tags.resolve(name);
    let Some(tag) = screen.tags.get_mut(index) else {
        return vec![];
    };
    tag.selected = !tag.selected;
    if !screen.tags.any_selected() {
        if let Some(tag) = screen.tags.get_mut(index) {
            tag.selected = true;
        }
        tracing::debug!("Keeping tag {} selected on screen {}", index, screen_id);
    }
    tracing::info!(
        "Toggle view {:?} on screen {}: {} -> {}",
        name,
        screen_id,
        before,
        screen.tags.selection()
    );
    screen_effects(screen_id)
}

/// Swaps the current selection with the one saved by the last `view`.
/// Persistence is not requested for this transition.
pub fn view_prev_selected_on_screen(state: &mut State, screen_id: ScreenId) -> Vec<Effect> {
    let Some(screen) = state.screens.get_mut(&screen_id) else {
        return vec![];
    };
    let before = screen.tags.selection();
    for tag in screen.tags.iter_mut() {
        std::mem::swap(&mut tag.selected, &mut tag.was_selected);
    }
    tracing::info!(
        "View previous selection on screen {}: {} -> {}",
        screen_id,
        before,
        screen.tags.selection()
    );
    vec![Effect::Relayout { screen_id }]
}

pub fn view_next_on_screen(state: &mut State, screen_id: ScreenId) -> Vec<Effect> {
    view_adjacent_on_screen(state, screen_id, true)
}

pub fn view_prev_on_screen(state: &mut State, screen_id: ScreenId) -> Vec<Effect> {
    view_adjacent_on_screen(state, screen_id, false)
}

fn view_adjacent_on_screen(state: &mut State, screen_id: ScreenId, forward: bool) -> Vec<Effect> {
    let Some(screen) = state.screens.get_mut(&screen_id) else {
        return vec![];
    };
    let len = screen.tags.len();
    if len == 0 {
        return vec![];
    }
    let before = screen.tags.selection();

    // Next starts from the lowest selected tag, prev from the highest.
    let target = if forward {
        match screen.tags.iter().position(|t| t.selected) {
            Some(i) => (i + 1) % len,
            None => 0,
        }
    } else {
        match screen.tags.iter().rposition(|t| t.selected) {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        }
    };

    for tag in screen.tags.iter_mut() {
        tag.selected = false;
    }
    if let Some(tag) = screen.tags.get_mut(target) {
        tag.selected = true;
        screen.current_layout = tag.layout.clone();
    }
    tracing::info!(
        "View {} tag on screen {}: {} -> {}, layout: {}",
        if forward { "next" } else { "previous" },
        screen_id,
        before,
        screen.tags.selection(),
        screen.current_layout
    );
    screen_effects(screen_id)
}

fn focused_target(state: &State) -> Option<(WindowId, ScreenId)> {
    let focused_id = state.focused?;
    let window = state.windows.get(&focused_id)?;
    Some((window.id, window.screen))
}

/// Moves the focused window to one tag, or to every tag when `name` is `None`.
pub fn tag_focused(state: &mut State, name: Option<&str>) -> Vec<Effect> {
    let Some((window_id, screen_id)) = focused_target(state) else {
        return vec![];
    };
    let Some(screen) = state.screens.get(&screen_id) else {
        return vec![];
    };
    let len = screen.tags.len();
    let new_tags = match name {
        None => TagSet::all(len),
        Some(_) => TagSet::single(len, screen.tags.resolve(name)),
    };
    let Some(window) = state.windows.get_mut(&window_id) else {
        return vec![];
    };
    tracing::info!(
        "Tag window {} with {:?}: {} -> {}",
        window_id,
        name,
        window.tags,
        new_tags
    );
    window.tags = new_tags;
    window_effects(window_id, screen_id)
}

pub fn toggle_focused_tag(state: &mut State, name: Option<&str>) -> Vec<Effect> {
    let Some((window_id, screen_id)) = focused_target(state) else {
        return vec![];
    };
    let Some(index) = state.screens.get(&screen_id).map(|s| s.tags.resolve(name)) else {
        return vec![];
    };
    let Some(window) = state.windows.get_mut(&window_id) else {
        return vec![];
    };
    let before = window.tags.clone();
    window.tags.toggle(index);
    if !window.tags.any() {
        window.tags.set(index, true);
        tracing::debug!("Keeping window {} on tag {}", window_id, index);
    }
    tracing::info!(
        "Toggle window {} tag {:?}: {} -> {}",
        window_id,
        name,
        before,
        window.tags
    );
    window_effects(window_id, screen_id)
}

/// Floating windows get their remembered geometry back; windows going
/// back to tiled remember their current geometry.
pub fn toggle_focused_floating(state: &mut State) -> Vec<Effect> {
    let Some((window_id, screen_id)) = focused_target(state) else {
        return vec![];
    };
    let Some(window) = state.windows.get_mut(&window_id) else {
        return vec![];
    };

    window.is_floating = !window.is_floating;
    tracing::info!(
        "Toggle floating for window {}: {}",
        window_id,
        window.is_floating
    );

    let mut effects = Vec::new();
    if window.is_floating {
        effects.push(Effect::ResizeWindow {
            window_id,
            frame: window.float_frame,
            force: true,
        });
    } else {
        window.float_frame = window.frame;
    }
    effects.extend(window_effects(window_id, screen_id));
    effects
}
