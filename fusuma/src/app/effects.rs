use std::cell::RefCell;

use crate::core::State;
use crate::effect::Effect;
use crate::platform::WindowManipulator;

/// Execute side effects.
pub fn execute_effects<M: WindowManipulator>(
    effects: Vec<Effect>,
    state: &RefCell<State>,
    manipulator: &M,
) -> Result<(), String> {
    for effect in effects {
        match effect {
            Effect::PersistWindowTags { window_id } => {
                let state = state.borrow();
                let window = state
                    .windows
                    .get(&window_id)
                    .ok_or_else(|| format!("Window not found: {}", window_id))?;
                manipulator.persist_window_tags(window, window.tags.len());
            }
            Effect::PersistScreenTags { screen_id } => {
                let state = state.borrow();
                let screen = state
                    .screens
                    .get(&screen_id)
                    .ok_or_else(|| format!("Screen not found: {}", screen_id))?;
                manipulator.persist_screen_tags(screen);
            }
            Effect::Relayout { screen_id } => {
                let state = state.borrow();
                let screen = state
                    .screens
                    .get(&screen_id)
                    .ok_or_else(|| format!("Screen not found: {}", screen_id))?;
                let visible = state.visible_windows_on_screen(screen_id);
                manipulator.relayout(screen, &visible);
            }
            Effect::ResizeWindow {
                window_id,
                frame,
                force,
            } => {
                manipulator.resize_window(window_id, &frame, force);

                // Keep the live geometry in sync so the next snapshot sees it.
                state.borrow_mut().set_window_frame(window_id, frame);
            }
        }
    }
    Ok(())
}
