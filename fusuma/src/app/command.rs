use crate::core::State;
use crate::effect::CommandResult;
use fusuma_proto::{Command, Response, ScreenInfo, StateInfo, WindowInfo};

/// Pure function: processes a command and returns a response with effects.
/// This function does not perform any side effects - it only mutates state and computes effects.
pub fn process_command(state: &mut State, cmd: &Command) -> CommandResult {
    match cmd {
        // Screen-wide selection
        Command::View { tag } => CommandResult::ok_with_effects(state.view(tag.as_deref())),
        Command::ToggleView { tag } => {
            CommandResult::ok_with_effects(state.toggle_view(tag.as_deref()))
        }
        Command::ViewPrevSelected => CommandResult::ok_with_effects(state.view_prev_selected()),
        Command::ViewNext => CommandResult::ok_with_effects(state.view_next()),
        Command::ViewPrev => CommandResult::ok_with_effects(state.view_prev()),

        // Focused window
        Command::Tag { tag } => CommandResult::ok_with_effects(state.tag_focused(tag.as_deref())),
        Command::ToggleTag { tag } => {
            CommandResult::ok_with_effects(state.toggle_focused_tag(tag.as_deref()))
        }
        Command::ToggleFloating => CommandResult::ok_with_effects(state.toggle_focused_floating()),

        // Focus
        Command::Focus { window } => {
            if !state.windows.contains_key(window) {
                return CommandResult::error(format!("Window not found: {}", window));
            }
            state.set_focused(Some(*window));
            CommandResult::ok()
        }
        Command::FocusScreen { screen } => {
            if state.focus_screen(*screen) {
                CommandResult::ok()
            } else {
                CommandResult::error(format!("Screen not found: {}", screen))
            }
        }

        // Queries - no effects
        Command::ListWindows => {
            let mut windows: Vec<WindowInfo> = state
                .windows
                .values()
                .map(|w| {
                    let screen = state.screens.get(&w.screen);
                    WindowInfo {
                        id: w.id,
                        screen: w.screen,
                        title: w.title.clone(),
                        tags: screen
                            .map(|s| s.tags.names_of(&w.tags))
                            .unwrap_or_default(),
                        x: w.frame.x,
                        y: w.frame.y,
                        width: w.frame.width,
                        height: w.frame.height,
                        is_floating: w.is_floating,
                        is_focused: state.focused == Some(w.id),
                        is_visible: screen.is_some_and(|s| w.is_visible(s.id, &s.tags)),
                    }
                })
                .collect();
            windows.sort_by_key(|w| w.id);
            CommandResult::with_response(Response::Windows { windows })
        }
        Command::GetState => {
            let screens = state
                .screen_ids()
                .into_iter()
                .filter_map(|id| state.screens.get(&id))
                .map(|s| ScreenInfo {
                    id: s.id,
                    selected_tags: s.tags.selected_names(),
                    current_layout: s.current_layout.clone(),
                })
                .collect();
            CommandResult::with_response(Response::State {
                state: StateInfo {
                    focused_screen: state.focused_screen,
                    focused_window_id: state.focused,
                    window_count: state.windows.len(),
                    screens,
                },
            })
        }
    }
}
