use serde::{Deserialize, Serialize};

/// Interactive commands understood by the tag engine.
///
/// A `tag` of `None` is the "all tags" sentinel for `View` and `Tag`.
/// For the toggles it resolves to the first tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // Screen-wide tag selection
    View {
        #[serde(default)]
        tag: Option<String>,
    },
    ToggleView {
        #[serde(default)]
        tag: Option<String>,
    },
    ViewPrevSelected,
    ViewNext,
    ViewPrev,

    // Focused window
    Tag {
        #[serde(default)]
        tag: Option<String>,
    },
    ToggleTag {
        #[serde(default)]
        tag: Option<String>,
    },
    ToggleFloating,

    // Focus
    Focus { window: u32 },
    FocusScreen { screen: u32 },

    // Queries
    ListWindows,
    GetState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Error { message: String },
    Windows { windows: Vec<WindowInfo> },
    State { state: StateInfo },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: u32,
    pub screen: u32,
    pub title: String,
    /// Names of the tags the window belongs to, in tag order.
    pub tags: Vec<String>,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_floating: bool,
    pub is_focused: bool,
    pub is_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub id: u32,
    pub selected_tags: Vec<String>,
    pub current_layout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInfo {
    pub focused_screen: u32,
    pub focused_window_id: Option<u32>,
    pub window_count: usize,
    pub screens: Vec<ScreenInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_view_serialization() {
        let cmd = Command::View {
            tag: Some("web".to_string()),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"view\""));
        assert!(json.contains("\"tag\":\"web\""));

        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, cmd);
    }

    #[test]
    fn test_command_view_all_omits_tag() {
        let deserialized: Command = serde_json::from_str("{\"type\":\"view\"}").unwrap();
        assert_eq!(deserialized, Command::View { tag: None });
    }

    #[test]
    fn test_unit_commands_serialization() {
        let cases = [
            (Command::ViewPrevSelected, "{\"type\":\"view_prev_selected\"}"),
            (Command::ViewNext, "{\"type\":\"view_next\"}"),
            (Command::ViewPrev, "{\"type\":\"view_prev\"}"),
            (Command::ToggleFloating, "{\"type\":\"toggle_floating\"}"),
            (Command::GetState, "{\"type\":\"get_state\"}"),
        ];

        for (cmd, expected) in cases {
            assert_eq!(serde_json::to_string(&cmd).unwrap(), expected);
        }
    }

    #[test]
    fn test_command_focus_serialization() {
        let json = "{\"type\":\"focus\",\"window\":42}";
        let deserialized: Command = serde_json::from_str(json).unwrap();
        assert_eq!(deserialized, Command::Focus { window: 42 });
    }

    #[test]
    fn test_response_ok_serialization() {
        let json = serde_json::to_string(&Response::Ok).unwrap();
        assert_eq!(json, "{\"type\":\"ok\"}");
    }

    #[test]
    fn test_response_state_serialization() {
        let resp = Response::State {
            state: StateInfo {
                focused_screen: 0,
                focused_window_id: Some(7),
                window_count: 2,
                screens: vec![ScreenInfo {
                    id: 0,
                    selected_tags: vec!["1".to_string(), "web".to_string()],
                    current_layout: "tile".to_string(),
                }],
            },
        };
        let json = serde_json::to_string(&resp).unwrap();

        let deserialized: Response = serde_json::from_str(&json).unwrap();
        match deserialized {
            Response::State { state } => {
                assert_eq!(state.focused_window_id, Some(7));
                assert_eq!(state.screens[0].selected_tags, vec!["1", "web"]);
            }
            _ => panic!("Wrong variant"),
        }
    }
}
