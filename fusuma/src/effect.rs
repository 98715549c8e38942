use crate::core::{Rect, ScreenId, WindowId};

use fusuma_proto::Response;

/// External side effect requested by a state transition.
/// Executed only after the transition has fully completed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistWindowTags {
        window_id: WindowId,
    },
    PersistScreenTags {
        screen_id: ScreenId,
    },
    Relayout {
        screen_id: ScreenId,
    },
    ResizeWindow {
        window_id: WindowId,
        frame: Rect,
        force: bool,
    },
}

pub struct CommandResult {
    pub response: Response,
    pub effects: Vec<Effect>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            response: Response::Ok,
            effects: vec![],
        }
    }

    pub fn ok_with_effects(effects: Vec<Effect>) -> Self {
        Self {
            response: Response::Ok,
            effects,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: Response::Error {
                message: message.into(),
            },
            effects: vec![],
        }
    }

    pub fn with_response(response: Response) -> Self {
        Self {
            response,
            effects: vec![],
        }
    }
}
