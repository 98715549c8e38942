use std::cell::{Ref, RefCell};

use crate::core::{Rect, ScreenId, State, WindowId};
use crate::platform::{WindowManipulator, WindowSystem};
use fusuma_proto::{Command, Response};

mod command;
mod effects;

pub use command::process_command;
pub use effects::execute_effects;

/// One window-manager session: state plus the collaborators it drives.
/// Each call runs to completion, effects included, before returning.
pub struct App<W: WindowSystem, M: WindowManipulator> {
    state: RefCell<State>,
    window_system: W,
    manipulator: M,
}

impl<W: WindowSystem, M: WindowManipulator> App<W, M> {
    pub fn new(state: State, window_system: W, manipulator: M) -> Self {
        Self {
            state: RefCell::new(state),
            window_system,
            manipulator,
        }
    }

    pub fn state(&self) -> Ref<'_, State> {
        self.state.borrow()
    }

    pub fn window_system(&self) -> &W {
        &self.window_system
    }

    pub fn manipulator(&self) -> &M {
        &self.manipulator
    }

    pub fn handle_command(&self, cmd: &Command) -> Response {
        tracing::debug!("Handling command: {:?}", cmd);
        let result = process_command(&mut self.state.borrow_mut(), cmd);
        if let Err(e) = execute_effects(result.effects, &self.state, &self.manipulator) {
            tracing::error!("Failed to execute effects: {}", e);
            return Response::Error { message: e };
        }
        result.response
    }

    pub fn manage_window(
        &self,
        window_id: WindowId,
        screen_id: ScreenId,
        title: String,
        frame: Rect,
    ) -> Result<(), String> {
        let effects = self.state.borrow_mut().manage_window(
            &self.window_system,
            window_id,
            screen_id,
            title,
            frame,
        );
        execute_effects(effects, &self.state, &self.manipulator)
    }

    pub fn unmanage_window(&self, window_id: WindowId) -> Result<(), String> {
        let effects = self.state.borrow_mut().unmanage_window(window_id);
        execute_effects(effects, &self.state, &self.manipulator)
    }
}
