use tracing::{info, warn};

use crate::controller::{PresentationController, Renderer};
use crate::error::Result;
use crate::input::{Command, Gesture, Key, map_click, map_key};
use crate::layout::Hit;
use crate::state::ViewState;
use crate::store::PositionStore;

/// The host's fullscreen switch.
pub trait Fullscreen {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
}

/// A running presentation: the controller plus the help overlay state.
pub struct Presentation<R, S> {
    controller: PresentationController<R, S>,
    state: ViewState,
}

impl<R: Renderer, S: PositionStore> Presentation<R, S> {
    pub fn new(controller: PresentationController<R, S>) -> Self {
        Self {
            controller,
            state: ViewState::Presenting,
        }
    }

    pub fn controller(&self) -> &PresentationController<R, S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PresentationController<R, S> {
        &mut self.controller
    }

    #[cfg(test)]
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn help_open(&self) -> bool {
        self.state == ViewState::Help
    }

    pub fn handle_key(&mut self, key: Key, fullscreen: &mut impl Fullscreen) {
        if let Some(command) = map_key(key, self.help_open()) {
            self.apply(command, fullscreen);
        }
    }

    /// `hit_test` resolves a click position against the current layout.
    pub fn handle_gesture(
        &mut self,
        gesture: Gesture,
        hit_test: impl FnOnce(f32, f32) -> Option<Hit>,
        fullscreen: &mut impl Fullscreen,
    ) {
        let command = match gesture {
            Gesture::Swipe(_) if self.help_open() => Some(Command::CloseHelp),
            Gesture::Swipe(command) => Some(command),
            Gesture::Click { x, y } => map_click(hit_test(x, y), self.help_open()),
        };
        if let Some(command) = command {
            self.apply(command, fullscreen);
        }
    }

    pub fn apply(&mut self, command: Command, fullscreen: &mut impl Fullscreen) {
        match command {
            Command::Previous => {
                self.controller.previous();
            }
            Command::Next => {
                self.controller.next();
            }
            Command::First => {
                self.controller.go_to_first();
            }
            Command::Last => {
                self.controller.go_to_last();
            }
            Command::GoTo(index) => {
                self.controller.go_to(index);
            }
            Command::ToggleFullscreen => toggle_fullscreen(fullscreen),
            Command::ShowHelp => self.set_state(ViewState::Help),
            Command::CloseHelp => self.set_state(ViewState::Presenting),
        }
    }

    fn set_state(&mut self, state: ViewState) {
        self.state = state;
        self.controller
            .renderer_mut()
            .set_help_visible(state == ViewState::Help);
    }
}

pub fn toggle_fullscreen(fullscreen: &mut impl Fullscreen) {
    let result = if fullscreen.is_fullscreen() {
        fullscreen.exit_fullscreen()
    } else {
        fullscreen.request_fullscreen()
    };
    match result {
        Ok(()) => info!(fullscreen = fullscreen.is_fullscreen(), "toggled fullscreen"),
        Err(e) => warn!("error attempting to toggle fullscreen: {e}"),
    }
}
