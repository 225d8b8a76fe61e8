use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::interactive::NavigationSource;
use crate::core::navigation::{PanDirection, PanDirections};

/// Arrow keys currently held down. Several may be held at once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArrowKeyState {
    held: PanDirections,
}

impl ArrowKeyState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let direction = match key_code {
            KeyCode::ArrowUp => PanDirection::Up,
            KeyCode::ArrowDown => PanDirection::Down,
            KeyCode::ArrowLeft => PanDirection::Left,
            KeyCode::ArrowRight => PanDirection::Right,
            _ => return,
        };

        self.held.set(direction, state == ElementState::Pressed);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl NavigationSource for ArrowKeyState {
    fn poll_navigation(&mut self) -> PanDirections {
        self.held
    }
}
