use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controller::{Button, Controller};

/// Adapter that bridges winit events to the Controller trait
///
/// Mouse look is fed from raw device motion, not cursor position: with the
/// cursor captured the pointer saturates at the window border and
/// position-based deltas collapse to zero there, while raw deltas keep
/// flowing. The accumulated offset is drained once per frame.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Mouse look offset accumulated since the last drain (y inverted so
    /// that moving the mouse up pitches up)
    mouse_delta: (f32, f32),
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_delta: (0.0, 0.0),
        }
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                self.pressed_keys.insert(button);
                            }
                            ElementState::Released => {
                                self.pressed_keys.remove(&button);
                            }
                        }
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused; drop held state
                self.pressed_keys.clear();
            }
            _ => {}
        }
    }

    /// Process a winit DeviceEvent; raw mouse motion accumulates here
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_delta.0 += *dx as f32;
            // Reversed: device y grows downward
            self.mouse_delta.1 -= *dy as f32;
        }
    }

    /// Drain the mouse offset accumulated since the previous call
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyZ => Some(Button::KeyZ),
            KeyCode::KeyX => Some(Button::KeyX),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
