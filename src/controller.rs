/// Continuously sampled button identifier
///
/// Only the keys the per-frame sampler polls live here; discrete
/// edge-triggered keys (digits, shading parameters, Escape) are routed
/// through the keymap instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyZ,
    KeyX,
    Shift,
}

/// Controller - exposes current physical button state
///
/// The render loop polls this every frame; the platform layer behind it is
/// a pure event source and never reaches back into loop state.
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyW, Button::KeyW);
        assert_eq!(Button::Shift, Button::Shift);
        assert_ne!(Button::KeyW, Button::KeyA);
    }

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyZ);
        set.insert(Button::Shift);

        assert!(set.contains(&Button::KeyW));
        assert!(!set.contains(&Button::KeyX));
        assert_eq!(set.len(), 3);
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::Shift],
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Shift));
        assert!(!controller.is_down(Button::KeyA));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::KeyW));
        assert!(!controller.is_down(Button::KeyZ));
    }
}
