use glam::Vec3;

use crate::camera::{Camera, Movement};
use crate::controller::{Button, Controller};

/// Angular speed for model rotation keys, radians per second (135 deg/s)
pub const ROTATION_SPEED: f32 = 135.0 * std::f32::consts::PI / 180.0;

/// Frame-scoped transform deltas for the active model
///
/// Built fresh every frame from the sampled key state and applied at most
/// once to the selected model's cumulative transform, then dropped. Holding
/// a key reapplies its effect next frame; releasing everything yields the
/// identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDeltas {
    /// Euler-axis rotation deltas in radians (pitch, yaw, roll)
    pub rotation: Vec3,
    /// Uniform scale multiplier for this frame
    pub scale: f32,
}

impl FrameDeltas {
    pub const IDENTITY: Self = Self {
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        self.rotation == Vec3::ZERO && self.scale == 1.0
    }
}

/// Sample the physical key state for one frame
///
/// Shift selects between two mutually exclusive modes for W/A/S/D/E/Q:
/// held, they fly the camera; released, they accumulate rotation deltas.
/// Z/X scale the model either way. Movement and rotation magnitudes are
/// scaled by `dt` so the result is frame-rate independent.
pub fn sample(controller: &dyn Controller, camera: &mut Camera, dt: f32) -> FrameDeltas {
    let rotation_step = ROTATION_SPEED * dt;
    let scale_step = 1.0 + dt;
    let shift = controller.is_down(Button::Shift);

    let mut deltas = FrameDeltas::IDENTITY;

    if shift {
        if controller.is_down(Button::KeyW) {
            camera.process_keyboard(Movement::Forward, dt);
        }
        if controller.is_down(Button::KeyS) {
            camera.process_keyboard(Movement::Backward, dt);
        }
        if controller.is_down(Button::KeyD) {
            camera.process_keyboard(Movement::Right, dt);
        }
        if controller.is_down(Button::KeyA) {
            camera.process_keyboard(Movement::Left, dt);
        }
        if controller.is_down(Button::KeyE) {
            camera.process_keyboard(Movement::Up, dt);
        }
        if controller.is_down(Button::KeyQ) {
            camera.process_keyboard(Movement::Down, dt);
        }
    } else {
        if controller.is_down(Button::KeyW) {
            deltas.rotation.x -= rotation_step;
        }
        if controller.is_down(Button::KeyS) {
            deltas.rotation.x += rotation_step;
        }
        if controller.is_down(Button::KeyE) {
            deltas.rotation.y += rotation_step;
        }
        if controller.is_down(Button::KeyQ) {
            deltas.rotation.y -= rotation_step;
        }
        if controller.is_down(Button::KeyD) {
            deltas.rotation.z -= rotation_step;
        }
        if controller.is_down(Button::KeyA) {
            deltas.rotation.z += rotation_step;
        }
    }

    // Scaling ignores the modifier
    if controller.is_down(Button::KeyZ) {
        deltas.scale *= scale_step;
    }
    if controller.is_down(Button::KeyX) {
        deltas.scale /= scale_step;
    }

    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    struct Held(Vec<Button>);

    impl Controller for Held {
        fn is_down(&self, button: Button) -> bool {
            self.0.contains(&button)
        }
    }

    const EPS: f32 = 1e-6;

    #[test]
    fn idle_frame_yields_identity() {
        let mut camera = Camera::new();
        let start = camera.position;

        let deltas = sample(&Held(vec![]), &mut camera, 0.016);

        assert!(deltas.is_identity());
        assert_eq!(camera.position, start);
    }

    #[test]
    fn unshifted_w_pitches_not_moves() {
        let mut camera = Camera::new();
        let start = camera.position;

        let deltas = sample(&Held(vec![Button::KeyW]), &mut camera, 0.02);

        assert_eq!(camera.position, start);
        assert!((deltas.rotation.x - (-ROTATION_SPEED * 0.02)).abs() < EPS);
        assert_eq!(deltas.rotation.y, 0.0);
        assert_eq!(deltas.rotation.z, 0.0);
        assert_eq!(deltas.scale, 1.0);
    }

    #[test]
    fn rotation_axes_map_to_keys() {
        let mut camera = Camera::new();
        let dt = 0.01;
        let step = ROTATION_SPEED * dt;

        let deltas = sample(
            &Held(vec![Button::KeyS, Button::KeyE, Button::KeyA]),
            &mut camera,
            dt,
        );

        assert!((deltas.rotation - Vec3::new(step, step, step)).length() < EPS);
    }

    #[test]
    fn opposed_rotation_keys_cancel() {
        let mut camera = Camera::new();

        let deltas = sample(
            &Held(vec![Button::KeyQ, Button::KeyE]),
            &mut camera,
            0.016,
        );

        assert_eq!(deltas.rotation.y, 0.0);
    }

    #[test]
    fn shifted_w_moves_camera_not_model() {
        let mut camera = Camera::new();
        let start = camera.position;
        let front = camera.front();
        let dt = 0.1;

        let deltas = sample(&Held(vec![Button::Shift, Button::KeyW]), &mut camera, dt);

        assert_eq!(deltas.rotation, Vec3::ZERO);
        let expected = start + front * camera.speed * dt;
        assert!((camera.position - expected).length() < EPS);
    }

    #[test]
    fn shifted_q_and_e_move_vertically() {
        let mut camera = Camera::new();
        let start = camera.position;

        sample(&Held(vec![Button::Shift, Button::KeyE]), &mut camera, 0.1);
        assert!(camera.position.y > start.y);

        sample(&Held(vec![Button::Shift, Button::KeyQ]), &mut camera, 0.1);
        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn scale_keys_work_with_and_without_shift() {
        let mut camera = Camera::new();
        let dt = 0.5;
        let step = 1.0 + dt;

        let grow = sample(&Held(vec![Button::KeyZ]), &mut camera, dt);
        assert!((grow.scale - step).abs() < EPS);

        let grow_shifted = sample(&Held(vec![Button::Shift, Button::KeyZ]), &mut camera, dt);
        assert!((grow_shifted.scale - step).abs() < EPS);

        let shrink = sample(&Held(vec![Button::KeyX]), &mut camera, dt);
        assert!((shrink.scale - 1.0 / step).abs() < EPS);
    }

    #[test]
    fn zero_dt_is_identity_even_with_keys_held() {
        let mut camera = Camera::new();
        let start = camera.position;

        let deltas = sample(
            &Held(vec![Button::KeyW, Button::KeyZ, Button::KeyA]),
            &mut camera,
            0.0,
        );

        assert!(deltas.is_identity());
        assert_eq!(camera.position, start);
    }
}
