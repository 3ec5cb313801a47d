use glam::{Mat4, Vec3};

pub const CAMERA_SPEED: f32 = 2.5;
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch stays just shy of +-90 degrees so the up vector never flips.
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Camera movement direction, relative to the current orientation basis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First-person fly camera
///
/// Orientation is yaw/pitch in radians; the front/right basis is always
/// derived from them on demand and never mutated independently.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw: std::f32::consts::PI, // look down negative Z
            pitch: 0.0,
            speed: CAMERA_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }

    pub fn front(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Move along the current basis, scaled by `speed * dt` so motion is
    /// frame-rate independent. `dt = 0` leaves the position untouched.
    pub fn process_keyboard(&mut self, direction: Movement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            Movement::Forward => self.position += self.front() * velocity,
            Movement::Backward => self.position -= self.front() * velocity,
            Movement::Left => self.position -= self.right() * velocity,
            Movement::Right => self.position += self.right() * velocity,
            Movement::Up => self.position += Vec3::Y * velocity,
            Movement::Down => self.position -= Vec3::Y * velocity,
        }
    }

    /// Apply a mouse-look offset. Offsets accumulate additively into
    /// yaw/pitch; pitch is clamped to avoid gimbal flip.
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = (self.pitch + y_offset * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Look-at view matrix from the current state. Pure.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_delta_time_is_a_noop() {
        let mut camera = Camera::new();
        let start = camera.position;

        for direction in [
            Movement::Forward,
            Movement::Backward,
            Movement::Left,
            Movement::Right,
            Movement::Up,
            Movement::Down,
        ] {
            camera.process_keyboard(direction, 0.0);
        }

        assert_eq!(camera.position, start);
    }

    #[test]
    fn forward_moves_along_front_vector() {
        let mut camera = Camera::new();
        let start = camera.position;
        let front = camera.front();

        camera.process_keyboard(Movement::Forward, 0.5);

        let displacement = camera.position - start;
        let expected = front * camera.speed * 0.5;
        assert!((displacement - expected).length() < EPS);
    }

    #[test]
    fn up_moves_along_world_up_regardless_of_pitch() {
        let mut camera = Camera::new();
        camera.pitch = 0.7;
        let start = camera.position;

        camera.process_keyboard(Movement::Up, 1.0);

        let displacement = camera.position - start;
        assert!(displacement.x.abs() < EPS);
        assert!(displacement.z.abs() < EPS);
        assert!((displacement.y - camera.speed).abs() < EPS);
    }

    #[test]
    fn left_and_right_cancel() {
        let mut camera = Camera::new();
        camera.yaw = 1.3;
        let start = camera.position;

        camera.process_keyboard(Movement::Left, 0.25);
        camera.process_keyboard(Movement::Right, 0.25);

        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn mouse_zero_offset_leaves_orientation() {
        let mut camera = Camera::new();
        let (yaw, pitch) = (camera.yaw, camera.pitch);

        camera.process_mouse(0.0, 0.0);

        assert_eq!(camera.yaw, yaw);
        assert_eq!(camera.pitch, pitch);
    }

    #[test]
    fn mouse_offsets_are_additive() {
        let mut split = Camera::new();
        split.process_mouse(3.0, 2.0);
        split.process_mouse(5.0, -1.0);

        let mut single = Camera::new();
        single.process_mouse(8.0, 1.0);

        assert!((split.yaw - single.yaw).abs() < EPS);
        assert!((split.pitch - single.pitch).abs() < EPS);
    }

    #[test]
    fn pitch_clamps_short_of_vertical() {
        let mut camera = Camera::new();

        camera.process_mouse(0.0, 1.0e6);
        assert!(camera.pitch <= PITCH_LIMIT);

        camera.process_mouse(0.0, -2.0e6);
        assert!(camera.pitch >= -PITCH_LIMIT);

        // Up vector never flips inside the clamp range
        assert!(camera.front().cross(Vec3::Y).length() > 0.0);
    }

    #[test]
    fn basis_follows_yaw() {
        let mut camera = Camera::new();
        camera.yaw = std::f32::consts::PI; // -Z
        let front = camera.front();
        assert!((front - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
        assert!((camera.right() - Vec3::new(1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn view_matrix_is_pure() {
        let camera = Camera::new();
        let a = camera.view_matrix();
        let b = camera.view_matrix();
        assert_eq!(a, b);
    }
}
