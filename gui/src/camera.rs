use nalgebra_glm as glm;
use nalgebra_glm::{Mat4, Vec2, Vec3};
use winit::event::MouseButton;

const SPEED: f32 = 0.05;
const SENSITIVITY: f32 = 0.1;
const PITCH_LIMIT: f32 = 89.0;
const FOV_DEGREES: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera steered by yaw/pitch (in degrees) from mouse drags.
pub struct Camera {
    pos: Vec3,
    front: Vec3,
    up: Vec3,

    yaw: f32,
    pitch: f32,

    width: f32,
    height: f32,

    looking: bool,
    last_mouse: Option<Vec2>,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Camera {
            pos: Vec3::new(0.0, 0.0, 3.0),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            yaw: -90.0,
            pitch: 0.0,
            width,
            height,
            looking: false,
            last_mouse: None,
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn mouse_pressed(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.looking = true;
        }
    }

    pub fn mouse_released(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.looking = false;
            self.last_mouse = None;
        }
    }

    /// Applies a cursor move while the look button is held. Returns true if
    /// the view changed.
    pub fn mouse_move(&mut self, pos: Vec2) -> bool {
        if !self.looking {
            return false;
        }
        // The first event of a drag only anchors the cursor
        let Some(last) = self.last_mouse.replace(pos) else {
            return false;
        };
        let dx = (pos.x - last.x) * SENSITIVITY;
        let dy = (last.y - pos.y) * SENSITIVITY;
        self.turn(dx, dy);
        true
    }

    fn turn(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = glm::normalize(&Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ));
    }

    pub fn key_move(&mut self, m: Movement) {
        let right = glm::normalize(&glm::cross(&self.front, &self.up));
        match m {
            Movement::Forward => self.pos += self.front * SPEED,
            Movement::Backward => self.pos -= self.front * SPEED,
            Movement::Left => self.pos -= right * SPEED,
            Movement::Right => self.pos += right * SPEED,
        }
    }

    pub fn view(&self) -> Mat4 {
        glm::look_at(&self.pos, &(self.pos + self.front), &self.up)
    }

    /// Perspective projection with a `0..1` depth range, as wgpu expects
    pub fn projection(&self) -> Mat4 {
        glm::perspective_rh_zo(
            self.width / self.height,
            FOV_DEGREES.to_radians(),
            NEAR,
            FAR,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dragging() -> Camera {
        let mut c = Camera::new(800.0, 700.0);
        c.mouse_pressed(MouseButton::Left);
        c
    }

    #[test]
    fn ignores_motion_without_button() {
        let mut c = Camera::new(800.0, 700.0);
        assert!(!c.mouse_move(Vec2::new(10.0, 10.0)));
        assert!(!c.mouse_move(Vec2::new(500.0, 10.0)));
        assert_eq!(c.front, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn first_move_only_anchors() {
        let mut c = dragging();
        assert!(!c.mouse_move(Vec2::new(400.0, 350.0)));
        assert_eq!(c.front, Vec3::new(0.0, 0.0, -1.0));
        assert!(c.mouse_move(Vec2::new(400.0, 350.0)));
        assert_relative_eq!(c.front.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn yaw_turns_right() {
        let mut c = dragging();
        c.mouse_move(Vec2::new(0.0, 0.0));
        // 900 px * 0.1 = 90 degrees of yaw, from -90 to 0, facing +x
        c.mouse_move(Vec2::new(900.0, 0.0));
        assert_relative_eq!(c.front.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(c.front.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut c = dragging();
        c.mouse_move(Vec2::new(0.0, 0.0));
        // Moving the cursor up looks up
        c.mouse_move(Vec2::new(0.0, -5000.0));
        assert_relative_eq!(c.pitch, PITCH_LIMIT);
        assert!(c.front.y > 0.99);
        c.mouse_move(Vec2::new(0.0, 5000.0));
        assert_relative_eq!(c.pitch, -PITCH_LIMIT);
        assert!(c.front.y < -0.99);
    }

    #[test]
    fn release_resets_anchor() {
        let mut c = dragging();
        c.mouse_move(Vec2::new(0.0, 0.0));
        c.mouse_released(MouseButton::Left);
        c.mouse_pressed(MouseButton::Left);
        // Would be a large jump if the old anchor were still in place
        assert!(!c.mouse_move(Vec2::new(600.0, 0.0)));
        assert_eq!(c.front, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn keys_move_along_front_and_strafe() {
        let mut c = Camera::new(800.0, 700.0);
        c.key_move(Movement::Forward);
        assert_relative_eq!(c.pos.z, 3.0 - SPEED, epsilon = 1e-6);
        c.key_move(Movement::Backward);
        assert_relative_eq!(c.pos.z, 3.0, epsilon = 1e-6);
        c.key_move(Movement::Right);
        assert_relative_eq!(c.pos.x, SPEED, epsilon = 1e-6);
        c.key_move(Movement::Left);
        c.key_move(Movement::Left);
        assert_relative_eq!(c.pos.x, -SPEED, epsilon = 1e-6);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let c = Camera::new(800.0, 700.0);
        let p = c.view_proj() * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x / p.w, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y / p.w, 0.0, epsilon = 1e-6);
        let depth = p.z / p.w;
        assert!(depth > 0.0 && depth < 1.0);
    }
}
