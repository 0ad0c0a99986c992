use log::warn;
use nalgebra::{Matrix4, Point3, Rotation3, Vector2, Vector3};

use crate::{
    camera::{CameraOptions, DragState},
    misc::FloatingPoint,
};

/// Camera orbiting a fixed look-at target at the origin
///
/// The eye is driven by discrete commands and by primary pointer drags.
#[derive(Clone, Debug)]
pub struct CameraController<T: FloatingPoint> {
    position: Point3<T>,
    target: Point3<T>,
    options: CameraOptions<T>,
    drag: DragState<T>,
}

impl<T: FloatingPoint> Default for CameraController<T> {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}

impl<T: FloatingPoint> CameraController<T> {
    /// Create a camera at the configured position
    ///
    /// A position closer than `min_distance` to the target is pushed out to `min_distance`,
    /// along +Z when it coincides with the target.
    pub fn new(options: CameraOptions<T>) -> Self {
        let target = Point3::origin();
        let offset = options.position - target;
        let position = if offset.norm() < options.min_distance {
            let direction = offset
                .try_normalize(T::default_epsilon())
                .unwrap_or_else(Vector3::z);
            let position = target + direction * options.min_distance;
            warn!(
                "camera position {} is too close to the look-at target, moved to {}",
                options.position, position
            );
            position
        } else {
            options.position
        };
        Self {
            position,
            target,
            options,
            drag: DragState::default(),
        }
    }

    pub fn position(&self) -> &Point3<T> {
        &self.position
    }

    pub fn target(&self) -> &Point3<T> {
        &self.target
    }

    pub fn options(&self) -> &CameraOptions<T> {
        &self.options
    }

    pub fn drag_state(&self) -> &DragState<T> {
        &self.drag
    }

    /// Unit vector from the eye to the target, derived from the current position on every call
    pub fn forward(&self) -> Vector3<T> {
        (self.target - self.position).normalize()
    }

    /// `cross(cross(world_up, forward), forward)`, normalized
    ///
    /// Zero when looking straight along the world up axis.
    pub fn up(&self) -> Vector3<T> {
        let forward = self.forward();
        Vector3::y()
            .cross(&forward)
            .cross(&forward)
            .try_normalize(T::default_epsilon())
            .unwrap_or_else(Vector3::zeros)
    }

    /// Move the eye along the forward vector, a negative distance moves backward
    pub fn move_forward(&mut self, distance: T) -> bool {
        let next = self.position + self.forward() * distance;
        self.place(next)
    }

    /// Rotate the eye around the world up axis passing through the target
    pub fn orbit_yaw(&mut self, angle: T) {
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        self.position = self.target + rotation * (self.position - self.target);
    }

    /// Move the eye along [`CameraController::up`]
    pub fn strafe_vertical(&mut self, distance: T) -> bool {
        let next = self.position + self.up() * distance;
        self.place(next)
    }

    /// Primary pointer pressed
    pub fn press(&mut self) {
        self.drag.press();
    }

    /// Primary pointer released
    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Feed a pointer sample, returning the delta applied to the camera if any
    ///
    /// While dragging, `dx` yaws the eye by `-dx * mouse_x_speed`
    /// and `dy` moves it along the up vector by `dy * mouse_y_speed`.
    pub fn pointer_moved(&mut self, x: T, y: T) -> Option<Vector2<T>> {
        let delta = self.drag.sample(x, y)?;
        self.orbit_yaw(-delta.x * self.options.mouse_x_speed);
        let lift = delta.y * self.options.mouse_y_speed;
        self.strafe_vertical(lift);
        Some(delta)
    }

    /// Right handed look-at matrix with +Y as world up
    pub fn view_matrix(&self) -> Matrix4<T> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }

    pub fn projection_matrix(&self, aspect: T) -> Matrix4<T> {
        Matrix4::new_perspective(
            aspect,
            self.options.fov_y,
            self.options.z_near,
            self.options.z_far,
        )
    }

    fn place(&mut self, next: Point3<T>) -> bool {
        if (next - self.target).norm() < self.options.min_distance {
            warn!("camera move rejected: eye would reach the look-at target");
            return false;
        }
        self.position = next;
        true
    }
}
