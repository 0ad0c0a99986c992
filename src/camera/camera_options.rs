use nalgebra::{convert, Point3, RealField};

/// Options for the orbiting camera
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraOptions<T: RealField> {
    /// Initial eye position, the camera always looks at the origin.
    /// Kept at least `min_distance` away from it.
    pub position: Point3<T>,
    /// Distance covered by a single forward or backward command
    pub move_speed: T,
    /// Yaw angle in radians applied by a single orbit command
    pub orbit_angle: T,
    /// Distance covered by a single vertical strafe command
    pub strafe_speed: T,
    /// Yaw in radians per pointer unit dragged horizontally
    pub mouse_x_speed: T,
    /// Vertical translation per pointer unit dragged vertically
    pub mouse_y_speed: T,
    /// Closest the eye may get to the look-at target
    pub min_distance: T,
    /// Vertical field of view in radians
    pub fov_y: T,
    pub z_near: T,
    pub z_far: T,
}

impl<T: RealField> Default for CameraOptions<T> {
    fn default() -> Self {
        Self {
            position: Point3::new(convert(-50.0), convert(90.0), convert(-50.0)),
            move_speed: convert(1.0),
            orbit_angle: T::pi() / convert::<f64, T>(36.0),
            strafe_speed: convert(1.0),
            mouse_x_speed: convert(0.01),
            mouse_y_speed: convert(0.1),
            min_distance: convert(1.0),
            fov_y: T::frac_pi_3(),
            z_near: convert(1.0),
            z_far: convert(1000.0),
        }
    }
}

impl<T: RealField> CameraOptions<T> {
    pub fn with_position(mut self, position: Point3<T>) -> Self {
        self.position = position;
        self
    }

    pub fn with_move_speed(mut self, speed: T) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_orbit_angle(mut self, angle: T) -> Self {
        self.orbit_angle = angle;
        self
    }

    pub fn with_strafe_speed(mut self, speed: T) -> Self {
        self.strafe_speed = speed;
        self
    }

    pub fn with_mouse_speed(mut self, x: T, y: T) -> Self {
        self.mouse_x_speed = x;
        self.mouse_y_speed = y;
        self
    }

    pub fn with_min_distance(mut self, distance: T) -> Self {
        self.min_distance = distance;
        self
    }

    pub fn with_perspective(mut self, fov_y: T, z_near: T, z_far: T) -> Self {
        self.fov_y = fov_y;
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }
}
