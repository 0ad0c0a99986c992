use approx::assert_relative_eq;
use nalgebra::{Point3, Vector2, Vector3};

use super::*;

fn side_camera() -> CameraController<f64> {
    CameraController::new(
        CameraOptions::default()
            .with_position(Point3::new(10., 0., 0.))
            .with_mouse_speed(0.01, 0.1),
    )
}

#[test]
fn forward_points_at_target() {
    let camera = CameraController::<f64>::default();
    let f = camera.forward();
    assert_relative_eq!(f.norm(), 1.0, epsilon = 1e-12);
    let expected = Vector3::new(50., -90., 50.).normalize();
    assert_relative_eq!(f, expected, epsilon = 1e-12);
}

#[test]
fn up_follows_double_cross_product() {
    let camera = side_camera();
    // forward = -x, cross(y, -x) = z, cross(z, -x) = -y
    assert_relative_eq!(camera.up(), Vector3::new(0., -1., 0.), epsilon = 1e-12);

    let overhead = CameraController::<f64>::new(
        CameraOptions::default().with_position(Point3::new(0., 20., 0.)),
    );
    assert_eq!(overhead.up(), Vector3::zeros());
}

#[test]
fn orbit_is_invertible() {
    let mut camera = CameraController::<f64>::default();
    let start = *camera.position();
    camera.orbit_yaw(0.7);
    assert!((camera.position() - start).norm() > 1.0);
    camera.orbit_yaw(-0.7);
    assert_relative_eq!(*camera.position(), start, epsilon = 1e-9);
}

#[test]
fn orbit_keeps_target_and_distance() {
    let mut camera = CameraController::<f64>::default();
    let distance = camera.position().coords.norm();
    let height = camera.position().y;
    camera.orbit_yaw(1.3);
    assert_eq!(*camera.target(), Point3::origin());
    assert_relative_eq!(camera.position().coords.norm(), distance, epsilon = 1e-9);
    assert_relative_eq!(camera.position().y, height, epsilon = 1e-9);
}

#[test]
fn move_and_strafe() {
    let mut camera = side_camera();
    assert!(camera.move_forward(2.));
    assert_relative_eq!(*camera.position(), Point3::new(8., 0., 0.));
    assert!(camera.move_forward(-3.));
    assert_relative_eq!(*camera.position(), Point3::new(11., 0., 0.));
    assert!(camera.strafe_vertical(1.5));
    assert_relative_eq!(*camera.position(), Point3::new(11., -1.5, 0.));
}

#[test]
fn move_into_target_is_rejected() {
    let mut camera = side_camera();
    assert!(!camera.move_forward(9.5));
    assert_relative_eq!(*camera.position(), Point3::new(10., 0., 0.));
    assert!(camera.forward().iter().all(|v| v.is_finite()));
}

#[test]
fn spawn_on_the_target_is_pushed_out() {
    let camera = CameraController::<f64>::new(
        CameraOptions::default()
            .with_position(Point3::origin())
            .with_min_distance(2.),
    );
    assert_relative_eq!(*camera.position(), Point3::new(0., 0., 2.));
    assert!(camera.forward().iter().all(|v| v.is_finite()));
    assert!(camera.view_matrix().iter().all(|v| v.is_finite()));

    let near = CameraController::<f64>::new(
        CameraOptions::default()
            .with_position(Point3::new(0.5, 0., 0.))
            .with_min_distance(2.),
    );
    assert_relative_eq!(*near.position(), Point3::new(2., 0., 0.));

    let far = CameraController::<f64>::new(CameraOptions::default());
    assert_eq!(*far.position(), Point3::new(-50., 90., -50.));
}

#[test]
fn first_sample_after_press_is_discarded() {
    let mut camera = side_camera();
    let start = *camera.position();

    assert!(camera.pointer_moved(5., 5.).is_none());
    assert_eq!(*camera.position(), start);

    camera.press();
    assert!(camera.drag_state().is_dragging());
    assert!(camera.pointer_moved(100., 40.).is_none());
    assert_eq!(*camera.position(), start);

    let delta = camera.pointer_moved(110., 44.).unwrap();
    assert_relative_eq!(delta, Vector2::new(10., 4.));

    // yaw by -10 * 0.01, then 4 * 0.1 along up = -y
    let angle: f64 = 0.1;
    assert_relative_eq!(
        *camera.position(),
        Point3::new(10. * angle.cos(), -0.4, 10. * angle.sin()),
        epsilon = 1e-12
    );
}

#[test]
fn release_stops_dragging() {
    let mut camera = side_camera();
    camera.press();
    camera.pointer_moved(0., 0.);
    camera.release();
    assert_eq!(*camera.drag_state(), DragState::Idle);
    let start = *camera.position();
    assert!(camera.pointer_moved(50., 50.).is_none());
    assert_eq!(*camera.position(), start);

    // a new press starts without a reference sample again
    camera.press();
    assert!(camera.pointer_moved(60., 60.).is_none());
    assert_eq!(*camera.position(), start);
}

#[test]
fn view_matrix_maps_target_in_front() {
    let camera = CameraController::<f64>::default();
    let view = camera.view_matrix();
    let eye = view.transform_point(camera.position());
    assert_relative_eq!(eye, Point3::origin(), epsilon = 1e-9);
    let target = view.transform_point(camera.target());
    let distance = camera.position().coords.norm();
    assert_relative_eq!(target, Point3::new(0., 0., -distance), epsilon = 1e-9);
}

#[test]
fn projection_uses_options() {
    let camera = CameraController::<f64>::default();
    let proj = camera.projection_matrix(2.);
    let f = 1. / (std::f64::consts::FRAC_PI_3 / 2.).tan();
    assert_relative_eq!(proj[(1, 1)], f, epsilon = 1e-12);
    assert_relative_eq!(proj[(0, 0)], f / 2., epsilon = 1e-12);
}
