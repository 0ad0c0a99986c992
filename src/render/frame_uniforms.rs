use nalgebra::{convert, Matrix3, Matrix4};

use crate::{misc::FloatingPoint, render::RenderMode};

/// Everything the render bridge needs to draw a frame, rebuilt from scratch every frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUniforms<T: FloatingPoint> {
    pub view: Matrix4<T>,
    pub projection: Matrix4<T>,
    pub model: Matrix4<T>,
    pub model_view: Matrix4<T>,
    /// Upper 3x3 block of the model-view matrix
    pub normal: Matrix3<T>,
    /// `projection * view * model`
    pub mvp: Matrix4<T>,
    /// Maps normalized device coordinates to framebuffer pixels
    pub viewport: Matrix4<T>,
    pub tessellation_level: u32,
    pub time: T,
    pub delta_time: T,
    pub render_mode: RenderMode,
    /// Vertices per patch primitive
    pub patch_vertex_count: usize,
    /// Vertices submitted by the draw call
    pub vertex_count: usize,
}

impl<T: FloatingPoint> FrameUniforms<T> {
    /// Derive the combined matrices from view, projection and model
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        view: Matrix4<T>,
        projection: Matrix4<T>,
        model: Matrix4<T>,
        viewport: Matrix4<T>,
        tessellation_level: u32,
        time: T,
        delta_time: T,
        render_mode: RenderMode,
        patch_vertex_count: usize,
        vertex_count: usize,
    ) -> Self {
        let model_view = view * model;
        let normal = model_view.fixed_view::<3, 3>(0, 0).into_owned();
        let mvp = projection * model_view;
        Self {
            view,
            projection,
            model,
            model_view,
            normal,
            mvp,
            viewport,
            tessellation_level,
            time,
            delta_time,
            render_mode,
            patch_vertex_count,
            vertex_count,
        }
    }
}

/// Viewport scaling matrix of a `width` x `height` framebuffer
///
/// Scales x and y by the half extents and moves the origin to the framebuffer center.
pub fn viewport_matrix<T: FloatingPoint>(width: u32, height: u32) -> Matrix4<T> {
    let w2: T = convert(f64::from(width) / 2.0);
    let h2: T = convert(f64::from(height) / 2.0);
    let (zero, one) = (T::zero(), T::one());
    Matrix4::new(
        w2, zero, zero, w2, //
        zero, h2, zero, h2, //
        zero, zero, one, zero, //
        zero, zero, zero, one,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3, Vector4};

    use super::*;

    #[test]
    fn viewport_maps_ndc_corners_to_pixels() {
        let viewport = viewport_matrix::<f64>(800, 600);
        assert_relative_eq!(
            viewport.transform_point(&Point3::new(-1., -1., 0.5)),
            Point3::new(0., 0., 0.5)
        );
        assert_relative_eq!(
            viewport.transform_point(&Point3::new(1., 1., 0.)),
            Point3::new(800., 600., 0.)
        );
        // column-major layout expected by the shader: translation in the last column
        assert_eq!(viewport.column(3).into_owned(), Vector4::new(400., 300., 0., 1.));
    }

    #[test]
    fn combined_matrices() {
        let view = Matrix4::new_translation(&Vector3::new(0., 0., -5.));
        let model = Matrix4::new_scaling(2.);
        let projection = Matrix4::new_perspective(1., 1., 0.1, 100.);
        let uniforms = FrameUniforms::new(
            view,
            projection,
            model,
            viewport_matrix(2, 2),
            8,
            0.5,
            0.,
            RenderMode::Filled,
            12,
            12,
        );
        assert_eq!(uniforms.model_view, view * model);
        assert_eq!(uniforms.mvp, projection * view * model);
        assert_eq!(uniforms.normal, Matrix3::from_diagonal_element(2.));
    }
}
