use log::warn;
use nalgebra::{convert, Point4, RealField, Vector3, Vector4};

/// Largest tessellation level accepted by the tessellation control stage
pub const MAX_TESSELLATION_LEVEL: u32 = 64;

/// Polygon fill mode of the tessellated surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Filled,
    Wireframe,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Filled => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Filled,
        }
    }
}

/// Render state handed to the render bridge along with the matrices
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings<T: RealField> {
    /// Outer and inner tessellation level of every patch
    pub tessellation_level: u32,
    pub render_mode: RenderMode,
    /// Translate the model so that the grid footprint is centered on the origin
    pub centered: bool,
    /// Width of the wireframe overlay lines
    pub line_width: T,
    pub line_color: Vector4<T>,
    pub light_position: Point4<T>,
    pub light_intensity: Vector3<T>,
    /// Diffuse reflectivity
    pub kd: Vector3<T>,
    pub clear_color: Vector4<T>,
}

impl<T: RealField> Default for RenderSettings<T> {
    fn default() -> Self {
        Self {
            tessellation_level: 8,
            render_mode: RenderMode::Filled,
            centered: false,
            line_width: convert(0.8),
            line_color: Vector4::new(convert(0.05), T::zero(), convert(0.05), T::one()),
            light_position: Point4::new(T::zero(), T::zero(), T::zero(), T::one()),
            light_intensity: Vector3::new(T::one(), T::one(), T::one()),
            kd: Vector3::new(convert(0.9), convert(0.9), T::one()),
            clear_color: Vector4::new(convert(0.5), convert(0.5), convert(0.5), T::one()),
        }
    }
}

impl<T: RealField> RenderSettings<T> {
    pub fn with_tessellation_level(mut self, level: u32) -> Self {
        self.tessellation_level = level.clamp(1, MAX_TESSELLATION_LEVEL);
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn increase_tessellation(&mut self) {
        self.step_tessellation(1);
    }

    pub fn decrease_tessellation(&mut self) {
        self.step_tessellation(-1);
    }

    /// Change the tessellation level, staying within `[1, MAX_TESSELLATION_LEVEL]`
    fn step_tessellation(&mut self, step: i64) {
        let requested = i64::from(self.tessellation_level) + step;
        let level = requested.clamp(1, i64::from(MAX_TESSELLATION_LEVEL));
        if level != requested {
            warn!(
                "tessellation level {} out of range, kept at {}",
                requested, level
            );
        }
        self.tessellation_level = level as u32;
    }

    pub fn toggle_render_mode(&mut self) {
        self.render_mode = self.render_mode.toggled();
    }

    pub fn toggle_centering(&mut self) {
        self.centered = !self.centered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tessellation_level_is_clamped() {
        let mut settings = RenderSettings::<f32>::default().with_tessellation_level(2);
        settings.decrease_tessellation();
        assert_eq!(settings.tessellation_level, 1);
        settings.decrease_tessellation();
        assert_eq!(settings.tessellation_level, 1);

        let mut settings = RenderSettings::<f32>::default().with_tessellation_level(1000);
        assert_eq!(settings.tessellation_level, MAX_TESSELLATION_LEVEL);
        settings.increase_tessellation();
        assert_eq!(settings.tessellation_level, MAX_TESSELLATION_LEVEL);
        settings.decrease_tessellation();
        assert_eq!(settings.tessellation_level, MAX_TESSELLATION_LEVEL - 1);
    }

    #[test]
    fn toggles() {
        let mut settings = RenderSettings::<f64>::default();
        assert_eq!(settings.tessellation_level, 8);
        settings.toggle_render_mode();
        assert_eq!(settings.render_mode, RenderMode::Wireframe);
        settings.toggle_render_mode();
        assert_eq!(settings.render_mode, RenderMode::Filled);
        settings.toggle_centering();
        assert!(settings.centered);
    }
}
