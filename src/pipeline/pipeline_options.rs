use std::path::PathBuf;

use nalgebra::convert;

use crate::{
    animation::RippleWaveform, camera::CameraOptions, misc::FloatingPoint,
    render::RenderSettings,
};

/// Options of a surface pipeline
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineOptions<T: FloatingPoint> {
    /// Number of control point rows of a generated grid
    pub rows: usize,
    /// Number of control point columns of a generated grid
    pub cols: usize,
    /// Spacing between neighboring control points of a generated grid
    pub step: T,
    /// Load the grid from this file instead of generating it
    pub grid_source: Option<PathBuf>,
    pub waveform: RippleWaveform<T>,
    pub render: RenderSettings<T>,
    pub camera: CameraOptions<T>,
}

impl<T: FloatingPoint> Default for PipelineOptions<T> {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            step: convert(10.0),
            grid_source: None,
            waveform: RippleWaveform::default(),
            render: RenderSettings::default(),
            camera: CameraOptions::default(),
        }
    }
}

impl<T: FloatingPoint> PipelineOptions<T> {
    pub fn with_grid(mut self, rows: usize, cols: usize, step: T) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.step = step;
        self
    }

    pub fn with_grid_source<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.grid_source = Some(path.into());
        self
    }

    pub fn with_waveform(mut self, waveform: RippleWaveform<T>) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_render(mut self, render: RenderSettings<T>) -> Self {
        self.render = render;
        self
    }

    pub fn with_camera(mut self, camera: CameraOptions<T>) -> Self {
        self.camera = camera;
        self
    }
}
