use itertools::iproduct;
use log::trace;

use crate::{
    animation::{RippleWaveform, Waveform},
    grid::ControlGrid,
    misc::FloatingPoint,
    surface::SurfaceState,
};

/// Drives control point heights from a waveform evaluated at the current time
///
/// No state carries between frames except the last time value.
#[derive(Clone, Debug)]
pub struct SurfaceAnimator<T: FloatingPoint, W = RippleWaveform<T>> {
    waveform: W,
    time: T,
}

impl<T: FloatingPoint> Default for SurfaceAnimator<T, RippleWaveform<T>> {
    fn default() -> Self {
        Self::new(RippleWaveform::default())
    }
}

impl<T: FloatingPoint, W: Waveform<T>> SurfaceAnimator<T, W> {
    pub fn new(waveform: W) -> Self {
        Self {
            waveform,
            time: T::zero(),
        }
    }

    pub fn waveform(&self) -> &W {
        &self.waveform
    }

    /// Time of the last update
    pub fn time(&self) -> T {
        self.time
    }

    /// Set the heights of the grid at time `t` and return how many control points were touched
    ///
    /// Only cells `i in [0, M-2]`, `j in [0, N-2]` are animated:
    /// the last row and the last column keep their heights, which leaves a static seam at the far edges.
    pub fn update_grid(&mut self, grid: &mut ControlGrid<T>, t: T) -> usize {
        self.time = t;
        for (i, j) in iproduct!(0..grid.rows() - 1, 0..grid.cols() - 1) {
            grid[(i, j)].y = self.waveform.height(i, j, t);
        }
        grid.cell_count()
    }

    /// Animate the surface at time `t`, then rederive and repack it
    pub fn update(&mut self, surface: &mut SurfaceState<T>, t: T) -> usize {
        let touched = surface.modify(|grid| self.update_grid(grid, t));
        trace!("{} control points animated", touched);
        touched
    }
}
