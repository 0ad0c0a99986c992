use nalgebra::Matrix4;

use crate::{
    derivative::DerivativeField,
    grid::{ControlGrid, GridError},
    misc::FloatingPoint,
    patch::PatchBuffer,
};

/// Owned surface data of the pipeline
///
/// The derivative field and the patch buffer are always derived from the current grid:
/// every mutation goes through this type and ends with a [`SurfaceState::refresh`].
#[derive(Clone, Debug)]
pub struct SurfaceState<T: FloatingPoint> {
    grid: ControlGrid<T>,
    derivatives: DerivativeField<T>,
    patches: PatchBuffer<T>,
}

impl<T: FloatingPoint> SurfaceState<T> {
    pub fn new(grid: ControlGrid<T>) -> Self {
        let derivatives = DerivativeField::new(&grid);
        let patches = PatchBuffer::pack(&grid, &derivatives);
        Self {
            grid,
            derivatives,
            patches,
        }
    }

    pub fn grid(&self) -> &ControlGrid<T> {
        &self.grid
    }

    pub fn derivatives(&self) -> &DerivativeField<T> {
        &self.derivatives
    }

    pub fn patches(&self) -> &PatchBuffer<T> {
        &self.patches
    }

    /// Mutate the grid, then recompute derivatives and repack
    pub fn modify<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut ControlGrid<T>) -> R,
    {
        let r = f(&mut self.grid);
        self.refresh();
        r
    }

    /// Recompute the derivative field and the patch buffer from the grid
    pub fn refresh(&mut self) {
        self.derivatives.compute(&self.grid);
        self.patches.repack(&self.grid, &self.derivatives);
    }

    /// Move a single control point vertically, then rederive and repack
    pub fn relocate_point(&mut self, i: usize, j: usize, height: T) -> Result<(), GridError> {
        self.grid.set_height(i, j, height)?;
        self.refresh();
        Ok(())
    }

    /// Model transforms placing a marker at every control point, in row-major order
    pub fn marker_transforms(&self) -> Vec<Matrix4<T>> {
        self.grid
            .points()
            .iter()
            .map(|p| Matrix4::new_translation(&p.coords))
            .collect()
    }
}
