use itertools::iproduct;
use log::debug;
use nalgebra::Vector3;
use simba::scalar::SupersetOf;

use crate::{
    derivative::DerivativeField,
    grid::ControlGrid,
    misc::FloatingPoint,
    patch::{FLOATS_PER_PATCH, PATCH_VERTEX_COUNT},
};

/// Flat interleaved patch data consumed by the tessellation stage
///
/// Each patch of cell `(i, j)` holds twelve 3-vectors in this order:
/// the corners `P[i][j], P[i+1][j], P[i+1][j+1], P[i][j+1]`,
/// then `du` at the same corners, then `dv` at the same corners.
/// Patches follow the row-major order of their cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchBuffer<T: FloatingPoint> {
    values: Vec<T>,
}

impl<T: FloatingPoint> PatchBuffer<T> {
    /// Pack a grid and its derivative field
    pub fn pack(grid: &ControlGrid<T>, field: &DerivativeField<T>) -> Self {
        let mut buffer = Self { values: vec![] };
        buffer.repack(grid, field);
        buffer
    }

    /// Replace the whole buffer content with a fresh packing
    pub fn repack(&mut self, grid: &ControlGrid<T>, field: &DerivativeField<T>) {
        assert!(
            grid.rows() == field.rows() && grid.cols() == field.cols(),
            "derivative field {}x{} does not match the {}x{} grid",
            field.rows(),
            field.cols(),
            grid.rows(),
            grid.cols()
        );

        self.values.clear();
        self.values.reserve(grid.cell_count() * FLOATS_PER_PATCH);

        for (i, j) in iproduct!(0..grid.rows() - 1, 0..grid.cols() - 1) {
            // counter-clockwise in parameter space
            let corners = [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)];
            for &(a, b) in corners.iter() {
                self.push(&grid[(a, b)].coords);
            }
            for &(a, b) in corners.iter() {
                self.push(field.du(a, b));
            }
            for &(a, b) in corners.iter() {
                self.push(field.dv(a, b));
            }
        }

        debug!(
            "{} patches packed into {} values",
            self.patch_count(),
            self.values.len()
        );
    }

    fn push(&mut self, v: &Vector3<T>) {
        self.values.extend_from_slice(&[v.x, v.y, v.z]);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn patch_count(&self) -> usize {
        self.values.len() / FLOATS_PER_PATCH
    }

    /// Number of vertices the draw call has to submit
    pub fn vertex_count(&self) -> usize {
        self.patch_count() * PATCH_VERTEX_COUNT
    }

    /// Get the packed values of the `k`-th patch
    pub fn patch(&self, k: usize) -> Option<&[T]> {
        let start = k.checked_mul(FLOATS_PER_PATCH)?;
        self.values.get(start..start.checked_add(FLOATS_PER_PATCH)?)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Cast the buffer to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PatchBuffer<F> {
        PatchBuffer {
            values: self.values.iter().map(|v| nalgebra::convert(*v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;
    use crate::patch::VECTOR_COMPONENTS;

    fn surface(rows: usize, cols: usize) -> (ControlGrid<f64>, DerivativeField<f64>) {
        let mut grid = ControlGrid::create(rows, cols, 2.).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                grid.set_height(i, j, (i as f64).sin() + (j as f64) * 0.5)
                    .unwrap();
            }
        }
        let field = DerivativeField::new(&grid);
        (grid, field)
    }

    fn vector_at(patch: &[f64], slot: usize) -> [f64; 3] {
        let k = slot * VECTOR_COMPONENTS;
        [patch[k], patch[k + 1], patch[k + 2]]
    }

    #[test]
    fn length_follows_cell_count() {
        for (m, n) in [(2, 2), (2, 5), (3, 3), (10, 10), (7, 4)] {
            let (grid, field) = surface(m, n);
            let buffer = PatchBuffer::pack(&grid, &field);
            assert_eq!(buffer.len(), (m - 1) * (n - 1) * 36);
            assert_eq!(buffer.patch_count(), (m - 1) * (n - 1));
            assert_eq!(buffer.vertex_count(), (m - 1) * (n - 1) * 12);
        }
    }

    #[test]
    fn packing_is_deterministic() {
        let (grid, field) = surface(6, 5);
        let a = PatchBuffer::pack(&grid, &field);
        let b = PatchBuffer::pack(&grid, &field);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn patch_layout_matches_tessellation_contract() {
        let (grid, field) = surface(4, 5);
        let buffer = PatchBuffer::pack(&grid, &field);

        // cell (1, 2) is the patch 1 * (5 - 1) + 2
        let patch = buffer.patch(6).unwrap();
        let corners = [(1, 2), (2, 2), (2, 3), (1, 3)];
        for (slot, &(i, j)) in corners.iter().enumerate() {
            let p: Point3<f64> = grid[(i, j)];
            assert_eq!(vector_at(patch, slot), [p.x, p.y, p.z]);
            let du = field.du(i, j);
            assert_eq!(vector_at(patch, slot + 4), [du.x, du.y, du.z]);
            let dv = field.dv(i, j);
            assert_eq!(vector_at(patch, slot + 8), [dv.x, dv.y, dv.z]);
        }
        assert!(buffer.patch(12).is_none());
        assert!(buffer.patch(usize::MAX / 2).is_none());
        assert!(buffer.patch(usize::MAX).is_none());
    }

    #[test]
    fn repack_replaces_content() {
        let (mut grid, mut field) = surface(3, 3);
        let mut buffer = PatchBuffer::pack(&grid, &field);
        grid.set_height(1, 1, 42.).unwrap();
        field.compute(&grid);
        buffer.repack(&grid, &field);
        assert_eq!(buffer.len(), 4 * 36);
        assert_eq!(buffer, PatchBuffer::pack(&grid, &field));
        // (1, 1) is the third corner of the first patch
        assert_relative_eq!(buffer.patch(0).unwrap()[7], 42.);
    }

    #[test]
    fn cast_to_f32() {
        let (grid, field) = surface(3, 4);
        let buffer = PatchBuffer::pack(&grid, &field);
        let gpu: PatchBuffer<f32> = buffer.cast();
        assert_eq!(gpu.len(), buffer.len());
        assert_relative_eq!(gpu.as_slice()[3], buffer.as_slice()[3] as f32);
    }

    #[test]
    #[should_panic]
    fn mismatched_field_is_rejected() {
        let (grid, _) = surface(3, 3);
        let (_, field) = surface(4, 3);
        PatchBuffer::pack(&grid, &field);
    }
}
