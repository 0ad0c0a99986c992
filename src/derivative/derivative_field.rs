use log::debug;
use nalgebra::{convert, Vector3};

use crate::{grid::ControlGrid, misc::FloatingPoint};

/// Parametric distance covered by the central difference:
/// a patch spans a unit interval, the difference reaches one patch back and one forward
const PARAMETRIC_SPAN: f64 = 2.0;

/// Approximated partial derivatives of a control grid
/// `du` follows the row index `i`, `dv` follows the column index `j`
#[derive(Clone, Debug, PartialEq)]
pub struct DerivativeField<T: FloatingPoint> {
    rows: usize,
    cols: usize,
    du: Vec<Vector3<T>>,
    dv: Vec<Vector3<T>>,
}

impl<T: FloatingPoint> DerivativeField<T> {
    /// Compute the derivative field of a grid
    pub fn new(grid: &ControlGrid<T>) -> Self {
        let mut field = Self {
            rows: 0,
            cols: 0,
            du: vec![],
            dv: vec![],
        };
        field.compute(grid);
        field
    }

    /// Recompute both derivative grids from scratch
    ///
    /// Rows `0` and `M-1` have no opposite neighbor in `u` and get a zero `du`,
    /// columns `0` and `N-1` likewise get a zero `dv`.
    /// This flattens the tessellated normal along the outer rim.
    pub fn compute(&mut self, grid: &ControlGrid<T>) {
        let (rows, cols) = (grid.rows(), grid.cols());
        let span: T = convert(PARAMETRIC_SPAN);

        self.rows = rows;
        self.cols = cols;
        self.du.clear();
        self.dv.clear();
        self.du.reserve(rows * cols);
        self.dv.reserve(rows * cols);

        for i in 0..rows {
            for j in 0..cols {
                let du = if is_rim(i, rows) {
                    Vector3::zeros()
                } else {
                    (grid[(i + 1, j)] - grid[(i - 1, j)]) / span
                };
                let dv = if is_rim(j, cols) {
                    Vector3::zeros()
                } else {
                    (grid[(i, j + 1)] - grid[(i, j - 1)]) / span
                };
                self.du.push(du);
                self.dv.push(dv);
            }
        }

        debug!("derivatives computed for {}x{} control points", rows, cols);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Partial derivative along `u` at control point `(i, j)`
    pub fn du(&self, i: usize, j: usize) -> &Vector3<T> {
        &self.du[self.offset(i, j)]
    }

    /// Partial derivative along `v` at control point `(i, j)`
    pub fn dv(&self, i: usize, j: usize) -> &Vector3<T> {
        &self.dv[self.offset(i, j)]
    }

    pub fn du_slice(&self) -> &[Vector3<T>] {
        &self.du
    }

    pub fn dv_slice(&self) -> &[Vector3<T>] {
        &self.dv
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "derivative ({}, {}) is outside of the {}x{} field",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

/// Whether an index lies on the first or last line of an axis of `len` control points
pub fn is_rim(index: usize, len: usize) -> bool {
    index == 0 || index + 1 >= len
}
