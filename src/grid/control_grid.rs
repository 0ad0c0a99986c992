use std::{
    fs,
    io::Read,
    ops::{Index, IndexMut},
    path::Path,
    str::SplitWhitespace,
};

use itertools::iproduct;
use log::info;
use nalgebra::{convert, Point3};
use simba::scalar::SupersetOf;

use crate::{grid::GridError, misc::FloatingPoint};

/// Grid of surface control points
/// stored row-major in a single contiguous buffer, point `(i, j)` lives at `i * cols + j`
#[derive(Clone, Debug, PartialEq)]
pub struct ControlGrid<T: FloatingPoint> {
    rows: usize,
    cols: usize,
    points: Vec<Point3<T>>,
}

impl<T: FloatingPoint> ControlGrid<T> {
    /// Create a flat grid lying on the XZ plane
    /// # Example
    /// ```
    /// use wavesurf::prelude::ControlGrid;
    /// let grid = ControlGrid::<f64>::create(3, 4, 10.).unwrap();
    /// assert_eq!(grid.len(), 12);
    /// assert_eq!(grid[(2, 3)].x, 20.);
    /// assert_eq!(grid[(2, 3)].z, 30.);
    /// ```
    pub fn create(rows: usize, cols: usize, step: T) -> Result<Self, GridError> {
        ensure_dimensions(rows, cols)?;
        let points = iproduct!(0..rows, 0..cols)
            .map(|(i, j)| Point3::new(step * T::from_index(i), T::zero(), step * T::from_index(j)))
            .collect();
        info!("{}x{} control points created", rows, cols);
        Ok(Self { rows, cols, points })
    }

    /// Create a grid from row-major points
    pub fn try_new(rows: usize, cols: usize, points: Vec<Point3<T>>) -> Result<Self, GridError> {
        ensure_dimensions(rows, cols)?;
        if points.len() != rows * cols {
            return Err(GridError::Format(format!(
                "expected {} control points for a {}x{} grid, got {}",
                rows * cols,
                rows,
                cols,
                points.len()
            )));
        }
        Ok(Self { rows, cols, points })
    }

    /// Load a grid from a text file holding `M N` followed by `M*N` triples
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::parse(&decode(bytes)?)?;
        info!(
            "{}x{} control points read from {}",
            grid.rows,
            grid.cols,
            path.display()
        );
        Ok(grid)
    }

    /// Read a grid from any reader holding the text format
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GridError> {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes)?;
        Self::parse(&decode(bytes)?)
    }

    /// Parse the text format: a `M N` header, then `M*N` whitespace separated `x y z` triples in row-major order.
    /// Anything after the last triple is ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut tokens = text.split_whitespace();
        let rows = parse_dimension(tokens.next(), "row")?;
        let cols = parse_dimension(tokens.next(), "column")?;
        if rows < 2 || cols < 2 {
            return Err(GridError::Format(format!(
                "a grid needs at least 2x2 control points, header declares {}x{}",
                rows, cols
            )));
        }
        let count = rows
            .checked_mul(cols)
            .ok_or_else(|| GridError::Format(format!("grid of {}x{} is too large", rows, cols)))?;

        // a truncated source must not reserve the declared size up front
        let mut points = Vec::with_capacity(count.min(text.len() / 6 + 1));
        for (i, j) in iproduct!(0..rows, 0..cols) {
            let x = parse_coordinate(&mut tokens, i, j, "x")?;
            let y = parse_coordinate(&mut tokens, i, j, "y")?;
            let z = parse_coordinate(&mut tokens, i, j, "z")?;
            points.push(Point3::new(x, y, z));
        }

        Ok(Self { rows, cols, points })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of quad cells (patches) spanned by the grid
    pub fn cell_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    /// Iterate the control points with their `(i, j)` indices in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Point3<T>)> {
        let cols = self.cols;
        self.points
            .iter()
            .enumerate()
            .map(move |(k, p)| ((k / cols, k % cols), p))
    }

    /// Get the flat index of a control point
    pub fn index_of(&self, i: usize, j: usize) -> Result<usize, GridError> {
        if i < self.rows && j < self.cols {
            Ok(i * self.cols + j)
        } else {
            Err(GridError::OutOfBounds {
                i,
                j,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&Point3<T>, GridError> {
        let k = self.index_of(i, j)?;
        Ok(&self.points[k])
    }

    pub fn set(&mut self, i: usize, j: usize, point: Point3<T>) -> Result<(), GridError> {
        let k = self.index_of(i, j)?;
        self.points[k] = point;
        Ok(())
    }

    /// Set the y coordinate of a control point
    pub fn set_height(&mut self, i: usize, j: usize, y: T) -> Result<(), GridError> {
        let k = self.index_of(i, j)?;
        self.points[k].y = y;
        Ok(())
    }

    /// Center of the grid footprint on the XZ plane (y is zero)
    pub fn center(&self) -> Point3<T> {
        let (min, max) = self.points.iter().fold(
            (self.points[0], self.points[0]),
            |(min, max), p| {
                (
                    Point3::new(min.x.min(p.x), T::zero(), min.z.min(p.z)),
                    Point3::new(max.x.max(p.x), T::zero(), max.z.max(p.z)),
                )
            },
        );
        nalgebra::center(&min, &max)
    }

    /// Cast the grid to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> ControlGrid<F> {
        ControlGrid {
            rows: self.rows,
            cols: self.cols,
            points: self.points.iter().map(|p| p.cast()).collect(),
        }
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "control point ({}, {}) is outside of the {}x{} grid",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for ControlGrid<T> {
    type Output = Point3<T>;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.points[self.offset(i, j)]
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for ControlGrid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let k = self.offset(i, j);
        &mut self.points[k]
    }
}

fn ensure_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows < 2 || cols < 2 {
        Err(GridError::Degenerate { rows, cols })
    } else {
        Ok(())
    }
}

fn decode(bytes: Vec<u8>) -> Result<String, GridError> {
    String::from_utf8(bytes).map_err(|e| {
        GridError::Format(format!(
            "grid source is not valid UTF-8 after byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize, GridError> {
    let token = token.ok_or_else(|| GridError::Format(format!("missing {} count", name)))?;
    let value: i64 = token
        .parse()
        .map_err(|_| GridError::Format(format!("invalid {} count `{}`", name, token)))?;
    if value <= 0 {
        return Err(GridError::Format(format!(
            "{} count must be positive, got {}",
            name, value
        )));
    }
    usize::try_from(value)
        .map_err(|_| GridError::Format(format!("{} count {} does not fit", name, value)))
}

fn parse_coordinate<T: FloatingPoint>(
    tokens: &mut SplitWhitespace<'_>,
    i: usize,
    j: usize,
    axis: &str,
) -> Result<T, GridError> {
    let token = tokens.next().ok_or_else(|| {
        GridError::Format(format!(
            "source ended before the {} coordinate of control point ({}, {})",
            axis, i, j
        ))
    })?;
    let value: f64 = token.parse().map_err(|_| {
        GridError::Format(format!(
            "invalid {} coordinate `{}` for control point ({}, {})",
            axis, token, i, j
        ))
    })?;
    Ok(convert(value))
}
