use std::path::PathBuf;

/// Errors raised while building or addressing a control grid
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The grid source could not be opened
    #[error("cannot open grid source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The grid source could not be read to the end
    #[error("failed to read grid source: {0}")]
    Read(#[from] std::io::Error),
    /// The grid source is not text or does not follow the `M N` + `M*N` triples layout
    #[error("malformed grid source: {0}")]
    Format(String),
    /// A grid needs at least two rows and two columns to form a patch
    #[error("grid must have at least 2x2 control points, got {rows}x{cols}")]
    Degenerate { rows: usize, cols: usize },
    /// Access outside of the grid, a programming error rather than bad input
    #[error("control point ({i}, {j}) is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
}
