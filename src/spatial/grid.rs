//! Grid storage and the raster traversal order shared by every generation stage
//!
//! Grids are `ndarray` arrays indexed `[row, col]`, i.e. `[y, x]`. Stages that
//! consume random draws must visit pixels in [`raster_order`]; changing that
//! order changes every seeded output.

use crate::color::rgba::FinalColor;
use ndarray::{Array2, ArrayView1, Axis};

/// Per-pixel grid of roles or colors, indexed `[y, x]`
pub type Grid<T> = Array2<T>;

/// Iterate pixel coordinates `(x, y)` in generation order
///
/// The order is column-major: `x` advances in the outer loop and `y` in the
/// inner loop. Every draw from the shared random stream is tied to this order.
pub fn raster_order(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

/// Check whether `(x, y)` lies strictly inside a `width` by `height` grid
///
/// Pixels on the first or last row or column are not interior.
pub const fn is_interior(x: usize, y: usize, width: usize, height: usize) -> bool {
    x > 0 && y > 0 && x + 1 < width && y + 1 < height
}

/// Coordinates of the four orthogonal neighbours of `(x, y)` in left, right, up, down order
///
/// Callers must only pass interior coordinates; the left and up neighbours
/// would otherwise underflow.
pub const fn orthogonal_neighbors(x: usize, y: usize) -> [(usize, usize); 4] {
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
}

/// Width of a `[y, x]` indexed grid
pub fn grid_width<T>(grid: &Grid<T>) -> usize {
    grid.ncols()
}

/// Height of a `[y, x]` indexed grid
pub fn grid_height<T>(grid: &Grid<T>) -> usize {
    grid.nrows()
}

/// Generated width by height matrix of final colors
///
/// Owned independently of the template it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatrix {
    cells: Grid<FinalColor>,
}

impl ColorMatrix {
    /// Create a matrix with every cell transparent white
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), FinalColor::TRANSPARENT_WHITE),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Color at `(x, y)`, or `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<&FinalColor> {
        self.cells.get([y, x])
    }

    /// Mutable color at `(x, y)`, or `None` outside the matrix
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut FinalColor> {
        self.cells.get_mut([y, x])
    }

    /// Overwrite the color at `(x, y)`; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, color: FinalColor) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = color;
        }
    }

    /// View of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, FinalColor>> {
        (y < self.height()).then(|| self.cells.index_axis(Axis(0), y))
    }

    /// View of column `x`, top to bottom
    pub fn column(&self, x: usize) -> Option<ArrayView1<'_, FinalColor>> {
        (x < self.width()).then(|| self.cells.index_axis(Axis(1), x))
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, FinalColor>> {
        self.cells.rows().into_iter()
    }

    /// Borrow the underlying `[y, x]` indexed array
    pub const fn as_array(&self) -> &Grid<FinalColor> {
        &self.cells
    }

    /// Take ownership of the underlying `[y, x]` indexed array
    pub fn into_array(self) -> Grid<FinalColor> {
        self.cells
    }

    /// Copy column `from` over column `to`
    pub(crate) fn copy_column(&mut self, from: usize, to: usize) {
        if from == to || from >= self.width() || to >= self.width() {
            return;
        }
        let source = self.cells.index_axis(Axis(1), from).to_owned();
        self.cells.index_axis_mut(Axis(1), to).assign(&source);
    }

    /// Copy row `from` over row `to`
    pub(crate) fn copy_row(&mut self, from: usize, to: usize) {
        if from == to || from >= self.height() || to >= self.height() {
            return;
        }
        let source = self.cells.index_axis(Axis(0), from).to_owned();
        self.cells.index_axis_mut(Axis(0), to).assign(&source);
    }
}

impl From<Grid<FinalColor>> for ColorMatrix {
    fn from(cells: Grid<FinalColor>) -> Self {
        Self { cells }
    }
}
