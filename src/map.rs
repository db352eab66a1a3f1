//! Top-down (X-Y plane) ASCII projection of a protein.

use crate::error::CError;
use crate::protein::Protein;
use std::fmt;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 20;
pub const BACKGROUND: char = '.';
pub const MARKER: char = '*';

/// A fixed-size character grid with one marker per occupied cell. The z
/// coordinate is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TopDownMap {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

/// Rescale `value` from `[min, max]` onto `[0, dim - 1]`.
///
/// A zero-length range puts everything on the midpoint index. Values that do
/// not land inside the grid, including non-finite ones, give `None`.
fn scale(value: f64, min: f64, max: f64, dim: usize) -> Option<usize> {
    let range = max - min;
    if range == 0.0 {
        return Some((dim - 1) / 2);
    }
    let scaled = ((value - min) / range * (dim - 1) as f64).trunc();
    if scaled.is_finite() && scaled >= 0.0 && scaled < dim as f64 {
        Some(scaled as usize)
    } else {
        None
    }
}

impl TopDownMap {
    /// Project all atoms of `protein` onto a `width` x `height` grid.
    ///
    /// Returns `Ok(None)` for a protein without atoms.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero.
    pub fn render(
        protein: &Protein,
        width: usize,
        height: usize,
    ) -> Result<Option<TopDownMap>, CError> {
        if width == 0 || height == 0 {
            return Err(CError::GenericError(format!(
                "map dimensions must be positive, got {width}x{height}"
            )));
        }
        let Some(bounds) = protein.bounds() else {
            return Ok(None);
        };
        let (min_x, max_x) = (bounds.min[0], bounds.max[0]);
        let (min_y, max_y) = (bounds.min[1], bounds.max[1]);

        let mut map = TopDownMap {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        };
        for atom in protein {
            let col = scale(atom.x, min_x, max_x, width);
            let row = scale(atom.y, min_y, max_y, height);
            if let (Some(col), Some(row)) = (col, row) {
                map.cells[row * width + col] = MARKER;
            }
        }
        Ok(Some(map))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.width && row < self.height {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Coordinates `(col, row)` of every marked cell, row by row
    pub fn marked_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == MARKER)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| row.iter().collect::<String>())
    }
}

impl fmt::Display for TopDownMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
