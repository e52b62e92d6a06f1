//! Fixed-size character grid with 1-based addressing

use super::shapes::{Coord, Rect, Shape};
use crate::errors::{DrawError, Result};

/// Value of every cell on a fresh canvas
pub const DEFAULT_CELL: char = ' ';

/// Character grid
///
/// Size never changes after creation; a new `C` command builds a new canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Coord,
    /// Cell data (row-major, row 1 first)
    cells: Vec<char>,
}

impl Canvas {
    /// Create a blank canvas, `size.x` wide and `size.y` high
    pub fn new(size: Coord) -> Result<Self> {
        if size.x == 0 || size.y == 0 {
            return Err(DrawError::InvalidCanvasSize {
                width: size.x,
                height: size.y,
            });
        }
        let too_large = || DrawError::CanvasTooLarge {
            width: size.x,
            height: size.y,
        };
        let len = (size.x as usize)
            .checked_mul(size.y as usize)
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, DEFAULT_CELL);
        Ok(Self { size, cells })
    }

    /// Area covered by the grid
    pub fn area(&self) -> Rect {
        Rect::new(Coord::new(1, 1), self.size)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.area().contains(coord)
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| {
            (coord.y - 1) as usize * self.size.x as usize + (coord.x - 1) as usize
        })
    }

    /// Get cell at coordinates
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at coordinates
    ///
    /// Commands validate coordinates before drawing, so a write outside the
    /// grid is a bug; release builds ignore it.
    #[inline]
    pub fn set(&mut self, coord: Coord, value: char) {
        debug_assert!(self.contains(coord), "write outside canvas at {coord}");
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = value;
        }
    }

    /// Check that a shape fits, then draw it
    ///
    /// Nothing is written when the shape reaches outside the grid.
    pub fn draw<S: Shape>(&mut self, shape: &S) -> Result<usize> {
        let bounds = shape.bounds();
        for corner in [bounds.min(), bounds.max()] {
            if !self.contains(corner) {
                return Err(DrawError::OutOfBounds {
                    coord: corner,
                    size: self.size,
                });
            }
        }
        Ok(shape.rasterize(self))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size.x as usize)
    }

    /// Raw cell data
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}
