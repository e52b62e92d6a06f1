//! Geometric shapes for canvas drawing

use std::fmt;

use super::Canvas;
use crate::errors::{DrawError, Result};

/// Character used for lines and rectangle outlines
pub const LINE_CHAR: char = 'x';

/// 1-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Left, right, up and down neighbors that are representable.
    /// Neighbors may still fall outside a canvas; callers check that.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { x, y } = self;
        [
            x.checked_sub(1).map(|x| Coord::new(x, y)),
            x.checked_add(1).map(|x| Coord::new(x, y)),
            y.checked_sub(1).map(|y| Coord::new(x, y)),
            y.checked_add(1).map(|y| Coord::new(x, y)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Drawable primitive
pub trait Shape {
    /// Draw the shape onto the canvas, returning how many cells were written
    fn rasterize(&self, canvas: &mut Canvas) -> usize;

    /// Smallest rectangle that covers every cell the shape may touch
    fn bounds(&self) -> Rect;
}

/// Horizontal or vertical line segment, endpoints inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    start: Coord,
    end: Coord,
}

impl Line {
    /// Fails with [`DrawError::DiagonalLine`] unless the endpoints share x or y
    pub fn new(start: Coord, end: Coord) -> Result<Self> {
        if start.x != end.x && start.y != end.y {
            return Err(DrawError::DiagonalLine {
                from: start,
                to: end,
            });
        }
        Ok(Self { start, end })
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Every cell on the segment, from the lower to the higher coordinate
    pub fn points(&self) -> Box<dyn Iterator<Item = Coord>> {
        if self.is_vertical() {
            let x = self.start.x;
            let (low, high) = ordered(self.start.y, self.end.y);
            Box::new((low..=high).map(move |y| Coord::new(x, y)))
        } else {
            let y = self.start.y;
            let (low, high) = ordered(self.start.x, self.end.x);
            Box::new((low..=high).map(move |x| Coord::new(x, y)))
        }
    }
}

impl Shape for Line {
    fn rasterize(&self, canvas: &mut Canvas) -> usize {
        let mut written = 0;
        for point in self.points() {
            canvas.set(point, LINE_CHAR);
            written += 1;
        }
        written
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.start, self.end)
    }
}

/// Rectangle outline given by two opposite corners, in any order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub corner1: Coord,
    pub corner2: Coord,
}

impl Rect {
    #[inline]
    pub const fn new(corner1: Coord, corner2: Coord) -> Self {
        Self { corner1, corner2 }
    }

    /// Top-left corner
    pub fn min(&self) -> Coord {
        Coord::new(
            self.corner1.x.min(self.corner2.x),
            self.corner1.y.min(self.corner2.y),
        )
    }

    /// Bottom-right corner
    pub fn max(&self) -> Coord {
        Coord::new(
            self.corner1.x.max(self.corner2.x),
            self.corner1.y.max(self.corner2.y),
        )
    }

    pub fn contains(&self, p: Coord) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// The four outline edges, walking corner1 -> (x2, y1) -> corner2 -> (x1, y2) -> corner1
    pub fn edges(&self) -> [Line; 4] {
        let v1 = self.corner1;
        let v2 = self.corner2;
        let top_right = Coord::new(v2.x, v1.y);
        let bottom_left = Coord::new(v1.x, v2.y);
        // Each pair shares an axis by construction
        [
            Line { start: v1, end: top_right },
            Line { start: top_right, end: v2 },
            Line { start: v2, end: bottom_left },
            Line { start: bottom_left, end: v1 },
        ]
    }
}

impl Shape for Rect {
    fn rasterize(&self, canvas: &mut Canvas) -> usize {
        self.edges().iter().map(|edge| edge.rasterize(canvas)).sum()
    }

    fn bounds(&self) -> Rect {
        *self
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
