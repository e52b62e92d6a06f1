//! Bucket fill (4-connected flood fill)

use super::canvas::Canvas;
use super::shapes::{Coord, Rect, Shape};

/// Flood fill starting at `seed`
///
/// Replaces the seed's character in every cell 4-connected to it through
/// cells holding that same character. Uses an explicit stack so region size
/// is not limited by the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketFill {
    pub seed: Coord,
    pub value: char,
}

impl BucketFill {
    pub fn new(seed: Coord, value: char) -> Self {
        Self { seed, value }
    }

    /// Run the fill, returning (cells filled, cells pushed on the work stack)
    fn flood(&self, canvas: &mut Canvas) -> (usize, usize) {
        let Some(old) = canvas.get(self.seed) else {
            return (0, 0);
        };
        if old == self.value {
            return (0, 0);
        }

        // Cells are filled as they are pushed so each enters the stack once
        canvas.set(self.seed, self.value);
        let mut filled = 1;
        let mut pushed = 1;
        let mut stack = vec![self.seed];
        while let Some(coord) = stack.pop() {
            for neighbor in coord.neighbors() {
                if canvas.get(neighbor) == Some(old) {
                    canvas.set(neighbor, self.value);
                    filled += 1;
                    pushed += 1;
                    stack.push(neighbor);
                }
            }
        }
        (filled, pushed)
    }
}

impl Shape for BucketFill {
    fn rasterize(&self, canvas: &mut Canvas) -> usize {
        self.flood(canvas).0
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.seed, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Line;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(Coord::new(w, h)).unwrap()
    }

    #[test]
    fn test_fill_blank_canvas() {
        let mut c = canvas(4, 3);
        let filled = c.draw(&BucketFill::new(Coord::new(2, 2), 'o')).unwrap();
        assert_eq!(filled, 12);
        assert!(c.cells().iter().all(|&v| v == 'o'));
    }

    #[test]
    fn test_fill_stops_at_boundary() {
        let mut c = canvas(5, 3);
        c.draw(&Line::new(Coord::new(3, 1), Coord::new(3, 3)).unwrap())
            .unwrap();
        let filled = c.draw(&BucketFill::new(Coord::new(1, 1), 'o')).unwrap();
        assert_eq!(filled, 6);
        assert_eq!(c.get(Coord::new(2, 3)), Some('o'));
        assert_eq!(c.get(Coord::new(3, 2)), Some('x'));
        assert_eq!(c.get(Coord::new(4, 2)), Some(' '));
    }

    #[test]
    fn test_fill_does_not_cross_diagonals() {
        let mut c = canvas(2, 2);
        c.set(Coord::new(2, 1), 'x');
        c.set(Coord::new(1, 2), 'x');
        let filled = c.draw(&BucketFill::new(Coord::new(1, 1), 'o')).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(c.get(Coord::new(2, 2)), Some(' '));
    }

    #[test]
    fn test_fill_same_value_is_noop() {
        let mut c = canvas(3, 3);
        let before = c.clone();
        let filled = c.draw(&BucketFill::new(Coord::new(2, 2), ' ')).unwrap();
        assert_eq!(filled, 0);
        assert_eq!(c, before);
    }

    #[test]
    fn test_fill_on_line_recolors_line() {
        let mut c = canvas(4, 2);
        c.draw(&Line::new(Coord::new(1, 1), Coord::new(4, 1)).unwrap())
            .unwrap();
        let filled = c.draw(&BucketFill::new(Coord::new(4, 1), '#')).unwrap();
        assert_eq!(filled, 4);
        assert_eq!(c.get(Coord::new(1, 2)), Some(' '));
    }

    #[test]
    fn test_fill_visits_each_cell_once() {
        let mut c = canvas(300, 300);
        c.draw(&Line::new(Coord::new(150, 1), Coord::new(150, 299)).unwrap())
            .unwrap();
        let (filled, pushed) = BucketFill::new(Coord::new(1, 1), 'o').flood(&mut c);
        assert_eq!(filled, 300 * 300 - 299);
        assert_eq!(pushed, filled);
    }

    #[test]
    fn test_fill_large_region_without_recursion() {
        let mut c = canvas(600, 600);
        let filled = c.draw(&BucketFill::new(Coord::new(300, 300), 'o')).unwrap();
        assert_eq!(filled, 360_000);
    }
}
