//! Bordered text output of a canvas
//!
//! ```text
//! -----
//! |x  |
//! |xoo|
//! -----
//! ```

use std::fmt;
use std::io;

use super::canvas::Canvas;

const HORIZONTAL_BORDER: char = '-';
const VERTICAL_BORDER: char = '|';

/// Write the canvas to `out`, framed by `-` and `|` borders
pub fn render<W: io::Write + ?Sized>(canvas: &Canvas, out: &mut W) -> io::Result<()> {
    write!(out, "{canvas}")
}

fn write_border(f: &mut fmt::Formatter<'_>, width: u32) -> fmt::Result {
    for _ in 0..width + 2 {
        write!(f, "{HORIZONTAL_BORDER}")?;
    }
    writeln!(f)
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_border(f, self.width())?;
        for row in self.rows() {
            write!(f, "{VERTICAL_BORDER}")?;
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f, "{VERTICAL_BORDER}")?;
        }
        write_border(f, self.width())
    }
}
