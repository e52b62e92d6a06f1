//! # Canvas - character grid and the shapes drawn on it
//!
//! Everything is addressed with 1-based [`Coord`]s.
//!
//! ```text
//!     Command ──▶ Shape (Line / Rect / BucketFill)
//!                   │  bounds() checked against the grid
//!                   ▼
//!                Canvas (width x height chars)
//!                   │
//!                   ▼
//!     -----
//!     |x  |   render(): bordered text
//!     |x  |
//!     -----
//! ```

mod canvas;
mod fill;
mod render;
mod shapes;

pub use canvas::{Canvas, DEFAULT_CELL};
pub use fill::BucketFill;
pub use render::render;
pub use shapes::{Coord, Line, Rect, Shape, LINE_CHAR};
