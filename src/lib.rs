//! # ASCII Draw
//!
//! A line-oriented ASCII drawing tool. Commands create a canvas, draw
//! horizontal/vertical lines and rectangle outlines, and bucket-fill regions.
//! The canvas is rendered as bordered text after every command.
//!
//! ```
//! use ascii_draw::CommandProcessor;
//!
//! let mut processor = CommandProcessor::new();
//! processor.process("C 3 2")?;
//! let canvas = processor.process("L 1 1 1 2")?;
//! assert_eq!(canvas.to_string(), "-----\n|x  |\n|x  |\n-----\n");
//! # Ok::<(), ascii_draw::DrawError>(())
//! ```

pub mod canvas;
pub mod command;
pub mod config;
pub mod errors;
pub mod processor;
pub mod session;

pub use canvas::{render, Canvas, Coord};
pub use command::Command;
pub use config::{load_config, DrawConfig, ErrorPolicy};
pub use errors::{DrawError, ErrorKind, Result};
pub use processor::CommandProcessor;
pub use session::{Session, SessionSummary};
