use std::io;
use thiserror::Error;

use crate::canvas::Coord;

/// Broad category of a [`DrawError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command line could not be understood
    Parse,
    /// The command needs state that does not exist yet (no canvas)
    Precondition,
    /// The command is well formed but describes impossible geometry
    InvalidGeometry,
    /// Reading commands or writing renders failed
    Io,
    /// The configuration could not be loaded
    Config,
}

/// Errors that can occur while drawing
#[derive(Error, Debug)]
pub enum DrawError {
    /// Input line that is not valid UTF-8
    #[error("Line is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::str::Utf8Error),

    /// Blank input line where a command was expected
    #[error("Empty command")]
    EmptyCommand,

    /// Command token is not one of C, L, R, B
    #[error("Unrecognized command: {0}")]
    UnknownCommand(String),

    /// Wrong number of arguments for a command
    #[error("Command {command} expects {expected} arguments, got {found}")]
    ArgumentCount {
        command: char,
        expected: usize,
        found: usize,
    },

    /// Argument that should be a non-negative integer
    #[error("Invalid integer argument: {0}")]
    InvalidInteger(String),

    /// Fill value that is not exactly one character
    #[error("Fill value must be a single character, got {0:?}")]
    InvalidFillChar(String),

    /// Drawing command issued before any canvas was created
    #[error("No canvas. Create one first with `C <width> <height>`")]
    NoCanvas,

    /// Line whose endpoints share neither x nor y
    #[error("Only horizontal and vertical lines are supported: {from} -> {to}")]
    DiagonalLine { from: Coord, to: Coord },

    /// Canvas with a zero dimension
    #[error("Canvas size must be positive, got {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    /// Canvas whose cells cannot be allocated
    #[error("Canvas {width}x{height} is too large")]
    CanvasTooLarge { width: u32, height: u32 },

    /// Coordinate outside the current canvas
    #[error("Coordinate {coord} is outside the {}x{} canvas", .size.x, .size.y)]
    OutOfBounds { coord: Coord, size: Coord },

    /// Command error tagged with its input line number
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<DrawError>,
    },

    /// Error related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error when loading or validating configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DrawError {
    /// Category of this error, looking through line tagging
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUtf8(_)
            | Self::EmptyCommand
            | Self::UnknownCommand(_)
            | Self::ArgumentCount { .. }
            | Self::InvalidInteger(_)
            | Self::InvalidFillChar(_) => ErrorKind::Parse,
            Self::NoCanvas => ErrorKind::Precondition,
            Self::DiagonalLine { .. }
            | Self::InvalidCanvasSize { .. }
            | Self::CanvasTooLarge { .. }
            | Self::OutOfBounds { .. } => ErrorKind::InvalidGeometry,
            Self::AtLine { source, .. } => source.kind(),
            Self::Io(_) => ErrorKind::Io,
            Self::Configuration(_) => ErrorKind::Config,
        }
    }

    /// Attach the 1-based input line number to this error
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Type alias for Result with `DrawError`
pub type Result<T> = std::result::Result<T, DrawError>;
