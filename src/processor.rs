//! Command processor: owns the current canvas and applies commands to it

use tracing::{debug, info};

use crate::canvas::{BucketFill, Canvas, Coord, Line, Rect};
use crate::command::Command;
use crate::errors::{DrawError, Result};

/// Applies drawing commands one line at a time
///
/// Holds no canvas until the first `C` command. Every command is fully
/// validated before the canvas is touched, so a failed command leaves the
/// previous drawing intact.
#[derive(Debug, Default)]
pub struct CommandProcessor {
    canvas: Option<Canvas>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current canvas, if one has been created
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Parse and apply one raw input line, returning the canvas afterwards
    pub fn process(&mut self, raw: &str) -> Result<&Canvas> {
        let command: Command = raw.parse()?;
        self.apply(command)
    }

    /// Apply an already parsed command
    pub fn apply(&mut self, command: Command) -> Result<&Canvas> {
        debug!(?command, "Applying command");
        match command {
            Command::CreateCanvas { width, height } => {
                let canvas = Canvas::new(Coord::new(width, height))?;
                info!(width, height, "Created canvas");
                Ok(self.canvas.insert(canvas))
            }
            Command::CreateLine { from, to } => {
                let canvas = self.canvas.as_mut().ok_or(DrawError::NoCanvas)?;
                let line = Line::new(from, to)?;
                let written = canvas.draw(&line)?;
                debug!(%from, %to, written, "Drew line");
                Ok(canvas)
            }
            Command::CreateRectangle { from, to } => {
                let canvas = self.canvas.as_mut().ok_or(DrawError::NoCanvas)?;
                let written = canvas.draw(&Rect::new(from, to))?;
                debug!(%from, %to, written, "Drew rectangle");
                Ok(canvas)
            }
            Command::BucketFill { at, fill } => {
                let canvas = self.canvas.as_mut().ok_or(DrawError::NoCanvas)?;
                let filled = canvas.draw(&BucketFill::new(at, fill))?;
                debug!(%at, %fill, filled, "Bucket fill");
                Ok(canvas)
            }
        }
    }
}
