//! Input loop: read command lines, apply them, write a render after each

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::canvas::render;
use crate::config::{DrawConfig, ErrorPolicy};
use crate::errors::{DrawError, Result};
use crate::processor::CommandProcessor;

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands applied and rendered
    pub processed: usize,
    /// Blank lines ignored
    pub skipped: usize,
    /// Commands that failed under the `skip` policy
    pub failed: usize,
}

/// One drawing session over an input source and an output sink
#[derive(Debug, Default)]
pub struct Session {
    config: DrawConfig,
    processor: CommandProcessor,
}

impl Session {
    pub fn new(config: DrawConfig) -> Self {
        Self {
            config,
            processor: CommandProcessor::new(),
        }
    }

    /// Run until end of input
    ///
    /// Under [`ErrorPolicy::Stop`] the first failing command ends the session
    /// with that error tagged with its line number.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            let line_no = idx + 1;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    let err = DrawError::InvalidUtf8(e.utf8_error());
                    reject(self.config.on_error, err, line_no, &mut summary)?;
                    continue;
                }
            };

            if self.config.skip_blank_lines && line.trim().is_empty() {
                debug!(line_no, "Skipping blank line");
                summary.skipped += 1;
                continue;
            }

            match self.processor.process(&line) {
                Ok(canvas) => {
                    render(canvas, &mut writer)?;
                    writer.flush()?;
                    summary.processed += 1;
                }
                Err(e) => reject(self.config.on_error, e, line_no, &mut summary)?,
            }
        }

        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "Session finished"
        );
        Ok(summary)
    }
}

/// Apply the error policy to a failed line
fn reject(
    policy: ErrorPolicy,
    err: DrawError,
    line_no: usize,
    summary: &mut SessionSummary,
) -> Result<()> {
    match policy {
        ErrorPolicy::Stop => Err(err.at_line(line_no)),
        ErrorPolicy::Skip => {
            warn!(line_no, "Skipping line: {}", err);
            summary.failed += 1;
            Ok(())
        }
    }
}
