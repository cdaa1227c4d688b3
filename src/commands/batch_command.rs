//! Batch conversion command
//!
//! Converts every non-empty line of a file. A failing line does not stop the
//! run; it is written as `ERROR: <message>` in place of its result, and a
//! blank line is echoed as a blank line, so output line N answers input line N.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::{coordkit_for, format_arg, history_arg, options_arg};
use crate::converter::{ConversionError, ConversionOptions, ConversionResult};
use crate::coordinate::FormatTag;
use crate::utils::progress::ProgressTracker;

/// Outcome counts of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Command for converting a file of coordinates
pub struct BatchCommand {
    /// File with one coordinate per line
    input_file: PathBuf,
    /// Destination file; stdout when absent
    output_file: Option<PathBuf>,
    from: FormatTag,
    to: FormatTag,
    options: ConversionOptions,
    history: Option<PathBuf>,
}

impl BatchCommand {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches) -> ConversionResult<Self> {
        let input_file = args.get_one::<String>("batch")
            .map(PathBuf::from)
            .ok_or_else(|| ConversionError::GenericError("Missing batch input file".to_string()))?;

        Ok(BatchCommand {
            input_file,
            output_file: args.get_one::<String>("output").map(PathBuf::from),
            from: format_arg(args, "from")?,
            to: format_arg(args, "to")?,
            options: options_arg(args)?,
            history: history_arg(args),
        })
    }

    /// Convert every line of `content` into `out`, one output line per input line
    pub fn convert_lines<W: Write>(
        &self,
        content: &str,
        out: &mut W,
        progress: &ProgressTracker,
    ) -> ConversionResult<BatchSummary> {
        let mut kit = coordkit_for(self.history.as_ref(), self.options);
        let mut summary = BatchSummary::default();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                writeln!(out)?;
                continue;
            }

            match kit.convert(line, self.from, self.to) {
                Ok(output) => {
                    writeln!(out, "{}", output)?;
                    summary.converted += 1;
                },
                Err(ConversionError::IoError(e)) => return Err(ConversionError::IoError(e)),
                Err(e) => {
                    warn!("Line {}: {}", number + 1, e);
                    writeln!(out, "ERROR: {}", e)?;
                    summary.failed += 1;
                },
            }
            progress.increment(1);
        }

        out.flush()?;
        Ok(summary)
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> ConversionResult<()> {
        info!("Batch converting {} from {} to {}", self.input_file.display(), self.from, self.to);
        let content = fs::read_to_string(&self.input_file)?;
        let total = content.lines().filter(|line| !line.trim().is_empty()).count() as u64;

        let summary = match &self.output_file {
            Some(path) => {
                let progress = ProgressTracker::new(total, "Converting coordinates");
                let mut writer = BufWriter::new(File::create(path)?);
                let summary = self.convert_lines(&content, &mut writer, &progress)?;
                progress.finish();
                summary
            },
            None => {
                // Results go to stdout, so keep the terminal free of the bar
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                self.convert_lines(&content, &mut writer, &ProgressTracker::hidden())?
            },
        };

        info!("Batch finished: {} converted, {} failed", summary.converted, summary.failed);
        if summary.failed > 0 {
            warn!("{} of {} lines could not be converted", summary.failed, total);
        }
        Ok(())
    }
}
