//! Single conversion command
//!
//! Converts the positional input from `--from` to `--to` and prints the
//! result on stdout.

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{coordkit_for, format_arg, history_arg, options_arg};
use crate::converter::{ConversionError, ConversionOptions, ConversionResult};
use crate::coordinate::FormatTag;

/// Command for converting one coordinate
pub struct ConvertCommand {
    /// Coordinate text
    input: String,
    from: FormatTag,
    to: FormatTag,
    options: ConversionOptions,
    /// History file receiving the record, if any
    history: Option<PathBuf>,
}

impl ConvertCommand {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches) -> ConversionResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| ConversionError::GenericError("Missing coordinate input".to_string()))?
            .clone();

        Ok(ConvertCommand {
            input,
            from: format_arg(args, "from")?,
            to: format_arg(args, "to")?,
            options: options_arg(args)?,
            history: history_arg(args),
        })
    }

    /// Run the conversion and return the rendered text
    pub fn run(&self) -> ConversionResult<String> {
        let mut kit = coordkit_for(self.history.as_ref(), self.options);
        kit.convert(&self.input, self.from, self.to)
    }
}

impl Command for ConvertCommand {
    fn execute(&self) -> ConversionResult<()> {
        info!("Converting '{}' from {} to {}", self.input, self.from, self.to);
        let output = self.run()?;
        println!("{}", output);
        Ok(())
    }
}
