//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod batch_command;
pub mod convert_command;
pub mod history_command;

pub use command_traits::{Command, CommandFactory};
pub use batch_command::BatchCommand;
pub use convert_command::ConvertCommand;
pub use history_command::HistoryCommand;

use std::path::PathBuf;

use clap::ArgMatches;

use crate::api::CoordKit;
use crate::converter::{ConversionError, ConversionOptions, ConversionResult, HistoryStore, JsonLinesHistory, MemoryHistory};
use crate::coordinate::FormatTag;

/// Factory for creating command instances based on CLI arguments
///
/// History flags win over `--batch`; anything else is a single conversion.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ConversionResult<Box<dyn Command>> {
        if args.get_flag("show-history") || args.get_flag("clear-history") {
            Ok(Box::new(HistoryCommand::new(args)?))
        } else if args.get_one::<String>("batch").is_some() {
            Ok(Box::new(BatchCommand::new(args)?))
        } else {
            Ok(Box::new(ConvertCommand::new(args)?))
        }
    }
}

/// Read a required format tag argument such as `--from`
pub(crate) fn format_arg(args: &ArgMatches, name: &str) -> ConversionResult<FormatTag> {
    let value = args.get_one::<String>(name)
        .ok_or_else(|| ConversionError::GenericError(format!("Missing --{} format", name)))?;

    FormatTag::from_name(value).ok_or_else(|| {
        let known: Vec<&str> = FormatTag::ALL.iter().map(|tag| tag.name()).collect();
        ConversionError::GenericError(format!("Unknown format '{}'; expected one of {}", value, known.join(", ")))
    })
}

/// Conversion options from `--precision`
pub(crate) fn options_arg(args: &ArgMatches) -> ConversionResult<ConversionOptions> {
    let mut options = ConversionOptions::default();
    if let Some(precision) = args.get_one::<String>("precision") {
        options.mgrs_precision = precision.parse::<u8>()
            .ok()
            .filter(|p| (1..=5).contains(p))
            .ok_or_else(|| ConversionError::GenericError(format!("Invalid MGRS precision: {} (expected 1..5)", precision)))?;
    }
    Ok(options)
}

/// History file from `--history`, if any
pub(crate) fn history_arg(args: &ArgMatches) -> Option<PathBuf> {
    args.get_one::<String>("history").map(PathBuf::from)
}

/// Build a converter recording into the history file, or into memory when none is set
pub(crate) fn coordkit_for(history: Option<&PathBuf>, options: ConversionOptions) -> CoordKit {
    let store: Box<dyn HistoryStore> = match history {
        Some(path) => Box::new(JsonLinesHistory::new(path)),
        None => Box::new(MemoryHistory::new()),
    };
    CoordKit::with_options(store, options)
}
