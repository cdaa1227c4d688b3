//! History command
//!
//! Lists or clears the conversion history kept in the `--history` file.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::converter::{ConversionError, ConversionRecord, ConversionResult, HistoryStore, JsonLinesHistory};

/// Command for showing or clearing the conversion history
pub struct HistoryCommand {
    history_file: PathBuf,
    clear: bool,
}

impl HistoryCommand {
    /// Create a new history command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new HistoryCommand instance or an error
    pub fn new(args: &ArgMatches) -> ConversionResult<Self> {
        let history_file = args.get_one::<String>("history")
            .map(PathBuf::from)
            .ok_or_else(|| ConversionError::GenericError("--show-history and --clear-history need --history FILE".to_string()))?;

        Ok(HistoryCommand {
            history_file,
            clear: args.get_flag("clear-history"),
        })
    }
}

/// One history line: `<UTC time>  <type>  <input> -> <output>`
pub fn render_record(record: &ConversionRecord) -> String {
    let time = Utc.timestamp_millis_opt(record.timestamp_millis)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| record.timestamp_millis.to_string());

    format!("{}  {}  {} -> {}", time, record.conversion_type, record.input, record.output)
}

impl Command for HistoryCommand {
    fn execute(&self) -> ConversionResult<()> {
        let mut store = JsonLinesHistory::new(&self.history_file);

        if self.clear {
            store.clear()?;
            info!("Cleared history in {}", self.history_file.display());
            println!("History cleared");
            return Ok(());
        }

        let records = store.records()?;
        if records.is_empty() {
            println!("No conversions recorded");
        }
        for record in &records {
            println!("{}", render_record(record));
        }
        Ok(())
    }
}
