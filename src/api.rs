use log::{info, warn};

use crate::converter::{
    convert_with_options, describe_conversion, ConversionOptions, ConversionRecord, ConversionResult,
    HistoryStore,
};
use crate::coordinate::FormatTag;

/// Main interface to the CoordKit library
///
/// Wraps the pure conversion functions and records every successful
/// conversion in a history store.
pub struct CoordKit {
    history: Box<dyn HistoryStore>,
    options: ConversionOptions,
}

impl CoordKit {
    /// Create a new CoordKit instance with default options
    ///
    /// # Arguments
    /// * `history` - Store receiving one record per successful conversion
    pub fn new(history: Box<dyn HistoryStore>) -> Self {
        Self::with_options(history, ConversionOptions::default())
    }

    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `history` - Store receiving one record per successful conversion
    /// * `options` - Rendering options applied to every conversion
    pub fn with_options(history: Box<dyn HistoryStore>, options: ConversionOptions) -> Self {
        CoordKit { history, options }
    }

    /// Convert coordinate text and record the result
    ///
    /// Failed conversions are not recorded. A conversion that succeeds but
    /// cannot be recorded is reported as the storage error.
    ///
    /// # Arguments
    /// * `input` - Coordinate text in the grammar of `from`
    /// * `from` - Format of the input
    /// * `to` - Format of the output
    ///
    /// # Returns
    /// The converted text or an error
    pub fn convert(&mut self, input: &str, from: FormatTag, to: FormatTag) -> ConversionResult<String> {
        let output = match convert_with_options(input, from, to, &self.options) {
            Ok(output) => output,
            Err(e) => {
                warn!("Conversion of '{}' from {} to {} failed: {}", input, from, to, e);
                return Err(e);
            },
        };

        self.history.append(describe_conversion(input, &output, from, to))?;
        info!("{} to {}: '{}' -> '{}'", from, to, input, output);
        Ok(output)
    }

    /// Recorded conversions, newest first
    pub fn history(&self) -> ConversionResult<Vec<ConversionRecord>> {
        self.history.records()
    }

    /// Remove all recorded conversions
    pub fn clear_history(&mut self) -> ConversionResult<()> {
        info!("Clearing conversion history");
        self.history.clear()
    }
}
