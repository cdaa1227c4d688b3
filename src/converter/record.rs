//! Conversion history records

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::coordinate::FormatTag;

/// One completed conversion, as handed to a history store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// `"<FROM> to <TO>"`, e.g. `"DD to UTM"`
    pub conversion_type: String,
    pub input: String,
    pub output: String,
    /// Wall-clock time of creation, milliseconds since the Unix epoch
    pub timestamp_millis: i64,
}

impl ConversionRecord {
    pub fn new(conversion_type: &str, input: &str, output: &str, timestamp_millis: i64) -> Self {
        ConversionRecord {
            conversion_type: conversion_type.to_string(),
            input: input.to_string(),
            output: output.to_string(),
            timestamp_millis,
        }
    }
}

/// Build the history record of a conversion, stamped with the current time
pub fn describe_conversion(input: &str, output: &str, from: FormatTag, to: FormatTag) -> ConversionRecord {
    ConversionRecord::new(
        &format!("{} to {}", from.name(), to.name()),
        input,
        output,
        Utc::now().timestamp_millis(),
    )
}
