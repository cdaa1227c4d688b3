pub mod coordinate;
pub mod projection;
pub mod parser;
pub mod formatter;
pub mod converter;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use converter::{
    convert, convert_with_options, describe_conversion, ConversionError, ConversionOptions, ConversionRecord,
    ConversionResult, HistoryStore, JsonLinesHistory, MemoryHistory,
};
pub use coordinate::{FormatTag, GeodeticPosition, GridSystem, Hemisphere, MgrsCoordinate, ProjectedCoordinate};
pub use projection::{geodetic_to_projected, projected_to_geodetic, utm_zone_number};
