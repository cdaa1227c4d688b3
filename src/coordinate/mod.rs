//! Coordinate value types
//!
//! This module provides the immutable values that flow between parsers,
//! projection math and formatters, plus the closed set of format tags and
//! grid systems that select between them.

mod crs;
mod format_tag;
mod mgrs;
mod position;
mod projected;

// Re-export key types
pub use self::crs::GridSystem;
pub use self::format_tag::{CoordinateFamily, FormatTag};
pub use self::mgrs::MgrsCoordinate;
pub use self::position::GeodeticPosition;
pub use self::projected::{Hemisphere, ProjectedCoordinate};
