//! Projected grid system identifiers

use std::fmt;

/// Identifier for the supported projected grid systems
///
/// Each system selects one parameter set (ellipsoid, projection constants,
/// false origin) from the embedded grid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSystem {
    /// WGS 84 Universal Transverse Mercator, 60 zones of 6 degrees
    Utm,
    /// Kertau (RSO) / RSO Malaya (EPSG:3168)
    RsoKertau,
    /// Timbalai 1948 / RSO Borneo in metres (EPSG:29873)
    RsoTimbalaiSabah,
    /// Timbalai 1948 / RSO Borneo in British feet (EPSG:29872)
    RsoTimbalaiSarawak,
    /// GDM2000 / Peninsula RSO (EPSG:3375)
    MrsoGdm2000,
    /// GDM2000 / East Malaysia BRSO (EPSG:3376)
    BrsoGdm2000,
}

impl GridSystem {
    /// Every grid system, UTM first
    pub const ALL: [GridSystem; 6] = [
        GridSystem::Utm,
        GridSystem::RsoKertau,
        GridSystem::RsoTimbalaiSabah,
        GridSystem::RsoTimbalaiSarawak,
        GridSystem::MrsoGdm2000,
        GridSystem::BrsoGdm2000,
    ];

    /// Key of this system's table in the grid parameter file
    pub fn key(&self) -> &'static str {
        match self {
            GridSystem::Utm => "utm",
            GridSystem::RsoKertau => "rso_kertau",
            GridSystem::RsoTimbalaiSabah => "rso_timbalai_sabah",
            GridSystem::RsoTimbalaiSarawak => "rso_timbalai_sarawak",
            GridSystem::MrsoGdm2000 => "mrso_gdm2000",
            GridSystem::BrsoGdm2000 => "brso_gdm2000",
        }
    }

    /// Whether the system is split into longitude zones with a per-zone
    /// central meridian (only UTM; the RSO grids have a single fixed origin)
    pub fn is_zoned(&self) -> bool {
        matches!(self, GridSystem::Utm)
    }
}

impl fmt::Display for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
