//! Format tags selecting a textual coordinate grammar

use std::fmt;

use super::crs::GridSystem;

/// Whether a notation carries angles or grid distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateFamily {
    Geodetic,
    Projected,
}

/// Closed set of coordinate notations the converter reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// Decimal degrees
    DD,
    /// Degrees and decimal minutes
    DM,
    /// Degrees, minutes and decimal seconds
    DMS,
    UTM,
    MGRS,
    MrsoGdm2000,
    BrsoGdm2000,
    RsoKertau,
    RsoTimbalaiSabah,
    RsoTimbalaiSarawak,
}

impl FormatTag {
    /// Every format tag in declaration order
    pub const ALL: [FormatTag; 10] = [
        FormatTag::DD,
        FormatTag::DM,
        FormatTag::DMS,
        FormatTag::UTM,
        FormatTag::MGRS,
        FormatTag::MrsoGdm2000,
        FormatTag::BrsoGdm2000,
        FormatTag::RsoKertau,
        FormatTag::RsoTimbalaiSabah,
        FormatTag::RsoTimbalaiSarawak,
    ];

    /// Canonical upper-case name, also used in history records
    pub fn name(&self) -> &'static str {
        match self {
            FormatTag::DD => "DD",
            FormatTag::DM => "DM",
            FormatTag::DMS => "DMS",
            FormatTag::UTM => "UTM",
            FormatTag::MGRS => "MGRS",
            FormatTag::MrsoGdm2000 => "MRSO_GDM2000",
            FormatTag::BrsoGdm2000 => "BRSO_GDM2000",
            FormatTag::RsoKertau => "RSO_KERTAU",
            FormatTag::RsoTimbalaiSabah => "RSO_TIMBALAI_SABAH",
            FormatTag::RsoTimbalaiSarawak => "RSO_TIMBALAI_SARAWAK",
        }
    }

    /// Look up a tag by name, ignoring case and treating `-` like `_`
    pub fn from_name(name: &str) -> Option<FormatTag> {
        let normalized = name.trim().to_uppercase().replace('-', "_");
        Self::ALL.iter().copied().find(|tag| tag.name() == normalized)
    }

    pub fn family(&self) -> CoordinateFamily {
        match self {
            FormatTag::DD | FormatTag::DM | FormatTag::DMS => CoordinateFamily::Geodetic,
            _ => CoordinateFamily::Projected,
        }
    }

    /// Whether the tag is a geographic (latitude/longitude) notation
    pub fn is_geodetic(&self) -> bool {
        self.family() == CoordinateFamily::Geodetic
    }

    /// Grid system governing a projected tag; `None` for geodetic notations.
    /// MGRS is layered on UTM.
    pub fn grid_system(&self) -> Option<GridSystem> {
        match self {
            FormatTag::DD | FormatTag::DM | FormatTag::DMS => None,
            FormatTag::UTM | FormatTag::MGRS => Some(GridSystem::Utm),
            FormatTag::MrsoGdm2000 => Some(GridSystem::MrsoGdm2000),
            FormatTag::BrsoGdm2000 => Some(GridSystem::BrsoGdm2000),
            FormatTag::RsoKertau => Some(GridSystem::RsoKertau),
            FormatTag::RsoTimbalaiSabah => Some(GridSystem::RsoTimbalaiSabah),
            FormatTag::RsoTimbalaiSarawak => Some(GridSystem::RsoTimbalaiSarawak),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_accepts_cli_spellings() {
        assert_eq!(FormatTag::from_name("rso-kertau"), Some(FormatTag::RsoKertau));
        assert_eq!(FormatTag::from_name(" mgrs "), Some(FormatTag::MGRS));
        assert_eq!(FormatTag::from_name("BRSO_GDM2000"), Some(FormatTag::BrsoGdm2000));
        assert_eq!(FormatTag::from_name("lambert"), None);
    }

    #[test]
    fn test_families() {
        assert_eq!(FormatTag::DMS.family(), CoordinateFamily::Geodetic);
        assert_eq!(FormatTag::MGRS.family(), CoordinateFamily::Projected);
        assert!(FormatTag::ALL.iter().all(|tag| tag.is_geodetic() == tag.grid_system().is_none()));
    }

    #[test]
    fn test_names_round_trip() {
        for tag in FormatTag::ALL {
            assert_eq!(FormatTag::from_name(tag.name()), Some(tag));
        }
    }
}
