//! Integration tests for the public conversion API

use coordkit::{
    convert, convert_with_options, geodetic_to_projected, projected_to_geodetic, ConversionError,
    ConversionOptions, CoordKit, FormatTag, GeodeticPosition, GridSystem, HistoryStore, JsonLinesHistory,
    MemoryHistory,
};
use tempfile::tempdir;

#[test]
fn test_every_format_pair_from_a_peninsular_point() {
    // Kuala Lumpur lies inside the Kertau and MRSO domains and in UTM zone 47
    let source = "3.1, 101.7";
    let reachable = [
        FormatTag::DD,
        FormatTag::DM,
        FormatTag::DMS,
        FormatTag::UTM,
        FormatTag::MGRS,
        FormatTag::MrsoGdm2000,
        FormatTag::RsoKertau,
    ];

    for from in reachable {
        let text = convert(source, FormatTag::DD, from).unwrap();
        for to in reachable {
            let output = convert(&text, from, to)
                .unwrap_or_else(|e| panic!("{} -> {} on '{}': {}", from, to, text, e));
            assert!(!output.is_empty());
        }
    }
}

#[test]
fn test_grid_chain_returns_to_start() {
    let mrso = convert("3.1, 101.7", FormatTag::DD, FormatTag::MrsoGdm2000).unwrap();
    let kertau = convert(&mrso, FormatTag::MrsoGdm2000, FormatTag::RsoKertau).unwrap();
    let utm = convert(&kertau, FormatTag::RsoKertau, FormatTag::UTM).unwrap();
    let back = convert(&utm, FormatTag::UTM, FormatTag::DD).unwrap();

    let parts: Vec<f64> = back.split(", ").map(|p| p.parse().unwrap()).collect();
    assert!((parts[0] - 3.1).abs() < 5e-5, "{}", back);
    assert!((parts[1] - 101.7).abs() < 5e-5, "{}", back);
}

#[test]
fn test_public_projection_functions() {
    let position = GeodeticPosition::new(50.833333, 4.333333).unwrap();
    let utm = geodetic_to_projected(&position, GridSystem::Utm).unwrap();
    assert_eq!(utm.zone_number(), 31);
    assert!((utm.easting() - 593892.52).abs() < 0.05);
    assert!((utm.northing() - 5632138.24).abs() < 0.05);

    let back = projected_to_geodetic(&utm).unwrap();
    assert!((back.latitude() - 50.833333).abs() < 1e-8);
    assert!((back.longitude() - 4.333333).abs() < 1e-8);
}

#[test]
fn test_mgrs_precision_option() {
    let options = ConversionOptions { mgrs_precision: 1 };
    let output = convert_with_options("50.833333, 4.333333", FormatTag::DD, FormatTag::MGRS, &options).unwrap();
    assert_eq!(output, "31U ES 93");
}

#[test]
fn test_coordkit_records_successful_conversions() {
    let mut kit = CoordKit::new(Box::new(MemoryHistory::new()));

    assert_eq!(kit.convert("45.5", FormatTag::DD, FormatTag::DM).unwrap(), "45° 30.000'");
    assert!(kit.convert("garbage", FormatTag::DD, FormatTag::DM).is_err());
    kit.convert("3.1, 101.7", FormatTag::DD, FormatTag::RsoKertau).unwrap();

    let history = kit.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].conversion_type, "DD to RSO_KERTAU");
    assert_eq!(history[0].output, "47N 411552 343048");
    assert_eq!(history[1].conversion_type, "DD to DM");

    kit.clear_history().unwrap();
    assert!(kit.history().unwrap().is_empty());
}

#[test]
fn test_coordkit_history_file_survives_restarts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.jsonl");

    {
        let mut kit = CoordKit::new(Box::new(JsonLinesHistory::new(&path)));
        kit.convert("5.98, 116.07", FormatTag::DD, FormatTag::BrsoGdm2000).unwrap();
    }

    let store = JsonLinesHistory::new(&path);
    let records = store.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input, "5.98, 116.07");
    assert_eq!(records[0].output, "50N 708310 662281");
    assert_eq!(records[0].conversion_type, "DD to BRSO_GDM2000");
}

#[test]
fn test_errors_are_typed() {
    assert!(matches!(
        convert("31N 448251", FormatTag::UTM, FormatTag::DD),
        Err(ConversionError::FormatError { format: FormatTag::UTM, .. })
    ));
    assert!(matches!(
        convert("48.8566, 2.3522", FormatTag::DD, FormatTag::RsoKertau),
        Err(ConversionError::DomainError(_))
    ));
    assert!(matches!(
        convert("48.8566", FormatTag::DD, FormatTag::UTM),
        Err(ConversionError::UnsupportedConversion { .. })
    ));
}
