//! Round trips through formats and projections

use crate::converter::convert;
use crate::coordinate::{FormatTag, GeodeticPosition, GridSystem};
use crate::parser::angle::parse_angle;
use crate::projection::{geodetic_to_projected, projected_to_geodetic};

const ANGLES: [f64; 8] = [0.25, 1.0, 12.345678, 45.508333, 59.999, 89.99, 120.5, 179.75];

#[test]
fn test_angle_format_round_trips() {
    for value in ANGLES {
        for format in [FormatTag::DM, FormatTag::DMS] {
            let rendered = convert(&format!("{:.6}", value), FormatTag::DD, format).unwrap();
            let back = parse_angle(&rendered, format).unwrap();
            // DM keeps 0.001' and DMS 0.01"
            assert!((back - value).abs() < 2e-5, "{} via {} gave {}", value, format, rendered);
        }
    }
}

#[test]
fn test_negation_only_flips_the_sign() {
    for value in ANGLES {
        for format in [FormatTag::DD, FormatTag::DM, FormatTag::DMS] {
            let positive = convert(&format!("{:.6}", value), FormatTag::DD, format).unwrap();
            let negative = convert(&format!("-{:.6}", value), FormatTag::DD, format).unwrap();
            assert_eq!(negative, format!("-{}", positive));
        }
    }
}

#[test]
fn test_projection_round_trips() {
    let cases = [
        (GridSystem::Utm, 50.833333, 4.333333),
        (GridSystem::Utm, -33.8688, 151.2093),
        (GridSystem::Utm, 0.0, -78.5),
        (GridSystem::RsoKertau, 3.1, 101.7),
        (GridSystem::MrsoGdm2000, 5.4, 100.3),
        (GridSystem::BrsoGdm2000, 5.98, 116.07),
        (GridSystem::RsoTimbalaiSabah, 5.387254, 115.805505),
        (GridSystem::RsoTimbalaiSarawak, 1.55, 110.35),
    ];

    for (system, lat, lon) in cases {
        let position = GeodeticPosition::new(lat, lon).unwrap();
        let projected = geodetic_to_projected(&position, system).unwrap();
        let back = projected_to_geodetic(&projected).unwrap();
        assert!((back.latitude() - lat).abs() < 1e-7, "{} lat {} vs {}", system, back.latitude(), lat);
        assert!((back.longitude() - lon).abs() < 1e-7, "{} lon {} vs {}", system, back.longitude(), lon);
    }
}

#[test]
fn test_rendered_grid_round_trip_stays_within_a_metre() {
    for (format, input) in [
        (FormatTag::UTM, "-33.8688, 151.2093"),
        (FormatTag::MrsoGdm2000, "3.1, 101.7"),
        (FormatTag::RsoTimbalaiSabah, "5.387254, 115.805505"),
    ] {
        let grid = convert(input, FormatTag::DD, format).unwrap();
        let back = convert(&grid, format, FormatTag::DD).unwrap();
        let expected: Vec<f64> = input.split(',').map(|p| p.trim().parse().unwrap()).collect();
        let actual: Vec<f64> = back.split(',').map(|p| p.trim().parse().unwrap()).collect();
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{} via {} came back as {}", input, format, back);
        }
    }
}
