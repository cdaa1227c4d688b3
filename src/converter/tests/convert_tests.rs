//! Concrete conversion scenarios

use crate::converter::{convert, convert_with_options, ConversionOptions};
use crate::coordinate::FormatTag;

fn check(input: &str, from: FormatTag, to: FormatTag, expected: &str) {
    let result = convert(input, from, to)
        .unwrap_or_else(|e| panic!("{} -> {} failed for '{}': {}", from, to, input, e));
    assert_eq!(result, expected, "{} -> {} for '{}'", from, to, input);
}

#[test]
fn test_basic_angle_conversions() {
    check("45.5000", FormatTag::DD, FormatTag::DM, "45° 30.000'");
    check("45° 30.500'", FormatTag::DM, FormatTag::DMS, "45° 30' 30.00\"");
    check("45° 30' 30\"", FormatTag::DMS, FormatTag::DD, "45.508333");
}

#[test]
fn test_negative_angle_conversions() {
    check("-45.5000", FormatTag::DD, FormatTag::DM, "-45° 30.000'");
    check("-45° 30.500'", FormatTag::DM, FormatTag::DMS, "-45° 30' 30.00\"");
    check("-45° 30' 30\"", FormatTag::DMS, FormatTag::DD, "-45.508333");
}

#[test]
fn test_boundary_values() {
    check("0.0", FormatTag::DD, FormatTag::DM, "0° 0.000'");
    check("90.0", FormatTag::DD, FormatTag::DM, "90° 0.000'");
    check("-90.0", FormatTag::DD, FormatTag::DM, "-90° 0.000'");
}

#[test]
fn test_edge_cases() {
    check("45° 59.999'", FormatTag::DM, FormatTag::DMS, "45° 59' 59.94\"");
    check("45° 59' 59.99\"", FormatTag::DMS, FormatTag::DD, "45.999997");
    // Rounding carries into the degree field
    check("45.999999", FormatTag::DD, FormatTag::DM, "46° 0.000'");
}

#[test]
fn test_sign_only_on_degree_field() {
    check("-0.5", FormatTag::DD, FormatTag::DMS, "-0° 30' 0.00\"");
    check("-0.5", FormatTag::DD, FormatTag::DM, "-0° 30.000'");
    check("-0° 30'", FormatTag::DM, FormatTag::DD, "-0.500000");
}

#[test]
fn test_coordinate_pairs() {
    check("45.5, -73.25", FormatTag::DD, FormatTag::DM, "45° 30.000', -73° 15.000'");
    check("45° 30', -73° 15'", FormatTag::DM, FormatTag::DD, "45.500000, -73.250000");
    // Pair longitudes wrap into [-180, 180]
    check("10, 200", FormatTag::DD, FormatTag::DM, "10° 0.000', -160° 0.000'");
    check("10, 190", FormatTag::DD, FormatTag::DD, "10, 190");
    check("10, 190", FormatTag::DD, FormatTag::DMS, "10° 0' 0.00\", -170° 0' 0.00\"");
}

#[test]
fn test_identity_is_not_parsed() {
    check("not a coordinate", FormatTag::DD, FormatTag::DD, "not a coordinate");
    check("31N 1 2", FormatTag::UTM, FormatTag::UTM, "31N 1 2");
}

#[test]
fn test_utm_conversions() {
    check("31N 448251 5632643", FormatTag::UTM, FormatTag::DD, "50.843175, 2.264986");
    check("50.833333, 4.333333", FormatTag::DD, FormatTag::UTM, "31N 593893 5632138");
    // Band letters are accepted in place of the hemisphere
    check("33U 294409 5814623", FormatTag::UTM, FormatTag::DM, "52° 26.584', 11° 58.496'");
    check("31U 448251 5632643", FormatTag::UTM, FormatTag::DD, "50.843175, 2.264986");
}

#[test]
fn test_mgrs_conversions() {
    check("50.833333, 4.333333", FormatTag::DD, FormatTag::MGRS, "31U ES 9389232138");
    check("31U ES 9389232138", FormatTag::MGRS, FormatTag::DD, "50.833331, 4.333326");
    check("31U ES 93892 32138", FormatTag::MGRS, FormatTag::DD, "50.833331, 4.333326");

    let options = ConversionOptions { mgrs_precision: 4 };
    let coarse = convert_with_options("31N 593893 5632138", FormatTag::UTM, FormatTag::MGRS, &options).unwrap();
    assert_eq!(coarse, "31U ES 93893213");
}

#[test]
fn test_regional_grid_conversions() {
    check("3.1, 101.7", FormatTag::DD, FormatTag::RsoKertau, "47N 411552 343048");
    check("3.1, 101.7", FormatTag::DD, FormatTag::MrsoGdm2000, "47N 411519 343074");
    check("5.98, 116.07", FormatTag::DD, FormatTag::BrsoGdm2000, "50N 708310 662281");
    check("50N 708310 662281", FormatTag::BrsoGdm2000, FormatTag::DD, "5.980001, 116.070001");
    check("5.387254, 115.805505", FormatTag::DD, FormatTag::RsoTimbalaiSabah, "50N 679246 596563");
    check("1.55, 110.35", FormatTag::DD, FormatTag::RsoTimbalaiSarawak, "49N 242597 562254");
}

#[test]
fn test_grid_to_grid_goes_through_geodetic() {
    check("47N 411552 343048", FormatTag::RsoKertau, FormatTag::MrsoGdm2000, "47N 411519 343074");
    check("47N 800117 343029", FormatTag::UTM, FormatTag::MrsoGdm2000, "47N 411519 343074");
}
