//! Tests for the conversion façade and the layers beneath it

mod convert_tests;
mod history_tests;
mod round_trip_tests;
