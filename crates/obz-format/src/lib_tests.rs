#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn LogLevel___ordering___trace_lowest_off_highest() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case(0, LogLevel::Trace)]
#[test_case(2, LogLevel::Info)]
#[test_case(4, LogLevel::Error)]
#[test_case(200, LogLevel::Off)]
fn LogLevel___from_u8___maps_value(value: u8, expected: LogLevel) {
    assert_eq!(LogLevel::from_u8(value), expected);
}

#[test_case("trace", Some(LogLevel::Trace))]
#[test_case(" Debug ", Some(LogLevel::Debug))]
#[test_case("warning", Some(LogLevel::Warn))]
#[test_case("none", Some(LogLevel::Off))]
#[test_case("verbose", None)]
fn LogLevel___parse___accepts_names(name: &str, expected: Option<LogLevel>) {
    assert_eq!(LogLevel::parse(name), expected);
}

#[test]
fn LogLevel___from_str___unknown_is_config_error() {
    let result: ObzResult<LogLevel> = "shouty".parse();

    assert!(matches!(result, Err(ObzError::Config(_))));
}

#[test]
fn LogLevel___display___uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
}
