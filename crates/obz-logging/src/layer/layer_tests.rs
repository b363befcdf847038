#![allow(non_snake_case)]

use super::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

fn leaked_tally() -> &'static EventTally {
    Box::leak(Box::new(EventTally::new()))
}

#[test]
fn TallyLayer___convert_level___maps_every_level() {
    assert_eq!(TallyLayer::convert_level(&Level::TRACE), LogLevel::Trace);
    assert_eq!(TallyLayer::convert_level(&Level::DEBUG), LogLevel::Debug);
    assert_eq!(TallyLayer::convert_level(&Level::INFO), LogLevel::Info);
    assert_eq!(TallyLayer::convert_level(&Level::WARN), LogLevel::Warn);
    assert_eq!(TallyLayer::convert_level(&Level::ERROR), LogLevel::Error);
}

#[test]
fn TallyLayer___counts_warnings_and_errors() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry().with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("loaded");
        tracing::warn!(board = "B", "board entry missing from archive, skipping");
        tracing::warn!("dangling link");
        tracing::error!("boom");
    });

    assert_eq!(tally.warnings(), 2);
    assert_eq!(tally.errors(), 1);
}

#[test]
fn TallyLayer___behind_level_filter___sees_only_enabled_events() {
    let tally = leaked_tally();
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::ERROR)
        .with(TallyLayer::with_tally(tally));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("filtered out");
        tracing::error!("kept");
    });

    assert_eq!(tally.warnings(), 0);
    assert_eq!(tally.errors(), 1);
}

#[test]
fn init_logging___second_call___is_rejected_and_reload_works() {
    let first = init_logging(LogLevel::Warn);
    let second = init_logging(LogLevel::Debug);

    assert!(first);
    assert!(!second);
    assert!(ReloadHandle::global().reload_level(LogLevel::Debug).is_ok());
}
