#![allow(non_snake_case)]

use super::*;

#[test]
fn ObzError___manifest_missing___names_manifest_file() {
    let err = ObzError::ManifestMissing;

    assert!(err.to_string().contains("manifest.json"));
}

#[test]
fn ObzError___root_missing___displays_path() {
    let err = ObzError::RootMissing("boards/root.obf".to_string());

    assert_eq!(
        err.to_string(),
        "root board not found in archive: boards/root.obf"
    );
}

#[test]
fn ObzError___board_invalid___displays_reason() {
    let err = ObzError::BoardInvalid("missing field `grid`".to_string());

    assert_eq!(err.to_string(), "invalid board: missing field `grid`");
}

#[test]
fn ObzError___from_io_error___converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");

    let err: ObzError = io_err.into();

    assert!(matches!(err, ObzError::Io(_)));
    assert!(err.to_string().contains("access denied"));
}

#[test]
fn ObzError___error_codes___are_unique() {
    let errors = [
        ObzError::Format("".into()),
        ObzError::NotFound("".into()),
        ObzError::ManifestMissing,
        ObzError::ManifestInvalid("".into()),
        ObzError::RootMissing("".into()),
        ObzError::BoardInvalid("".into()),
        ObzError::UnsupportedInput("".into()),
        ObzError::Io(std::io::Error::other("")),
        ObzError::Config("".into()),
    ];

    let codes: Vec<u32> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(
        codes.len(),
        unique.len(),
        "All error codes should be unique"
    );
}
