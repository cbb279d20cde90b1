use crate::tests::test_utils::*;
use crate::validation::{validate_metadata, validate_royalty};
use crate::*;

// --- Metadata Validation ---

#[test]
fn test_valid_metadata_passes() {
    assert!(validate_metadata(&default_metadata()).is_ok());
}

#[test]
fn test_empty_fields_rejected() {
    for field in ["title", "media", "reference"] {
        let mut metadata = default_metadata();
        match field {
            "title" => metadata.title = String::new(),
            "media" => metadata.media = String::new(),
            _ => metadata.reference = String::new(),
        }
        let err = validate_metadata(&metadata).unwrap_err();
        assert!(
            matches!(err, PlatformError::InvalidInput(_)),
            "empty {} should be rejected",
            field
        );
    }
}

#[test]
fn test_oversized_title_rejected() {
    let mut metadata = default_metadata();
    metadata.title = "x".repeat(MAX_TITLE_LEN + 1);
    assert!(validate_metadata(&metadata).is_err());
}

#[test]
fn test_oversized_media_rejected() {
    let mut metadata = default_metadata();
    metadata.media = format!("ipfs://{}", "c".repeat(MAX_URI_LEN));
    assert!(validate_metadata(&metadata).is_err());
}

#[test]
fn test_oversized_extra_rejected() {
    let mut metadata = default_metadata();
    metadata.extra = Some("e".repeat(MAX_METADATA_LEN));
    assert!(validate_metadata(&metadata).is_err());
}

// --- Royalty Validation ---

#[test]
fn test_zero_royalty_bps_rejected() {
    let royalty = RoyaltyArgs {
        recipient: artist(),
        bps: 0,
    };
    assert!(validate_royalty(&royalty, 500).is_err());
}

#[test]
fn test_royalty_boundary() {
    let at_limit = RoyaltyArgs {
        recipient: artist(),
        bps: BASIS_POINTS - 500,
    };
    assert!(validate_royalty(&at_limit, 500).is_ok());

    let over_limit = RoyaltyArgs {
        recipient: artist(),
        bps: BASIS_POINTS - 499,
    };
    assert!(matches!(
        validate_royalty(&over_limit, 500).unwrap_err(),
        PlatformError::InvalidInput(_)
    ));
}

#[test]
fn test_royalty_with_zero_platform_fee() {
    let full = RoyaltyArgs {
        recipient: artist(),
        bps: BASIS_POINTS,
    };
    assert!(validate_royalty(&full, 0).is_ok());
}
