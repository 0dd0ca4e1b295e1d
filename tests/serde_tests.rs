#![cfg(feature = "serde")]

//! Integration tests for serde support on `UnsafeOptional`.

use rstest::rstest;
use tryopt::control::UnsafeOptional;

// =============================================================================
// JSON Round Trips
// =============================================================================

#[rstest]
#[case(UnsafeOptional::some(42))]
#[case(UnsafeOptional::none())]
fn test_unsafe_optional_json_roundtrip(#[case] optional: UnsafeOptional<i32>) {
    let json = serde_json::to_string(&optional).unwrap();
    let restored: UnsafeOptional<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(optional, restored);
}

#[rstest]
fn test_null_payload_survives_roundtrip() {
    let present_null: UnsafeOptional<Option<String>> = UnsafeOptional::some(None);

    let json = serde_json::to_string(&present_null).unwrap();
    let restored: UnsafeOptional<Option<String>> = serde_json::from_str(&json).unwrap();

    assert!(restored.is_some());
    assert_eq!(restored, present_null);
}

// =============================================================================
// Wire Format
// =============================================================================

#[rstest]
fn test_externally_tagged_representation() {
    assert_eq!(
        serde_json::to_string(&UnsafeOptional::some("x")).unwrap(),
        r#"{"Some":"x"}"#
    );
    assert_eq!(
        serde_json::to_string(&UnsafeOptional::<i32>::none()).unwrap(),
        r#""None""#
    );
}
