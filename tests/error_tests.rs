use zstring::{ZString, ZStringError};

#[test]
fn test_range_error_from_slice_request() {
    let mut s = ZString::from_slice(b"abc");

    assert_eq!(
        s.slice(2, 5).unwrap_err(),
        ZStringError::RangeOutOfBounds {
            start: 2,
            len: 5,
            length: 3
        }
    );
}

#[test]
fn test_range_error_from_substr_request() {
    let s = ZString::from_slice(b"abc");

    assert_eq!(
        s.substr(4, 1).unwrap_err(),
        ZStringError::RangeOutOfBounds {
            start: 4,
            len: 1,
            length: 3
        }
    );
}

#[test]
fn test_range_check_survives_overflowing_request() {
    let mut s = ZString::from_slice(b"abc");
    assert!(s.slice(usize::MAX, 2).is_err());
    assert!(s.substr(2, usize::MAX).is_err());
}

#[test]
fn test_index_error_at_length() {
    let s = ZString::from_slice(b"abc");

    assert_eq!(
        s.get(3).unwrap_err(),
        ZStringError::IndexOutOfBounds { index: 3, length: 3 }
    );
    assert!(s.get(2).is_ok());
}

#[test]
fn test_length_mismatch_from_replace() {
    let mut s = ZString::from_slice(b"hello");
    let mut window = s.slice(0, 5).unwrap();

    assert_eq!(
        window.replace(b"toolong").unwrap_err(),
        ZStringError::LengthMismatch {
            expected: 5,
            replacement: 7
        }
    );
}

#[test]
fn test_error_messages_quality() {
    let message = format!(
        "{}",
        ZStringError::RangeOutOfBounds {
            start: 2,
            len: 5,
            length: 3
        }
    );
    assert!(message.contains("range starting at 2"));
    assert!(message.contains("length 5"));
    assert!(message.contains("content of length 3"));

    let message = format!(
        "{}",
        ZStringError::IndexOutOfBounds { index: 9, length: 4 }
    );
    assert!(message.contains("index 9"));
    assert!(message.contains("length 4"));

    let message = format!(
        "{}",
        ZStringError::LengthMismatch {
            expected: 5,
            replacement: 7
        }
    );
    assert!(message.contains("7 bytes"));
    assert!(message.contains("5 bytes"));
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = ZStringError::IndexOutOfBounds { index: 1, length: 0 };

    // Debug
    let debug_str = format!("{:?}", error);
    assert!(!debug_str.is_empty());

    // Display
    let display_str = format!("{}", error);
    assert!(!display_str.is_empty());

    // Clone + PartialEq
    let cloned = error.clone();
    assert_eq!(error, cloned);
    assert_ne!(
        error,
        ZStringError::IndexOutOfBounds { index: 2, length: 0 }
    );

    // Error trait
    let _: &dyn std::error::Error = &error;
}

#[test]
fn test_all_variants_have_descriptive_messages() {
    let errors = [
        ZStringError::RangeOutOfBounds {
            start: 1,
            len: 2,
            length: 2,
        },
        ZStringError::LengthMismatch {
            expected: 3,
            replacement: 4,
        },
        ZStringError::IndexOutOfBounds { index: 5, length: 2 },
    ];

    for error in &errors {
        let message = format!("{}", error);
        assert!(
            message.len() > 10,
            "Error message should be descriptive for {:?}",
            error
        );
    }
}
