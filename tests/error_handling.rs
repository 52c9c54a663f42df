use codesim::{
    compare_bytes, CanonicalError, CompareError, DocumentSide, EngineConfig, FrameError,
};

fn cfg() -> EngineConfig {
    EngineConfig::default()
}

#[test]
fn non_positive_window_is_rejected() {
    for window in [0, -1, i64::MIN] {
        let err = compare_bytes(b"abcd", b"abcd", window, &cfg()).unwrap_err();
        assert_eq!(
            err,
            CompareError::InvalidWindow {
                window: window.to_string()
            }
        );
        assert_eq!(err.to_response().jaccard, 0.0);
    }
}

#[test]
fn invalid_utf8_is_a_decode_error() {
    let err = compare_bytes(&[0x66, 0x6F, 0x80], b"foo", 4, &cfg()).unwrap_err();
    assert_eq!(
        err,
        CompareError::Decode {
            side: DocumentSide::A,
            source: CanonicalError::Decode { valid_up_to: 2 },
        }
    );
    assert_eq!(err.kind(), "DECODE_ERROR");
}

#[test]
fn decode_checked_before_emptiness() {
    let err = compare_bytes(b"", &[0xFF], 4, &cfg()).unwrap_err();
    assert!(matches!(err, CompareError::Decode { side: DocumentSide::B, .. }));
}

#[test]
fn empty_and_blank_documents_are_empty_input() {
    let cases: [(&[u8], &[u8], DocumentSide); 4] = [
        (b"", b"", DocumentSide::Both),
        (b"   \n\t", b"x = 1;", DocumentSide::A),
        (b"x = 1;", b"/* nothing */", DocumentSide::B),
        (b"\xEF\xBB\xBF", b"\xEF\xBB\xBF  ", DocumentSide::Both),
    ];
    for (a, b, side) in cases {
        let err = compare_bytes(a, b, 4, &cfg()).unwrap_err();
        assert_eq!(err, CompareError::EmptyInput { side });
        let resp = err.to_response();
        assert_eq!(resp.kind, "EMPTY_INPUT");
        assert_eq!(resp.jaccard, 0.0);
    }
}

#[test]
fn invalid_config_is_typed() {
    let mut bad = cfg();
    bad.normalize.version = 0;
    let err = compare_bytes(b"abcd", b"abcd", 4, &bad).unwrap_err();
    assert!(matches!(err, CompareError::InvalidConfig(_)));
}

#[test]
fn frame_errors_convert() {
    let err: CompareError = FrameError::MissingHeader.into();
    assert_eq!(err.kind(), "MALFORMED_FRAME");
    assert!(err.to_string().contains("missing input headers"));
}

#[test]
fn adversarial_bytes_never_panic() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![0u8; 1024],
        (0u8..=255).collect(),
        "\u{202E}\u{0000}/*".repeat(100).into_bytes(),
        "\"unterminated string".into(),
        "/* unterminated comment".into(),
        "é".repeat(2000).into_bytes(),
    ];
    for a in &inputs {
        for b in &inputs {
            match compare_bytes(a, b, 4, &cfg()) {
                Ok(report) => assert!((0.0..=1.0).contains(&report.jaccard)),
                Err(err) => assert_eq!(err.to_response().jaccard, 0.0),
            }
        }
    }
}
