//! Strict byte decoding for raw documents.

use crate::error::CanonicalError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode raw document bytes as UTF-8 without copying.
///
/// A leading byte-order mark is skipped. Invalid sequences are rejected rather
/// than replaced: a lossy decode would let two different byte streams
/// normalize to the same text.
///
/// ```rust
/// use canonical::{decode, CanonicalError};
///
/// assert_eq!(decode(b"int x;").unwrap(), "int x;");
/// assert_eq!(decode(b"\xEF\xBB\xBFint").unwrap(), "int");
/// assert_eq!(
///     decode(b"ab\xFF").unwrap_err(),
///     CanonicalError::Decode { valid_up_to: 2 }
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<&str, CanonicalError> {
    let (body, offset) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (rest, UTF8_BOM.len()),
        None => (bytes, 0),
    };
    std::str::from_utf8(body).map_err(|err| CanonicalError::Decode {
        valid_up_to: offset + err.valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bytes_decode_to_empty_str() {
        assert_eq!(decode(b"").unwrap(), "");
    }

    #[test]
    fn multibyte_text_passes_through() {
        let text = "let café = \"日本\";";
        assert_eq!(decode(text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn error_offset_accounts_for_bom() {
        let err = decode(b"\xEF\xBB\xBFab\xC3").unwrap_err();
        assert_eq!(err, CanonicalError::Decode { valid_up_to: 5 });
    }

    #[test]
    fn lone_continuation_byte_rejected() {
        assert!(decode(&[0x80]).is_err());
    }
}
