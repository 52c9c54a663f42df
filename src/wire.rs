//! Length-prefixed frame used by the stdin/stdout binary.
//!
//! ```text
//! A <lenA>\n
//! B <lenB>\n
//! <lenA bytes of A><lenB bytes of B>
//! ```
//!
//! The window is not part of the frame; it comes from the `WINDOW`
//! environment variable.

use thiserror::Error;

use crate::error::CompareError;

/// Window used when none is supplied.
pub const DEFAULT_WINDOW: i64 = 4;

/// Environment variable carrying the window for the binary.
pub const WINDOW_ENV: &str = "WINDOW";

/// Header lines longer than this are rejected without scanning further.
const MAX_HEADER_LINE: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("missing input headers")]
    MissingHeader,

    #[error("invalid header line {0:?}")]
    InvalidHeader(String),

    #[error("invalid document length {0:?}")]
    InvalidLength(String),

    #[error("truncated body: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// The two documents of a parsed frame, borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub a: &'a [u8],
    pub b: &'a [u8],
}

/// Split one header line off `input`. `\r\n` endings are accepted.
fn take_line(input: &[u8]) -> Result<(&[u8], &[u8]), FrameError> {
    if input.is_empty() {
        return Err(FrameError::MissingHeader);
    }
    let scan = &input[..input.len().min(MAX_HEADER_LINE + 1)];
    let Some(nl) = scan.iter().position(|&b| b == b'\n') else {
        if input.len() > MAX_HEADER_LINE {
            return Err(FrameError::InvalidHeader(
                String::from_utf8_lossy(&input[..MAX_HEADER_LINE]).into_owned(),
            ));
        }
        return Err(FrameError::MissingHeader);
    };
    let line = &input[..nl];
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Ok((line, &input[nl + 1..]))
}

/// Parse `"<label> <len>"`; one or more spaces separate the two.
fn parse_header(line: &[u8], label: u8) -> Result<usize, FrameError> {
    let invalid = || FrameError::InvalidHeader(String::from_utf8_lossy(line).into_owned());

    let rest = match line.split_first() {
        Some((&first, rest)) if first == label => rest,
        _ => return Err(invalid()),
    };
    if rest.first() != Some(&b' ') {
        return Err(invalid());
    }
    let digits = rest.trim_ascii_start();
    let value = String::from_utf8_lossy(digits).into_owned();
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(FrameError::InvalidLength(value));
    }
    value
        .parse::<usize>()
        .map_err(|_| FrameError::InvalidLength(value.clone()))
}

/// Parse a frame without copying the document bytes.
///
/// Bytes after the declared lengths are ignored.
pub fn parse_frame(input: &[u8]) -> Result<Frame<'_>, FrameError> {
    let (line_a, rest) = take_line(input)?;
    let (line_b, body) = take_line(rest)?;
    let len_a = parse_header(line_a, b'A')?;
    let len_b = parse_header(line_b, b'B')?;

    let expected = len_a
        .checked_add(len_b)
        .ok_or_else(|| FrameError::InvalidLength(format!("{len_a} + {len_b}")))?;
    if body.len() < expected {
        return Err(FrameError::Truncated {
            expected,
            actual: body.len(),
        });
    }
    if body.len() > expected {
        tracing::debug!(
            trailing = body.len() - expected,
            "ignoring bytes after declared documents"
        );
    }

    let (a, rest) = body.split_at(len_a);
    Ok(Frame {
        a,
        b: &rest[..len_b],
    })
}

/// Build a frame for the given documents.
pub fn encode_frame(a: &[u8], b: &[u8]) -> Vec<u8> {
    let header = format!("A {}\nB {}\n", a.len(), b.len());
    let mut out = Vec::with_capacity(header.len() + a.len() + b.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Parse a textual window value. Blank means "use the default".
pub fn parse_window(raw: &str) -> Result<i64, CompareError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_WINDOW);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| CompareError::InvalidWindow {
            window: raw.to_string(),
        })
}

/// Read the window from environment variable `var`.
///
/// Unset falls back to [`DEFAULT_WINDOW`]; anything that is not an integer
/// is an [`CompareError::InvalidWindow`]. Positivity is checked by the
/// engine.
pub fn window_from_env(var: &str) -> Result<i64, CompareError> {
    match std::env::var(var) {
        Ok(raw) => parse_window(&raw),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_WINDOW),
        Err(std::env::VarError::NotUnicode(raw)) => Err(CompareError::InvalidWindow {
            window: raw.to_string_lossy().into_owned(),
        }),
    }
}
