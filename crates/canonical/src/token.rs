use serde::{Deserialize, Serialize};

use crate::config::Granularity;

/// A token with its UTF-8 byte offsets in the text it was cut from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive).
    pub start: usize,
    /// Byte offset (exclusive).
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Byte range `[start, end)` covered by `tokens[first..=last]`.
///
/// Returns `None` when the range is empty or out of bounds.
///
/// ```rust
/// use canonical::{span_of, tokenize, Granularity};
///
/// let src = "let total = a + b;";
/// let tokens = tokenize(src, Granularity::Lexical);
/// let (start, end) = span_of(&tokens, 1, 3).unwrap();
/// assert_eq!(&src[start..end], "total = a");
/// ```
pub fn span_of(tokens: &[Token], first: usize, last: usize) -> Option<(usize, usize)> {
    if first > last {
        return None;
    }
    let start = tokens.get(first)?.start;
    let end = tokens.get(last)?.end;
    Some((start, end))
}

/// Returns true for characters that extend an identifier or number run.
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Tokenizes text and produces byte offsets.
///
/// Whitespace always delimits and never becomes a token. With
/// [`Granularity::Lexical`], `foo_bar1 += 2;` yields `foo_bar1`, `+`, `=`,
/// `2`, `;`. With [`Granularity::Char`] every non-whitespace character is a
/// token of its own.
///
/// ```rust
/// use canonical::{tokenize, Granularity};
///
/// let texts: Vec<String> = tokenize("x1 = y;", Granularity::Lexical)
///     .into_iter()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(texts, vec!["x1", "=", "y", ";"]);
///
/// assert_eq!(tokenize("a b", Granularity::Char).len(), 2);
/// ```
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<Token> {
    match granularity {
        Granularity::Char => tokenize_chars(text),
        Granularity::Lexical => tokenize_lexical(text),
    }
}

fn tokenize_chars(text: &str) -> Vec<Token> {
    text.char_indices()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, ch)| Token {
            text: ch.to_string(),
            start: idx,
            end: idx + ch.len_utf8(),
        })
        .collect()
}

fn tokenize_lexical(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(text.len() / 3 + 1);
    let mut word_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_word_char(ch) {
            if word_start.is_none() {
                word_start = Some(idx);
            }
            continue;
        }

        if let Some(start) = word_start.take() {
            tokens.push(Token {
                text: text[start..idx].to_string(),
                start,
                end: idx,
            });
        }

        if !ch.is_whitespace() {
            let end = idx + ch.len_utf8();
            tokens.push(Token {
                text: text[idx..end].to_string(),
                start: idx,
                end,
            });
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token {
            text: text[start..].to_string(),
            start,
            end: text.len(),
        });
    }

    tokens
}
