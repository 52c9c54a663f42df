use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::comments::mask_comments;
use crate::config::NormalizeConfig;
use crate::document::TokenStream;
use crate::error::CanonicalError;
use crate::hash::hash_token_stream;
use crate::token::tokenize;

/// Main entry point. Turns decoded source text into a [`TokenStream`].
///
/// Stages, in order: optional NFKC, optional comment masking, tokenization
/// (whitespace delimits), optional per-token lowercasing. The only error is
/// an invalid configuration; empty, whitespace-only or comment-only input
/// produces an empty stream.
pub fn normalize(raw: &str, cfg: &NormalizeConfig) -> Result<TokenStream, CanonicalError> {
    cfg.validate()?;

    // NFKC can change byte lengths, so offsets are taken against this text.
    let source: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(raw.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(raw)
    };

    // Masking preserves byte length, so offsets stay valid for `source`.
    let masked: Cow<str> = if cfg.strip_comments {
        Cow::Owned(mask_comments(&source))
    } else {
        Cow::Borrowed(source.as_ref())
    };

    let mut tokens = tokenize(&masked, cfg.granularity);
    if cfg.lowercase {
        for token in tokens.iter_mut() {
            if token.text.chars().any(char::is_uppercase) {
                token.text = token.text.to_lowercase();
            }
        }
    }

    let sha256_hex = hash_token_stream(cfg.version, &tokens);
    tracing::trace!(
        bytes = raw.len(),
        tokens = tokens.len(),
        granularity = ?cfg.granularity,
        "normalized document"
    );

    Ok(TokenStream {
        source: source.into_owned(),
        tokens,
        sha256_hex,
        version: cfg.version,
        config: cfg.clone(),
    })
}
