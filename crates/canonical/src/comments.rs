//! C-family comment masking.
//!
//! Comments are overwritten with ASCII spaces instead of being removed, so the
//! masked text has exactly the same byte length as the input and token offsets
//! computed on it are valid offsets into the original text.

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Literal { quote: char, escaped: bool },
}

/// Replace `// ...` and `/* ... */` comments with spaces.
///
/// - Newlines inside comments are preserved.
/// - String (`"..."`) and char (`'...'`) literals are copied verbatim,
///   honouring backslash escapes; comment markers inside them are not
///   comments. A literal never extends past the end of its line.
/// - An unterminated block comment masks the rest of the input.
///
/// ```rust
/// use canonical::mask_comments;
///
/// let src = "x = 1; // note\ny = \"//not\"; /* gone */";
/// let masked = mask_comments(src);
/// assert_eq!(masked.len(), src.len());
/// assert_eq!(masked, "x = 1;        \ny = \"//not\";           ");
/// ```
pub fn mask_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Code => match ch {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                }
                '"' | '\'' => {
                    out.push(ch);
                    state = State::Literal {
                        quote: ch,
                        escaped: false,
                    };
                }
                _ => out.push(ch),
            },
            State::LineComment => {
                if ch == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    blank(&mut out, ch);
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else if ch == '\n' {
                    out.push('\n');
                } else {
                    blank(&mut out, ch);
                }
            }
            State::Literal { quote, escaped } => {
                out.push(ch);
                state = if ch == '\n' || (!escaped && ch == quote) {
                    State::Code
                } else {
                    State::Literal {
                        quote,
                        escaped: !escaped && ch == '\\',
                    }
                };
            }
        }
    }

    out
}

/// Push as many spaces as `ch` occupies in UTF-8.
fn blank(out: &mut String, ch: char) {
    for _ in 0..ch.len_utf8() {
        out.push(' ');
    }
}
