use canonical::{decode, normalize, Granularity, NormalizeConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: NormalizeConfig,
    expected_tokens: &'static [(&'static str, usize, usize)],
}

fn lexical() -> NormalizeConfig {
    NormalizeConfig::new().with_granularity(Granularity::Lexical)
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "c_statement",
            input: "  x = y+1;",
            cfg: lexical(),
            expected_tokens: &[
                ("x", 2, 3),
                ("=", 4, 5),
                ("y", 6, 7),
                ("+", 7, 8),
                ("1", 8, 9),
                (";", 9, 10),
            ],
        },
        Case {
            name: "comment_between_tokens",
            input: "a/*x*/b",
            cfg: lexical(),
            expected_tokens: &[("a", 0, 1), ("b", 6, 7)],
        },
        Case {
            name: "line_comment_then_code",
            input: "// header\nRet",
            cfg: lexical(),
            expected_tokens: &[("ret", 10, 13)],
        },
        Case {
            name: "string_literal_kept",
            input: "s=\"//\"",
            cfg: lexical(),
            expected_tokens: &[("s", 0, 1), ("=", 1, 2), ("\"", 2, 3), ("/", 3, 4), ("/", 4, 5), ("\"", 5, 6)],
        },
        Case {
            name: "char_granularity_multibyte",
            input: "é x",
            cfg: NormalizeConfig::default(),
            expected_tokens: &[("é", 0, 2), ("x", 3, 4)],
        },
        Case {
            name: "non_bmp_codepoint",
            input: " a\u{10348}b  c ",
            cfg: lexical(),
            expected_tokens: &[("a\u{10348}b", 1, 7), ("c", 9, 10)],
        },
    ];

    for case in cases {
        let stream = normalize(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        let tokens: Vec<(String, usize, usize)> = stream
            .tokens
            .iter()
            .map(|t| (t.text.clone(), t.start, t.end))
            .collect();
        let expected: Vec<(String, usize, usize)> = case
            .expected_tokens
            .iter()
            .map(|(text, start, end)| ((*text).to_string(), *start, *end))
            .collect();

        assert_eq!(tokens, expected, "token mismatch for {}", case.name);
    }
}

#[test]
fn decode_then_normalize_round_trips_offsets() {
    let bytes = "int main() { return 0; } // done".as_bytes();
    let text = decode(bytes).expect("decode");
    let stream = normalize(text, &lexical()).expect("normalize");
    for token in &stream.tokens {
        assert_eq!(
            text[token.start..token.end].to_lowercase(),
            token.text,
            "offset mismatch for {token:?}"
        );
    }
}
