//! Sample lines and result formatting for the command line tool.

use crate::tokenizer::tokenize;

/// Lines shown when the tool runs without input. The last three fail.
pub const SAMPLES: [&str; 8] = [
    r#""a b cd":"#,
    r#"'a b "c \" d"'"#,
    r"'a b c\ d",
    r#"ab"c d""#,
    r#""c d"ef"#,
    r#"'a b "c"#,
    r"'a b c\",
    r#"'a b "c\"#,
];

/// Formats `line` next to its tokens, or next to the error it fails with.
pub fn describe(line: &str) -> String {
    match tokenize(line) {
        Ok(tokens) => format!("{line}: {tokens:?}"),
        Err(e) => format!("{line}: ERROR: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_tokens() {
        assert_eq!(describe(r#"a "b c""#), r#"a "b c": ["a", "b c"]"#);
        assert_eq!(describe(""), ": []");
    }

    #[test]
    fn test_describe_error() {
        assert_eq!(describe(r#""a b"#), r#""a b: ERROR: Unmatched quote"#);
        assert_eq!(describe(r"a\"), r"a\: ERROR: incomplete escape sequence");
    }

    #[test]
    fn test_samples() {
        let described: Vec<String> = SAMPLES.iter().map(|s| describe(s)).collect();
        assert_eq!(
            described,
            vec![
                r#""a b cd":: ["a b cd:"]"#.to_string(),
                r#"'a b "c \" d"': ["'a", "b", "c \" d'"]"#.to_string(),
                r#"'a b c\ d: ["'a", "b", "c d"]"#.to_string(),
                r#"ab"c d": ["abc d"]"#.to_string(),
                r#""c d"ef: ["c def"]"#.to_string(),
                r#"'a b "c: ERROR: Unmatched quote"#.to_string(),
                r"'a b c\: ERROR: incomplete escape sequence".to_string(),
                r#"'a b "c\: ERROR: incomplete escape sequence"#.to_string(),
            ]
        );
    }
}
