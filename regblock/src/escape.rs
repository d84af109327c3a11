//! Escaping of literal text and unwrapping of delimited fragments

/// Characters that carry meaning in pattern syntax
const META_CHARS: &[char] = &[
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Modifier letters that may trail a delimited fragment such as `/abc/gi`
const MODIFIERS: &[char] = &[
    'g', 'm', 'i', 'x', 's', 'u', 'X', 'U', 'A', 'J', 'D',
];

/// Escape every metacharacter in `text` with a backslash
///
/// # Example
/// ```
/// use regblock::escape_literal;
///
/// assert_eq!(escape_literal("1+1=2"), "1\\+1=2");
/// ```
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if META_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Strip one `/.../` delimiter pair and trailing modifier letters
///
/// The closing delimiter is the last `/` after which only modifier letters
/// follow. Escapes inside the body are left untouched. Input that is not
/// delimited is returned unchanged.
pub fn strip_delimiters(source: &str) -> &str {
    let Some(inner) = source.strip_prefix('/') else {
        return source;
    };
    match inner.rfind('/') {
        Some(close) if inner[close + 1..].chars().all(|c| MODIFIERS.contains(&c)) => {
            &inner[..close]
        }
        _ => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape_literal("CREDIT"), "CREDIT");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn test_escape_every_metachar() {
        assert_eq!(
            escape_literal("-/\\^$*+?.()|[]{}"),
            "\\-\\/\\\\\\^\\$\\*\\+\\?\\.\\(\\)\\|\\[\\]\\{\\}"
        );
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(escape_literal("a.b"), "a\\.b");
        assert_eq!(escape_literal("//"), "\\/\\/");
        assert_eq!(escape_literal("$5 (approx)"), "\\$5 \\(approx\\)");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape_literal("café?"), "café\\?");
    }

    #[test]
    fn test_strip_simple() {
        assert_eq!(strip_delimiters("/./"), ".");
        assert_eq!(strip_delimiters("/[a-z]/gi"), "[a-z]");
    }

    #[test]
    fn test_strip_preserves_inner_escapes() {
        assert_eq!(strip_delimiters(r"/\/\*/"), r"\/\*");
        assert_eq!(strip_delimiters(r"/a\/b/m"), r"a\/b");
    }

    #[test]
    fn test_strip_uses_closing_delimiter_before_modifiers() {
        assert_eq!(strip_delimiters("/a/b/g"), "a/b");
    }

    #[test]
    fn test_strip_leaves_undelimited_input() {
        assert_eq!(strip_delimiters("[0-9]"), "[0-9]");
        assert_eq!(strip_delimiters("/abc"), "/abc");
        assert_eq!(strip_delimiters("/abc/q"), "/abc/q");
    }

    #[test]
    fn test_strip_empty_body() {
        assert_eq!(strip_delimiters("//"), "");
    }
}
