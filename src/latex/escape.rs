//! Masking of LaTeX-reserved characters in raw text.
//!
//! Every piece of user-authored text (identifiers, display names) must pass
//! through [`mask_special_chars`] exactly once before it is embedded in
//! rendered output. The policy is not idempotent - it inserts markers - so
//! callers track whether text has already been masked.

/// Mask LaTeX-reserved characters in raw text.
///
/// - `<` and `>` become the inline-math tokens `$<$` and `$>$`.
/// - Each of `_ \ $ & # { } ~ % ^` is preceded by a backslash.
/// - With `insert_soft_hyphens`, a `\-` break hint is inserted before a
///   masked character, unless the preceding input character was itself a
///   backslash (prevents doubled hints).
/// - The result is trimmed of leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use sbmltex::latex::mask_special_chars;
///
/// assert_eq!(mask_special_chars("k_on", false), "k\\_on");
/// assert_eq!(mask_special_chars("a<b", false), "a$<$b");
/// assert_eq!(mask_special_chars("k_on", true), "k\\-\\_on");
/// ```
pub fn mask_special_chars(raw: &str, insert_soft_hyphens: bool) -> String {
    let mut result = String::with_capacity(raw.len() + raw.len() / 4);
    let mut prev: Option<char> = None;

    for c in raw.chars() {
        match c {
            '<' | '>' => {
                push_hyphen_hint(&mut result, insert_soft_hyphens, prev);
                result.push('$');
                result.push(c);
                result.push('$');
            }
            '_' | '\\' | '$' | '&' | '#' | '{' | '}' | '~' | '%' | '^' => {
                push_hyphen_hint(&mut result, insert_soft_hyphens, prev);
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
        prev = Some(c);
    }

    result.trim().to_string()
}

fn push_hyphen_hint(result: &mut String, enabled: bool, prev: Option<char>) {
    if enabled && prev != Some('\\') {
        result.push_str("\\-");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Characters that must never appear bare in masked output.
    const RESERVED: &[char] = &['_', '\\', '$', '&', '#', '{', '}', '~', '%', '^', '<', '>'];

    #[test]
    fn test_mask_underscore() {
        assert_eq!(mask_special_chars("k_on", false), "k\\_on");
    }

    #[test]
    fn test_mask_backslash() {
        assert_eq!(mask_special_chars("a\\b", false), "a\\\\b");
    }

    #[test]
    fn test_mask_angle_brackets() {
        assert_eq!(mask_special_chars("a<b", false), "a$<$b");
        assert_eq!(mask_special_chars("a>b", false), "a$>$b");
    }

    #[test]
    fn test_mask_full_reserved_set() {
        assert_eq!(mask_special_chars("100%", false), "100\\%");
        assert_eq!(mask_special_chars("a&b", false), "a\\&b");
        assert_eq!(mask_special_chars("#1", false), "\\#1");
        assert_eq!(mask_special_chars("{x}", false), "\\{x\\}");
        assert_eq!(mask_special_chars("~x", false), "\\~x");
        assert_eq!(mask_special_chars("x^2", false), "x\\^2");
        assert_eq!(mask_special_chars("$5", false), "\\$5");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(mask_special_chars("glucose 6 phosphate", false), "glucose 6 phosphate");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(mask_special_chars("  x  ", false), "x");
    }

    #[test]
    fn test_soft_hyphen_before_masked_char() {
        assert_eq!(mask_special_chars("k_on", true), "k\\-\\_on");
    }

    #[test]
    fn test_no_doubled_hint_after_backslash() {
        // The backslash itself is masked with a hint; the underscore that
        // follows it in the input gets no second hint.
        assert_eq!(mask_special_chars("\\_", true), "\\-\\\\\\_");
    }

    #[test]
    fn test_hint_at_start_of_text() {
        assert_eq!(mask_special_chars("_x", true), "\\-\\_x");
    }

    /// Walk masked output and fail on any reserved character that is not
    /// part of an escape pair, a `\-` hint, or an inserted `$<$`/`$>$`
    /// token.
    fn assert_fully_masked(masked: &str) {
        let mut chars = masked.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    let next = chars.next().expect("trailing escape marker");
                    assert!(
                        RESERVED.contains(&next) || next == '-',
                        "unexpected escape \\{} in {:?}",
                        next,
                        masked
                    );
                }
                '$' => {
                    let inner = chars.next().expect("lone math delimiter");
                    assert!(
                        matches!(inner, '<' | '>'),
                        "unexpected math token ${} in {:?}",
                        inner,
                        masked
                    );
                    assert_eq!(chars.next(), Some('$'), "unclosed math token in {:?}", masked);
                }
                _ => assert!(
                    !RESERVED.contains(&c),
                    "bare reserved char {:?} in {:?}",
                    c,
                    masked
                ),
            }
        }
    }

    #[test]
    fn test_no_bare_reserved_chars_survive() {
        let nasty = "a_b\\c$d&e#f{g}h~i%j^k<l>m";
        assert_fully_masked(&mask_special_chars(nasty, false));
        assert_fully_masked(&mask_special_chars(nasty, true));
    }
}
