//! Escape codec for name components.
//!
//! A component in canonical form may hold any character. Before it is joined
//! into a data string it is *masked*: every escape character and every
//! delimiter character gets one [`ESCAPE_CHARACTER`] in front of it. The
//! masked form can then be split on unescaped delimiters without ambiguity
//! and *unmasked* back into the canonical component.

/// The fixed escape character used in data strings.
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter used when none is given.
pub const DEFAULT_DELIMITER: char = '.';

/// Mask a component so it can be joined with `delimiter`.
pub fn mask(unmasked: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(unmasked.len() * 2);

    for ch in unmasked.chars() {
        if ch == ESCAPE_CHARACTER || ch == delimiter {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(ch);
    }

    result
}

/// Recover the canonical component from its masked form.
///
/// An escape character is dropped and the character after it is kept as is.
/// A trailing escape with nothing after it is kept literally. Unescaped
/// delimiters pass through unchanged; callers split before unmasking.
pub fn unmask(masked: &str, _delimiter: char) -> String {
    let mut result = String::with_capacity(masked.len());
    let mut escaped = false;

    for ch in masked.chars() {
        if escaped {
            result.push(ch);
            escaped = false;
        } else if ch == ESCAPE_CHARACTER {
            escaped = true;
        } else {
            result.push(ch);
        }
    }

    if escaped {
        result.push(ESCAPE_CHARACTER);
    }

    result
}

/// Split a data string on unescaped delimiters.
///
/// Parts stay masked. The last buffer is always pushed, so an empty input
/// gives exactly one empty part.
pub fn split_masked(masked: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in masked.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == ESCAPE_CHARACTER {
            escaped = true;
            current.push(ch);
        } else if ch == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);

    parts
}

/// Join already masked parts with `delimiter`.
pub fn join_masked<S: AsRef<str>>(parts: &[S], delimiter: char) -> String {
    let mut result = String::new();

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            result.push(delimiter);
        }
        result.push_str(part.as_ref());
    }

    result
}

/// Split a data string and unmask every part.
pub fn parse_components(data: &str, delimiter: char) -> Vec<String> {
    split_masked(data, delimiter)
        .iter()
        .map(|part| unmask(part, delimiter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_plain_text_unchanged() {
        assert_eq!(mask("oss", '.'), "oss");
        assert_eq!(mask("", '.'), "");
    }

    #[test]
    fn test_mask_delimiter() {
        assert_eq!(mask("a.b", '.'), "a\\.b");
        // Only the chosen delimiter is escaped
        assert_eq!(mask("a.b", '/'), "a.b");
        assert_eq!(mask("a/b", '/'), "a\\/b");
    }

    #[test]
    fn test_mask_escape_character() {
        assert_eq!(mask("a\\b", '.'), "a\\\\b");
        assert_eq!(unmask("a\\\\b", '.'), "a\\b");
    }

    #[test]
    fn test_unmask_drops_single_escape() {
        assert_eq!(unmask("a\\.b", '.'), "a.b");
        assert_eq!(unmask("\\x", '.'), "x");
    }

    #[test]
    fn test_unmask_trailing_escape_is_literal() {
        assert_eq!(unmask("abc\\", '.'), "abc\\");
        assert_eq!(unmask("\\", '.'), "\\");
    }

    #[test]
    fn test_unmask_passes_unescaped_delimiter() {
        assert_eq!(unmask("a.b", '.'), "a.b");
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(
            split_masked("oss.cs.fau.de", '.'),
            vec!["oss", "cs", "fau", "de"]
        );
    }

    #[test]
    fn test_split_keeps_escapes() {
        assert_eq!(split_masked("a\\.b.c", '.'), vec!["a\\.b", "c"]);
        assert_eq!(split_masked("a\\\\.b", '.'), vec!["a\\\\", "b"]);
    }

    #[test]
    fn test_split_empty_input_is_one_part() {
        assert_eq!(split_masked("", '.'), vec![""]);
    }

    #[test]
    fn test_split_empty_components() {
        assert_eq!(split_masked(".", '.'), vec!["", ""]);
        assert_eq!(split_masked("a..b", '.'), vec!["a", "", "b"]);
    }

    #[test]
    fn test_join_masked() {
        assert_eq!(join_masked(&["a\\.b", "c"], '.'), "a\\.b.c");
        assert_eq!(join_masked::<&str>(&[], '.'), "");
        assert_eq!(join_masked(&[""], '.'), "");
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components("a\\.b.c", '.'), vec!["a.b", "c"]);
        assert_eq!(parse_components("x#y", '#'), vec!["x", "y"]);
    }

    // Property-based tests
    use proptest::prelude::*;

    fn delimiter_strategy() -> impl Strategy<Value = char> {
        any::<char>().prop_filter("escape character is not a delimiter", |c| {
            *c != ESCAPE_CHARACTER
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            max_shrink_iters: 10000,
            ..ProptestConfig::default()
        })]

        /// Unmasking a masked component restores it
        #[test]
        fn prop_mask_unmask_inverse(s in ".*", d in delimiter_strategy()) {
            prop_assert_eq!(unmask(&mask(&s, d), d), s);
        }

        /// A masked component never splits
        #[test]
        fn prop_masked_component_is_one_part(s in ".*", d in delimiter_strategy()) {
            let parts = split_masked(&mask(&s, d), d);
            prop_assert_eq!(parts.len(), 1);
        }

        /// Masking is injective for a fixed delimiter
        #[test]
        fn prop_mask_injective(a in ".*", b in ".*", d in delimiter_strategy()) {
            prop_assume!(a != b);
            prop_assert_ne!(mask(&a, d), mask(&b, d));
        }

        /// Joining masked components and parsing gives the components back
        #[test]
        fn prop_join_parse_roundtrip(
            components in prop::collection::vec(".*", 1..8),
            d in delimiter_strategy()
        ) {
            let masked: Vec<String> = components.iter().map(|c| mask(c, d)).collect();
            let data = join_masked(&masked, d);
            prop_assert_eq!(parse_components(&data, d), components);
        }
    }
}
