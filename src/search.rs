//! String search helpers.

use regex::RegexBuilder;

use crate::error::Result;

/// Position of the first item equal to `find`.
///
/// # Examples
///
/// ```
/// # use helper_kit::search::index_of;
/// assert_eq!(index_of(&["rust", "go"], "go"), Some(1));
/// assert_eq!(index_of(&["rust", "go"], "zig"), None);
/// ```
#[must_use]
pub fn index_of<S: AsRef<str>>(items: &[S], find: &str) -> Option<usize> {
    items.iter().position(|item| item.as_ref() == find)
}

/// Keep the items that loosely match `text`, in their original order.
///
/// The query is split on whitespace and each word must appear in the item,
/// in order, with anything in between. Matching ignores case and treats
/// regex metacharacters in the query literally. An empty query keeps
/// every item.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidPattern`] if the query is too large to
/// compile into a matcher.
pub fn filter_fuzzy<'a, S: AsRef<str>>(text: &str, items: &'a [S]) -> Result<Vec<&'a str>> {
    let words: Vec<String> = text.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return Ok(items.iter().map(AsRef::as_ref).collect());
    }

    let matcher = RegexBuilder::new(&words.join(".*"))
        .case_insensitive(true)
        .build()?;

    Ok(items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| matcher.is_match(item))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = [
        "Foo and Bar",
        "bar foo",
        "foobar",
        "price: $5 (approx.)",
        "unrelated",
    ];

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(&NAMES, "foobar"), Some(2));
        assert_eq!(index_of(&NAMES, "FOOBAR"), None);
        assert_eq!(index_of::<&str>(&[], "x"), None);

        let owned = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(index_of(&owned, "a"), Some(0));
    }

    #[test]
    fn test_filter_fuzzy_empty_query_keeps_everything() {
        assert_eq!(filter_fuzzy("", &NAMES).unwrap(), NAMES.to_vec());
        assert_eq!(filter_fuzzy("   ", &NAMES).unwrap(), NAMES.to_vec());
    }

    #[test]
    fn test_filter_fuzzy_words_in_order() {
        assert_eq!(
            filter_fuzzy("foo bar", &NAMES).unwrap(),
            vec!["Foo and Bar", "foobar"]
        );
        assert_eq!(filter_fuzzy("  BAR   foo ", &NAMES).unwrap(), vec!["bar foo"]);
    }

    #[test]
    fn test_filter_fuzzy_metacharacters_are_literal() {
        assert_eq!(
            filter_fuzzy("$5 (approx.)", &NAMES).unwrap(),
            vec!["price: $5 (approx.)"]
        );
        assert!(filter_fuzzy("f.o", &NAMES).unwrap().is_empty());
    }

    #[test]
    fn test_filter_fuzzy_no_match() {
        assert!(filter_fuzzy("zig", &NAMES).unwrap().is_empty());
    }
}
