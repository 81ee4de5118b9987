//! Markup sanitising for rich-text length checks.
//!
//! Course names and user bios come from a rich-text editor. Their length
//! limits apply to the text a reader sees, so tags are removed and the
//! common entities are decoded before counting.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Text with markup tags removed and common entities decoded.
pub fn visible_text(input: &str) -> Cow<'_, str> {
    if !input.contains('<') && !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut text = TAG.replace_all(input, "").into_owned();
    // `&amp;` last so that `&amp;lt;` decodes to the literal `&lt;`
    for (entity, replacement) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    Cow::Owned(text)
}

/// Number of characters a reader sees.
pub fn visible_len(input: &str) -> usize {
    visible_text(input).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(visible_text("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn tags_are_removed() {
        assert_eq!(visible_text("<p>Intro to <b>Rust</b></p>"), "Intro to Rust");
        assert_eq!(visible_len("<p>abc</p>"), 3);
    }

    #[test]
    fn entities_count_as_one_character() {
        assert_eq!(visible_text("a&nbsp;&amp;&nbsp;b"), "a & b");
        assert_eq!(visible_len("&lt;tag&gt;"), 5);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(visible_len("नेपाली"), "नेपाली".chars().count());
    }

    #[test]
    fn stray_angle_bracket_is_kept() {
        assert_eq!(visible_text("1 < 2"), "1 < 2");
    }
}
