//! Shared vocabulary for the kscript rewriter.
//!
//! Holds the ordered keyword table that maps Korean keyword spellings to
//! their TypeScript equivalents, the identifier-class rules used to decide
//! whether a spelling stands alone, and the feature flags that select which
//! rewriting passes run.

mod keywords;

pub use keywords::{KeywordRule, KEYWORD_RULES};

use serde::{Deserialize, Serialize};

/// Whether `c` can appear inside a TypeScript identifier.
///
/// Letters and digits from any script count, so Hangul syllables are
/// identifier characters just like ASCII letters.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whether the character before byte offset `pos` is absent or not an
/// identifier character.
pub fn is_boundary_before(source: &str, pos: usize) -> bool {
    source[..pos]
        .chars()
        .next_back()
        .map_or(true, |c| !is_identifier_char(c))
}

/// Whether the character at byte offset `pos` is absent or not an
/// identifier character.
pub fn is_boundary_after(source: &str, pos: usize) -> bool {
    source[pos..]
        .chars()
        .next()
        .map_or(true, |c| !is_identifier_char(c))
}

/// Whether `word` occurs at `pos` as a whole identifier-delimited token.
pub fn is_word_at(source: &str, pos: usize, word: &str) -> bool {
    source[pos..].starts_with(word)
        && is_boundary_before(source, pos)
        && is_boundary_after(source, pos + word.len())
}

/// Feature flags controlling which rewriting passes are active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KsSyntax {
    /// Replace Korean keyword spellings with TypeScript keywords.
    pub keywords: bool,
    /// Strip the `function` keyword from method declarations in class bodies.
    pub class_methods: bool,
}

impl Default for KsSyntax {
    fn default() -> Self {
        Self {
            keywords: true,
            class_methods: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ks_syntax_default_enables_all() {
        let s = KsSyntax::default();
        assert!(s.keywords);
        assert!(s.class_methods);
    }

    #[test]
    fn ks_syntax_missing_fields_fall_back_to_default() {
        let s: KsSyntax = serde_json::from_str(r#"{ "class_methods": false }"#).unwrap();
        assert!(s.keywords);
        assert!(!s.class_methods);
    }

    #[test]
    fn hangul_and_dollar_are_identifier_chars() {
        assert!(is_identifier_char('가'));
        assert!(is_identifier_char('$'));
        assert!(is_identifier_char('_'));
        assert!(is_identifier_char('9'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('.'));
        assert!(!is_identifier_char('('));
    }

    #[test]
    fn boundaries_at_input_edges() {
        assert!(is_boundary_before("상수", 0));
        assert!(is_boundary_after("상수", "상수".len()));
        assert!(!is_boundary_before("내상수", "내".len()));
        assert!(!is_boundary_after("상수값", "상수".len()));
    }

    #[test]
    fn word_at_requires_both_boundaries() {
        let src = "class Foo extends subclass {";
        assert!(is_word_at(src, 0, "class"));
        let sub = src.find("subclass").unwrap();
        assert!(!is_word_at(src, sub + 3, "class"));
        assert!(!is_word_at("classes", 0, "class"));
    }
}
