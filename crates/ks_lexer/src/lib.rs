//! Keyword scanner for kscript.
//!
//! Replaces Korean keyword spellings with their TypeScript equivalents in a
//! single pass over the source text:
//!
//! - `상수 x: 숫자 = 1;` → `const x: number = 1;`
//! - `"반환"` stays `"반환"` (string contents are never touched)
//! - `` `값: ${참}` `` → `` `값: ${true}` `` (interpolations are code)
//!
//! Nesting of strings, comments, template literals and interpolations is
//! tracked with an explicit [`ModeStack`] rather than recursion.

pub mod mode;
mod scanner;

use ks_lexicon::KEYWORD_RULES;

pub use mode::{ModeStack, ScanMode, TemplateExpressionFrame};
pub use scanner::rewrite_keywords_with;

/// Rewrite keyword spellings using the built-in [`KEYWORD_RULES`] table.
pub fn rewrite_keywords(source: &str) -> String {
    rewrite_keywords_with(source, KEYWORD_RULES)
}
