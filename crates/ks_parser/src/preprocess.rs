//! Text-level rewriting of kscript source into standard TypeScript.
//!
//! Processing order:
//! 1. Keywords (`상수` → `const`, ...) via [`ks_lexer`]
//! 2. Class bodies: `function` dropped from method declarations

use ks_lexicon::KsSyntax;

mod class_pass;

pub use class_pass::normalize_class_methods;

/// Preprocess a kscript source string, running the passes enabled in `syntax`.
pub fn preprocess(source: &str, syntax: &KsSyntax) -> String {
    let mut result = if syntax.keywords {
        ks_lexer::rewrite_keywords(source)
    } else {
        source.to_string()
    };

    if syntax.class_methods {
        result = normalize_class_methods(&result);
    }

    result
}
