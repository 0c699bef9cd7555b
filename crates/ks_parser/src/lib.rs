//! kscript → TypeScript rewriting pipeline.
//!
//! Korean keyword spellings are rewritten at the text level, then class
//! bodies are normalized so that methods read like TypeScript methods:
//!
//! - Keywords (`상수` → `const`, `콘솔.출력` → `console.log`)
//! - Class methods (`class A { function f() {} }` → `class A { f() {} }`)
//!
//! [`check`] feeds the rewritten text to the standard SWC parser and reports
//! syntax errors against it.

pub mod check;
pub mod preprocess;

use ks_lexicon::KsSyntax;

pub use check::{check_source, check_typescript, CheckReport, Diagnostic};
pub use preprocess::preprocess;

/// Rewrite kscript source into TypeScript with every pass enabled.
pub fn rewrite(source: &str) -> String {
    preprocess(source, &KsSyntax::default())
}
