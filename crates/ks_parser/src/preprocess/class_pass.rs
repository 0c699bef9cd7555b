//! Class-body normalization pass.
//!
//! Korean source spells methods with the same keyword as free functions, so
//! after keyword substitution a class body reads `class A { function f() {} }`.
//! This pass drops the `function` keyword from such members, keeping an
//! `async` marker when present. Only brace nesting is tracked; the input is
//! the keyword pass's output.

use ks_lexicon::is_word_at;
use tracing::debug;

const CLASS: &str = "class";
const FUNCTION: &str = "function";
const ASYNC_FUNCTION: &str = "async function";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassBodyFrame {
    Class,
    Block,
}

/// Strip `function` from method declarations inside class bodies.
///
/// Blocks nested inside a class body inherit the `Class` kind, so a
/// `function` declaration at statement start inside a method body is
/// stripped as well.
pub fn normalize_class_methods(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut frames: Vec<ClassBodyFrame> = Vec::new();
    let mut pending_class = false;
    let mut elided = 0usize;
    let mut pos = 0;

    while let Some(c) = source[pos..].chars().next() {
        if is_word_at(source, pos, CLASS) {
            out.push_str(CLASS);
            pos += CLASS.len();
            pending_class = true;
            continue;
        }

        match c {
            '{' => {
                let kind = if std::mem::take(&mut pending_class) {
                    ClassBodyFrame::Class
                } else {
                    frames.last().copied().unwrap_or(ClassBodyFrame::Block)
                };
                frames.push(kind);
            }
            '}' => {
                frames.pop();
            }
            _ if frames.last() == Some(&ClassBodyFrame::Class) => {
                if is_word_at(source, pos, ASYNC_FUNCTION) && at_member_start(&out) {
                    out.push_str("async ");
                    pos = skip_one_space(source, pos + ASYNC_FUNCTION.len());
                    elided += 1;
                    continue;
                }
                if is_word_at(source, pos, FUNCTION) && at_member_start(&out) {
                    pos = skip_one_space(source, pos + FUNCTION.len());
                    elided += 1;
                    continue;
                }
            }
            _ => {}
        }

        out.push(c);
        pos += c.len_utf8();
    }

    debug!(elided, "class-body pass finished");
    out
}

/// Whether the text written so far ends where a new member or statement
/// can begin.
fn at_member_start(out: &str) -> bool {
    matches!(
        out.chars().rev().find(|c| !c.is_whitespace()),
        None | Some('{' | ';' | '}' | '.')
    )
}

fn skip_one_space(source: &str, pos: usize) -> usize {
    if source[pos..].starts_with(' ') {
        pos + 1
    } else {
        pos
    }
}
