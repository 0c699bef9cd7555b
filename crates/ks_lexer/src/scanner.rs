//! Keyword substitution pass.
//!
//! Walks the source once, left to right, keeping a [`ModeStack`] so that
//! strings, comments and template text are copied untouched while code
//! (including code inside `${ ... }` interpolations) has its keyword
//! spellings replaced.

use ks_lexicon::KeywordRule;
use tracing::{debug, trace};

use crate::mode::{ModeStack, ScanMode};

/// Rewrite every keyword spelling from `rules` that occurs in code position.
///
/// Never fails: unterminated strings, comments and templates simply run to
/// the end of the input.
pub fn rewrite_keywords_with(source: &str, rules: &[KeywordRule]) -> String {
    Scanner::new(source, rules).run()
}

struct Scanner<'a> {
    source: &'a str,
    rules: &'a [KeywordRule],
    pos: usize,
    out: String,
    modes: ModeStack,
    substitutions: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, rules: &'a [KeywordRule]) -> Self {
        Self {
            source,
            rules,
            pos: 0,
            out: String::with_capacity(source.len() + source.len() / 4),
            modes: ModeStack::new(),
            substitutions: 0,
        }
    }

    fn run(mut self) -> String {
        while let Some(c) = self.peek() {
            match self.modes.current() {
                ScanMode::Code => self.scan_code(c),
                ScanMode::TemplateHole(_) => self.scan_template_hole(c),
                ScanMode::SingleQuote => self.scan_quoted(c, '\''),
                ScanMode::DoubleQuote => self.scan_quoted(c, '"'),
                ScanMode::Template => self.scan_template(c),
                ScanMode::LineComment => self.scan_line_comment(c),
                ScanMode::BlockComment => self.scan_block_comment(),
            }
        }

        if self.modes.depth() > 1 {
            debug!(mode = ?self.modes.current(), "input ended inside an unterminated region");
        }
        debug!(
            substitutions = self.substitutions,
            input_len = self.source.len(),
            output_len = self.out.len(),
            "keyword pass finished"
        );
        self.out
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Copy one character to the output.
    fn bump(&mut self, c: char) {
        self.out.push(c);
        self.pos += c.len_utf8();
    }

    /// Copy the next `len` bytes of source to the output.
    fn copy(&mut self, len: usize) {
        let end = self.pos + len;
        self.out.push_str(&self.source[self.pos..end]);
        self.pos = end;
    }

    fn scan_code(&mut self, c: char) {
        if let Some((mode, len)) = ScanMode::opened_by(self.rest()) {
            self.modes.push(mode);
            self.copy(len);
            return;
        }

        if let Some(rule) = self.match_keyword() {
            trace!(at = self.pos, spelling = rule.spelling, "keyword");
            self.out.push_str(rule.replacement);
            // Advance by the spelling, not the replacement.
            self.pos += rule.spelling.len();
            self.substitutions += 1;
            return;
        }

        self.bump(c);
    }

    fn match_keyword(&self) -> Option<&'a KeywordRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches_at(self.source, self.pos))
    }

    fn scan_template_hole(&mut self, c: char) {
        match c {
            '{' => {
                if let Some(frame) = self.modes.template_hole_mut() {
                    frame.open_brace();
                }
                self.bump(c);
            }
            '}' => {
                self.bump(c);
                let closed = self
                    .modes
                    .template_hole_mut()
                    .is_some_and(|frame| frame.close_brace());
                if closed {
                    self.modes.pop();
                }
            }
            _ => self.scan_code(c),
        }
    }

    fn scan_quoted(&mut self, c: char, quote: char) {
        self.bump(c);
        if c == '\\' {
            self.copy_escaped();
        } else if c == quote {
            self.modes.pop();
        }
    }

    fn scan_template(&mut self, c: char) {
        match c {
            '\\' => {
                self.bump(c);
                self.copy_escaped();
            }
            '`' => {
                self.bump(c);
                self.modes.pop();
            }
            '$' if self.rest().starts_with("${") => {
                self.copy(2);
                self.modes.push(ScanMode::template_hole());
            }
            _ => self.bump(c),
        }
    }

    /// Copy the character following a backslash, if there is one.
    fn copy_escaped(&mut self) {
        if let Some(next) = self.peek() {
            self.bump(next);
        }
    }

    fn scan_line_comment(&mut self, c: char) {
        self.bump(c);
        if c == '\n' {
            self.modes.pop();
        }
    }

    fn scan_block_comment(&mut self) {
        if self.rest().starts_with("*/") {
            self.copy(2);
            self.modes.pop();
        } else if let Some(c) = self.peek() {
            self.bump(c);
        }
    }
}
