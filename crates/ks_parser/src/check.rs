use std::path::Path;

use serde::Serialize;
use swc_common::{sync::Lrc, FileName, SourceMap, Spanned};
use swc_ecma_ast::EsVersion;
use swc_ecma_parser::{error::Error as ParseError, Syntax, TsSyntax};
use tracing::debug;

use crate::rewrite;

const DEFAULT_FILE_NAME: &str = "input.ts";

/// A syntax error found in rewritten TypeScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    /// 1-based; 0 when the parser gave no position.
    pub line: usize,
    /// 1-based; 0 when the parser gave no position.
    pub column: usize,
    pub message: String,
    /// `file:line:col - error: message` followed by the source line and a caret.
    pub rendered: String,
}

/// Outcome of checking one kscript source.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Name the rewritten text was parsed under.
    pub file: String,
    #[serde(skip)]
    pub rewritten: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// All rendered diagnostics, separated by blank lines.
    pub fn format_diagnostics(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.rendered.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Rewrite `source` and parse the result as a TypeScript module.
///
/// `filename` only names the virtual file in diagnostics; its extension is
/// replaced with `.ts`.
pub fn check_source(source: &str, filename: &str) -> CheckReport {
    let rewritten = rewrite(source);
    let file = virtual_file_name(filename);
    let diagnostics = check_typescript(&rewritten, &file);
    debug!(file = %file, diagnostics = diagnostics.len(), "checked");

    CheckReport {
        file,
        rewritten,
        diagnostics,
    }
}

/// Parse already-rewritten TypeScript and collect its syntax errors, both
/// fatal and recovered.
pub fn check_typescript(text: &str, filename: &str) -> Vec<Diagnostic> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        text.to_string(),
    );

    let ts_syntax = Syntax::Typescript(TsSyntax {
        decorators: true,
        ..Default::default()
    });

    let mut errors = Vec::new();
    let parsed = swc_ecma_parser::parse_file_as_module(
        &source_file,
        ts_syntax,
        EsVersion::latest(),
        None,
        &mut errors,
    );
    if let Err(fatal) = parsed {
        errors.push(fatal);
    }

    errors
        .iter()
        .map(|error| to_diagnostic(&source_map, filename, error))
        .collect()
}

fn virtual_file_name(filename: &str) -> String {
    if filename.is_empty() {
        return DEFAULT_FILE_NAME.to_string();
    }
    Path::new(filename)
        .with_extension("ts")
        .to_string_lossy()
        .into_owned()
}

fn to_diagnostic(source_map: &SourceMap, file: &str, error: &ParseError) -> Diagnostic {
    let message = error.kind().msg().into_owned();
    let span = error.span();

    if span.is_dummy() {
        return Diagnostic {
            file: file.to_string(),
            line: 0,
            column: 0,
            rendered: format!("{file} - error: {message}"),
            message,
        };
    }

    let loc = source_map.lookup_char_pos(span.lo);
    let line = loc.line;
    let column = loc.col_display + 1;
    let source_line = loc
        .file
        .get_line(line - 1)
        .map(|l| l.trim_end().to_string())
        .unwrap_or_default();

    let gutter = line.to_string();
    let rendered = format!(
        "{file}:{line}:{column} - error: {message}\n\n{gutter} | {source_line}\n{pad} | {caret:>width$}",
        pad = " ".repeat(gutter.len()),
        caret = "^",
        width = column,
    );

    Diagnostic {
        file: file.to_string(),
        line,
        column,
        message,
        rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SAMPLE: &str = "상수 값: 숫자 = 1;
함수 더하기(왼쪽: 숫자, 오른쪽: 숫자): 숫자 {
  반환 왼쪽 + 오른쪽;
}";

    #[test]
    fn valid_code_has_no_diagnostics() {
        let report = check_source(VALID_SAMPLE, "예시.ks");
        assert!(!report.has_errors(), "{}", report.format_diagnostics());
        assert_eq!(report.file, "예시.ts");
        assert!(report.rewritten.starts_with("const 값: number = 1;"));
    }

    #[test]
    fn class_with_methods_parses() {
        let source = "클래스 사람 {
  이름: 문자열;
  생성자(이름: 문자열) {
    이것.이름 = 이름;
  }
  함수 소개(): 문자열 {
    반환 `${이것.이름}`;
  }
  비동기함수 인사(): 프로미스<무효> {}
}";
        let report = check_source(source, "사람.ks");
        assert!(!report.has_errors(), "{}", report.format_diagnostics());
    }

    #[test]
    fn syntax_error_is_reported_with_position() {
        let report = check_source("상수 x = ;", "오류.ks");
        assert!(report.has_errors());
        let first = &report.diagnostics[0];
        assert_eq!(first.file, "오류.ts");
        assert_eq!(first.line, 1);
        assert!(first.column > 0);
        assert!(first.rendered.starts_with("오류.ts:1:"));
        assert!(first.rendered.contains("const x = ;"));
        assert!(report.format_diagnostics().contains("error:"));
    }

    #[test]
    fn type_errors_are_not_syntax_errors() {
        let report = check_source("상수 값: 숫자 = \"문자\";", "");
        assert!(!report.has_errors());
        assert_eq!(report.file, "input.ts");
    }

    #[test]
    fn report_serializes_without_rewritten_text() {
        let report = check_source("상수 x = ;", "a.ks");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "a.ts");
        assert!(json.get("rewritten").is_none());
        assert_eq!(json["diagnostics"][0]["line"], 1);
    }

    #[test]
    fn virtual_names() {
        assert_eq!(virtual_file_name(""), "input.ts");
        assert_eq!(virtual_file_name("src/a.ks"), "src/a.ts");
        assert_eq!(virtual_file_name("noext"), "noext.ts");
    }
}
