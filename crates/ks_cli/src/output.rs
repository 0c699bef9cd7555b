//! Reading `.ks` inputs and writing the generated `.ts` files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Where the TypeScript for `input` goes: `<out_dir>/<stem>.ts`, or next to
/// the input with its extension replaced.
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => {
            let mut name = input
                .file_stem()
                .unwrap_or(input.as_os_str())
                .to_os_string();
            name.push(".ts");
            dir.join(name)
        }
        None => input.with_extension("ts"),
    }
}

pub fn read_source(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

/// Rewrite `input` and write the result to `output`, creating parent
/// directories as needed. Returns the generated text.
pub fn compile_file(input: &Path, output: &Path) -> Result<String> {
    if input == output {
        bail!("refusing to overwrite input file {}", input.display());
    }

    let source = read_source(input)?;
    let compiled = ks_parser::rewrite(&source);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, &compiled)
        .with_context(|| format!("failed to write {}", output.display()))?;

    debug!(input = %input.display(), output = %output.display(), "compiled");
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            output_path(Path::new("src/main.ks"), None),
            PathBuf::from("src/main.ts")
        );
        assert_eq!(
            output_path(Path::new("a.b.ks"), None),
            PathBuf::from("a.b.ts")
        );
    }

    #[test]
    fn out_dir_keeps_only_the_stem() {
        assert_eq!(
            output_path(Path::new("src/nested/main.ks"), Some(Path::new("dist"))),
            PathBuf::from("dist/main.ts")
        );
        assert_eq!(
            output_path(Path::new("a.b.ks"), Some(Path::new("out"))),
            PathBuf::from("out/a.b.ts")
        );
    }

    #[test]
    fn compile_file_writes_rewritten_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hello.ks");
        fs::write(&input, "상수 x: 숫자 = 1;\n").unwrap();

        let output = output_path(&input, Some(&dir.path().join("out/deep")));
        let compiled = compile_file(&input, &output).unwrap();

        assert_eq!(compiled, "const x: number = 1;\n");
        assert_eq!(fs::read_to_string(&output).unwrap(), compiled);
    }

    #[test]
    fn compile_file_refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("already.ts");
        fs::write(&input, "const x = 1;").unwrap();

        let output = output_path(&input, None);
        assert!(compile_file(&input, &output).is_err());
        assert_eq!(fs::read_to_string(&input).unwrap(), "const x = 1;");
    }

    #[test]
    fn missing_input_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.ks");
        let err = compile_file(&input, &dir.path().join("missing.ts")).unwrap_err();
        assert!(err.to_string().contains("missing.ks"));
    }
}
