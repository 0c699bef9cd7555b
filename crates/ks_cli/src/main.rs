use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use ks_parser::check_source;

mod logging;
mod output;

fn generated_line(path: &Path) -> String {
    format!("✅ {} 생성됨", path.display())
}

fn clean_line(path: &Path) -> String {
    format!("✅ {} 문제 없음", path.display())
}

#[derive(Parser)]
#[command(
    name = "ksc",
    version,
    about = "kscript — TypeScript written with Korean keywords"
)]
struct Cli {
    /// Input .ks files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory for the generated .ts files (next to each input if omitted).
    #[arg(short = 'o', long, conflicts_with = "check")]
    out_dir: Option<PathBuf>,
    /// Check the files for syntax errors without writing anything.
    #[arg(long)]
    check: bool,
    /// With --check, print the reports as JSON on stdout.
    #[arg(long, requires = "check")]
    json: bool,
}

fn main() -> Result<ExitCode> {
    logging::init_tracing();
    let cli = Cli::parse();

    if cli.check {
        check(&cli.inputs, cli.json)
    } else {
        compile(&cli.inputs, cli.out_dir.as_deref())
    }
}

fn compile(inputs: &[PathBuf], out_dir: Option<&Path>) -> Result<ExitCode> {
    let mut generated = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = output::output_path(input, out_dir);
        output::compile_file(input, &output)?;
        generated.push(output);
    }

    for path in &generated {
        println!("{}", generated_line(path));
    }
    Ok(ExitCode::SUCCESS)
}

fn check(inputs: &[PathBuf], json: bool) -> Result<ExitCode> {
    let mut reports = Vec::with_capacity(inputs.len());
    let mut failed = false;

    for input in inputs {
        let source = output::read_source(input)?;
        let report = check_source(&source, &input.display().to_string());

        if report.has_errors() {
            failed = true;
            if !json {
                eprintln!("{}", report.format_diagnostics());
            }
        } else if !json {
            println!("{}", clean_line(input));
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
