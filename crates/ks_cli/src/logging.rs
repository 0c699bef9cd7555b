//! Tracing setup for `ksc`.
//!
//! ```bash
//! KSC_LOG=debug ksc main.ks
//! KSC_LOG="ks_lexer=trace" ksc --check main.ks
//! ```
//!
//! The subscriber is only installed when `KSC_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `KSC_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("KSC_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Output goes to stderr so generated
/// text and JSON reports on stdout stay clean.
pub fn init_tracing() {
    if std::env::var_os("KSC_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
