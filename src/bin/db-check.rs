//! Database environment check.
//! Invoked with no arguments; `DB_CHECK_MODE=quick` selects the legacy
//! early-exit variant.

use std::path::Path;

use goated_ops::console;
use goated_ops::error::Result;
use goated_ops::report::{self, ReportConfig};
use goated_ops::snapshot::EnvSnapshot;

const ENV_FILE: &str = ".env";

fn main() {
    tracing_subscriber::fmt::init();
    console::print_check_banner();

    // Missing variables are findings, not failures. Only an unexpected
    // error (an unreadable .env, say) lands here, and even then the check
    // exits 0.
    if let Err(e) = run() {
        println!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    let config = ReportConfig::from_mode(std::env::var(report::MODE_VAR).ok().as_deref());

    let mut names = vec![report::DATABASE_URL];
    names.extend_from_slice(&config.pg_vars);
    let mut snapshot = EnvSnapshot::capture(&names);

    let env_file = Path::new(ENV_FILE);
    if env_file.exists() {
        snapshot.merge_env_file(env_file)?;
    }

    let report = report::run_report(&config, &snapshot);
    console::print_report(&report);
    Ok(())
}
