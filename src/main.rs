use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use tracing::{info, warn};

use k8s_bundle_report::{generate_report, ReportOptions, NAMESPACE_KEY_PATTERN};

/// Render dumped cluster-info JSON as per-namespace text tables
#[derive(Parser, Debug)]
#[command(name = "k8s-bundle-report")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// KEY=VALUE file; keys matching the namespace pattern name namespaces
    #[arg(long = "config", value_name = "PATH", env = "BUNDLE_REPORT_CONFIG")]
    config_file: Option<PathBuf>,

    /// Directory containing cluster-info/<namespace>/<kind>.json
    #[arg(long = "output", value_name = "PATH", env = "BUNDLE_REPORT_OUTPUT", default_value = ".")]
    output_dir: PathBuf,

    /// Regex matched against config keys to select namespaces
    #[arg(long, value_name = "REGEX", default_value = NAMESPACE_KEY_PATTERN)]
    namespace_pattern: Regex,

    /// Skip unreadable or malformed resource files instead of aborting
    #[arg(long)]
    skip_malformed: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(config_path) = args.config_file else {
        writeln!(out, "No configuration file provided.")?;
        return Ok(());
    };

    let options = ReportOptions {
        config_path,
        output_dir: args.output_dir,
        namespace_pattern: args.namespace_pattern,
        skip_malformed: args.skip_malformed,
    };

    let summary = generate_report(&options, &mut out)
        .with_context(|| format!("report for {} failed", options.config_path.display()))?;
    out.flush()?;

    if !summary.has_data() {
        warn!("no resource rows found under {}", options.output_dir.display());
    }
    info!(
        "report done: {} namespace(s), {} table(s), {} row(s), {} missing file(s), {} skipped",
        summary.namespaces,
        summary.tables_rendered,
        summary.rows_rendered,
        summary.missing_files,
        summary.skipped_files
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
