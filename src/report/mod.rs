use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::read_config_file;
use crate::error::{ConfigError, ReportError};
use crate::loader::{load_resources, resource_path};
use crate::namespaces::select_namespaces;
use crate::table::{render_table, table_spec};
use crate::types::{LoadOutcome, Namespace, ReportOptions, ResourceKind};

/// Width of the `=` rule under each namespace heading.
pub const NAMESPACE_RULE_WIDTH: usize = 180;

/// Runs a full report: config, namespace selection, then every kind for
/// every namespace.
pub fn generate_report<W: Write>(
    options: &ReportOptions,
    out: &mut W,
) -> Result<ReportSummary, ReportError> {
    let config = match read_config_file(&options.config_path) {
        Ok(config) => config,
        Err(err) => {
            if let ConfigError::NotFound(path) = &err {
                writeln!(out, "Error: File not found at {}", path.display())?;
            }
            return Err(err.into());
        }
    };

    if config.is_empty() {
        writeln!(out, "Failed to load configuration.")?;
    } else {
        writeln!(out, "Configuration loaded successfully.")?;
    }

    let namespaces = select_namespaces(&config, &options.namespace_pattern);
    writeln!(out, "Namespaces: {}", describe_namespaces(&namespaces))?;
    info!("reporting on {} namespace(s)", namespaces.len());

    let mut report = BundleReport::new(options, out);
    for namespace in &namespaces {
        report.report_namespace(namespace)?;
    }
    Ok(report.finish())
}

fn describe_namespaces(namespaces: &[Namespace]) -> String {
    if namespaces.is_empty() {
        return "(none)".to_string();
    }
    namespaces
        .iter()
        .map(|ns| format!("{}={}", ns.key, ns.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes the per-namespace sections of a report and tallies what it saw.
pub struct BundleReport<'a, W: Write> {
    options: &'a ReportOptions,
    out: &'a mut W,
    summary: ReportSummary,
}

impl<'a, W: Write> BundleReport<'a, W> {
    pub fn new(options: &'a ReportOptions, out: &'a mut W) -> Self {
        Self {
            options,
            out,
            summary: ReportSummary::default(),
        }
    }

    pub fn report_namespace(&mut self, namespace: &Namespace) -> Result<(), ReportError> {
        info!("Reporting namespace: {}", namespace.name);
        writeln!(self.out)?;
        writeln!(self.out)?;
        writeln!(self.out, "Namespace: {}", namespace.name)?;
        writeln!(self.out, "{}", "=".repeat(NAMESPACE_RULE_WIDTH))?;

        for kind in ResourceKind::ALL {
            self.report_kind(namespace, kind)?;
        }
        self.summary.namespaces += 1;
        Ok(())
    }

    fn report_kind(
        &mut self,
        namespace: &Namespace,
        kind: ResourceKind,
    ) -> Result<(), ReportError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}:", kind.title())?;

        let path = resource_path(&self.options.output_dir, &namespace.name, kind);
        let items = match load_resources(&self.options.output_dir, &namespace.name, kind) {
            LoadOutcome::Found(items) => items,
            LoadOutcome::NotFound => {
                self.summary.missing_files += 1;
                writeln!(
                    self.out,
                    "{} not found, probably no {} data in this namespace, continuing...",
                    path.display(),
                    kind
                )?;
                Vec::new()
            }
            LoadOutcome::Unreadable(detail) => {
                writeln!(self.out, "Error: Could not read {}: {}", path.display(), detail)?;
                self.reject(path, detail)?;
                Vec::new()
            }
            LoadOutcome::Malformed(detail) => {
                writeln!(self.out, "Error: Invalid JSON format in {}: {}", path.display(), detail)?;
                self.reject(path, detail)?;
                Vec::new()
            }
        };

        if items.is_empty() {
            writeln!(self.out, "No {} found in this namespace.", kind.plural())?;
        } else {
            render_table(&mut *self.out, table_spec(kind), &items)?;
            self.summary.tables_rendered += 1;
            self.summary.rows_rendered += items.len();
        }
        Ok(())
    }

    /// Aborts on an unusable file unless skipping was requested.
    fn reject(&mut self, path: PathBuf, detail: String) -> Result<(), ReportError> {
        if self.options.skip_malformed {
            warn!("skipping {}", path.display());
            self.summary.skipped_files += 1;
            Ok(())
        } else {
            Err(ReportError::Resource { path, detail })
        }
    }

    pub fn finish(self) -> ReportSummary {
        self.summary
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub namespaces: usize,
    pub tables_rendered: usize,
    pub rows_rendered: usize,
    pub missing_files: usize,
    pub skipped_files: usize,
}

impl ReportSummary {
    pub fn has_data(&self) -> bool {
        self.rows_rendered > 0
    }
}
