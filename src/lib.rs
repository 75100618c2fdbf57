// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod parsing;
pub mod namespaces;
pub mod loader;
pub mod table;
pub mod report;

// Re-export commonly used items
pub use types::*;
pub use error::{ConfigError, ReportError};
pub use config::read_config_file;
pub use parsing::{parse_config_line, parse_config_str, strip_quotes};
pub use namespaces::{default_namespace_pattern, select_namespaces, NAMESPACE_KEY_PATTERN};
pub use loader::{extract_items, load_items_file, load_resources, resource_path};
pub use table::{render_table, render_to_string, table_spec, Column, TableSpec};
pub use report::{generate_report, BundleReport, ReportSummary};
