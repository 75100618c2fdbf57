use std::io::{self, Write};

use serde_json::Value;

use crate::types::{ResourceItem, ResourceKind};

/// One table column: heading, padded width and the JSON field it shows.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    /// Object keys walked from the item root.
    pub path: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub columns: &'static [Column],
}

const NAMESPACE_WIDTH: usize = 32;
const NAME_WIDTH: usize = 64;
const STATUS_WIDTH: usize = 32;
const SHORT_WIDTH: usize = 16;
const TIME_WIDTH: usize = 32;

const NAMESPACE: Column = Column {
    title: "Namespace",
    width: NAMESPACE_WIDTH,
    path: &["metadata", "namespace"],
};
const NAME: Column = Column {
    title: "Name",
    width: NAME_WIDTH,
    path: &["metadata", "name"],
};
const CR_STATUS: Column = Column {
    title: "Status",
    width: STATUS_WIDTH,
    path: &["status", "status"],
};

pub static POD_TABLE: TableSpec = TableSpec {
    columns: &[
        NAMESPACE,
        NAME,
        Column {
            title: "Phase",
            width: SHORT_WIDTH,
            path: &["status", "phase"],
        },
        Column {
            title: "Host IP",
            width: SHORT_WIDTH,
            path: &["status", "hostIP"],
        },
        Column {
            title: "Start Time",
            width: TIME_WIDTH,
            path: &["status", "startTime"],
        },
    ],
};

pub static WEKA_CONTAINER_TABLE: TableSpec = TableSpec {
    columns: &[
        NAME,
        NAMESPACE,
        CR_STATUS,
        Column {
            title: "Mode",
            width: SHORT_WIDTH,
            path: &["metadata", "labels", "weka.io/mode"],
        },
        Column {
            title: "Start Time",
            width: TIME_WIDTH,
            path: &["metadata", "creationTimestamp"],
        },
    ],
};

pub static WEKA_CLUSTER_TABLE: TableSpec = TableSpec {
    columns: &[NAMESPACE, NAME, CR_STATUS],
};

pub static WEKA_CLIENT_TABLE: TableSpec = TableSpec {
    columns: &[NAMESPACE, NAME, CR_STATUS],
};

pub fn table_spec(kind: ResourceKind) -> &'static TableSpec {
    match kind {
        ResourceKind::Pods => &POD_TABLE,
        ResourceKind::WekaContainer => &WEKA_CONTAINER_TABLE,
        ResourceKind::WekaCluster => &WEKA_CLUSTER_TABLE,
        ResourceKind::WekaClient => &WEKA_CLIENT_TABLE,
    }
}

impl TableSpec {
    /// Sum of column widths; also the separator length.
    pub fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn header(&self) -> String {
        self.format_cells(self.columns.iter().map(|c| c.title.to_string()))
    }

    pub fn separator(&self) -> String {
        "-".repeat(self.total_width())
    }

    pub fn row(&self, item: &ResourceItem) -> String {
        self.format_cells(self.columns.iter().map(|c| field_text(item, c.path)))
    }

    fn format_cells(&self, cells: impl Iterator<Item = String>) -> String {
        self.columns
            .iter()
            .zip(cells)
            .map(|(column, cell)| format!("{:<width$}", cell, width = column.width))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Text for a nested field. Absent and `null` fields are empty; other
/// non-string values print as JSON.
pub fn field_text(item: &Value, path: &[&str]) -> String {
    let mut current = item;
    for key in path {
        match current.get(*key) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    match current {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes the header, the separator and one row per item.
pub fn render_table<W: Write>(
    out: &mut W,
    spec: &TableSpec,
    items: &[ResourceItem],
) -> io::Result<()> {
    writeln!(out, "{}", spec.header())?;
    writeln!(out, "{}", spec.separator())?;
    for item in items {
        writeln!(out, "{}", spec.row(item))?;
    }
    Ok(())
}

pub fn render_to_string(spec: &TableSpec, items: &[ResourceItem]) -> String {
    let mut text = String::new();
    for line in [spec.header(), spec.separator()]
        .into_iter()
        .chain(items.iter().map(|item| spec.row(item)))
    {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
