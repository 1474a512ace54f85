//! Query log export as CSV.
//!
//! The output mirrors what spreadsheet tools expect: a header row, one record
//! per line terminated by `\n`, and RFC 4180 quoting only where a field needs it.

use crate::session::{QueryLog, QueryRecord};

/// Suggested file name for a query export.
pub const EXPORT_FILE_NAME: &str = "templo_queries.csv";

/// MIME type of the export.
pub const EXPORT_MIME: &str = "text/csv";

const HEADER: [&str; 3] = ["timestamp", "language", "query"];

/// An encoded query export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Encodes the query log as UTF-8 CSV.
///
/// Returns `None` when there is nothing to export.
pub fn export_queries(log: &QueryLog) -> Option<CsvExport> {
    if log.is_empty() {
        return None;
    }

    let mut out = String::new();
    push_row(&mut out, HEADER);
    for record in log.records() {
        push_row(&mut out, record_fields(record));
    }

    Some(CsvExport {
        file_name: EXPORT_FILE_NAME,
        mime: EXPORT_MIME,
        bytes: out.into_bytes(),
    })
}

fn record_fields(record: &QueryRecord) -> [&str; 3] {
    [
        record.timestamp.as_str(),
        record.language.label(),
        record.query.as_str(),
    ]
}

fn push_row(out: &mut String, fields: [&str; 3]) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
