// ============================================================
// ROW PARSER
// ============================================================
// Turn raw CSV text into records keyed by the header row

use tracing::debug;

use super::tokenizer::tokenize_row;
use crate::domain::record::{Record, ResultSet};

/// Parse CSV text into records.
///
/// The first line is the header, split on every comma. Each following
/// non-blank line becomes one record whose values are zipped positionally
/// against the header: short rows leave trailing keys absent, long rows
/// lose their extra fields. Never fails; malformed rows are parsed on a
/// best-effort basis.
pub fn parse(text: &str) -> ResultSet {
    let Some((header_line, body)) = text.split_once('\n') else {
        debug!("CSV text has no line break, nothing to parse");
        return ResultSet::default();
    };

    let headers: Vec<&str> = strip_carriage_return(header_line).split(',').collect();
    if all_blank(&headers) {
        debug!("CSV header row is blank");
        return ResultSet::default();
    }

    let rows: Vec<&str> = body.split('\n').map(strip_carriage_return).collect();
    if all_blank(&rows) {
        debug!(columns = headers.len(), "CSV has a header but no data rows");
        return ResultSet::default();
    }

    let mut records = Vec::new();
    for row in rows {
        if is_blank(row) {
            continue;
        }
        records.push(build_record(&headers, tokenize_row(row)));
    }

    debug!(
        columns = headers.len(),
        records = records.len(),
        "Parsed CSV text"
    );

    ResultSet::from(records)
}

fn build_record(headers: &[&str], fields: Vec<String>) -> Record {
    let mut fields = fields.into_iter();
    let mut record = Record::with_capacity(headers.len());
    for header in headers {
        record.insert(*header, fields.next());
    }
    record
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn all_blank(values: &[&str]) -> bool {
    values.iter().all(|value| is_blank(value))
}
