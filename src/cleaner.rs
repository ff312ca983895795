use crate::loader::RawTable;
use crate::schema::{ColumnMap, VehicleColumn};
use crate::types::CrashRecord;
use crate::util::{clean_text, parse_count_safe, parse_datetime_safe};
use tracing::debug;

/// Row accounting from a cleaning pass. Only surfaced in the startup
/// diagnostics; per-row failures are otherwise silent.
#[derive(Debug, Clone, Copy)]
pub struct CleanReport {
    /// Data rows the reader produced (header excluded).
    pub raw_rows: usize,
    pub kept_rows: usize,
    /// Rows dropped for an unparseable date+time.
    pub dropped_rows: usize,
    /// Rows the CSV reader rejected outright, carried over from the load.
    pub malformed_rows: usize,
}

/// Turn raw rows into clean records.
///
/// A row survives iff its date+time combination parses. Count fields
/// coerce to 0 on any failure (or when the column does not exist at all),
/// and street/vehicle text is trimmed with empties mapped to `None`. The
/// returned records are final; nothing downstream mutates them.
pub fn clean(table: &RawTable, cols: &ColumnMap) -> (Vec<CrashRecord>, CleanReport) {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped_rows = 0usize;
    for row in &table.rows {
        let date = row.get(cols.date).unwrap_or("");
        let time = row.get(cols.time).unwrap_or("");
        let Some(datetime) = parse_datetime_safe(date, time) else {
            dropped_rows += 1;
            continue;
        };
        let persons_injured = cols
            .injured
            .and_then(|i| parse_count_safe(row.get(i)))
            .unwrap_or(0);
        let persons_killed = cols
            .killed
            .and_then(|i| parse_count_safe(row.get(i)))
            .unwrap_or(0);
        let on_street = cols.on_street.and_then(|i| clean_text(row.get(i)));
        let cross_street = cols.cross_street.and_then(|i| clean_text(row.get(i)));
        let vehicle_type = match cols.vehicle_type {
            VehicleColumn::Present(i) => clean_text(row.get(i)),
            VehicleColumn::Absent => None,
        };
        records.push(CrashRecord {
            datetime,
            persons_injured,
            persons_killed,
            on_street,
            cross_street,
            vehicle_type,
        });
    }
    if dropped_rows > 0 {
        debug!(dropped_rows, "dropped rows with unparseable timestamps");
    }
    let report = CleanReport {
        raw_rows: table.rows.len(),
        kept_rows: records.len(),
        dropped_rows,
        malformed_rows: table.malformed_rows,
    };
    (records, report)
}
