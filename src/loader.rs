use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path} has no columns")]
    NoColumns { path: String },
}

/// Raw tabular data as loaded from disk: normalized header names plus
/// untyped rows. No semantic validation happens here; that is the column
/// resolver's job.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
    /// Rows the CSV reader itself rejected (bad quoting, invalid UTF-8).
    pub malformed_rows: usize,
}

/// Normalize a header cell: trim, lowercase, collapse each whitespace run
/// into a single underscore. `" CRASH DATE "` becomes `"crash_date"`.
pub fn normalize_header(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Read a delimited file into memory.
///
/// The reader is flexible about per-row field counts; rows it cannot read
/// at all are skipped and counted rather than failing the load. Only an
/// unreadable source or a headerless file is fatal.
pub fn load_raw(path: &Path) -> Result<RawTable, LoadError> {
    let read_err = |source: csv::Error| LoadError::Read {
        path: path.display().to_string(),
        source,
    };
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;
    let headers: Vec<String> = rdr
        .headers()
        .map_err(read_err)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoColumns {
            path: path.display().to_string(),
        });
    }

    let mut rows = Vec::new();
    let mut malformed_rows = 0usize;
    for result in rdr.records() {
        match result {
            Ok(record) => rows.push(record),
            Err(e) => {
                malformed_rows += 1;
                debug!(error = %e, "skipping unreadable row");
            }
        }
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        malformed_rows,
        "loaded raw table"
    );
    Ok(RawTable {
        headers,
        rows,
        malformed_rows,
    })
}
