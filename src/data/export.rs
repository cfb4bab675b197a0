use std::io::Write;
use std::path::Path;

use crate::data::source::DataSource;
use crate::error::{Error, Result};

/// Default file name for a table export, stamped with the local time.
pub fn default_table_file_name() -> String {
    format!("table_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

/// Write `columns` of every row of `source` as CSV (header first).
///
/// An empty `columns` list exports all columns in column order.
pub fn write_table_csv<W: Write>(mut w: W, source: &DataSource, columns: &[String]) -> Result<()> {
    let all;
    let columns = if columns.is_empty() {
        all = source.column_names().to_vec();
        &all
    } else {
        columns
    };
    let data = columns
        .iter()
        .map(|c| source.column(c))
        .collect::<Result<Vec<_>>>()?;

    let io = |e| Error::io("<table>", e);
    let header: Vec<String> = columns.iter().map(|c| csv_field(c)).collect();
    writeln!(w, "{}", header.join(",")).map_err(io)?;
    for row in 0..source.row_count() {
        let fields: Vec<String> = data
            .iter()
            .map(|col| csv_field(&col[row].to_string()))
            .collect();
        writeln!(w, "{}", fields.join(",")).map_err(io)?;
    }
    Ok(())
}

/// Write the table to a file at `path`.
pub fn save_table_csv<P: AsRef<Path>>(path: P, source: &DataSource, columns: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_table_csv(&mut buf, source, columns)?;
    std::fs::write(path, buf).map_err(|e| Error::io(path, e))?;
    tracing::info!(path = %path.display(), rows = source.row_count(), "saved table");
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
