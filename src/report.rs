use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::trial::{Phase, TrialResult};

/// Report header: two identifying columns, then one per phase in protocol order.
pub const REPORT_COLUMNS: [&str; 2 + Phase::COUNT] = {
    let mut columns = ["Object Count", "Test #", "", "", "", "", "", "", "", ""];
    let mut i = 0;
    while i < Phase::COUNT {
        columns[2 + i] = Phase::ALL[i].title();
        i += 1;
    }
    columns
};

/// Raw per-trial timings, one row per trial, all values in nanoseconds.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<TrialResult>,
}

impl Report {
    /// Rows are ordered by dataset size, then trial number, whatever order the
    /// trials completed in.
    pub fn from_results(mut results: Vec<TrialResult>) -> Self {
        results.sort_by_key(|r| r.spec);
        Self { rows: results }
    }

    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header() -> String {
        REPORT_COLUMNS.join(",")
    }

    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", Self::header())?;
        for row in &self.rows {
            writeln!(writer, "{}", row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_csv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Creates or truncates `path`.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_csv(BufWriter::new(file))
    }
}
