//! CSV snapshot export.
//!
//! Creates two files in the configured output directory:
//! - `group_snapshots.csv` — one row per group per snapshot
//! - `house_snapshots.csv` — one row per house per snapshot

use std::fs::File;
use std::path::Path;

use csv::Writer;

use tt_sim::{SimObserver, SimSnapshot};

use crate::{OutputError, OutputResult};

/// Writes every snapshot (periodic and final) to two CSV files.
pub struct CsvReporter {
    groups:     Writer<File>,
    houses:     Writer<File>,
    last_error: Option<OutputError>,
    finished:   bool,
}

impl CsvReporter {
    /// Open (or create) the two CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut groups = Writer::from_path(dir.join("group_snapshots.csv"))?;
        groups.write_record(["elapsed_secs", "group_id", "size", "destination", "collected"])?;

        let mut houses = Writer::from_path(dir.join("house_snapshots.csv"))?;
        houses.write_record(["elapsed_secs", "house_id", "x", "y", "available"])?;

        Ok(Self {
            groups,
            houses,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush both files.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.groups.flush()?;
        self.houses.flush()?;
        Ok(())
    }

    fn write(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) -> OutputResult<()> {
        for g in &snapshot.groups {
            self.groups.write_record(&[
                elapsed_secs.to_string(),
                g.id.to_string(),
                g.size.to_string(),
                g.destination.to_string(),
                g.collected.to_string(),
            ])?;
        }
        for h in &snapshot.houses {
            self.houses.write_record(&[
                elapsed_secs.to_string(),
                h.id.to_string(),
                h.x.to_string(),
                h.y.to_string(),
                h.available.to_string(),
            ])?;
        }
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for CsvReporter {
    fn on_snapshot(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        let result = self.write(elapsed_secs, snapshot);
        self.store_err(result);
    }

    fn on_final(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        let result = self.write(elapsed_secs, snapshot);
        self.store_err(result);
        let result = self.finish();
        self.store_err(result);
    }
}
