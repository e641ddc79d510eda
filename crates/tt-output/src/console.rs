//! Human-readable status reports.

use std::io::Write;

use tt_sim::{SimObserver, SimSnapshot};

use crate::{OutputError, OutputResult};

/// Renders each snapshot as an indented neighborhood report:
///
/// ```text
/// After 3 seconds:
///   Group statuses:
///     0: size 5, going to 7, collected 15
///   House statuses:
///     0 @ (4, 6): 12 available
///   Total candy: 15
/// ```
///
/// Generic over the sink so tests can render into a buffer and the binary
/// can hand it stdout.  Write errors are stored internally; fetch them with
/// [`take_error`][Self::take_error] after the run.
pub struct ConsoleReporter<W: Write> {
    out:        W,
    last_error: Option<OutputError>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) -> OutputResult<()> {
        writeln!(self.out, "After {elapsed_secs} seconds:")?;
        writeln!(self.out, "  Group statuses:")?;
        for g in &snapshot.groups {
            writeln!(
                self.out,
                "    {}: size {}, going to {}, collected {}",
                g.id, g.size, g.destination, g.collected
            )?;
        }
        writeln!(self.out, "  House statuses:")?;
        for h in &snapshot.houses {
            writeln!(
                self.out,
                "    {} @ ({}, {}): {} available",
                h.id, h.x, h.y, h.available
            )?;
        }
        writeln!(self.out, "  Total candy: {}", snapshot.total_collected)?;
        self.out.flush()?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleReporter<W> {
    fn on_snapshot(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        let result = self.render(elapsed_secs, snapshot);
        self.store_err(result);
    }

    fn on_final(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        let result = self.render(elapsed_secs, snapshot);
        self.store_err(result);
    }
}
