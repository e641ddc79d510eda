//! `tt-output` — snapshot reporters for the trick-or-treat simulator.
//!
//! Two reporters are provided, both implementing `tt_sim::SimObserver`:
//!
//! | Reporter            | Output                                          |
//! |---------------------|-------------------------------------------------|
//! | [`ConsoleReporter`] | Free-text status reports on any `Write`         |
//! | [`CsvReporter`]     | `group_snapshots.csv`, `house_snapshots.csv`    |
//!
//! Observer callbacks return nothing, so write errors are stored internally
//! and retrieved with `take_error()` after the run.

pub mod console;
pub mod csv;
pub mod error;


pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use error::{OutputError, OutputResult};
