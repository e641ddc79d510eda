//! Observer trait for periodic and final reports.

use crate::SimSnapshot;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at
/// reporting points.
///
/// Both methods have default no-op implementations so implementors only
/// need to override what they care about.
pub trait SimObserver {
    /// Called once per elapsed second while the simulation runs, starting
    /// with second 0 (fired before any sleep).  Group rows may be one
    /// update stale.
    fn on_snapshot(&mut self, _elapsed_secs: u64, _snapshot: &SimSnapshot) {}

    /// Called once after every group thread has joined; group rows are
    /// exact.  The feed is joined only after this call returns, so one
    /// final refill may still land concurrently.
    fn on_final(&mut self, _elapsed_secs: u64, _snapshot: &SimSnapshot) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want reports.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
