//! The `Simulation` struct and its reporting loop.

use std::sync::Arc;
use std::thread;

use tracing::{debug, info};

use tt_core::{StopSignal, REPORT_INTERVAL};
use tt_feed::{FeedRunner, RefillSchedule};
use tt_group::{Group, GroupRunner};
use tt_pool::HousePool;

use crate::builder::{ScheduleReader, SimConfig};
use crate::snapshot::{GroupRow, HouseRow, SimSnapshot};
use crate::SimObserver;

/// A fully assembled simulation, ready to run once.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  `run` consumes the
/// simulation: the actors it spawns live exactly as long as the call.
pub struct Simulation {
    config:   SimConfig,
    pool:     Arc<HousePool>,
    groups:   Vec<Arc<Group>>,
    schedule: Option<RefillSchedule<ScheduleReader>>,
    stop:     StopSignal,
}

impl Simulation {
    pub(crate) fn new(
        config:   SimConfig,
        pool:     Arc<HousePool>,
        groups:   Vec<Arc<Group>>,
        schedule: Option<RefillSchedule<ScheduleReader>>,
        stop:     StopSignal,
    ) -> Self {
        Self {
            config,
            pool,
            groups,
            schedule,
            stop,
        }
    }

    /// The shared pool — lets callers inspect stock after `run` returns.
    pub fn pool(&self) -> Arc<HousePool> {
        Arc::clone(&self.pool)
    }

    /// Run to completion and return the final snapshot.
    ///
    /// Spawns every actor, drives the reporting loop for
    /// `config.duration_secs` one-second ticks, then shuts down
    /// cooperatively: stop → join groups → final report → join feed.
    /// `take` and `refill` cannot fail and the loops have no error branch,
    /// so the run itself is infallible.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimSnapshot {
        // ── Spawn ─────────────────────────────────────────────────────────
        let runners: Vec<GroupRunner> = self
            .groups
            .iter()
            .map(|g| GroupRunner::spawn(Arc::clone(g), Arc::clone(&self.pool), self.stop.clone()))
            .collect();

        let feed = self.schedule.take().map(|schedule| {
            FeedRunner::spawn(schedule, Arc::clone(&self.pool), self.stop.clone())
        });

        info!(
            groups = runners.len(),
            houses = self.pool.len(),
            duration_secs = self.config.duration_secs,
            "simulation started"
        );

        // ── Reporting loop ────────────────────────────────────────────────
        //
        // Tick 0 reports immediately; every later tick sleeps one second
        // first.  The tick equal to `duration` only closes the last full
        // second — its report is the final one, emitted after shutdown.
        for tick in 0..=self.config.duration_secs {
            if tick != 0 {
                thread::sleep(REPORT_INTERVAL);
            }
            if tick != self.config.duration_secs {
                observer.on_snapshot(tick, &self.snapshot(tick));
            }
        }

        // ── Shutdown ──────────────────────────────────────────────────────
        //
        // Stop is cooperative: each group finishes its in-flight travel and
        // collection before it exits, so the joins below bound the drain at
        // one cycle per group.  The final snapshot is taken after the joins
        // and is exact for groups; the feed is joined only after the final
        // report, so a last refill may still race it.
        self.stop.request_stop();
        debug!("stop requested, joining group threads");
        for runner in runners {
            runner.join();
        }

        let final_snapshot = self.snapshot(self.config.duration_secs);
        observer.on_final(self.config.duration_secs, &final_snapshot);

        if let Some(feed) = feed {
            feed.join();
        }
        info!(
            total_collected = final_snapshot.total_collected,
            "simulation finished"
        );
        final_snapshot
    }

    /// Assemble a report from relaxed group reads and per-house peeks.
    fn snapshot(&self, elapsed_secs: u64) -> SimSnapshot {
        let groups: Vec<GroupRow> = self
            .groups
            .iter()
            .map(|g| GroupRow {
                id:          g.id,
                size:        g.size,
                destination: g.destination_house(),
                collected:   g.collected(),
            })
            .collect();

        let houses: Vec<HouseRow> = self
            .pool
            .views()
            .into_iter()
            .map(|v| HouseRow {
                id:        v.id,
                x:         v.loc.x,
                y:         v.loc.y,
                available: v.available,
            })
            .collect();

        let total_collected = groups.iter().map(|g| g.collected).sum();
        SimSnapshot {
            elapsed_secs,
            groups,
            houses,
            total_collected,
        }
    }
}
