//! Assembles a runnable [`Simulation`].

use std::io::Read;
use std::sync::Arc;

use tt_core::{GroupId, StopSignal};
use tt_feed::RefillSchedule;
use tt_group::{Group, GroupSpec};
use tt_pool::{House, HousePool};

use crate::scenario::{HouseSpec, Scenario};
use crate::{SimError, SimResult, Simulation};

/// Top-level simulation configuration.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// Reporting loop length in whole seconds.  Zero means: spawn, stop,
    /// report once.
    pub duration_secs: u64,
}

/// The boxed reader the refill schedule is consumed from.  The feed thread
/// owns it, hence `Send`.
pub type ScheduleReader = Box<dyn Read + Send>;

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — run duration
/// - a [`Scenario`] (or raw house/group specs via
///   [`from_parts`][Self::from_parts])
///
/// # Optional inputs
///
/// | Method         | Default                               |
/// |----------------|---------------------------------------|
/// | `.schedule(r)` | No feed thread — refills never happen |
pub struct SimBuilder {
    config:   SimConfig,
    houses:   Vec<HouseSpec>,
    groups:   Vec<GroupSpec>,
    schedule: Option<RefillSchedule<ScheduleReader>>,
}

impl SimBuilder {
    /// Builder over an already-validated scenario.
    pub fn new(config: SimConfig, scenario: Scenario) -> Self {
        Self {
            config,
            houses:   scenario.houses,
            groups:   scenario.groups,
            schedule: None,
        }
    }

    /// Builder over raw specs — mainly for tests that want pools smaller
    /// or stranger than the file format allows.  `build` re-validates.
    pub fn from_parts(config: SimConfig, houses: Vec<HouseSpec>, groups: Vec<GroupSpec>) -> Self {
        Self {
            config,
            houses,
            groups,
            schedule: None,
        }
    }

    /// Attach the refill schedule, usually the reader returned by
    /// [`Scenario::open`].  Without one the simulation runs feed-less.
    pub fn schedule(mut self, reader: impl Read + Send + 'static) -> Self {
        let boxed: ScheduleReader = Box::new(reader);
        self.schedule = Some(RefillSchedule::from_reader(boxed, self.houses.len()));
        self
    }

    /// Validate the specs and assemble the pool, groups, and stop signal.
    pub fn build(self) -> SimResult<Simulation> {
        for (i, spec) in self.groups.iter().enumerate() {
            if spec.start_house.index() >= self.houses.len() {
                return Err(SimError::StartOutOfRange {
                    group:  i,
                    start:  spec.start_house.0,
                    houses: self.houses.len(),
                });
            }
            if spec.size == 0 {
                return Err(SimError::EmptyGroup { group: i });
            }
        }

        let pool = Arc::new(HousePool::new(
            self.houses
                .iter()
                .map(|h| House::new(h.loc, h.candy))
                .collect(),
        ));

        let groups: Vec<Arc<Group>> = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, &spec)| Arc::new(Group::new(GroupId(i as u32), spec)))
            .collect();

        Ok(Simulation::new(
            self.config,
            pool,
            groups,
            self.schedule,
            StopSignal::new(),
        ))
    }
}
