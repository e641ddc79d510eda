//! The per-group worker thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::info;

use tt_core::{travel_duration, StopSignal, MS_PER_DISTANCE_UNIT};
use tt_pool::HousePool;

use crate::{select_destination, Group};

/// Owns the OS thread running one group's forage loop.
///
/// Spawn with [`GroupRunner::spawn`].  The loop exits at the first
/// stop-signal check after its in-flight cycle completes;
/// [`join`][Self::join] waits for that drain.
pub struct GroupRunner {
    group:  Arc<Group>,
    handle: Option<JoinHandle<()>>,
}

impl GroupRunner {
    /// Start the group's thread.  Each iteration:
    ///
    /// 1. Check the stop signal; exit if set.
    /// 2. Select a destination; publish it and its travel time.
    /// 3. Sleep the full travel time.  The sleep is never interrupted — an
    ///    in-flight travel always completes before stop is re-checked.
    /// 4. Take up to `size` candy from the destination and move there.
    pub fn spawn(group: Arc<Group>, pool: Arc<HousePool>, stop: StopSignal) -> Self {
        let worker = Arc::clone(&group);
        let handle = thread::spawn(move || forage_loop(&worker, &pool, &stop));
        Self {
            group,
            handle: Some(handle),
        }
    }

    /// The shared state this runner's thread is mutating.
    pub fn group(&self) -> &Arc<Group> {
        &self.group
    }

    /// Block until the thread exits.  After a stop request that is at most
    /// one travel-plus-collection cycle away.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn forage_loop(group: &Group, pool: &HousePool, stop: &StopSignal) {
    while !stop.is_stopped() {
        let current = group.current_house();
        let choice = select_destination(pool, current, group.start_house, group.size);
        let travel = travel_duration(choice.distance);
        group.set_destination_house(choice.house);
        group.set_travel_ms(travel.as_millis() as u64);

        info!(
            group = %group.id,
            from = %current,
            to = %choice.house,
            travel_ms = travel.as_millis() as u64,
            "group heading out"
        );

        if travel.is_zero() {
            // Degenerate stay-home pick: one beat instead of a busy loop on
            // the stop check.
            thread::sleep(Duration::from_millis(MS_PER_DISTANCE_UNIT));
        } else {
            thread::sleep(travel);
        }

        let actual = pool.take(choice.house, group.size);
        group.add_collected(actual);
        group.set_current_house(choice.house);
    }
}
