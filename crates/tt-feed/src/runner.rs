//! The background refill thread.

use std::io::Read;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{info, warn};

use tt_core::{StopSignal, FEED_CADENCE};
use tt_pool::HousePool;

use crate::{Refill, RefillSchedule};

/// Owns the thread applying scheduled refills to the pool.
pub struct FeedRunner {
    handle: Option<JoinHandle<()>>,
}

impl FeedRunner {
    /// Start the feed.  Each iteration sleeps one cadence — including before
    /// the very first entry, so no refill lands earlier than 250 ms into the
    /// run — then checks the stop signal, then pulls and applies the next
    /// entry.  The thread exits on stop, on schedule exhaustion, or on a
    /// malformed line.
    pub fn spawn<R>(schedule: RefillSchedule<R>, pool: Arc<HousePool>, stop: StopSignal) -> Self
    where
        R: Read + Send + 'static,
    {
        let handle = thread::spawn(move || feed_loop(schedule, &pool, &stop));
        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the thread to finish.  After a stop request at most one
    /// cadence sleep remains.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn feed_loop<R: Read>(mut schedule: RefillSchedule<R>, pool: &HousePool, stop: &StopSignal) {
    loop {
        thread::sleep(FEED_CADENCE);
        if stop.is_stopped() {
            return;
        }
        match schedule.next() {
            None => return,
            Some(Err(e)) => {
                warn!(error = %e, "refill schedule unreadable, feed stopping");
                return;
            }
            Some(Ok(Refill { house, amount })) => {
                pool.refill(house, amount);
                info!(house = %house, amount, "refilled house");
            }
        }
    }
}
