//! Cooperative shutdown signal.
//!
//! # Design
//!
//! Every long-running actor (group threads, the refill feed) polls the signal
//! exactly once per loop iteration, at the top.  Setting it never interrupts
//! an in-flight sleep or a held lock; it only prevents the *next* iteration
//! from starting.  The coordinator must therefore expect each actor to finish
//! its current cycle after requesting stop, before a join can return.
//!
//! The flag transitions exactly once, from "not stopped" to "stopped", and
//! never back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide one-way stop flag.
///
/// One logical writer (the coordinator), many readers.  Readers never block;
/// absence of "stopped" simply means "run one more iteration".  Cloning
/// shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag to "stopped".  Irreversible; calling again is a no-op.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Non-blocking read of the flag.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
