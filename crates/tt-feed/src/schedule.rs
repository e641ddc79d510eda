//! Streaming refill schedule.
//!
//! # Line format
//!
//! One refill per line, space-separated, no header:
//!
//! ```text
//! <houseId> <amount>
//! ```
//!
//! In the shipped scenario format these lines simply continue the same file
//! after the group section, so the scenario loader hands its
//! partially-consumed reader straight here.

use std::io::Read;

use serde::Deserialize;

use tt_core::HouseId;

use crate::FeedError;

// ── Schedule record ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RefillRecord {
    house:  u32,
    amount: u32,
}

/// One scheduled refill, validated against the pool size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Refill {
    pub house:  HouseId,
    pub amount: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Lazy reader over refill lines.
///
/// Yields entries one at a time in file order; each line is read only when
/// the consumer asks for it, so an arbitrarily long schedule costs constant
/// memory.  A malformed line or an unknown house id surfaces as an `Err`
/// item — the iterator itself keeps no error state.
pub struct RefillSchedule<R: Read> {
    records:     csv::DeserializeRecordsIntoIter<R, RefillRecord>,
    house_count: u32,
}

impl<R: Read> RefillSchedule<R> {
    /// Wrap `reader`, validating every yielded house id against
    /// `house_count`.
    pub fn from_reader(reader: R, house_count: usize) -> Self {
        let records = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_deserialize();
        Self {
            records,
            house_count: house_count as u32,
        }
    }
}

impl<R: Read> Iterator for RefillSchedule<R> {
    type Item = Result<Refill, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(r) => r,
            Err(e) => return Some(Err(FeedError::Parse(e.to_string()))),
        };
        if record.house >= self.house_count {
            return Some(Err(FeedError::UnknownHouse {
                house: record.house,
                count: self.house_count,
            }));
        }
        Some(Ok(Refill {
            house:  HouseId(record.house),
            amount: record.amount,
        }))
    }
}
