//! Scenario file loading.
//!
//! # File format
//!
//! ```text
//! line 1:        <groupCount>
//! lines 2..11:   <x> <y> <candy>       exactly 10 houses, in index order
//! next N lines:  <startHouse> <size>   one per group, id = line order
//! rest of file:  refill schedule, consumed lazily by the feed
//! ```
//!
//! [`Scenario::open`] and [`from_reader`][Scenario::from_reader] consume
//! only the header sections and hand back the reader positioned at the
//! first refill line — the feed continues from exactly where the header
//! parse stopped, mirroring how the schedule shares the scenario file.
//!
//! All validation happens here, before any thread is spawned: a malformed
//! header is fatal and no partial simulation ever starts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tt_core::{GridPoint, HouseId};
use tt_group::GroupSpec;

use crate::{SimError, SimResult};

/// Number of houses in every scenario.
pub const HOUSE_COUNT: usize = 10;

/// One house as loaded from the file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HouseSpec {
    pub loc:   GridPoint,
    pub candy: u32,
}

/// The already-validated records a simulation is built from.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub houses: Vec<HouseSpec>,
    pub groups: Vec<GroupSpec>,
}

impl Scenario {
    /// Open `path` and parse the header sections.  Returns the scenario and
    /// the reader left at the first refill-schedule line.
    pub fn open(path: &Path) -> SimResult<(Scenario, BufReader<File>)> {
        let mut reader = BufReader::new(File::open(path)?);
        let scenario = Scenario::from_reader(&mut reader)?;
        Ok((scenario, reader))
    }

    /// Parse the header sections from any buffered reader, leaving it
    /// positioned at the refill schedule.
    pub fn from_reader<R: BufRead>(reader: &mut R) -> SimResult<Scenario> {
        let mut line_no = 0;

        let group_count = parse_uints(&read_line(reader, &mut line_no)?, 1, line_no)?[0] as usize;

        let mut houses = Vec::with_capacity(HOUSE_COUNT);
        for _ in 0..HOUSE_COUNT {
            let fields = parse_uints(&read_line(reader, &mut line_no)?, 3, line_no)?;
            houses.push(HouseSpec {
                loc:   GridPoint::new(fields[0], fields[1]),
                candy: fields[2],
            });
        }

        let mut groups = Vec::with_capacity(group_count);
        for i in 0..group_count {
            let fields = parse_uints(&read_line(reader, &mut line_no)?, 2, line_no)?;
            let (start, size) = (fields[0], fields[1]);
            if start as usize >= HOUSE_COUNT {
                return Err(SimError::StartOutOfRange {
                    group:  i,
                    start,
                    houses: HOUSE_COUNT,
                });
            }
            if size == 0 {
                return Err(SimError::EmptyGroup { group: i });
            }
            groups.push(GroupSpec {
                start_house: HouseId(start),
                size,
            });
        }

        Ok(Scenario { houses, groups })
    }
}

// ── Line helpers ──────────────────────────────────────────────────────────────

fn read_line<R: BufRead>(reader: &mut R, line_no: &mut usize) -> SimResult<String> {
    let mut buf = String::new();
    let n = reader.read_line(&mut buf)?;
    *line_no += 1;
    if n == 0 {
        return Err(SimError::Parse {
            line: *line_no,
            msg:  "unexpected end of file".into(),
        });
    }
    Ok(buf)
}

fn parse_uints(line: &str, expected: usize, line_no: usize) -> SimResult<Vec<u32>> {
    let fields: Vec<u32> = line
        .split_whitespace()
        .map(|field| {
            field.parse::<u32>().map_err(|_| SimError::Parse {
                line: line_no,
                msg:  format!("{field:?} is not an unsigned integer"),
            })
        })
        .collect::<SimResult<_>>()?;

    if fields.len() != expected {
        return Err(SimError::Parse {
            line: line_no,
            msg:  format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    Ok(fields)
}
