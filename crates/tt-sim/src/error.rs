use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("group {group} starts at house {start} but only {houses} houses exist")]
    StartOutOfRange {
        group:  usize,
        start:  u32,
        houses: usize,
    },

    #[error("group {group} has size 0; every group needs at least one member")]
    EmptyGroup { group: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
