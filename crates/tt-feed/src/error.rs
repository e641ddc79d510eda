use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed refill line: {0}")]
    Parse(String),

    #[error("refill references house {house} but only {count} houses exist")]
    UnknownHouse { house: u32, count: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
