use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the pool has no entries")]
    Empty,
    /// `position` is the 1-based line (ndjson) or array entry.
    #[error("entry {position} is malformed: {reason}")]
    Malformed { position: usize, reason: String },
    #[error("entry {position} is out of range: ({lat}, {lng})")]
    OutOfRange { position: usize, lat: f64, lng: f64 },
    #[error("the item pool holds {available} distinct items but {required} are drawn per spot")]
    TooFewItems { available: usize, required: usize },
}
