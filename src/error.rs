use thiserror::Error;

/// Fatal startup error: the bundled dataset could not be turned into
/// servable state. Never recovered or retried; the process aborts
/// before it accepts any traffic.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("bundled dataset is unreadable: {0}")]
    Read(#[from] std::io::Error),

    #[error("bundled dataset is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
