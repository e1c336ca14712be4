/// Core error type for the notifier check.
///
/// Only failures that stop the check before dispatch live here. HTTP
/// rejections and transport faults are outcomes, see [`crate::check::CheckOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing configuration: {}", .missing.join(", "))]
    MissingConfig { missing: Vec<&'static str> },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
