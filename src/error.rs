use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be opened at all.
    #[error("cannot open question source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start quiz session thread: {0}")]
    SessionThread(#[source] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    Logger {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
