pub mod config;
pub mod controller;
pub mod csv;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod summary;

// Re-exports for convenience
pub use config::QuizConfig;
pub use controller::{SessionController, await_outcome};
pub use csv::{load_questions, read_questions};
pub use error::QuizError;
pub use models::{
    CompletionSignal, OutcomeReason, QuestionAnswer, QuestionBank, ScoreEvent, SessionOutcome,
};
pub use session::{EventReceivers, QuizSession, SessionEvents, event_channels};
pub use summary::write_outcome;
