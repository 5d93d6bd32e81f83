use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::models::{OutcomeReason, QuestionBank, SessionOutcome};
use crate::session::{EventReceivers, QuizSession, event_channels};
use crossbeam_channel::{Receiver, after, never, select_biased};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Owns the deadline and the score tally for a single quiz run.
#[derive(Debug, Clone)]
pub struct SessionController {
    time_limit: Duration,
}

impl SessionController {
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_time_limit(config.time_limit)
    }

    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self { time_limit }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Arms the deadline, starts the session thread and waits for whichever
    /// terminal event comes first.
    ///
    /// The session thread is left running if the deadline wins; it is parked on
    /// a read and goes away with the process.
    pub fn run<R, W>(
        &self,
        bank: Arc<QuestionBank>,
        input: R,
        transcript: W,
    ) -> Result<SessionOutcome, QuizError>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let deadline = after(self.time_limit);
        let total_count = bank.len();
        let (events, receivers) = event_channels();

        info!(
            questions = total_count,
            time_limit = ?self.time_limit,
            "quiz started"
        );
        QuizSession::new(bank, input, transcript)
            .spawn(events)
            .map_err(QuizError::SessionThread)?;

        let outcome = await_outcome(total_count, &receivers, &deadline);
        info!(
            correct = outcome.correct_count,
            total = outcome.total_count,
            reason = ?outcome.reason,
            "quiz ended"
        );
        Ok(outcome)
    }
}

/// Tallies score events until the deadline fires or the session completes.
///
/// Selection is biased: a queued score is always taken before either terminal
/// event, and an expired deadline is taken before completion.
pub fn await_outcome(
    total_count: usize,
    events: &EventReceivers,
    deadline: &Receiver<Instant>,
) -> SessionOutcome {
    let mut correct_count = 0;
    let mut scores_open = true;
    let closed = never();

    let reason = loop {
        // A disconnected channel is always ready, so swap it out once closed.
        let scores = if scores_open { &events.score } else { &closed };
        select_biased! {
            recv(scores) -> msg => match msg {
                Ok(_) => correct_count += 1,
                Err(_) => scores_open = false,
            },
            recv(deadline) -> _ => break OutcomeReason::Timeout,
            recv(events.completion) -> msg => {
                if msg.is_err() {
                    debug!("session ended without a completion signal");
                }
                break OutcomeReason::Completed;
            }
        }
    };

    SessionOutcome {
        correct_count,
        total_count,
        reason,
    }
}
