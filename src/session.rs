use crate::models::{CompletionSignal, QuestionBank, ScoreEvent};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Sending half of the session's event channels, owned by the session thread.
#[derive(Debug)]
pub struct SessionEvents {
    pub score: Sender<ScoreEvent>,
    pub completion: Sender<CompletionSignal>,
}

/// Receiving half, owned by the controller.
#[derive(Debug)]
pub struct EventReceivers {
    pub score: Receiver<ScoreEvent>,
    pub completion: Receiver<CompletionSignal>,
}

/// Unbounded so a send never blocks or drops a score.
pub fn event_channels() -> (SessionEvents, EventReceivers) {
    let (score_tx, score_rx) = unbounded();
    let (completion_tx, completion_rx) = unbounded();
    (
        SessionEvents {
            score: score_tx,
            completion: completion_tx,
        },
        EventReceivers {
            score: score_rx,
            completion: completion_rx,
        },
    )
}

/// Asks every question in order and reports correct answers as events.
///
/// The session knows nothing about the deadline or the running score; it only
/// sends a [`ScoreEvent`] per correct answer and a single [`CompletionSignal`]
/// once the bank is exhausted.
pub struct QuizSession<R, W> {
    bank: Arc<QuestionBank>,
    input: R,
    transcript: W,
}

impl<R: BufRead, W: Write> QuizSession<R, W> {
    pub fn new(bank: Arc<QuestionBank>, input: R, transcript: W) -> Self {
        Self {
            bank,
            input,
            transcript,
        }
    }

    /// Runs to completion on the current thread and hands back the transcript.
    pub fn run(mut self, events: SessionEvents) -> W {
        for (index, question) in self.bank.iter().enumerate() {
            if let Err(e) = present_prompt(&mut self.transcript, &question.prompt) {
                warn!(question = index, error = %e, "failed to write prompt");
            }

            match read_answer(&mut self.input) {
                Ok(Some(answer)) => {
                    if question.is_correct(&answer) {
                        debug!(question = index, "correct answer");
                        // Controller already gone; nothing left to report to.
                        let _ = events.score.send(ScoreEvent);
                    } else {
                        debug!(question = index, "incorrect answer");
                    }
                }
                Ok(None) => {
                    debug!(question = index, "input closed, question unanswered");
                }
                Err(e) => {
                    debug!(question = index, error = %e, "answer read failed, question unanswered");
                }
            }
        }

        debug!(questions = self.bank.len(), "question bank exhausted");
        let _ = events.completion.send(CompletionSignal);
        self.transcript
    }
}

impl<R, W> QuizSession<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    pub fn spawn(self, events: SessionEvents) -> io::Result<thread::JoinHandle<W>> {
        thread::Builder::new()
            .name("timed-quiz::session".to_string())
            .spawn(move || self.run(events))
    }
}

fn present_prompt<W: Write>(transcript: &mut W, prompt: &str) -> io::Result<()> {
    write!(transcript, "{} > ", prompt)?;
    transcript.flush()
}

/// Reads one newline-terminated answer. A final line without a terminator
/// counts as end of input, same as an empty stream.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let Some(answer) = line.strip_suffix('\n') else {
        return Ok(None);
    };
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(Some(answer.to_string()))
}
