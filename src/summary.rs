use crate::models::{OutcomeReason, SessionOutcome};
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            OutcomeReason::Timeout => write!(
                f,
                "\nQuiz timeout.\n{} out of {}",
                self.correct_count, self.total_count
            ),
            OutcomeReason::Completed => write!(
                f,
                "\nQuiz finished.{} out of {}",
                self.correct_count, self.total_count
            ),
        }
    }
}

pub fn write_outcome<W: Write>(transcript: &mut W, outcome: &SessionOutcome) -> io::Result<()> {
    writeln!(transcript, "{}", outcome)?;
    transcript.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: SessionOutcome) -> String {
        let mut buffer = Vec::new();
        write_outcome(&mut buffer, &outcome).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_timeout_summary() {
        let text = render(SessionOutcome {
            correct_count: 3,
            total_count: 12,
            reason: OutcomeReason::Timeout,
        });
        assert_eq!(text, "\nQuiz timeout.\n3 out of 12\n");
    }

    #[test]
    fn test_finished_summary() {
        let text = render(SessionOutcome {
            correct_count: 2,
            total_count: 2,
            reason: OutcomeReason::Completed,
        });
        assert_eq!(text, "\nQuiz finished.2 out of 2\n");
    }
}
