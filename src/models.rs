use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswer {
    pub prompt: String,
    pub expected_answer: String,
}

impl QuestionAnswer {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Exact comparison; callers strip the line terminator first.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.expected_answer
    }
}

/// Ordered questions. Order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionAnswer>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionAnswer>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionAnswer> {
        self.questions.iter()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }
}

impl FromIterator<QuestionAnswer> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = QuestionAnswer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionAnswer;
    type IntoIter = std::slice::Iter<'a, QuestionAnswer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One more correct answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent;

/// The question sequence is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeReason {
    Timeout,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub correct_count: usize,
    pub total_count: usize,
    pub reason: OutcomeReason,
}
