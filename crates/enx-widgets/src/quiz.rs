//! Quiz state machine.
//!
//! States are question indices `0..N` plus a terminal `Completed`.
//! Selecting records an answer for the current question only; advancing
//! is guarded on a recorded answer (callers disable the control; the
//! guard is silent); backward navigation never clears answers; retaking
//! resets everything unconditionally.

use std::collections::HashMap;

/// One multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`.
    pub correct: usize,
}

/// The quiz widget.
#[derive(Debug, Clone)]
pub struct QuizWidget {
    questions: &'static [QuizQuestion],
    cursor: usize,
    completed: bool,
    /// Recorded answers: question index -> option index.
    answers: HashMap<usize, usize>,
}

impl QuizWidget {
    /// Start at question 0 with no answers.
    #[must_use]
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            cursor: 0,
            completed: false,
            answers: HashMap::new(),
        }
    }

    /// All questions.
    #[must_use]
    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// Index of the current question.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the terminal state was reached.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The current question, `None` once completed.
    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.completed {
            None
        } else {
            self.questions.get(self.cursor)
        }
    }

    /// Recorded answer for a question index.
    #[must_use]
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    /// Record an answer for the current question. Out-of-range options
    /// and selections after completion are ignored.
    pub fn select(&mut self, option: usize) {
        let Some(question) = self.current() else {
            return;
        };
        if option < question.options.len() {
            self.answers.insert(self.cursor, option);
        }
    }

    /// Whether the advance control is enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.completed && self.answers.contains_key(&self.cursor)
    }

    /// Move to the next question, or to `Completed` from the last one.
    /// Returns false (and does nothing) without a recorded answer.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if self.cursor + 1 >= self.questions.len() {
            self.completed = true;
        } else {
            self.cursor += 1;
        }
        true
    }

    /// Move back one question. Allowed only while `cursor > 0` and not
    /// completed; recorded answers are kept.
    pub fn back(&mut self) -> bool {
        if self.completed || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Reset to question 0 and clear every recorded answer,
    /// unconditionally.
    pub fn retake(&mut self) {
        self.cursor = 0;
        self.completed = false;
        self.answers.clear();
    }

    /// Number of correctly answered questions (for the completion view).
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers.get(i) == Some(&q.correct))
            .count()
    }
}
