use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Rating};

/// How many previously asked questions are quoted back to the model when
/// asking for a new one.
pub const RECENT_QUESTION_WINDOW: usize = 5;

//
// ─── TURN ─────────────────────────────────────────────────────────────────────
//

/// One answered interview question.
///
/// `difficulty` is the level the question was asked at, not the level the
/// interview moved to afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewTurn {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub rating: Rating,
    pub difficulty: Difficulty,
    pub answered_at: DateTime<Utc>,
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewPhase {
    #[default]
    NotStarted,
    AwaitingAnswer,
    /// Held only while an answer is being graded.
    Evaluating,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Adaptive interview progress for the active learner.
///
/// History and the asked-question list exist from construction; starting an
/// interview clears them rather than creating them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewState {
    current_difficulty: Difficulty,
    history: Vec<InterviewTurn>,
    asked_questions: Vec<String>,
    phase: InterviewPhase,
}

impl InterviewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears previous progress and begins a new interview at `initial`.
    pub fn start(&mut self, initial: Difficulty) {
        self.history.clear();
        self.asked_questions.clear();
        self.current_difficulty = initial;
        self.phase = InterviewPhase::AwaitingAnswer;
    }

    /// Remembers a question that was put to the learner.
    pub fn record_question(&mut self, question: impl Into<String>) {
        self.asked_questions.push(question.into());
    }

    /// The last `window` asked questions, oldest first.
    #[must_use]
    pub fn recent_questions(&self, window: usize) -> &[String] {
        let start = self.asked_questions.len().saturating_sub(window);
        &self.asked_questions[start..]
    }

    pub fn begin_evaluation(&mut self) {
        self.phase = InterviewPhase::Evaluating;
    }

    /// Appends a graded turn and moves the difficulty for the next question.
    ///
    /// The turn is stamped with the difficulty in effect before the move.
    pub fn record_turn(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        feedback: impl Into<String>,
        rating: Rating,
        answered_at: DateTime<Utc>,
    ) -> &InterviewTurn {
        let asked_at = self.current_difficulty;
        self.history.push(InterviewTurn {
            question: question.into(),
            answer: answer.into(),
            feedback: feedback.into(),
            rating,
            difficulty: asked_at,
            answered_at,
        });
        self.current_difficulty = asked_at.adjust(rating);
        self.phase = InterviewPhase::AwaitingAnswer;
        &self.history[self.history.len() - 1]
    }

    /// Stops the interview but keeps the history for the summary.
    pub fn finish(&mut self) {
        self.phase = InterviewPhase::NotStarted;
    }

    /// Drops everything, as on a session reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn current_difficulty(&self) -> Difficulty {
        self.current_difficulty
    }

    #[must_use]
    pub fn history(&self) -> &[InterviewTurn] {
        &self.history
    }

    #[must_use]
    pub fn asked_questions(&self) -> &[String] {
        &self.asked_questions
    }

    #[must_use]
    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.phase != InterviewPhase::NotStarted
    }

    /// See [`render_digest`].
    #[must_use]
    pub fn performance_digest(&self) -> Option<String> {
        render_digest(&self.history)
    }
}

/// One line per turn, in the order they were answered:
///
/// ```text
/// 1. [Medium] <question> (Rating: 4/5)
/// ```
///
/// Returns `None` for an empty history.
#[must_use]
pub fn render_digest(history: &[InterviewTurn]) -> Option<String> {
    if history.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (i, turn) in history.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            "{}. [{}] {} (Rating: {})",
            i + 1,
            turn.difficulty,
            turn.question.trim(),
            turn.rating
        );
    }
    Some(out)
}
