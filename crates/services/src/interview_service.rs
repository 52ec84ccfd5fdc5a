use std::sync::Arc;

use tracing::{debug, info};
use tutor_core::Clock;
use tutor_core::model::{Difficulty, InterviewState, InterviewTurn, RECENT_QUESTION_WINDOW, Topic};
use tutor_core::parser::extract_rating;

use crate::completion::{AgentRole, CompletionRequest, TextCompletion, complete_or, complete_text};
use crate::error::InterviewError;
use crate::prompts;

pub const QUESTION_FAILED: &str = "Interview question generation failed!";
pub const EVALUATION_FAILED: &str = "Evaluation failed!";
pub const NO_ANSWER_PROVIDED: &str =
    "No answer provided. Please provide an answer for evaluation.";

/// What happened when an answer was graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub turn: InterviewTurn,
    pub previous_difficulty: Difficulty,
    pub next_difficulty: Difficulty,
}

impl AnswerOutcome {
    #[must_use]
    pub fn difficulty_changed(&self) -> bool {
        self.previous_difficulty != self.next_difficulty
    }
}

/// Adaptive interview: one question at a time, difficulty steered by the
/// rating of each answer.
pub struct InterviewEngine {
    completion: Arc<dyn TextCompletion>,
    clock: Clock,
    state: InterviewState,
}

impl InterviewEngine {
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self {
            completion,
            clock: Clock::default(),
            state: InterviewState::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Starts over at `initial` and asks the first question.
    ///
    /// Returns the question text, or [`QUESTION_FAILED`].
    pub async fn start(&mut self, topic: &Topic, initial: Difficulty) -> String {
        self.state.start(initial);
        info!(subject = %topic.subject, topic = %topic.topic, %initial, "interview started");
        self.ask_question(topic, None).await
    }

    /// Asks for one question at the current difficulty.
    ///
    /// The prompt quotes the last few questions so the model avoids them, and
    /// passes `performance_summary` along for calibration when given. Nothing
    /// stops the model from repeating itself anyway.
    ///
    /// A failed call returns [`QUESTION_FAILED`], which is not remembered as
    /// an asked question.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NotStarted` when no interview is running.
    pub async fn generate_next_question(
        &mut self,
        topic: &Topic,
        performance_summary: Option<&str>,
    ) -> Result<String, InterviewError> {
        if !self.state.in_progress() {
            return Err(InterviewError::NotStarted);
        }
        Ok(self.ask_question(topic, performance_summary).await)
    }

    async fn ask_question(&mut self, topic: &Topic, performance_summary: Option<&str>) -> String {
        let difficulty = self.state.current_difficulty();
        let prompt = prompts::interview_question_prompt(
            topic,
            difficulty,
            self.state.recent_questions(RECENT_QUESTION_WINDOW),
            performance_summary,
        );
        let request = CompletionRequest::new(AgentRole::Interviewer, prompt);
        match complete_or(self.completion.as_ref(), request, QUESTION_FAILED).await {
            Ok(question) => {
                let question = question.trim().to_string();
                debug!(
                    %difficulty,
                    asked = self.state.asked_questions().len() + 1,
                    "question generated"
                );
                self.state.record_question(question.clone());
                question
            }
            Err(placeholder) => placeholder,
        }
    }

    /// Grades an answer, records the turn and moves the difficulty.
    ///
    /// A blank answer is not sent to the model; it is recorded with
    /// [`NO_ANSWER_PROVIDED`] as feedback, which carries the default rating.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NotStarted` when no interview is running.
    pub async fn submit_answer(
        &mut self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerOutcome, InterviewError> {
        if !self.state.in_progress() {
            return Err(InterviewError::NotStarted);
        }

        self.state.begin_evaluation();
        let feedback = if answer.trim().is_empty() {
            NO_ANSWER_PROVIDED.to_string()
        } else {
            let request = CompletionRequest::new(
                AgentRole::Feedback,
                prompts::feedback_prompt(question, answer),
            );
            complete_text(self.completion.as_ref(), request, EVALUATION_FAILED).await
        };
        let rating = extract_rating(&feedback);

        let previous_difficulty = self.state.current_difficulty();
        let turn = self
            .state
            .record_turn(question, answer, feedback, rating, self.clock.now())
            .clone();
        let next_difficulty = self.state.current_difficulty();

        if previous_difficulty != next_difficulty {
            info!(
                rating = rating.value(),
                from = %previous_difficulty,
                to = %next_difficulty,
                "interview difficulty adjusted"
            );
        } else {
            debug!(rating = rating.value(), difficulty = %next_difficulty, "difficulty unchanged");
        }

        Ok(AnswerOutcome {
            turn,
            previous_difficulty,
            next_difficulty,
        })
    }

    /// Stops the interview. History stays available for the summary.
    pub fn end(&mut self) {
        self.state.finish();
        info!(turns = self.state.history().len(), "interview ended");
    }

    /// Forgets the interview entirely.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[must_use]
    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[InterviewTurn] {
        self.state.history()
    }

    /// The most recently asked question, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.state.asked_questions().last().map(String::as_str)
    }
}
