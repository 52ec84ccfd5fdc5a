use std::sync::Arc;

use tracing::{info, warn};
use tutor_core::model::{AnswerLetter, McqSession};
use tutor_core::parser::parse_mcqs;

use crate::completion::{AgentRole, CompletionRequest, TextCompletion, complete_or, complete_text};
use crate::prompts;

pub const MCQ_GENERATION_FAILED: &str = "MCQ generation failed!";
pub const MCQ_EVALUATION_FAILED: &str = "MCQ evaluation failed!";
pub const NO_QUESTIONS_TO_EVALUATE: &str = "No questions to evaluate. Generate a quiz first.";

/// Owns the current quiz: generated questions and the learner's picks.
pub struct McqSessionManager {
    completion: Arc<dyn TextCompletion>,
    session: McqSession,
}

impl McqSessionManager {
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self {
            completion,
            session: McqSession::default(),
        }
    }

    /// Replaces the current quiz with freshly generated questions.
    ///
    /// Previous answers are discarded. The model may return fewer than
    /// `count` questions; the session holds whatever could be parsed.
    ///
    /// # Errors
    ///
    /// When the model call fails the session is left empty and
    /// [`MCQ_GENERATION_FAILED`] is returned for display.
    pub async fn generate(
        &mut self,
        topic_prompt: &str,
        count: usize,
    ) -> Result<&McqSession, String> {
        let request = CompletionRequest::new(
            AgentRole::Quiz,
            prompts::mcq_generation_prompt(topic_prompt, count),
        );
        let reply = complete_or(self.completion.as_ref(), request, MCQ_GENERATION_FAILED).await;
        let text = match reply {
            Ok(text) => text,
            Err(placeholder) => {
                self.session = McqSession::default();
                return Err(placeholder);
            }
        };
        let items = parse_mcqs(&text);

        if items.len() < count {
            warn!(
                requested = count,
                parsed = items.len(),
                "fewer questions than requested"
            );
        } else {
            info!(count = items.len(), "quiz generated");
        }

        self.session = McqSession::new(items);
        Ok(&self.session)
    }

    /// Records a selection. Unknown indices are ignored.
    pub fn record_answer(&mut self, index: usize, letter: AnswerLetter) -> bool {
        self.session.record_answer(index, letter)
    }

    /// Sends every question and selection for grading and returns the
    /// model's feedback as-is.
    pub async fn submit_for_evaluation(&self) -> String {
        if self.session.is_empty() {
            return NO_QUESTIONS_TO_EVALUATE.to_string();
        }
        info!(
            questions = self.session.len(),
            answered = self.session.answered_count(),
            "submitting quiz"
        );
        let request = CompletionRequest::new(
            AgentRole::QuizEvaluator,
            prompts::mcq_evaluation_prompt(&self.session),
        );
        complete_text(self.completion.as_ref(), request, MCQ_EVALUATION_FAILED).await
    }

    #[must_use]
    pub fn session(&self) -> &McqSession {
        &self.session
    }
}
