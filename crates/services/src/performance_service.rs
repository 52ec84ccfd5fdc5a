use std::sync::Arc;

use tracing::info;
use tutor_core::model::{InterviewTurn, render_digest};

use crate::completion::{AgentRole, CompletionRequest, TextCompletion, complete_text};
use crate::prompts;

pub const NO_INTERVIEW_TURNS: &str = "No interview questions were answered.";
pub const NO_MCQ_FEEDBACK: &str = "No MCQ feedback available.";
pub const SUMMARY_FAILED: &str = "Performance summary failed!";

/// Combines quiz feedback and interview history into one overall review.
#[derive(Clone)]
pub struct PerformanceAggregator {
    completion: Arc<dyn TextCompletion>,
}

impl PerformanceAggregator {
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self { completion }
    }

    /// Returns the model's summary, or [`SUMMARY_FAILED`].
    ///
    /// Missing inputs are replaced by fixed placeholder lines in the request.
    pub async fn summarize(&self, mcq_feedback: Option<&str>, history: &[InterviewTurn]) -> String {
        let request = CompletionRequest::new(
            AgentRole::Performance,
            summary_document(mcq_feedback, history),
        );
        info!(turns = history.len(), has_mcq = mcq_feedback.is_some(), "summarizing performance");
        complete_text(self.completion.as_ref(), request, SUMMARY_FAILED).await
    }
}

fn summary_document(mcq_feedback: Option<&str>, history: &[InterviewTurn]) -> String {
    let digest = render_digest(history).unwrap_or_else(|| NO_INTERVIEW_TURNS.to_string());
    let mcq = mcq_feedback
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_MCQ_FEEDBACK);
    prompts::performance_prompt(mcq, &digest)
}
