//! The text-completion seam every tutoring service talks through.

mod openai;
mod scripted;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::CompletionError;

pub use openai::{CompletionConfig, OpenAiCompletion};
pub use scripted::ScriptedCompletion;

/// The agent persona a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    Lesson,
    Quiz,
    QuizEvaluator,
    Interviewer,
    Feedback,
    Performance,
}

impl AgentRole {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lesson => "lesson_agent",
            Self::Quiz => "quiz_agent",
            Self::QuizEvaluator => "quiz_evaluator",
            Self::Interviewer => "interview_agent",
            Self::Feedback => "feedback_agent",
            Self::Performance => "performance_agent",
        }
    }

    /// Standing instructions sent as the system message.
    #[must_use]
    pub fn system_message(self) -> &'static str {
        match self {
            Self::Lesson => {
                "Create detailed, structured learning modules on the given topic. \
                 Include an introduction, key concepts, examples, and a summary. \
                 Do not include your thought process, only the lesson content."
            }
            Self::Quiz => {
                "Write multiple-choice questions. Follow the requested output format \
                 exactly and do not add introductions, explanations, or closing remarks."
            }
            Self::QuizEvaluator => {
                "Grade the learner's multiple-choice answers against the correct \
                 answers. Mark each question right or wrong with a short explanation, \
                 then give an overall score."
            }
            Self::Interviewer => {
                "Act as a technical interviewer. Ask exactly one interview question at \
                 the requested difficulty. Do not include the answer or any preamble."
            }
            Self::Feedback => {
                "Evaluate the user's answer for clarity, accuracy, and depth. Give \
                 constructive feedback with concrete suggestions for improvement. \
                 Do not include your thought process, only the feedback."
            }
            Self::Performance => {
                "Act as a learning coach. Summarize the learner's overall performance, \
                 naming strengths, weak areas, and concrete next steps."
            }
        }
    }
}

/// A role-tagged prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub role: AgentRole,
    pub content: String,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(role: AgentRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// # Errors
    ///
    /// Returns `CompletionError` on transport, auth, quota or empty replies.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Runs a request and substitutes `placeholder` for any failure.
pub(crate) async fn complete_or(
    completion: &dyn TextCompletion,
    request: CompletionRequest,
    placeholder: &str,
) -> Result<String, String> {
    debug!(
        agent = request.role.name(),
        prompt_len = request.content.len(),
        "sending completion request"
    );
    match completion.complete(&request).await {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(agent = request.role.name(), error = %err, "completion failed");
            Err(placeholder.to_string())
        }
    }
}

/// Like [`complete_or`] for callers that only need something to display.
pub(crate) async fn complete_text(
    completion: &dyn TextCompletion,
    request: CompletionRequest,
    placeholder: &str,
) -> String {
    complete_or(completion, request, placeholder)
        .await
        .unwrap_or_else(|placeholder| placeholder)
}
