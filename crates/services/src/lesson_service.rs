use std::sync::Arc;

use tracing::info;
use tutor_core::model::{LessonContent, Topic};

use crate::completion::{AgentRole, CompletionRequest, TextCompletion, complete_text};
use crate::prompts;

pub const LESSON_FAILED: &str = "Lesson generation failed!";

/// Generates a structured lesson for a topic.
#[derive(Clone)]
pub struct LessonService {
    completion: Arc<dyn TextCompletion>,
}

impl LessonService {
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self { completion }
    }

    /// Returns the lesson text, or [`LESSON_FAILED`] if the model call fails.
    pub async fn generate(&self, topic: &Topic) -> LessonContent {
        let request = CompletionRequest::new(AgentRole::Lesson, prompts::lesson_prompt(topic));
        let text = complete_text(self.completion.as_ref(), request, LESSON_FAILED).await;
        info!(subject = %topic.subject, topic = %topic.topic, len = text.len(), "lesson generated");
        LessonContent::new(text)
    }
}
