use std::sync::Arc;

use tutor_core::Clock;

use crate::completion::{CompletionConfig, OpenAiCompletion, TextCompletion};
use crate::interview_service::InterviewEngine;
use crate::lesson_service::LessonService;
use crate::mcq_service::McqSessionManager;
use crate::performance_service::PerformanceAggregator;

/// Wires one completion backend into every tutoring service.
#[derive(Clone)]
pub struct TutorServices {
    clock: Clock,
    completion: Arc<dyn TextCompletion>,
    lesson: Arc<LessonService>,
    performance: Arc<PerformanceAggregator>,
}

impl TutorServices {
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self {
            clock: Clock::default(),
            lesson: Arc::new(LessonService::new(Arc::clone(&completion))),
            performance: Arc::new(PerformanceAggregator::new(Arc::clone(&completion))),
            completion,
        }
    }

    /// Builds services against the configured HTTP backend.
    ///
    /// Returns `None` without an API key; see `CompletionConfig::from_env`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let config = CompletionConfig::from_env()?;
        Some(Self::new(Arc::new(OpenAiCompletion::new(config))))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn lesson(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson)
    }

    #[must_use]
    pub fn performance(&self) -> Arc<PerformanceAggregator> {
        Arc::clone(&self.performance)
    }

    /// A fresh, empty quiz session.
    #[must_use]
    pub fn mcq_session(&self) -> McqSessionManager {
        McqSessionManager::new(Arc::clone(&self.completion))
    }

    /// A fresh interview that has not started yet.
    #[must_use]
    pub fn interview(&self) -> InterviewEngine {
        InterviewEngine::new(Arc::clone(&self.completion)).with_clock(self.clock)
    }
}
