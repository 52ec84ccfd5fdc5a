#![forbid(unsafe_code)]

pub mod completion;
pub mod error;
pub mod interview_service;
pub mod lesson_service;
pub mod mcq_service;
pub mod performance_service;
pub mod prompts;
pub mod tutor_services;

pub use tutor_core::Clock;

pub use completion::{
    AgentRole, CompletionConfig, CompletionRequest, OpenAiCompletion, ScriptedCompletion,
    TextCompletion,
};
pub use error::{CompletionError, InterviewError};
pub use interview_service::{AnswerOutcome, InterviewEngine};
pub use lesson_service::LessonService;
pub use mcq_service::McqSessionManager;
pub use performance_service::PerformanceAggregator;
pub use tutor_services::TutorServices;
