mod difficulty;
mod interview;
mod lesson;
mod mcq;
mod rating;
mod topic;

pub use difficulty::Difficulty;
pub use interview::{
    InterviewPhase, InterviewState, InterviewTurn, RECENT_QUESTION_WINDOW, render_digest,
};
pub use lesson::LessonContent;
pub use mcq::{AnswerLetter, AnswerLetterError, MAX_OPTIONS, McqItem, McqSession};
pub use rating::{Rating, RatingError};
pub use topic::Topic;
