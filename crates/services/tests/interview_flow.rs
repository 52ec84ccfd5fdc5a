use std::sync::Arc;

use services::interview_service::{EVALUATION_FAILED, NO_ANSWER_PROVIDED, QUESTION_FAILED};
use services::{AgentRole, InterviewEngine, InterviewError, ScriptedCompletion};
use tutor_core::model::{Difficulty, InterviewPhase, Rating, Topic};
use tutor_core::time::{fixed_clock, fixed_now};

fn topic() -> Topic {
    Topic::new("Rust", "concurrency")
}

#[tokio::test]
async fn strong_answer_promotes_before_next_question() {
    let script = Arc::new(ScriptedCompletion::with_replies([
        "What does Arc provide?",
        "Rating: 5/5\n\nFeedback: Precise and complete.",
        "How would you avoid deadlocks with several mutexes?",
    ]));
    let mut engine = InterviewEngine::new(script.clone()).with_clock(fixed_clock());

    let question = engine.start(&topic(), Difficulty::Medium).await;
    assert_eq!(question, "What does Arc provide?");
    assert_eq!(engine.state().phase(), InterviewPhase::AwaitingAnswer);
    assert!(script.last_request().unwrap().content.contains("one Medium interview question"));

    let outcome = engine
        .submit_answer(&question, "Shared ownership across threads.")
        .await
        .unwrap();
    assert_eq!(outcome.turn.difficulty, Difficulty::Medium);
    assert_eq!(outcome.turn.rating, Rating::new(5).unwrap());
    assert_eq!(outcome.turn.answered_at, fixed_now());
    assert_eq!(outcome.next_difficulty, Difficulty::Hard);
    assert!(outcome.difficulty_changed());
    assert_eq!(engine.state().current_difficulty(), Difficulty::Hard);
    assert_eq!(script.last_request().unwrap().role, AgentRole::Feedback);

    engine.generate_next_question(&topic(), None).await.unwrap();
    let request = script.last_request().unwrap();
    assert_eq!(request.role, AgentRole::Interviewer);
    assert!(request.content.contains("one Hard interview question"));
    assert!(request.content.contains("- What does Arc provide?"));
}

#[tokio::test]
async fn weak_answers_demote_one_level_at_a_time() {
    let script = Arc::new(ScriptedCompletion::with_replies([
        "Q one",
        "Rating: 1/5",
        "Rating: 1/5",
        "Rating: 2/5",
    ]));
    let mut engine = InterviewEngine::new(script);
    engine.start(&topic(), Difficulty::Hard).await;

    let first = engine.submit_answer("Q one", "no idea").await.unwrap();
    assert_eq!(first.previous_difficulty, Difficulty::Hard);
    assert_eq!(first.next_difficulty, Difficulty::Medium);
    let second = engine.submit_answer("Q one", "still no idea").await.unwrap();
    assert_eq!(second.next_difficulty, Difficulty::Easy);
    let third = engine.submit_answer("Q one", "nope").await.unwrap();
    assert_eq!(third.next_difficulty, Difficulty::Easy);
    assert!(!third.difficulty_changed());

    let levels: Vec<Difficulty> = engine.history().iter().map(|t| t.difficulty).collect();
    assert_eq!(levels, [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]);
}

#[tokio::test]
async fn unparseable_rating_keeps_difficulty() {
    let script = Arc::new(ScriptedCompletion::with_replies(["Q", "Rating: great/5"]));
    let mut engine = InterviewEngine::new(script);
    engine.start(&topic(), Difficulty::Easy).await;

    let outcome = engine.submit_answer("Q", "answer").await.unwrap();
    assert_eq!(outcome.turn.rating, Rating::DEFAULT);
    assert_eq!(engine.state().current_difficulty(), Difficulty::Easy);
}

#[tokio::test]
async fn only_last_five_questions_are_quoted() {
    let script = Arc::new(ScriptedCompletion::with_replies(
        (1..=8).map(|n| format!("Question #{n}?")),
    ));
    let mut engine = InterviewEngine::new(script.clone());

    engine.start(&topic(), Difficulty::Medium).await;
    for _ in 2..=7 {
        engine.generate_next_question(&topic(), None).await.unwrap();
    }
    assert_eq!(engine.state().asked_questions().len(), 7);

    engine
        .generate_next_question(&topic(), Some("1. [Medium] x (Rating: 3/5)"))
        .await
        .unwrap();
    let prompt = script.last_request().unwrap().content;

    let quoted: Vec<&str> = prompt
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .collect();
    assert_eq!(
        quoted,
        ["Question #3?", "Question #4?", "Question #5?", "Question #6?", "Question #7?"]
    );
    assert!(prompt.contains("1. [Medium] x (Rating: 3/5)"));
    assert_eq!(engine.current_question(), Some("Question #8?"));
}

#[tokio::test]
async fn failed_calls_fall_back_to_placeholders() {
    let script = Arc::new(ScriptedCompletion::new());
    script.push_failure("network down");
    script.push_failure("network down");
    let mut engine = InterviewEngine::new(script);

    let question = engine.start(&topic(), Difficulty::Medium).await;
    assert_eq!(question, QUESTION_FAILED);
    assert!(engine.state().asked_questions().is_empty());
    assert!(engine.state().in_progress());

    let outcome = engine.submit_answer("Q", "A").await.unwrap();
    assert_eq!(outcome.turn.feedback, EVALUATION_FAILED);
    assert_eq!(outcome.turn.rating, Rating::DEFAULT);
    assert_eq!(outcome.next_difficulty, Difficulty::Medium);
}

#[tokio::test]
async fn end_keeps_history_and_blocks_answers() {
    let script = Arc::new(ScriptedCompletion::with_replies(["Q", "Rating: 4/5"]));
    let mut engine = InterviewEngine::new(script);

    assert_eq!(engine.submit_answer("Q", "A").await, Err(InterviewError::NotStarted));

    engine.start(&topic(), Difficulty::Medium).await;
    engine.submit_answer("Q", "A").await.unwrap();
    engine.end();

    assert_eq!(engine.state().phase(), InterviewPhase::NotStarted);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.submit_answer("Q", "A").await, Err(InterviewError::NotStarted));

    engine.reset();
    assert!(engine.history().is_empty());
}

#[tokio::test]
async fn next_question_is_refused_after_end() {
    let script = Arc::new(ScriptedCompletion::with_replies(["First?", "Unused?"]));
    let mut engine = InterviewEngine::new(script.clone());

    assert_eq!(
        engine.generate_next_question(&topic(), None).await,
        Err(InterviewError::NotStarted)
    );

    engine.start(&topic(), Difficulty::Medium).await;
    engine.end();

    assert_eq!(
        engine.generate_next_question(&topic(), None).await,
        Err(InterviewError::NotStarted)
    );
    assert_eq!(engine.state().asked_questions(), ["First?"]);
    assert_eq!(script.requests().len(), 1);
    assert_eq!(script.remaining(), 1);
}

#[tokio::test]
async fn blank_answer_is_not_sent_for_grading() {
    let script = Arc::new(ScriptedCompletion::with_replies(["What is Pin?"]));
    let mut engine = InterviewEngine::new(script.clone());
    engine.start(&topic(), Difficulty::Hard).await;

    let outcome = engine.submit_answer("What is Pin?", "   \n").await.unwrap();

    assert_eq!(outcome.turn.feedback, NO_ANSWER_PROVIDED);
    assert_eq!(outcome.turn.rating, Rating::DEFAULT);
    assert_eq!(outcome.next_difficulty, Difficulty::Hard);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(script.requests().len(), 1);
    assert_eq!(script.last_request().unwrap().role, AgentRole::Interviewer);
}
