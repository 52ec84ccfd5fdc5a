//! Prompt text for every tutoring request.
//!
//! All builders are pure so the exact wording can be asserted in tests.

use std::fmt::Write as _;

use tutor_core::model::{Difficulty, LessonContent, McqSession, Topic};

#[must_use]
pub fn lesson_prompt(topic: &Topic) -> String {
    if topic.topic.is_empty() {
        format!("Create a lesson plan for {}.", topic.subject)
    } else {
        format!("Create a lesson plan on {} for {}.", topic.topic, topic.subject)
    }
}

/// Describes what the quiz should cover, optionally grounded in a lesson.
#[must_use]
pub fn mcq_topic_prompt(topic: &Topic, lesson: Option<&LessonContent>) -> String {
    match lesson.filter(|l| !l.is_empty()) {
        Some(lesson) => format!(
            "{}, based on the following lesson:\n\n{}",
            topic.describe(),
            lesson.as_str().trim()
        ),
        None => topic.describe(),
    }
}

/// Asks for exactly `count` questions in the format `parse_mcqs` reads.
#[must_use]
pub fn mcq_generation_prompt(topic_prompt: &str, count: usize) -> String {
    format!(
        "Generate exactly {count} multiple-choice questions about {topic_prompt}.\n\
         \n\
         Use exactly this format for every question, with nothing before or after:\n\
         \n\
         Q1. <question text>\n\
         A) <option>\n\
         B) <option>\n\
         C) <option>\n\
         D) <option>\n\
         Correct Answer: <A, B, C or D>\n\
         \n\
         Number the questions Q1 to Q{count} and leave a blank line between questions."
    )
}

/// One document listing every question with the learner's selection.
#[must_use]
pub fn mcq_evaluation_prompt(session: &McqSession) -> String {
    let mut out = String::from(
        "Evaluate the learner's answers to the following multiple-choice questions. \
         For each question say whether the answer is correct and explain briefly, \
         then give an overall score.\n",
    );
    for (_, item, answer) in session.iter() {
        out.push('\n');
        out.push_str(item.text.trim());
        out.push('\n');
        for option in &item.options {
            out.push_str(option);
            out.push('\n');
        }
        if let Some(correct) = &item.correct_answer {
            let _ = writeln!(out, "Correct Answer: {correct}");
        }
        match answer {
            Some(letter) => {
                let _ = writeln!(out, "Learner's Answer: {letter}");
            }
            None => out.push_str("Learner's Answer: (not answered)\n"),
        }
    }
    out
}

/// Asks for one question at `difficulty`, steering away from `recent`.
///
/// `recent` is quoted verbatim and in the order given; the caller bounds it.
#[must_use]
pub fn interview_question_prompt(
    topic: &Topic,
    difficulty: Difficulty,
    recent: &[String],
    performance_summary: Option<&str>,
) -> String {
    let mut out = format!(
        "Generate one {difficulty} interview question about {}.\n\
         Respond with the question only.\n",
        topic.describe()
    );
    if !recent.is_empty() {
        out.push_str("\nDo not repeat any of these previously asked questions:\n");
        for question in recent {
            let _ = writeln!(out, "- {}", question.trim());
        }
    }
    if let Some(summary) = performance_summary.map(str::trim).filter(|s| !s.is_empty()) {
        let _ = write!(
            out,
            "\nCalibrate the question to the candidate's performance so far:\n{summary}\n"
        );
    }
    out
}

/// Asks for feedback that starts with a parseable `Rating: N/5` line.
#[must_use]
pub fn feedback_prompt(question: &str, answer: &str) -> String {
    format!(
        "Evaluate this answer to an interview question.\n\
         \n\
         Question: {}\n\
         Answer: {}\n\
         \n\
         Start your reply with a line of the form \"Rating: N/5\" where N is a whole \
         number from 1 (poor) to 5 (excellent), followed by a blank line and \
         \"Feedback:\" with your evaluation.",
        question.trim(),
        answer.trim()
    )
}

#[must_use]
pub fn performance_prompt(mcq_feedback: &str, interview_digest: &str) -> String {
    format!(
        "Summarize this learner's overall performance from the results below.\n\
         \n\
         Multiple-choice quiz feedback:\n\
         {}\n\
         \n\
         Interview questions (difficulty and rating per answer):\n\
         {}",
        mcq_feedback.trim(),
        interview_digest.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::model::{AnswerLetter, McqItem};

    #[test]
    fn lesson_prompt_mentions_topic_and_subject() {
        let prompt = lesson_prompt(&Topic::new("Rust", "traits"));
        assert_eq!(prompt, "Create a lesson plan on traits for Rust.");
        assert_eq!(
            lesson_prompt(&Topic::new("Rust", "")),
            "Create a lesson plan for Rust."
        );
    }

    #[test]
    fn mcq_topic_prompt_includes_lesson_when_present() {
        let topic = Topic::new("Rust", "traits");
        assert_eq!(mcq_topic_prompt(&topic, None), "traits in Rust");
        let lesson = LessonContent::new("Traits define shared behaviour.");
        let prompt = mcq_topic_prompt(&topic, Some(&lesson));
        assert!(prompt.starts_with("traits in Rust, based on the following lesson:"));
        assert!(prompt.ends_with("Traits define shared behaviour."));
        let blank = LessonContent::new("  ");
        assert_eq!(mcq_topic_prompt(&topic, Some(&blank)), "traits in Rust");
    }

    #[test]
    fn generation_prompt_states_count_and_format() {
        let prompt = mcq_generation_prompt("traits in Rust", 3);
        assert!(prompt.starts_with("Generate exactly 3 multiple-choice questions"));
        assert!(prompt.contains("\nA) <option>\n"));
        assert!(prompt.contains("Correct Answer: <A, B, C or D>"));
        assert!(prompt.contains("Q1 to Q3"));
    }

    #[test]
    fn evaluation_prompt_marks_unanswered_questions() {
        let mut item = McqItem::new("Q1. Pick");
        item.push_option("A) yes");
        item.push_option("B) no");
        let mut session = McqSession::new(vec![item.clone(), item]);
        session.record_answer(1, AnswerLetter::B);

        let prompt = mcq_evaluation_prompt(&session);
        assert!(prompt.contains("Q1. Pick\nA) yes\nB) no\nLearner's Answer: (not answered)\n"));
        assert!(prompt.contains("Learner's Answer: B\n"));
        assert!(!prompt.contains("Correct Answer:"));
    }

    #[test]
    fn interview_prompt_sections_are_optional() {
        let topic = Topic::new("Rust", "async");
        let bare = interview_question_prompt(&topic, Difficulty::Easy, &[], None);
        assert!(bare.starts_with("Generate one Easy interview question about async in Rust."));
        assert!(!bare.contains("Do not repeat"));
        assert!(!bare.contains("Calibrate"));

        let recent = vec!["What is a future?".to_string()];
        let full = interview_question_prompt(
            &topic,
            Difficulty::Hard,
            &recent,
            Some("1. [Medium] What is a future? (Rating: 5/5)"),
        );
        assert!(full.contains("one Hard interview question"));
        assert!(full.contains("- What is a future?\n"));
        assert!(full.contains("Calibrate the question"));
    }

    #[test]
    fn feedback_prompt_requests_rating_line() {
        let prompt = feedback_prompt(" What is Send? ", "A marker trait.");
        assert!(prompt.contains("Question: What is Send?\n"));
        assert!(prompt.contains("Answer: A marker trait.\n"));
        assert!(prompt.contains("\"Rating: N/5\""));
    }
}
