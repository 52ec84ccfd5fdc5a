//! Turns free-form model output into typed records.
//!
//! Neither function here fails: malformed input yields fewer questions or the
//! default rating, and callers are expected to cope with that.

use crate::model::{McqItem, Rating};

const OPTION_PREFIXES: [&str; 4] = ["A)", "B)", "C)", "D)"];
const CORRECT_ANSWER_PREFIX: &str = "Correct Answer:";
const RATING_MARKER: &str = "Rating:";

/// Parses the `Q1. / A) .. D) / Correct Answer: X` convention.
///
/// ```
/// # use tutor_core::parser::parse_mcqs;
/// let text = "Q1. 2 + 2?\nA) 3\nB) 4\nC) 5\nD) 22\nCorrect Answer: B";
/// let items = parse_mcqs(text);
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].options[1], "B) 4");
/// assert_eq!(items[0].correct_answer.as_deref(), Some("B"));
/// ```
#[must_use]
pub fn parse_mcqs(text: &str) -> Vec<McqItem> {
    let mut items = Vec::new();
    let mut current: Option<McqItem> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_question_header(line) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            current = Some(McqItem::new(line));
            continue;
        }

        let Some(item) = current.as_mut() else {
            continue;
        };

        if OPTION_PREFIXES.iter().any(|p| line.starts_with(p)) {
            item.push_option(line);
        } else if line.starts_with(CORRECT_ANSWER_PREFIX) {
            let answer = line
                .split_once(':')
                .map_or("", |(_, rest)| rest)
                .trim();
            item.correct_answer = (!answer.is_empty()).then(|| answer.to_string());
        }
    }

    // A trailing header with nothing under it is dropped.
    if let Some(last) = current.filter(|item| !item.options.is_empty()) {
        items.push(last);
    }

    items
}

/// `Q` immediately followed by a digit.
fn is_question_header(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'Q' && bytes[1].is_ascii_digit()
}

/// Reads `Rating: N/5` out of feedback text.
///
/// Anything missing, non-numeric or outside 1..=5 gives [`Rating::DEFAULT`].
#[must_use]
pub fn extract_rating(feedback: &str) -> Rating {
    parse_rating(feedback).unwrap_or(Rating::DEFAULT)
}

fn parse_rating(feedback: &str) -> Option<Rating> {
    let (_, after) = feedback.split_once(RATING_MARKER)?;
    let line = after.lines().next().unwrap_or("");
    let number = line.split('/').next().unwrap_or("").trim();
    let value: u8 = number.parse().ok()?;
    Rating::new(value).ok()
}
