use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of options a single question carries.
pub const MAX_OPTIONS: usize = 4;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerLetterError {
    #[error("not an answer letter: {0:?}")]
    Invalid(String),
}

//
// ─── ANSWER LETTER ────────────────────────────────────────────────────────────
//

/// Option label of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Maps `A`-`D` (either case) to a letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Reads the letter from free text such as `"B"`, `" c"` or `"B) Paris"`.
    ///
    /// Only the first non-whitespace character is considered, and it must not
    /// be followed by another letter (so `"Because"` is rejected).
    ///
    /// # Errors
    ///
    /// Returns `AnswerLetterError::Invalid` when no letter can be read.
    pub fn parse(raw: &str) -> Result<Self, AnswerLetterError> {
        let mut chars = raw.trim_start().chars();
        let letter = chars.next().and_then(Self::from_char);
        let followed_by_word = chars.next().is_some_and(char::is_alphanumeric);
        match letter {
            Some(letter) if !followed_by_word => Ok(letter),
            _ => Err(AnswerLetterError::Invalid(raw.to_string())),
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//
// ─── MCQ ITEM ─────────────────────────────────────────────────────────────────
//

/// One parsed multiple-choice question.
///
/// `text` keeps the ordinal label the model emitted (`"Q1. ..."`), and each
/// option keeps its `"A) "` prefix. `correct_answer` is the raw remainder of
/// the `Correct Answer:` line, when the model produced one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqItem {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
}

impl McqItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::with_capacity(MAX_OPTIONS),
            correct_answer: None,
        }
    }

    /// Appends an option unless the question is already full.
    ///
    /// Returns `false` when the option was dropped.
    pub fn push_option(&mut self, option: impl Into<String>) -> bool {
        if self.options.len() >= MAX_OPTIONS {
            return false;
        }
        self.options.push(option.into());
        true
    }

    /// The correct answer as a letter, if the recorded text starts with one.
    #[must_use]
    pub fn correct_letter(&self) -> Option<AnswerLetter> {
        self.correct_answer
            .as_deref()
            .and_then(|raw| AnswerLetter::parse(raw).ok())
    }
}

//
// ─── MCQ SESSION ──────────────────────────────────────────────────────────────
//

/// Generated questions plus the learner's selections, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqSession {
    items: Vec<McqItem>,
    answers: Vec<Option<AnswerLetter>>,
}

impl McqSession {
    /// Starts a session with every answer unset.
    #[must_use]
    pub fn new(items: Vec<McqItem>) -> Self {
        let answers = vec![None; items.len()];
        Self { items, answers }
    }

    /// Records the learner's choice for question `index`.
    ///
    /// Out-of-range indices are ignored and reported as `false`.
    pub fn record_answer(&mut self, index: usize, letter: AnswerLetter) -> bool {
        match self.answers.get_mut(index) {
            Some(slot) => {
                *slot = Some(letter);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<AnswerLetter> {
        self.answers.get(index).copied().flatten()
    }

    #[must_use]
    pub fn items(&self) -> &[McqItem] {
        &self.items
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Questions in generation order with the recorded selection.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &McqItem, Option<AnswerLetter>)> {
        self.items
            .iter()
            .zip(self.answers.iter().copied())
            .enumerate()
            .map(|(index, (item, answer))| (index, item, answer))
    }
}
