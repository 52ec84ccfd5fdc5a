use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Rating;

/// Interview difficulty, ordered `Easy < Medium < Hard`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// One level up, saturating at `Hard`.
    #[must_use]
    pub fn harder(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }

    /// One level down, saturating at `Easy`.
    #[must_use]
    pub fn easier(self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            Self::Medium | Self::Easy => Self::Easy,
        }
    }

    /// Level for the next question given the rating of the last answer.
    ///
    /// Moves at most one step per answer: 4-5 promotes, 1-2 demotes,
    /// 3 stays put.
    #[must_use]
    pub fn adjust(self, rating: Rating) -> Self {
        if rating.is_strong() {
            self.harder()
        } else if rating.is_weak() {
            self.easier()
        } else {
            self
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn transition_table() {
        use Difficulty::{Easy, Hard, Medium};

        let expected = [
            // rating:   1       2       3       4       5
            (Easy, [Easy, Easy, Easy, Medium, Medium]),
            (Medium, [Easy, Easy, Medium, Hard, Hard]),
            (Hard, [Medium, Medium, Hard, Hard, Hard]),
        ];

        for (level, row) in expected {
            for (value, want) in (1..=5).zip(row) {
                assert_eq!(
                    level.adjust(rating(value)),
                    want,
                    "{level} with rating {value}"
                );
            }
        }
    }

    #[test]
    fn never_moves_more_than_one_level() {
        for level in Difficulty::ALL {
            for value in 1..=5 {
                let next = level.adjust(rating(value));
                let distance = (next as i8 - level as i8).abs();
                assert!(distance <= 1);
            }
        }
    }

    #[test]
    fn default_is_medium_and_order_is_easy_to_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert!(Difficulty::Easy < Difficulty::Medium && Difficulty::Medium < Difficulty::Hard);
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
