//! Feedback calculation for Wordle guesses.
//!
//! This module computes the three-symbol pattern (exact/present/absent) a guess
//! receives against a solution, using the two-pass rules of the real game.

use crate::error::{Result, SolverError};
use crate::word::Word;
use crate::WORD_LENGTH;

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter and position match (green)
    Exact,
    /// Letter occurs elsewhere among the unmatched solution letters (yellow)
    Present,
    /// Letter does not occur among the unmatched solution letters (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Exact),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Exact => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (absent), 1 (present), or 2 (exact).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all exact (winning)
    pub const ALL_EXACT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against a solution.
    ///
    /// Exact matches are resolved first and remove their solution letter from
    /// play. Each remaining guess letter, left to right, then claims the first
    /// unclaimed occurrence of itself in the solution, so repeated letters are
    /// never marked more often than the solution contains them.
    pub fn calculate(guess: Word, solution: Word) -> Self {
        let guess = guess.as_bytes();
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*solution.as_bytes()).map(Some);
        let mut feedback = [Feedback::Absent; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if remaining[i] == Some(guess[i]) {
                feedback[i] = Feedback::Exact;
                remaining[i] = None;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Absent {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(guess[i])) {
                feedback[i] = Feedback::Present;
                *slot = None;
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Exact,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all exact)
    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let malformed = || SolverError::MalformedPattern {
            input: s.to_string(),
        };

        let feedbacks = s
            .trim()
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(malformed)?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().map_err(|_| malformed())?;
        Ok(Self::new(arr))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
