//! Terminal rendering of guesses and their feedback.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;

const RESET: &str = "\x1b[0m";

fn style(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Exact => "\x1b[1;42;30m",
        Feedback::Present => "\x1b[1;43;30m",
        Feedback::Absent => "\x1b[1;100;97m",
    }
}

/// The word in upper case, each letter on its feedback colour.
pub fn paint(word: Word, pattern: FeedbackPattern) -> String {
    word.to_uppercase()
        .chars()
        .zip(pattern.to_feedbacks())
        .map(|(letter, feedback)| format!("{} {} {}", style(feedback), letter, RESET))
        .collect()
}

/// A guess that has not been answered yet, shown all gray.
pub fn paint_pending(word: Word) -> String {
    paint(word, FeedbackPattern(0))
}

/// Letters and emoji squares side by side, for logs and non-ANSI output.
pub fn plain(word: Word, pattern: FeedbackPattern) -> String {
    format!("{} {}", word.to_uppercase(), pattern)
}
