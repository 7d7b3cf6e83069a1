//! # Wordle Entropy
//!
//! A parallel Wordle solver using information theory.
//!
//! Each turn the solver plays the guess with the highest expected information
//! gain (Shannon entropy) over the words still consistent with the feedback so
//! far, optionally looking ahead several turns and assuming the best follow-up
//! guess in every branch.

pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod render;
pub mod session;
pub mod solver;
pub mod word;

pub use dictionary::{default_answers, default_words, load_word_list, parse_word_list};
pub use entropy::{distribution, entropy, n_step_entropy, partition, Distribution};
pub use error::{Result, SolverError};
pub use feedback::{Feedback, FeedbackPattern};
pub use session::{
    solve_for_target, FeedbackOracle, Response, Session, SessionOutcome, SessionState,
    TargetOracle, Turn,
};
pub use solver::{filter, information_gain, GuessAnalysis, SolverConfig, WordleSolver};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
