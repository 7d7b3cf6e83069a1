//! The guess/feedback loop that drives a game to a single remaining candidate.

use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::solver::{filter, information_gain, GuessAnalysis, WordleSolver};
use crate::word::Word;
use log::{debug, info, warn};

/// What the game said about a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Pattern(FeedbackPattern),
    /// The game refused the word; it is dropped from the vocabulary.
    InvalidGuess,
}

/// Source of feedback for the session's guesses.
pub trait FeedbackOracle {
    fn respond(&mut self, guess: &GuessAnalysis, remaining: usize) -> Result<Response>;
}

/// Answers with the true pattern for a known target word.
#[derive(Debug, Clone, Copy)]
pub struct TargetOracle {
    target: Word,
}

impl TargetOracle {
    pub fn new(target: Word) -> Self {
        Self { target }
    }
}

impl FeedbackOracle for TargetOracle {
    fn respond(&mut self, guess: &GuessAnalysis, _remaining: usize) -> Result<Response> {
        Ok(Response::Pattern(FeedbackPattern::calculate(guess.word, self.target)))
    }
}

impl<F> FeedbackOracle for F
where
    F: FnMut(&GuessAnalysis, usize) -> Result<Response>,
{
    fn respond(&mut self, guess: &GuessAnalysis, remaining: usize) -> Result<Response> {
        self(guess, remaining)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Searching,
    AwaitingFeedback(GuessAnalysis),
    Solved { answer: Word, guesses: usize },
}

/// One guess that received a pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    pub entropy: f64,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub answer: Word,
    /// Guesses played, counting the final entry of the answer.
    pub guesses: usize,
    pub turns: Vec<Turn>,
}

#[derive(Debug, Clone)]
pub struct Session {
    solver: WordleSolver,
    pool: Vec<Word>,
    vocabulary: Vec<Word>,
    depth: usize,
    turns: Vec<Turn>,
    state: SessionState,
}

impl Session {
    pub fn new(
        solver: WordleSolver,
        solutions: Vec<Word>,
        vocabulary: Vec<Word>,
        depth: usize,
    ) -> Result<Self> {
        if solutions.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        if vocabulary.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }

        let mut session = Self {
            solver,
            pool: solutions,
            vocabulary,
            depth,
            turns: Vec::new(),
            state: SessionState::Searching,
        };
        session.settle();
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Searching -> AwaitingFeedback. While a guess is pending the same guess is
    /// returned again; once solved the answer itself is returned.
    pub fn next_guess(&mut self) -> Result<GuessAnalysis> {
        match &self.state {
            SessionState::AwaitingFeedback(pending) => return Ok(pending.clone()),
            SessionState::Solved { answer, .. } => {
                return Ok(GuessAnalysis {
                    word: *answer,
                    entropy: 0.0,
                    expected_remaining: 1.0,
                    is_possible_answer: true,
                })
            }
            SessionState::Searching => {}
        }

        let best = self.solver.select_guess(&self.pool, &self.vocabulary, self.depth)?;
        if best.entropy <= 0.0 && self.pool.len() > 1 {
            return Err(SolverError::Stalled {
                remaining: self.pool.len(),
            });
        }

        debug!("searching -> awaiting feedback for {}", best.word);
        self.state = SessionState::AwaitingFeedback(best.clone());
        Ok(best)
    }

    /// Apply the game's answer to the pending guess.
    ///
    /// An empty filtered pool is reported as [`SolverError::EmptyPool`] and leaves
    /// the session waiting on the same guess with its old pool. Feedback outside
    /// `AwaitingFeedback` is [`SolverError::NoPendingGuess`].
    pub fn respond(&mut self, response: Response) -> Result<&SessionState> {
        let pending = match &self.state {
            SessionState::AwaitingFeedback(pending) => pending.clone(),
            _ => return Err(SolverError::NoPendingGuess),
        };

        match response {
            Response::InvalidGuess => {
                warn!("{} rejected, removing it from the vocabulary", pending.word);
                self.vocabulary.retain(|&word| word != pending.word);
                self.state = SessionState::Searching;
                if self.vocabulary.is_empty() {
                    return Err(SolverError::EmptyVocabulary);
                }
            }
            Response::Pattern(pattern) => {
                let narrowed = filter(&self.pool, pending.word, pattern);
                if narrowed.is_empty() {
                    warn!("no candidate matches {} for {}", pattern, pending.word);
                    return Err(SolverError::EmptyPool);
                }

                info!(
                    "{} {}: removed {} | information gain {:.3} bits",
                    pending.word,
                    pattern,
                    self.pool.len() - narrowed.len(),
                    information_gain(self.pool.len(), narrowed.len())
                );

                self.turns.push(Turn {
                    guess: pending.word,
                    pattern,
                    entropy: pending.entropy,
                    remaining: narrowed.len(),
                });
                self.pool = narrowed;
                self.state = SessionState::Searching;
                self.settle();
            }
        }

        Ok(&self.state)
    }

    /// Play until a single candidate remains.
    pub fn run<O: FeedbackOracle>(&mut self, oracle: &mut O) -> Result<SessionOutcome> {
        loop {
            if let SessionState::Solved { answer, guesses } = self.state {
                return Ok(SessionOutcome {
                    answer,
                    guesses,
                    turns: self.turns.clone(),
                });
            }

            let guess = self.next_guess()?;
            let response = oracle.respond(&guess, self.pool.len())?;
            self.respond(response)?;
        }
    }

    /// Searching -> Solved once the pool is down to one word.
    fn settle(&mut self) {
        if self.pool.len() != 1 {
            return;
        }

        let answer = self.pool[0];
        let already_played = self.turns.last().map_or(false, |turn| turn.guess == answer);
        let guesses = self.turns.len() + usize::from(!already_played);
        debug!("solved: {} after {} guesses", answer, guesses);
        self.state = SessionState::Solved { answer, guesses };
    }
}

/// Solve against a known target, returning the full game record.
pub fn solve_for_target(
    solver: WordleSolver,
    solutions: Vec<Word>,
    vocabulary: Vec<Word>,
    depth: usize,
    target: Word,
) -> Result<SessionOutcome> {
    let mut session = Session::new(solver, solutions, vocabulary, depth)?;
    session.run(&mut TargetOracle::new(target))
}
