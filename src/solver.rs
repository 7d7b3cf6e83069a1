//! Entropy-maximizing guess selection.
//!
//! Every word in the guess vocabulary is scored independently against the current
//! candidate pool on a bounded rayon thread pool. Scores are gathered back in
//! vocabulary order before the arg-max is taken, so the chosen guess never depends
//! on how the work was scheduled.

use crate::entropy::{self, lookahead};
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Worker threads for a selection pass; 0 uses the available parallelism.
    pub threads: usize,
    /// Lookahead branches smaller than this scan the vocabulary sequentially.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_threshold: 64,
        }
    }
}

/// Scores guesses on a dedicated worker pool.
#[derive(Debug, Clone)]
pub struct WordleSolver {
    config: SolverConfig,
    workers: Arc<rayon::ThreadPool>,
}

impl WordleSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        let workers = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("wordle-worker-{}", i))
            .build()?;
        Ok(Self {
            config,
            workers: Arc::new(workers),
        })
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Number of threads actually running evaluations.
    pub fn worker_count(&self) -> usize {
        self.workers.current_num_threads()
    }

    /// Score every vocabulary word against `pool`, in vocabulary order.
    ///
    /// Depth 0 is plain single-step entropy; deeper searches use the lookahead
    /// score. Any failing evaluation fails the whole pass.
    pub fn score_guesses(
        &self,
        pool: &[Word],
        vocabulary: &[Word],
        depth: usize,
    ) -> Result<Vec<f64>> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        let threshold = self.config.parallel_threshold;

        self.workers.install(|| {
            vocabulary
                .par_iter()
                .map(|&guess| {
                    if depth == 0 {
                        entropy::entropy(guess, pool)
                    } else {
                        lookahead(guess, pool, vocabulary, depth, threshold)
                    }
                })
                .collect()
        })
    }

    /// The vocabulary word with the highest score; ties go to the earliest word.
    pub fn select_guess(
        &self,
        pool: &[Word],
        vocabulary: &[Word],
        depth: usize,
    ) -> Result<GuessAnalysis> {
        self.rank_guesses(pool, vocabulary, depth, 1)?
            .into_iter()
            .next()
            .ok_or(SolverError::EmptyVocabulary)
    }

    /// The `n` best guesses by descending score, ties kept in vocabulary order.
    pub fn rank_guesses(
        &self,
        pool: &[Word],
        vocabulary: &[Word],
        depth: usize,
        n: usize,
    ) -> Result<Vec<GuessAnalysis>> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }

        if pool.len() == 1 {
            return Ok(vec![GuessAnalysis {
                word: pool[0],
                entropy: 0.0,
                expected_remaining: 1.0,
                is_possible_answer: true,
            }]);
        }

        if vocabulary.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }

        let scores = self.score_guesses(pool, vocabulary, depth)?;

        let mut order: Vec<usize> = (0..vocabulary.len()).collect();
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        order.truncate(n);

        let analyses: Vec<GuessAnalysis> = order
            .into_iter()
            .map(|i| {
                let word = vocabulary[i];
                let entropy = scores[i];
                GuessAnalysis {
                    word,
                    entropy,
                    expected_remaining: pool.len() as f64 / 2_f64.powf(entropy),
                    is_possible_answer: pool.contains(&word),
                }
            })
            .collect();

        if let Some(best) = analyses.first() {
            debug!(
                "best of {} guesses over {} candidates at depth {}: {} ({:.4} bits)",
                vocabulary.len(),
                pool.len(),
                depth,
                best.word,
                best.entropy
            );
        }

        Ok(analyses)
    }
}

/// Candidates from `pool` that would have produced `pattern` for `guess`.
pub fn filter(pool: &[Word], guess: Word, pattern: FeedbackPattern) -> Vec<Word> {
    pool.iter()
        .copied()
        .filter(|&word| FeedbackPattern::calculate(guess, word) == pattern)
        .collect()
}

/// Bits learned by narrowing a pool of `before` candidates down to `after`.
pub fn information_gain(before: usize, after: usize) -> f64 {
    (before as f64).log2() - (after as f64).log2()
}
