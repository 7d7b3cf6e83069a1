//! Feedback distributions and the entropy scores derived from them.
//!
//! A guess splits a candidate pool into branches, one per feedback pattern it can
//! produce. The Shannon entropy of that split is the expected information the
//! guess reveals; the N-step score adds the best information still obtainable
//! inside each branch, weighted by the branch's probability.

use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use rayon::prelude::*;

/// How many feedback patterns a guess produced over a pool.
#[derive(Debug, Clone)]
pub struct Distribution {
    counts: [u32; FeedbackPattern::NUM_PATTERNS],
    total: usize,
}

impl Distribution {
    pub fn of(guess: Word, pool: &[Word]) -> Self {
        let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
        for &answer in pool {
            let pattern = FeedbackPattern::calculate(guess, answer);
            counts[pattern.0 as usize] += 1;
        }
        Self {
            counts,
            total: pool.len(),
        }
    }

    /// Size of the pool the distribution was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, pattern: FeedbackPattern) -> usize {
        self.counts[pattern.0 as usize] as usize
    }

    /// Observed patterns with their counts, in ascending pattern order.
    /// Patterns that never occurred are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (FeedbackPattern, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(pattern, &count)| (FeedbackPattern(pattern as u8), count as usize))
    }

    /// Number of distinct patterns observed.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Shannon entropy in bits.
    pub fn entropy(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(SolverError::EmptyPool);
        }

        let n = self.total as f64;
        let mut entropy = 0.0;
        for (_, count) in self.iter() {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }

        Ok(entropy)
    }
}

pub fn distribution(guess: Word, pool: &[Word]) -> Distribution {
    Distribution::of(guess, pool)
}

/// Split `pool` into the branches `guess` separates it into, in ascending
/// pattern order. Each branch keeps the pool's relative word order.
pub fn partition(guess: Word, pool: &[Word]) -> Vec<(FeedbackPattern, Vec<Word>)> {
    let mut branches: Vec<Vec<Word>> = vec![Vec::new(); FeedbackPattern::NUM_PATTERNS];
    for &answer in pool {
        let pattern = FeedbackPattern::calculate(guess, answer);
        branches[pattern.0 as usize].push(answer);
    }

    branches
        .into_iter()
        .enumerate()
        .filter(|(_, branch)| !branch.is_empty())
        .map(|(pattern, branch)| (FeedbackPattern(pattern as u8), branch))
        .collect()
}

/// Expected information, in bits, from playing `guess` against `pool`.
pub fn entropy(guess: Word, pool: &[Word]) -> Result<f64> {
    Distribution::of(guess, pool).entropy()
}

/// Expected information over `k` turns when `guess` is played now and the best
/// vocabulary word is played in every resulting branch afterwards.
///
/// `k == 0` and singleton pools score 0. `k == 1` equals [`entropy`].
pub fn n_step_entropy(guess: Word, pool: &[Word], vocabulary: &[Word], k: usize) -> Result<f64> {
    lookahead(guess, pool, vocabulary, k, usize::MAX)
}

/// [`n_step_entropy`] with each branch's vocabulary scan run on rayon when the
/// branch holds at least `parallel_threshold` candidates.
pub(crate) fn lookahead(
    guess: Word,
    pool: &[Word],
    vocabulary: &[Word],
    k: usize,
    parallel_threshold: usize,
) -> Result<f64> {
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }
    if k == 0 || pool.len() == 1 {
        return Ok(0.0);
    }

    let branches = partition(guess, pool);
    let n = pool.len() as f64;

    let mut first = 0.0;
    for (_, branch) in &branches {
        let p = branch.len() as f64 / n;
        first -= p * p.log2();
    }
    if k == 1 {
        return Ok(first);
    }

    let mut second = 0.0;
    for (_, branch) in &branches {
        // A solved branch has nothing left to learn.
        if branch.len() == 1 {
            continue;
        }
        let best = best_continuation(branch, vocabulary, k - 1, parallel_threshold)?;
        second += branch.len() as f64 / n * best;
    }

    Ok(first + second)
}

/// Highest `k`-step score any vocabulary word reaches on `branch`, floored at zero.
fn best_continuation(
    branch: &[Word],
    vocabulary: &[Word],
    k: usize,
    parallel_threshold: usize,
) -> Result<f64> {
    let score = |&next: &Word| lookahead(next, branch, vocabulary, k, parallel_threshold);

    if branch.len() >= parallel_threshold {
        vocabulary
            .par_iter()
            .map(score)
            .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))
    } else {
        vocabulary
            .iter()
            .map(score)
            .try_fold(0.0_f64, |best, next| next.map(|e| best.max(e)))
    }
}
