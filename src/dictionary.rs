//! Word lists: newline-delimited files, or the lists embedded in the binary.

use crate::error::{Result, SolverError};
use crate::word::Word;
use std::fs;
use std::path::Path;

const DICTIONARY: &str = include_str!("../dictionary/dictionary.txt");
const ANSWERS: &str = include_str!("../dictionary/answers.txt");

/// Parse one word per line. Blank lines are skipped and case is folded; any
/// other malformed line is an error carrying its 1-based line number.
pub fn parse_word_list(text: &str) -> Result<Vec<Word>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, word)| {
            Word::parse(word).map_err(|source| SolverError::InvalidLine {
                line,
                source: Box::new(source),
            })
        })
        .collect()
}

pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SolverError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_list(&text)
}

/// The embedded guess vocabulary.
pub fn default_words() -> Vec<Word> {
    embedded(DICTIONARY)
}

/// The embedded answer list, a subset of [`default_words`].
pub fn default_answers() -> Vec<Word> {
    embedded(ANSWERS)
}

fn embedded(text: &str) -> Vec<Word> {
    text.lines().filter_map(|line| Word::parse(line.trim()).ok()).collect()
}
