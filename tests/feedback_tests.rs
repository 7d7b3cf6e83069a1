use wordle_entropy::{default_words, Feedback, FeedbackPattern, SolverError, Word};

use Feedback::{Absent, Exact, Present};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn feedbacks(guess: &str, solution: &str) -> [Feedback; 5] {
    FeedbackPattern::calculate(w(guess), w(solution)).to_feedbacks()
}

#[test]
fn test_all_exact() {
    let pattern = FeedbackPattern::calculate(w("crane"), w("crane"));
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_EXACT);
}

#[test]
fn test_every_word_matches_itself() {
    for word in default_words() {
        assert!(FeedbackPattern::calculate(word, word).is_win(), "{} vs itself", word);
    }
}

#[test]
fn test_all_absent() {
    assert_eq!(feedbacks("quick", "dream"), [Absent; 5]);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(feedbacks("crane", "charm"), [Exact, Present, Exact, Absent, Absent]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(feedbacks("speed", "creep"), [Absent, Present, Exact, Exact, Absent]);
}

#[test]
fn test_duplicate_letters_in_target() {
    assert_eq!(feedbacks("arose", "creep"), [Absent, Exact, Absent, Absent, Present]);
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(feedbacks("geese", "creep"), [Absent, Present, Exact, Absent, Absent]);
}

#[test]
fn test_second_repeat_absent_once_consumed() {
    // The only 'e' in "those" is claimed by the first 'e' of the guess.
    assert_eq!(feedbacks("speed", "those"), [Present, Absent, Present, Absent, Absent]);
}

#[test]
fn test_repeats_claim_every_remaining_occurrence() {
    // "erase" holds two 'e's and an 's', so both guessed 'e's and the 's' light up.
    assert_eq!(feedbacks("speed", "erase"), [Present, Absent, Present, Present, Absent]);
}

#[test]
fn test_exact_matches_resolved_before_present() {
    // The trailing exact 'e' must not be stolen by the earlier 'e'.
    assert_eq!(feedbacks("eerie", "crane"), [Absent, Absent, Present, Absent, Exact]);
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(feedbacks("sores", "those"), [Present, Present, Absent, Present, Absent]);
}

#[test]
fn test_marks_never_exceed_letter_multiplicity() {
    let words: Vec<Word> = default_words().into_iter().take(120).collect();
    for &guess in &words {
        for &solution in &words {
            let marks = FeedbackPattern::calculate(guess, solution).to_feedbacks();
            for letter in b'a'..=b'z' {
                let marked = guess
                    .as_bytes()
                    .iter()
                    .zip(marks)
                    .filter(|&(&g, fb)| g == letter && fb != Absent)
                    .count();
                let in_guess = guess.as_bytes().iter().filter(|&&c| c == letter).count();
                let in_solution = solution.as_bytes().iter().filter(|&&c| c == letter).count();
                assert_eq!(
                    marked,
                    in_guess.min(in_solution),
                    "{} vs {}: letter {}",
                    guess,
                    solution,
                    letter as char
                );
            }
        }
    }
}

#[test]
fn test_pattern_encoding_decoding() {
    for pattern_val in 0..FeedbackPattern::NUM_PATTERNS {
        let pattern = FeedbackPattern(pattern_val as u8);
        let reconstructed = FeedbackPattern::new(pattern.to_feedbacks());
        assert_eq!(pattern, reconstructed);
    }
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("gybbb").unwrap();
    assert_eq!(pattern.to_feedbacks(), [Exact, Present, Absent, Absent, Absent]);

    let pattern2 = FeedbackPattern::parse("21000").unwrap();
    assert_eq!(pattern, pattern2);
    assert_eq!(FeedbackPattern::parse(" GYBBB\n").unwrap(), pattern);
}

#[test]
fn test_pattern_parse_invalid() {
    for input in ["gybbb1", "gybb", "gybzb", ""] {
        match FeedbackPattern::parse(input) {
            Err(SolverError::MalformedPattern { input: reported }) => assert_eq!(reported, input),
            other => panic!("expected MalformedPattern for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([Exact, Present, Absent, Absent, Exact]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), "🟩🟨⬛⬛🟩");
}
