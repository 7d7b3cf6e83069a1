//! Wordle Entropy CLI
//!
//! Interactive and automatic front end for the entropy solver.

use clap::{Parser, Subcommand};
use log::warn;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wordle_entropy::render::{paint, paint_pending, plain};
use wordle_entropy::{
    default_answers, default_words, load_word_list, FeedbackPattern, Response, Result, Session,
    SessionState, SolverConfig, SolverError, TargetOracle, Word, WordleSolver,
};

const BANNER: &str = "\
╦ ╦╔═╗╦═╗╔╦╗╦  ╔═╗
║║║║ ║╠╦╝ ║║║  ║╣
╚╩╝╚═╝╩╚══╩╝╩═╝╚═╝  entropy solver";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Newline-delimited list of allowed guesses. Defaults to the built-in dictionary.
    #[clap(long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Newline-delimited list of possible answers. Defaults to the built-in answers,
    /// or to the guess list when --words is given.
    #[clap(long, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Lookahead depth. 0 and 1 score single-step entropy, 2 adds the best second guess.
    #[clap(short = 'k', long, default_value = "1")]
    depth: usize,

    /// Worker threads (0 = all cores).
    #[clap(short, long, default_value = "0")]
    threads: usize,

    /// Lookahead branches below this many candidates are scanned on one thread.
    #[clap(long, default_value = "64")]
    parallel_threshold: usize,

    /// Only guess words from the answer list.
    #[clap(short, long)]
    fast: bool,

    /// Print only the result (guess count for `solve`).
    #[clap(short, long)]
    silent: bool,

    /// Show feedback as emoji squares instead of ANSI colours.
    #[clap(long)]
    no_color: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest guesses and read the game's feedback from stdin.
    Play,
    /// Solve for a known target word.
    Solve { target: String },
    /// Rank the best opening guesses.
    Suggest {
        #[clap(short, default_value = "5")]
        n: usize,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str, enabled: bool) -> Self {
        let running = Arc::new(AtomicBool::new(enabled));
        if !enabled {
            return Self { running, handle: None };
        }

        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stdout = io::stdout();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stdout, "\r{} {}", frames[i % frames.len()], message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stdout, "\r{}\r", " ".repeat(message.chars().count() + 3));
            let _ = stdout.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

struct WordLists {
    vocabulary: Vec<Word>,
    answers: Vec<Word>,
}

fn load_lists(args: &Args) -> Result<WordLists> {
    let vocabulary = match &args.words {
        Some(path) => load_word_list(path)?,
        None => default_words(),
    };
    let answers = match (&args.answers, &args.words) {
        (Some(path), _) => load_word_list(path)?,
        (None, Some(_)) => vocabulary.clone(),
        (None, None) => default_answers(),
    };
    let vocabulary = if args.fast { answers.clone() } else { vocabulary };
    Ok(WordLists { vocabulary, answers })
}

fn tiles(word: Word, pattern: FeedbackPattern, color: bool) -> String {
    if color {
        paint(word, pattern)
    } else {
        plain(word, pattern)
    }
}

fn history(session: &Session, color: bool) {
    for turn in session.turns() {
        println!(" {}", tiles(turn.guess, turn.pattern, color));
    }
}

fn run_interactive(mut session: Session, color: bool, spin: bool) -> Result<()> {
    println!("{}", BANNER);
    println!();
    println!(
        "{} candidates, {} allowed guesses, depth {}.",
        session.pool().len(),
        session.vocabulary().len(),
        session.depth()
    );
    println!(
        "Enter feedback as g/y/b per letter (e.g. gybbb), \
         n if the game rejects the word, q to quit."
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if let SessionState::Solved { answer, guesses } = *session.state() {
            println!();
            history(&session, color);
            println!(" {}", tiles(answer, FeedbackPattern::ALL_EXACT, color));
            println!();
            println!("Solution found in {} guesses: {}", guesses, answer.to_uppercase());
            return Ok(());
        }

        let guess = {
            let _spinner = Spinner::new("Calculating best guess...", spin);
            session.next_guess()?
        };

        println!();
        history(&session, color);
        if color {
            println!(" {}", paint_pending(guess.word));
        } else {
            println!(" {}", guess.word.to_uppercase());
        }
        println!();
        println!(
            "Next guess: {} | expected entropy {:.3} bits | {} candidates left",
            guess.word.to_uppercase(),
            guess.entropy,
            session.pool().len()
        );

        loop {
            print!("feedback> ");
            let _ = stdout.flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).map_err(SolverError::Input)? == 0 {
                return Ok(());
            }
            let input = line.trim().to_lowercase();

            let response = match input.as_str() {
                "" => continue,
                "q" | "quit" | "exit" => return Ok(()),
                _ if input.contains('n') => Response::InvalidGuess,
                _ => match FeedbackPattern::parse(&input) {
                    Ok(pattern) => Response::Pattern(pattern),
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                },
            };

            match session.respond(response) {
                Ok(_) => break,
                Err(SolverError::EmptyPool) => {
                    println!("No candidate matches that feedback. Please check it and try again.");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let lists = load_lists(&args)?;
    let solver = WordleSolver::new(SolverConfig {
        threads: args.threads,
        parallel_threshold: args.parallel_threshold,
    })?;

    match &args.command {
        None | Some(Command::Play) => {
            let session = Session::new(solver, lists.answers, lists.vocabulary, args.depth)?;
            run_interactive(session, !args.no_color, !args.silent)
        }
        Some(Command::Solve { target }) => {
            let target = Word::parse(target)?;
            if !lists.answers.contains(&target) {
                warn!("{} is not in the answer list", target);
            }

            let mut session = Session::new(solver, lists.answers, lists.vocabulary, args.depth)?;
            let outcome = {
                let _spinner = Spinner::new("Solving...", !args.silent);
                session.run(&mut TargetOracle::new(target))?
            };

            if args.silent {
                println!("{}", outcome.guesses);
                return Ok(());
            }

            println!("Solving for: {}", target.to_uppercase());
            println!();
            for (i, turn) in outcome.turns.iter().enumerate() {
                let shown = if args.no_color {
                    plain(turn.guess, turn.pattern)
                } else {
                    format!("{} → {}", paint(turn.guess, turn.pattern), turn.pattern)
                };
                println!(
                    "Guess {}: {} ({:.3} bits, {} left)",
                    i + 1,
                    shown,
                    turn.entropy,
                    turn.remaining
                );
            }
            println!();
            println!("Solved in {} guesses: {}", outcome.guesses, outcome.answer.to_uppercase());
            Ok(())
        }
        Some(Command::Suggest { n }) => {
            let top = {
                let _spinner = Spinner::new("Computing...", !args.silent);
                solver.rank_guesses(&lists.answers, &lists.vocabulary, args.depth, *n)?
            };

            if args.silent {
                for analysis in &top {
                    println!("{} {:.6}", analysis.word, analysis.entropy);
                }
                return Ok(());
            }

            println!();
            println!("Top {} guesses over {} candidates:", top.len(), lists.answers.len());
            println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
            println!("{}", "-".repeat(50));
            for (i, analysis) in top.iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.3} {:>12.1} {}",
                    i + 1,
                    analysis.word.to_uppercase(),
                    analysis.entropy,
                    analysis.expected_remaining,
                    if analysis.is_possible_answer { "✓" } else { "" }
                );
            }
            println!();
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
