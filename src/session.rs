//! The interactive solving session.
//!
//! All round-to-round state lives in [`Session`], and every transition is a
//! plain method call, so each one can be exercised in isolation. The blocking
//! console interaction sits behind the [`Console`] trait; the binary wires it
//! to stdin/stdout and the tests script it.

use crate::{filter_candidates, parse_feedback, Dictionary, Feedback, Guess, Mark, Word};
use std::collections::HashSet;

/// Number of guesses the puzzle allows.
pub const MAX_ROUNDS: usize = 6;

/// How many leftover candidates to show when the round budget runs out.
const REPORT_LIMIT: usize = 10;

/// The console a session runs against.
pub trait Console {
    /// Prompts for and reads one line; `None` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Writes one line of progress or diagnostics.
    fn line(&mut self, text: &str);
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The puzzle confirmed a guess with an all-exact row.
    Solved { word: String, rounds: usize },
    /// All rounds spent; these candidates were still viable.
    Exhausted { remaining: Vec<String> },
    /// Filtering removed every candidate, or every candidate was tried.
    NoCandidates,
}

/// What one recorded round means for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Solved,
    Continue { remaining: usize },
    NoCandidates,
}

/// The mutable session state: the shrinking candidate set plus the attempt
/// history. The candidate set only ever shrinks; the history only grows.
pub struct Session {
    candidates: Vec<Word>,
    history: Vec<Guess>,
    tried: HashSet<String>,
}

impl Session {
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            candidates: dictionary.words().to_vec(),
            history: Vec::new(),
            tried: HashSet::new(),
        }
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Records one guess/feedback round: filters the candidate set and
    /// classifies the result. An all-exact row wins even when filtering just
    /// emptied the set (the guessed word need not be in the dictionary).
    pub fn record(&mut self, word: Word, mask: Feedback) -> Step {
        self.tried.insert(word.canon().to_string());
        let guess = Guess { word, mask };
        self.candidates = filter_candidates(&self.candidates, &guess);
        self.history.push(guess);

        if mask.iter().all(|&m| m == Mark::Exact) {
            Step::Solved
        } else if self.candidates.is_empty() {
            Step::NoCandidates
        } else {
            Step::Continue {
                remaining: self.candidates.len(),
            }
        }
    }

    /// Proposes the next guess. Words already in the history are excluded
    /// from the selection pool up front; repeating a guess cannot reveal
    /// anything new, and excluding them here is what keeps the session from
    /// stalling on a pool it has exhausted.
    pub fn next_guess(&self) -> Option<&Word> {
        let pool: Vec<&Word> = self
            .candidates
            .iter()
            .filter(|word| !self.tried.contains(word.canon()))
            .collect();
        crate::solver::best_guess(&pool)
    }
}

/// Runs a full interactive session against `console`. The outcome is both
/// reported through the console and returned; `None` means the input closed
/// mid-session.
pub fn play<C: Console>(
    dictionary: &Dictionary,
    console: &mut C,
    first: Option<Word>,
) -> Option<Outcome> {
    let mut session = Session::new(dictionary);
    console.line(&format!("{} words loaded.", dictionary.len()));

    let mut guess = match first {
        Some(word) => word,
        None => prompt_first_guess(console)?,
    };

    for round in 1..=MAX_ROUNDS {
        console.line(&format!("Guess {}: {}", round, guess));
        let mask = prompt_feedback(console)?;
        let shown = guess.to_string();
        match session.record(guess, mask) {
            Step::Solved => {
                console.line(&format!("Solved: {} in {} round(s).", shown, round));
                return Some(Outcome::Solved {
                    word: shown,
                    rounds: round,
                });
            }
            Step::NoCandidates => {
                console.line("No candidate is consistent with the feedback so far.");
                return Some(Outcome::NoCandidates);
            }
            Step::Continue { remaining } => {
                if round == MAX_ROUNDS {
                    let remaining = report_remaining(&session, console);
                    return Some(Outcome::Exhausted { remaining });
                }
                console.line(&format!("{} candidate(s) remaining.", remaining));
            }
        }
        guess = match session.next_guess() {
            Some(word) => word.clone(),
            None => {
                console.line("Every remaining candidate has already been tried.");
                return Some(Outcome::NoCandidates);
            }
        };
    }
    unreachable!("the final round always reports an outcome");
}

fn prompt_first_guess(console: &mut impl Console) -> Option<Word> {
    loop {
        let line = console.read_line("First 5-letter guess: ")?;
        match Word::new(&line) {
            Some(word) => return Some(word),
            None => console.line("Enter a word of exactly five letters."),
        }
    }
}

fn prompt_feedback(console: &mut impl Console) -> Option<Feedback> {
    loop {
        let line = console.read_line("Feedback [m=absent, c=present, b=exact], e.g. mmcbc: ")?;
        match parse_feedback(&line) {
            Some(mask) => return Some(mask),
            None => console.line("Use only 'm', 'c' and 'b', exactly five of them."),
        }
    }
}

fn report_remaining(session: &Session, console: &mut impl Console) -> Vec<String> {
    let words: Vec<String> = session
        .candidates()
        .iter()
        .map(|word| word.to_string())
        .collect();
    let shown = words
        .iter()
        .take(REPORT_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if words.len() > REPORT_LIMIT {
        console.line(&format!("Out of rounds; still viable: {}, ...", shown));
    } else {
        console.line(&format!("Out of rounds; still viable: {}", shown));
    }
    words
}
