use palabra::session::{self, Console, Outcome};
use palabra::{Dictionary, Word};
use std::collections::VecDeque;

/// A console fed from a script, capturing everything the session says.
struct Scripted {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl Scripted {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    fn said(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.input.pop_front()
    }

    fn line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

fn dict(raw: &[&str]) -> Dictionary {
    Dictionary::from_lines(raw.iter().copied())
}

#[test]
fn solved_on_the_first_round() {
    let dict = dict(&["carta", "perro", "lunar"]);
    let mut console = Scripted::new(&["carta", "bbbbb"]);
    let outcome = session::play(&dict, &mut console, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            word: "CARTA".to_string(),
            rounds: 1,
        }
    );
    assert!(console.said("Guess 1: CARTA"));
}

#[test]
fn invalid_input_does_not_consume_a_round() {
    let dict = dict(&["carta", "perro", "lunar"]);
    let mut console = Scripted::new(&[
        "cart",   // too short
        "cartas", // too long
        "carta",  // finally a guess
        "xbcdq",  // not the m/c/b alphabet
        "mmmm",   // too short
        "bbbbb",
    ]);
    let outcome = session::play(&dict, &mut console, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            word: "CARTA".to_string(),
            rounds: 1,
        }
    );
}

#[test]
fn solves_by_narrowing_over_rounds() {
    // hidden word: CARTA
    let dict = dict(&["carta", "perro", "lunar"]);
    let mut console = Scripted::new(&[
        "pesos", // shares letters with PERRO only
        "mmmmm", // kills PERRO, keeps CARTA and LUNAR
        "mmmcc", // LUNAR against CARTA; kills LUNAR itself
        "bbbbb",
    ]);
    let outcome = session::play(&dict, &mut console, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            word: "CARTA".to_string(),
            rounds: 3,
        }
    );
    // LUNAR covers the more frequent letters, so it goes before CARTA
    assert!(console.said("Guess 2: LUNAR"));
    assert!(console.said("Guess 3: CARTA"));
    assert!(console.said("2 candidate(s) remaining."));
}

#[test]
fn contradictory_feedback_ends_with_no_candidates() {
    let dict = dict(&["perro"]);
    // PERRO holds the R that the all-absent row says cannot occur
    let mut console = Scripted::new(&["carta", "mmmmm"]);
    let outcome = session::play(&dict, &mut console, None).unwrap();
    assert_eq!(outcome, Outcome::NoCandidates);
    assert!(console.said("No candidate is consistent"));
}

#[test]
fn round_budget_exhausts_with_survivors() {
    // seven words differing only in the last letter; feedback pins the first
    // four positions and burns one candidate per round
    let dict = dict(&[
        "abcde", "abcdf", "abcdg", "abcdh", "abcdi", "abcdj", "abcdk",
    ]);
    let mut console = Scripted::new(&[
        "abcde", "bbbbm", "bbbbm", "bbbbm", "bbbbm", "bbbbm", "bbbbm",
    ]);
    let outcome = session::play(&dict, &mut console, None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Exhausted {
            remaining: vec!["ABCDK".to_string()],
        }
    );
    assert!(console.said("still viable: ABCDK"));
}

#[test]
fn closed_input_aborts_without_an_outcome() {
    let dict = dict(&["perro"]);
    let mut console = Scripted::new(&["carta"]);
    assert_eq!(session::play(&dict, &mut console, None), None);
}

#[test]
fn scripted_first_guess_skips_the_prompt() {
    let dict = dict(&["carta", "perro", "lunar"]);
    let mut console = Scripted::new(&["bbbbb"]);
    let first = Word::new("carta");
    let outcome = session::play(&dict, &mut console, first).unwrap();
    assert_eq!(
        outcome,
        Outcome::Solved {
            word: "CARTA".to_string(),
            rounds: 1,
        }
    );
}
