use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

pub mod session;
pub mod solver;

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Every word in the puzzle is exactly this long.
pub const WORD_LEN: usize = 5;

static EMBEDDED: OnceCell<Dictionary> = OnceCell::new();

/// Canonicalizes a word for comparison: NFD-decomposes it, drops everything
/// that is not ASCII (which takes the combining accent marks with it), and
/// uppercases what remains. "cañón" and "CANON" come out identical.
pub fn normalize(word: &str) -> String {
    word.nfd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// A puzzle word: the spelling to show the user, plus the canonical
/// accent-stripped uppercase form that all comparisons run on.
#[derive(Debug, Clone)]
pub struct Word {
    shown: String,
    canon: String,
}

impl Word {
    /// Builds a word from raw input. Rejects anything whose canonical form
    /// is not exactly five ASCII letters.
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let canon = normalize(raw);
        if canon.len() != WORD_LEN || !canon.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self {
            shown: raw.to_uppercase(),
            canon,
        })
    }

    pub fn canon(&self) -> &str {
        &self.canon
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shown)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.canon == other.canon
    }
}

impl Eq for Word {}

/// Per-letter feedback from the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// b: right letter, right position
    Exact,
    /// c: the letter occurs, but somewhere else
    Present,
    /// m: no occurrence beyond what the guess already accounts for
    Absent,
}

impl Mark {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Mark::Exact),
            'c' => Some(Mark::Present),
            'm' => Some(Mark::Absent),
            _ => None,
        }
    }

    /// Derives the feedback the puzzle would give for `guess` when `answer`
    /// is the hidden word: matching positions are Exact, a guessed letter
    /// occurring anywhere else in the answer is Present, the rest Absent.
    /// Both arguments must be canonical forms.
    pub fn compute(answer: &str, guess: &str) -> Feedback {
        assert_eq!(answer.len(), WORD_LEN);
        assert_eq!(guess.len(), WORD_LEN);
        let answer = answer.as_bytes();
        let mut marks = [Mark::Absent; WORD_LEN];
        for (i, (&g, mark)) in guess.as_bytes().iter().zip(marks.iter_mut()).enumerate() {
            if answer[i] == g {
                *mark = Mark::Exact;
            } else if answer.contains(&g) {
                *mark = Mark::Present;
            }
        }
        marks
    }
}

/// A full feedback row for one guess.
pub type Feedback = [Mark; WORD_LEN];

/// Parses a feedback string such as "mmcbc". Exactly five characters from
/// the m/c/b alphabet; anything else is rejected.
pub fn parse_feedback(s: &str) -> Option<Feedback> {
    let s = s.trim();
    if s.chars().count() != WORD_LEN {
        return None;
    }
    let mut marks = [Mark::Absent; WORD_LEN];
    for (mark, c) in marks.iter_mut().zip(s.chars()) {
        *mark = Mark::from_char(c)?;
    }
    Some(marks)
}

/// One guessed word together with the feedback it received.
#[derive(Debug, Clone)]
pub struct Guess {
    pub word: Word,
    pub mask: Feedback,
}

impl Guess {
    /// Whether `candidate` could be the hidden word given this feedback.
    ///
    /// Duplicate letters make the Absent mark subtle: it does not mean the
    /// letter never occurs in the candidate, only that the candidate cannot
    /// hold as many copies as the guess spent on it. So a candidate fails an
    /// Absent mark exactly when the guess's count for that letter does not
    /// exceed the candidate's.
    pub fn matches(&self, candidate: &Word) -> bool {
        let guess = self.word.canon().as_bytes();
        let cand = candidate.canon().as_bytes();
        debug_assert_eq!(guess.len(), WORD_LEN);
        debug_assert_eq!(cand.len(), WORD_LEN);

        // Letter tallies for both sides, indexed by uppercase ascii letter
        let mut in_guess = [0u8; (b'Z' - b'A' + 1) as usize];
        let mut in_cand = [0u8; (b'Z' - b'A' + 1) as usize];
        for i in 0..WORD_LEN {
            in_guess[(guess[i] - b'A') as usize] += 1;
            in_cand[(cand[i] - b'A') as usize] += 1;
        }

        for i in 0..WORD_LEN {
            let g = guess[i];
            match self.mask[i] {
                Mark::Exact => {
                    if cand[i] != g {
                        return false;
                    }
                }
                Mark::Present => {
                    if cand[i] == g || !cand.contains(&g) {
                        return false;
                    }
                }
                Mark::Absent => {
                    if in_guess[(g - b'A') as usize] <= in_cand[(g - b'A') as usize] {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Keeps exactly the candidates consistent with `guess`. Pure: the input
/// slice is never mutated and identical inputs yield identical output.
pub fn filter_candidates(candidates: &[Word], guess: &Guess) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| guess.matches(word))
        .cloned()
        .collect()
}

/// The word list a session draws its candidates from. Immutable once built.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Builds a dictionary from raw lines: each is normalized and kept only
    /// if that leaves five ASCII letters. Duplicates (by canonical form) are
    /// dropped; the first spelling wins, so an accented original is the one
    /// shown later.
    pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for line in lines {
            if let Some(word) = Word::new(line) {
                if seen.insert(word.canon().to_string()) {
                    words.push(word);
                }
            }
        }
        Self { words }
    }

    /// Reads a word list from `path`, one word per line. I/O failure is
    /// reported on stderr and degrades to an empty dictionary; callers must
    /// refuse to start a session on one.
    pub fn load(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("could not open word list '{}': {}", path.display(), e);
                return Self { words: Vec::new() };
            }
        };
        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) => {
                    eprintln!("could not read word list '{}': {}", path.display(), e);
                    return Self { words: Vec::new() };
                }
            }
        }
        let dict = Self::from_lines(lines.iter().map(String::as_str));
        if dict.is_empty() {
            eprintln!(
                "word list '{}' has no usable five-letter words",
                path.display()
            );
        }
        dict
    }

    /// The compiled-in word list, parsed once.
    pub fn embedded() -> &'static Self {
        EMBEDDED.get_or_init(|| Self::from_lines(DICTIONARY.iter().copied()))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
macro_rules! mask {
    (B) => {$crate::Mark::Exact};
    (C) => {$crate::Mark::Present};
    (M) => {$crate::Mark::Absent};
    ($($c:tt)+) => {[
        $(mask!($c)),+
    ]}
}
