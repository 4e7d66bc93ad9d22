//! Turns raw lexicon dumps into a word list for the solver: keeps entries
//! whose accent-stripped form is exactly five ASCII letters, dedupes by that
//! canonical form, and prints the surviving spellings sorted by it. Feed the
//! output into `palabras.txt` or pass it to the solver with `--words`.

use rayon::prelude::*;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use unicode_normalization::UnicodeNormalization;

fn main() {
    let files: Vec<_> = std::env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("usage: wordlist <lexicon>...");
        eprintln!("lexicons are plain text or gzip, one word per line");
        eprintln!("(a trailing frequency column is tolerated and ignored)");
        std::process::exit(1);
    }

    let words: BTreeMap<String, String> = files
        .into_par_iter()
        .map(|file| harvest(&file))
        .reduce(BTreeMap::new, |mut all, chunk| {
            for (canon, shown) in chunk {
                match all.entry(canon) {
                    Entry::Vacant(slot) => {
                        slot.insert(shown);
                    }
                    // keep the merge order-independent
                    Entry::Occupied(mut slot) => {
                        if shown < *slot.get() {
                            slot.insert(shown);
                        }
                    }
                }
            }
            all
        });

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for shown in words.values() {
        writeln!(stdout, "{}", shown).expect("writing to stdout should be okay");
    }
}

/// Collects qualifying words from one lexicon file, keyed by canonical form.
fn harvest(path: &str) -> BTreeMap<String, String> {
    let file =
        File::open(path).unwrap_or_else(|e| panic!("could not open file '{}': {}", path, e));
    let reader: Box<dyn BufRead> = if path.ends_with(".gz") {
        Box::new(BufReader::new(flate2::bufread::GzDecoder::new(
            BufReader::new(file),
        )))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut words = BTreeMap::new();
    for line in reader.lines() {
        let line = line.unwrap_or_else(|e| panic!("could not read '{}': {}", path, e));
        // frequency dumps carry "word count" pairs; keep the word column
        let raw = match line.split_whitespace().next() {
            Some(raw) => raw,
            None => continue,
        };
        let canon = raw
            .nfd()
            .filter(char::is_ascii)
            .collect::<String>()
            .to_ascii_uppercase();
        if canon.len() == 5 && canon.bytes().all(|b| b.is_ascii_alphabetic()) {
            words.entry(canon).or_insert_with(|| raw.to_lowercase());
        }
    }
    words
}
