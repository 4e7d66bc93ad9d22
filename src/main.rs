use clap::Parser;
use mimalloc::MiMalloc;
use palabra::session::{self, Console};
use palabra::{Dictionary, Word};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Interactive assistant for 5-letter word puzzles.
///
/// Enter your opening guess, then relay the puzzle's feedback for each guess
/// as a 5-character string: m for a gray letter, c for a misplaced one, b for
/// an exact hit. The assistant narrows the word list and proposes the next
/// guess until the puzzle is solved or six rounds are spent.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list to use, one word per line.
    ///
    /// If not passed, the compiled-in Spanish list is used.
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Opening guess, instead of prompting for one.
    #[clap(short, long)]
    first: Option<String>,
}

struct Stdio {
    stdin: io::Stdin,
}

impl Console for Stdio {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

fn main() {
    let args = Args::parse();

    let loaded;
    let dictionary = match &args.words {
        Some(path) => {
            loaded = Dictionary::load(path);
            &loaded
        }
        None => Dictionary::embedded(),
    };
    if dictionary.is_empty() {
        eprintln!("no words to solve with; aborting");
        std::process::exit(1);
    }

    let first = args.first.as_deref().and_then(|raw| {
        let word = Word::new(raw);
        if word.is_none() {
            eprintln!("ignoring --first '{}': not a five-letter word", raw);
        }
        word
    });

    let mut console = Stdio { stdin: io::stdin() };
    if session::play(dictionary, &mut console, first).is_none() {
        eprintln!("input closed; aborting session");
        std::process::exit(1);
    }
}
