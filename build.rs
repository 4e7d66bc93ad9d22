use std::io::prelude::*;

const WORDS: &str = include_str!("palabras.txt");

fn main() {
    println!("cargo:rerun-if-changed=palabras.txt");
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("dictionary.rs"))
        .expect("could not create file in OUT_DIR");

    let mut words = Vec::from_iter(WORDS.lines().map(str::trim).filter(|line| !line.is_empty()));
    words.sort_unstable();
    words.dedup();

    writeln!(f, "pub const DICTIONARY: [&str; {}] = [", words.len()).unwrap();
    for word in words {
        writeln!(f, "\"{}\",", word).unwrap();
    }
    write!(f, "];").unwrap();
}
