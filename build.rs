//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.
//! Entries are trimmed, uppercased and deduplicated; the allowed list always
//! contains every answer.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let answers = read_word_list("data/answers.txt");
    let mut allowed = answers.clone();
    allowed.extend(read_word_list("data/allowed.txt"));
    let allowed = dedup(allowed);

    generate_word_list(
        &answers,
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Target word candidates for daily and practice games",
    );

    generate_word_list(
        &allowed,
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All accepted guesses (answers included)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn read_word_list(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words = content
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect();

    dedup(words)
}

fn dedup(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn generate_word_list(words: &[String], output_path: &Path, const_name: &str, doc_comment: &str) {
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
