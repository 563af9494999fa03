//! Build script to generate embedded word lists
//!
//! Reads the per-length word list files and generates Rust source code with
//! const arrays, one pair of tiers (full + common) per supported length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 9;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Full admissibility tier
    generate_tier(
        "words",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "All admissible words",
    );

    // Secret-word pools (frequency filter applied upstream)
    generate_tier(
        "common",
        &Path::new(&out_dir).join("common.rs"),
        "COMMON",
        "Common words eligible as secret words",
    );
}

fn generate_tier(file_prefix: &str, output_path: &Path, const_prefix: &str, doc_comment: &str) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}, grouped by length.").unwrap();

    for len in MIN_LEN..=MAX_LEN {
        let input_path = format!("data/{file_prefix}_{len}.txt");
        let content = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let count = words.len();

        for word in &words {
            assert!(
                word.len() == len && word.bytes().all(|b| b.is_ascii_lowercase()),
                "Bad entry {word:?} in {input_path}: expected {len} lowercase ASCII letters"
            );
        }

        writeln!(output).unwrap();
        writeln!(output, "/// {doc_comment} of length {len}").unwrap();
        writeln!(output, "pub const {const_prefix}_{len}: &[&str] = &[").unwrap();
        for word in &words {
            writeln!(output, "    \"{word}\",").unwrap();
        }
        writeln!(output, "];").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "/// Number of words in {const_prefix}_{len}").unwrap();
        writeln!(output, "pub const {const_prefix}_{len}_COUNT: usize = {count};").unwrap();

        println!("cargo:rerun-if-changed={input_path}");
    }
}
