//! Build script to generate the embedded fallback vocabulary
//!
//! Reads a tab-separated `term<TAB>meaning` file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_vocabulary(
        "data/fallback.tsv",
        &Path::new(&out_dir).join("fallback.rs"),
        "FALLBACK",
        "Built-in vocabulary used when no word list can be loaded",
    );

    // Rebuild if the vocabulary changes
    println!("cargo:rerun-if-changed=data/fallback.tsv");
}

fn generate_vocabulary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let pairs: Vec<(&str, &str)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (term, meaning) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("Missing tab separator in {input_path}: {line:?}"));
            (term.trim(), meaning.trim())
        })
        .collect();
    let count = pairs.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (term, meaning) in pairs {
        writeln!(output, "    ({term:?}, {meaning:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
