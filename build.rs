//! Build script to embed the default dictionary sources
//!
//! Reads the affix ruleset and base lexicon and generates Rust source code
//! with const string resources.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Embed the affix ruleset
    generate_resource(
        "data/en.aff",
        &Path::new(&out_dir).join("en_aff.rs"),
        "EN_AFF",
        "English affix ruleset (hunspell SFX/PFX format)",
    );

    // Embed the base lexicon
    generate_resource(
        "data/en.dic",
        &Path::new(&out_dir).join("en_dic.rs"),
        "EN_DIC",
        "English base lexicon (hunspell .dic format, word/FLAGS entries)",
    );

    // Rebuild if dictionary sources change
    println!("cargo:rerun-if-changed=data/en.aff");
    println!("cargo:rerun-if-changed=data/en.dic");
}

fn generate_resource(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entry_count = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary resource").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    // Debug-format the file content so it lands as a valid string literal
    writeln!(output, "pub const {const_name}: &str = {content:?};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of non-empty lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_LINES: usize = {entry_count};").unwrap();
}
