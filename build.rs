use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=data/ability_words.txt");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is not set"));
    let out_file = out_dir.join("bundled_ability_words.rs");

    let source = PathBuf::from(manifest_dir).join("data/ability_words.txt");
    let raw = fs::read_to_string(&source)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", source.display()));

    // One word per line; blank lines and `#` comments are skipped.
    let mut words: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    words.sort_unstable();
    words.dedup();

    let mut generated = String::from("pub const BUNDLED_ABILITY_WORDS: &[&str] = &[\n");
    for word in &words {
        generated.push_str(&format!("    {word:?},\n"));
    }
    generated.push_str("];\n");

    fs::write(&out_file, generated).expect("failed to write bundled_ability_words.rs");
}
