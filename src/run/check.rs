//! Check mode: word count and misspellings of one document.

use std::fs;
use std::path::Path;

use anyhow::Context;
use wordchain::config::Config;
use wordchain::core::WordEditor;

use super::{load_dictionary, validate_file_path};

pub fn run_check(file: &Path, config: &Config) -> anyhow::Result<()> {
    let dictionary = load_dictionary(config)?;
    let validated = validate_file_path(file)?;
    let text = fs::read_to_string(&validated)
        .with_context(|| format!("Failed to read {}", validated.display()))?;

    let editor = WordEditor::new(&text, dictionary);
    println!("{}", validated.display());
    println!("  words:        {}", editor.word_count());
    println!("  misspellings: {}", editor.misspellings());
    Ok(())
}
