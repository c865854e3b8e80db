//! Command runners for the wordchain binary.
//!
//! - Bench: time the word-chain editor against the reference editor
//! - Generate: write random test documents
//! - Check: word count and misspellings of one document

mod bench;
mod check;
mod generate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use wordchain::config::Config;
use wordchain::core::Dictionary;
use wordchain::core::spell::DEFAULT_DICTIONARY;

pub use bench::run_bench;
pub use check::run_check;
pub use generate::run_generate;

/// Validate and canonicalize an input path, rejecting directories and
/// special files that would hang a blocking read.
pub fn validate_file_path(path: &Path) -> anyhow::Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Invalid path: {}", path.display()))?;

    if canonical.is_dir() {
        bail!("Path is a directory, not a file: {}", canonical.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        let ft = std::fs::metadata(&canonical)?.file_type();
        if ft.is_char_device() || ft.is_block_device() || ft.is_fifo() || ft.is_socket() {
            bail!("Cannot open device/special file: {}", canonical.display());
        }
    }

    Ok(canonical)
}

/// Load the configured dictionary; failure is fatal for every runner
fn load_dictionary(config: &Config) -> anyhow::Result<Arc<Dictionary>> {
    let path = config.get_string("dictionary").unwrap_or(DEFAULT_DICTIONARY);
    let validated = validate_file_path(Path::new(path))
        .with_context(|| format!("Cannot use dictionary {}", path))?;
    Ok(Arc::new(Dictionary::from_path(validated)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_file_path(dir.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_file_path(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_load_dictionary_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta").unwrap();

        let mut config = Config::default();
        config.set("dictionary", file.path().to_string_lossy().into_owned());
        let dict = load_dictionary(&config).unwrap();
        assert!(dict.contains("beta"));
    }

    #[test]
    fn test_missing_dictionary_fails() {
        let mut config = Config::default();
        config.set("dictionary", "/definitely/not/here/words");
        assert!(load_dictionary(&config).is_err());
    }
}
