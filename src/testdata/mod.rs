//! Random test documents for load testing
//!
//! Documents are runs of random lowercase tokens (1 to 10 letters), each
//! followed by a single space. Files are grouped by size class under
//! `<dir>/<size>/test_<size>_<n>.txt`.

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::Rng;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::error::Result;

/// Longest generated token
const MAX_TOKEN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Number of words a document of this class contains
    pub fn word_range(self) -> RangeInclusive<usize> {
        match self {
            SizeClass::Small => 500..=1000,
            SizeClass::Medium => 77_777..=99_999,
            SizeClass::Large => 555_555..=999_999,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    pub fn file_path(self, dir: &Path, index: usize) -> PathBuf {
        dir.join(self.as_str())
            .join(format!("test_{}_{}.txt", self.as_str(), index))
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "small" => Ok(SizeClass::Small),
            "medium" => Ok(SizeClass::Medium),
            "large" => Ok(SizeClass::Large),
            other => Err(format!("unknown size class: {}", other)),
        }
    }
}

/// Write `words` random tokens to `out`
pub fn write_document<R: Rng, W: Write>(rng: &mut R, words: usize, out: &mut W) -> std::io::Result<()> {
    let mut token = String::with_capacity(MAX_TOKEN_LEN + 1);
    for _ in 0..words {
        token.clear();
        let len = rng.random_range(1..=MAX_TOKEN_LEN);
        for _ in 0..len {
            token.push(char::from(rng.random_range(b'a'..=b'z')));
        }
        token.push(' ');
        out.write_all(token.as_bytes())?;
    }
    Ok(())
}

/// A document of exactly `words` random tokens
pub fn generate_document<R: Rng>(rng: &mut R, words: usize) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_document(rng, words, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Generate `count` files of the given class under `dir`.
///
/// Each file is written to a temporary file in the target directory and
/// then persisted, so a partially written case is never left behind.
pub fn generate_files<R: Rng>(dir: &Path, size: SizeClass, count: usize, rng: &mut R) -> Result<Vec<PathBuf>> {
    let class_dir = dir.join(size.as_str());
    fs::create_dir_all(&class_dir)?;

    let mut written = Vec::with_capacity(count);
    for index in 0..count {
        let path = size.file_path(dir, index);
        let words = rng.random_range(size.word_range());

        let temp_file = NamedTempFile::new_in(&class_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            write_document(rng, words, &mut writer)?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| e.error)?;

        info!(path = %path.display(), words, "generated test document");
        written.push(path);
    }
    Ok(written)
}

/// Read every case file of a class, in index order, with newlines removed.
/// Stops at the first missing index; `limit` caps how many are read.
pub fn load_cases(dir: &Path, size: SizeClass, limit: Option<usize>) -> Result<Vec<String>> {
    let mut cases = Vec::new();
    let mut index = 0;
    loop {
        if limit.is_some_and(|max| cases.len() >= max) {
            break;
        }
        let path = size.file_path(dir, index);
        if !path.is_file() {
            break;
        }
        let text = fs::read_to_string(&path)?;
        debug!(path = %path.display(), bytes = text.len(), "loaded case");
        cases.push(text.replace('\n', ""));
        index += 1;
    }
    Ok(cases)
}
