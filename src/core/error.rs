//! Error type shared by the editing engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the word-chain editor and its collaborators.
///
/// Invalid cut/copy ranges and out-of-range paste positions are not errors;
/// those operations are silent no-ops.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The dictionary could not be opened or read.
    #[error("failed to load dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A deferred copy points at a position the document no longer has.
    #[error("copied range starting at word {start} no longer exists (document has {len} words)")]
    CopySourceOutOfRange { start: usize, len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_message() {
        let err = EditorError::Dictionary {
            path: PathBuf::from("/nope/words"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/words"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_copy_source_message() {
        let err = EditorError::CopySourceOutOfRange { start: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "copied range starting at word 7 no longer exists (document has 3 words)"
        );
    }
}
