//! This module constitutes the headless editing engine of wordchain: the
//! arena-backed word chain, the cursor that resolves word positions, the
//! deferred-copy paste buffer, the spell checker, and the `WordEditor` facade
//! that composes them. The contiguous `ReferenceEditor` baseline lives here
//! too so both editors share the `TextEditor` trait.

pub mod chain;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod id;
pub mod paste_buffer;
pub mod reference;
pub mod spell;

pub use editor::{TextEditor, WordEditor};
pub use error::EditorError;
pub use reference::ReferenceEditor;
pub use spell::{Dictionary, SpellChecker};
