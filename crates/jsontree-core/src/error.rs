//! Error types for tokenizing and tree building.

use thiserror::Error;

/// Errors that can occur while tokenizing input or assembling the tree.
///
/// Every variant is fatal for the document being built: the builder never
/// attempts partial-tree recovery, and no partially constructed root is
/// exposed to the caller. Resynchronizing across independent concatenated
/// documents is the caller's decision, not the builder's.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// The tokenizer could not produce a token from the raw input.
    /// Includes the byte offset where scanning failed. The builder passes
    /// this through unchanged.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// An end token arrived with no matching open container, or a token
    /// arrived in a position the JSON grammar cannot produce.
    #[error("malformed token stream: {0}")]
    MalformedTokenStream(String),

    /// The token stream ended while containers were still open.
    #[error("unterminated input: {depth} container(s) still open at end of stream")]
    UnterminatedContainer { depth: usize },

    /// A property name reused a name already present in the same object.
    /// The earlier value is never silently overwritten.
    #[error("duplicate property name {name:?} in object")]
    DuplicateProperty { name: String },

    /// A value or container token arrived while the innermost open
    /// container was an object with no pending property name.
    #[error("value inside an object without a preceding property name")]
    UnexpectedValueContext,
}

/// Convenience alias used throughout jsontree-core.
pub type Result<T> = std::result::Result<T, TreeError>;
