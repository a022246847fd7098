//! # jsontree-core
//!
//! Single-pass streaming assembly of JSON token streams into rooted trees.
//!
//! The interesting component is the [`TreeBuilder`]: it consumes lexical
//! tokens one at a time and incrementally builds heterogeneous trees of
//! objects, arrays, named properties, and scalars — without ever holding
//! the whole document as a pre-parsed generic value. Nesting is tracked
//! with an explicit stack, and a stream may contain any number of
//! concatenated root-level documents, each emitted as its own tree the
//! moment it completes.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree_core::{parse, Scalar, TreeNode};
//!
//! let roots = parse(r#"{"a":1,"b":[2,3]} {"c":true}"#).unwrap();
//! assert_eq!(roots.len(), 2);
//!
//! let first = roots[0].as_object().unwrap();
//! assert_eq!(first.get("a"), Some(&TreeNode::Scalar(Scalar::Number(1.0))));
//! assert_eq!(first.get("b").unwrap().as_array().unwrap().len(), 2);
//! ```
//!
//! Streaming consumption over large or concatenated inputs goes through
//! [`Documents`], which yields each root lazily:
//!
//! ```rust
//! use jsontree_core::{Documents, Tokenizer};
//!
//! let mut docs = Documents::new(Tokenizer::new("1 2 3"));
//! assert_eq!(docs.by_ref().filter(|r| r.is_ok()).count(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — raw text → lazy token sequence
//! - [`builder`] — token sequence → completed root trees
//! - [`types`] — the tree node model
//! - [`error`] — error taxonomy for lexical and structural failures

pub mod builder;
pub mod error;
pub mod tokenizer;
pub mod types;

pub use builder::{parse, Documents, TreeBuilder};
pub use error::{Result, TreeError};
pub use tokenizer::{Token, Tokenizer};
pub use types::{ArrayNode, ObjectNode, PropertyNode, Scalar, TreeNode};
