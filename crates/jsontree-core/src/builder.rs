//! Streaming tree builder — assembles lexical tokens into rooted trees.
//!
//! The builder is a stack-driven state machine consuming one token at a
//! time. It never holds the whole document as a pre-parsed generic value:
//! memory is bounded by open-container depth, and each completed root is
//! handed to the caller the moment its closing token (or a bare scalar)
//! arrives. A stream may carry any number of concatenated root-level
//! values; the builder emits 0..N roots accordingly.
//!
//! # Ownership
//!
//! Containers are exclusively owned. While a container is open it lives in
//! its stack frame; the frame also records how the finished container will
//! attach to its surroundings (as a named property value, as an array
//! element, or as a new root). The placement is decided when the container
//! opens, while the pending-property slot and the parent context are both
//! in scope, and executed when it closes, when ownership transfers into
//! the parent. No shared pointers.
//!
//! # Errors
//!
//! All structural errors are fatal for the parse; the builder does not
//! skip-and-continue and never exposes a partially built root. See
//! [`TreeError`] for the taxonomy.

use crate::error::{Result, TreeError};
use crate::tokenizer::{Token, Tokenizer};
use crate::types::{ArrayNode, ObjectNode, PropertyNode, Scalar, TreeNode};

/// An open container on the builder's stack.
enum Container {
    Object(ObjectNode),
    Array(ArrayNode),
}

/// Where a finished node goes once it is complete.
enum Placement {
    /// Becomes the value of the named property on the enclosing object.
    Property(String),
    /// Appended to the enclosing array.
    Element,
    /// Emitted as a completed root.
    Root,
}

/// A stack frame: the container under construction plus its eventual
/// placement.
struct Frame {
    container: Container,
    placement: Placement,
}

/// Stateful consumer of a token stream, producing completed root nodes.
///
/// One builder instance serves exactly one single-threaded pass over
/// exactly one token stream. Dropping a builder mid-stream is always safe;
/// partially built containers are simply discarded.
#[derive(Default)]
pub struct TreeBuilder {
    stack: Vec<Frame>,
    pending: Option<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one token in stream order.
    ///
    /// Returns `Ok(Some(root))` exactly when this token completes a
    /// root-level value: a closing token that leaves the stack empty, or a
    /// scalar arriving while no container is open. Returns `Ok(None)` for
    /// every other accepted token.
    pub fn consume(&mut self, token: Token) -> Result<Option<TreeNode>> {
        match token {
            Token::StartObject => {
                self.open(Container::Object(ObjectNode::new()))?;
                Ok(None)
            }
            Token::StartArray => {
                self.open(Container::Array(ArrayNode::new()))?;
                Ok(None)
            }
            Token::EndObject => self.close(b'}'),
            Token::EndArray => self.close(b']'),
            Token::PropertyName(name) => {
                self.begin_property(name)?;
                Ok(None)
            }
            Token::String(text) => self.value(Scalar::String(text)),
            Token::Number(n) => self.value(Scalar::Number(n)),
            Token::Bool(b) => self.value(Scalar::Bool(b)),
            Token::Null => self.value(Scalar::Null),
        }
    }

    /// Terminal check once the token stream is exhausted.
    pub fn finish(&self) -> Result<()> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(TreeError::UnterminatedContainer {
                depth: self.stack.len(),
            })
        }
    }

    /// Number of currently open containers.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a new container, recording its placement up front.
    fn open(&mut self, container: Container) -> Result<()> {
        let placement = self.placement()?;
        self.stack.push(Frame {
            container,
            placement,
        });
        Ok(())
    }

    /// Pop the innermost container, verify it matches the end token, and
    /// attach it. `delimiter` is `b'}'` or `b']'`, used for the expectation
    /// check and the error message.
    fn close(&mut self, delimiter: u8) -> Result<Option<TreeNode>> {
        if let Some(name) = self.pending.take() {
            return Err(TreeError::MalformedTokenStream(format!(
                "property {name:?} has no value before its object closes"
            )));
        }
        let Some(frame) = self.stack.pop() else {
            return Err(TreeError::MalformedTokenStream(format!(
                "unmatched {:?} with no open container",
                delimiter as char
            )));
        };
        let node = match (frame.container, delimiter) {
            (Container::Object(obj), b'}') => TreeNode::Object(obj),
            (Container::Array(arr), b']') => TreeNode::Array(arr),
            (Container::Object(_), _) => {
                return Err(TreeError::MalformedTokenStream(
                    "']' closes an object".to_string(),
                ));
            }
            (Container::Array(_), _) => {
                return Err(TreeError::MalformedTokenStream(
                    "'}' closes an array".to_string(),
                ));
            }
        };
        self.attach(frame.placement, node)
    }

    /// Record a property name on the innermost object and mark it pending.
    /// Duplicates are rejected here, when the name arrives, so the earlier
    /// value can never be silently overwritten.
    fn begin_property(&mut self, name: String) -> Result<()> {
        if let Some(pending) = &self.pending {
            return Err(TreeError::MalformedTokenStream(format!(
                "property name {name:?} while property {pending:?} awaits its value"
            )));
        }
        match self.stack.last() {
            Some(Frame {
                container: Container::Object(obj),
                ..
            }) => {
                if obj.contains(&name) {
                    return Err(TreeError::DuplicateProperty { name });
                }
                self.pending = Some(name);
                Ok(())
            }
            _ => Err(TreeError::MalformedTokenStream(format!(
                "property name {name:?} outside an object"
            ))),
        }
    }

    /// Attach a scalar via the shared placement rule.
    fn value(&mut self, scalar: Scalar) -> Result<Option<TreeNode>> {
        let placement = self.placement()?;
        self.attach(placement, TreeNode::Scalar(scalar))
    }

    /// The shared attachment rule for every value-producing token:
    /// a pending property claims the value; otherwise an enclosing array
    /// receives it as the next element; otherwise it is a root. A value
    /// directly inside an object with no pending property name is a
    /// structural error.
    fn placement(&mut self) -> Result<Placement> {
        if let Some(name) = self.pending.take() {
            return Ok(Placement::Property(name));
        }
        match self.stack.last() {
            Some(Frame {
                container: Container::Array(_),
                ..
            }) => Ok(Placement::Element),
            Some(Frame {
                container: Container::Object(_),
                ..
            }) => Err(TreeError::UnexpectedValueContext),
            None => Ok(Placement::Root),
        }
    }

    /// Execute a placement decided earlier. The stack discipline keeps the
    /// recorded parent kind on top when its child finishes; the error arms
    /// guard that invariant.
    fn attach(&mut self, placement: Placement, node: TreeNode) -> Result<Option<TreeNode>> {
        match placement {
            Placement::Property(name) => match self.stack.last_mut() {
                Some(Frame {
                    container: Container::Object(obj),
                    ..
                }) => {
                    obj.push(PropertyNode::new(name, node));
                    Ok(None)
                }
                _ => Err(TreeError::MalformedTokenStream(format!(
                    "property {name:?} lost its enclosing object"
                ))),
            },
            Placement::Element => match self.stack.last_mut() {
                Some(Frame {
                    container: Container::Array(arr),
                    ..
                }) => {
                    arr.push(node);
                    Ok(None)
                }
                _ => Err(TreeError::MalformedTokenStream(
                    "element lost its enclosing array".to_string(),
                )),
            },
            Placement::Root => Ok(Some(node)),
        }
    }
}

/// Lazy sequence of completed roots over a token stream.
///
/// Wraps any `Iterator<Item = Result<Token>>` and yields each root as it
/// completes, so concatenated documents can be processed incrementally.
/// When the token stream runs out, the terminal check runs and an
/// unterminated container surfaces as the final item. After the first
/// error the iterator is fused.
pub struct Documents<I> {
    tokens: I,
    builder: TreeBuilder,
    done: bool,
}

impl<I> Documents<I>
where
    I: Iterator<Item = Result<Token>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            builder: TreeBuilder::new(),
            done: false,
        }
    }
}

impl<I> Iterator for Documents<I>
where
    I: Iterator<Item = Result<Token>>,
{
    type Item = Result<TreeNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.tokens.next() {
                Some(Ok(token)) => match self.builder.consume(token) {
                    Ok(Some(root)) => return Some(Ok(root)),
                    Ok(None) => {}
                    Err(err) => {
                        self.done = true;
                        return Some(Err(err));
                    }
                },
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    return match self.builder.finish() {
                        Ok(()) => None,
                        Err(err) => Some(Err(err)),
                    };
                }
            }
        }
    }
}

/// Parse a complete input string into its sequence of root trees.
///
/// Tokenizes the input and collects every root-level value. An input of
/// concatenated documents yields one tree per document; an empty (or
/// whitespace-only) input yields an empty sequence. The first tokenizer or
/// structural error aborts the whole parse.
pub fn parse(input: &str) -> Result<Vec<TreeNode>> {
    Documents::new(Tokenizer::new(input)).collect()
}
