//! Tree node types produced by the builder.
//!
//! The original-style class hierarchy (a base item with properties, children
//! and a value all at once) is replaced by a closed sum type: a node is an
//! object, an array, or a scalar, and nothing else. Properties exist only
//! inside objects, so a bare property can never appear as an array element —
//! the type system rules it out rather than a runtime check.
//!
//! Objects keep their properties as a `Vec<PropertyNode>` to preserve
//! insertion order without depending on `IndexMap`; name uniqueness is
//! enforced by the builder when the property name token arrives.

use serde_json::Value;

/// A completed JSON tree node: object, array, or scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Object(ObjectNode),
    Array(ArrayNode),
    Scalar(Scalar),
}

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

/// A JSON object: insertion-ordered properties with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectNode {
    properties: Vec<PropertyNode>,
}

/// A JSON array: elements in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayNode {
    elements: Vec<TreeNode>,
}

/// A named property of an object. Holds exactly one value, assigned once
/// while the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    name: String,
    value: TreeNode,
}

impl TreeNode {
    /// Borrow this node as an object, if it is one.
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            TreeNode::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Borrow this node as an array, if it is one.
    pub fn as_array(&self) -> Option<&ArrayNode> {
        match self {
            TreeNode::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Borrow this node as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            TreeNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Convert the completed tree into a `serde_json::Value`.
    ///
    /// Property order survives the conversion (`serde_json` is built with
    /// `preserve_order`). This is the bridge for downstream consumers that
    /// want a generic value, and the oracle the structural tests compare
    /// against.
    pub fn to_json(&self) -> Value {
        match self {
            TreeNode::Object(obj) => {
                let mut map = serde_json::Map::new();
                for prop in obj.properties() {
                    map.insert(prop.name().to_string(), prop.value().to_json());
                }
                Value::Object(map)
            }
            TreeNode::Array(arr) => {
                Value::Array(arr.elements().map(TreeNode::to_json).collect())
            }
            TreeNode::Scalar(s) => match s {
                Scalar::String(text) => Value::String(text.clone()),
                Scalar::Number(n) => serde_json::Number::from_f64(*n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                Scalar::Bool(b) => Value::Bool(*b),
                Scalar::Null => Value::Null,
            },
        }
    }
}

impl ObjectNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether a property with this name already exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }

    /// Look up a property's value by name.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Iterate the properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyNode> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Append a completed property. The builder checks name uniqueness
    /// before the property's value is ever produced, so this only asserts
    /// the invariant in debug builds.
    pub(crate) fn push(&mut self, property: PropertyNode) {
        debug_assert!(!self.contains(&property.name));
        self.properties.push(property);
    }
}

impl ArrayNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Iterate the elements in arrival order.
    pub fn elements(&self) -> impl Iterator<Item = &TreeNode> {
        self.elements.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TreeNode> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn push(&mut self, element: TreeNode) {
        self.elements.push(element);
    }
}

impl PropertyNode {
    pub(crate) fn new(name: String, value: TreeNode) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &TreeNode {
        &self.value
    }
}
