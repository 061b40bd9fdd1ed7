//! References and `oneOf` composition

use serde_json::Value;

use super::Node;
use crate::config::RenderConfig;
use crate::render::{Keywords, Render};

/// Pointer prefix for local definitions
pub const DEFINITIONS_POINTER: &str = "#/definitions/";

/// A `$ref` to a definition of the enclosing document, by name.
///
/// The name is not checked against any document; a dangling reference only
/// shows up when a validator tries to follow it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceNode {
    name: String,
}

impl ReferenceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// e.g. `#/definitions/address`
    pub fn pointer(&self) -> String {
        format!("{DEFINITIONS_POINTER}{}", self.name)
    }
}

impl Render for ReferenceNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        let mut keywords = Keywords::new();
        keywords.insert("$ref", Value::from(self.pointer()));
        keywords.into_value()
    }
}

/// Exactly one of several sub-schemas must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneOfNode {
    members: Vec<Node>,
}

impl OneOfNode {
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &[Node] {
        &self.members
    }
}

impl Render for OneOfNode {
    fn render_with(&self, config: &RenderConfig) -> Value {
        let mut keywords = Keywords::new();
        keywords.insert(
            "oneOf",
            Value::Array(self.members.iter().map(|m| m.render_with(config)).collect()),
        );
        keywords.into_value()
    }
}
