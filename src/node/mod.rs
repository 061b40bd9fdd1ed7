//! Schema Nodes
//!
//! Typed building blocks for draft-04 sub-schemas. A [`Node`] owns its
//! children outright, so a node tree is always a tree: definitions are
//! shared by name through [`ReferenceNode`], never by pointer.
//!
//! Scalar nodes (number, string, null, boolean) collapse to their bare type
//! name when listed in a union; every other node is inlined as a full
//! sub-schema.

pub mod array;
pub mod object;
pub mod reference;
pub mod scalar;

pub use array::ArrayNode;
pub use object::{ObjectNode, Properties, Required};
pub use reference::{OneOfNode, ReferenceNode};
pub use scalar::{BooleanNode, EnumNode, NullNode, NumberNode, StringFormat, StringNode};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::config::RenderConfig;
use crate::render::{Keywords, Render};

/// Any schema node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Bare `type` keyword, single name or union
    Type(TypeNode),
    Number(NumberNode),
    String(StringNode),
    Null(NullNode),
    Boolean(BooleanNode),
    Enum(EnumNode),
    Array(ArrayNode),
    Object(ObjectNode),
    Reference(ReferenceNode),
    OneOf(OneOfNode),
}

impl Node {
    pub fn number() -> Self {
        Node::Number(NumberNode::new())
    }

    pub fn string() -> Self {
        Node::String(StringNode::new())
    }

    pub fn null() -> Self {
        Node::Null(NullNode)
    }

    pub fn boolean() -> Self {
        Node::Boolean(BooleanNode)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Node::Reference(ReferenceNode::new(name))
    }

    /// The type name this node contributes to a union, if it collapses to one.
    ///
    /// `None` means the node is structured and must be inlined.
    pub fn bare_type(&self) -> Option<&str> {
        match self {
            Node::Type(node) => match node.tag() {
                TypeTag::Name(name) => Some(name.as_str()),
                TypeTag::Unspecified | TypeTag::Union(_) => None,
            },
            Node::Number(_) => Some(NumberNode::TYPE),
            Node::String(_) => Some(StringNode::TYPE),
            Node::Null(_) => Some(NullNode::TYPE),
            Node::Boolean(_) => Some(BooleanNode::TYPE),
            Node::Enum(_)
            | Node::Array(_)
            | Node::Object(_)
            | Node::Reference(_)
            | Node::OneOf(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl Render for Node {
    fn render_with(&self, config: &RenderConfig) -> Value {
        match self {
            Node::Type(node) => node.render_with(config),
            Node::Number(node) => node.render_with(config),
            Node::String(node) => node.render_with(config),
            Node::Null(node) => node.render_with(config),
            Node::Boolean(node) => node.render_with(config),
            Node::Enum(node) => node.render_with(config),
            Node::Array(node) => node.render_with(config),
            Node::Object(node) => node.render_with(config),
            Node::Reference(node) => node.render_with(config),
            Node::OneOf(node) => node.render_with(config),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.render().serialize(serializer)
    }
}

macro_rules! impl_from_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_node! {
    Type => TypeNode,
    Number => NumberNode,
    String => StringNode,
    Null => NullNode,
    Boolean => BooleanNode,
    Enum => EnumNode,
    Array => ArrayNode,
    Object => ObjectNode,
    Reference => ReferenceNode,
    OneOf => OneOfNode,
}

// =============================================================================
// Type Node
// =============================================================================

/// Value of the `type` keyword
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    /// No `type` keyword; the schema accepts anything
    Unspecified,
    /// A single type name, e.g. `"number"`
    Name(String),
    /// A list of members, each a type name or an inlined sub-schema
    Union(Vec<UnionMember>),
}

/// One entry of a union `type` list
#[derive(Debug, Clone, PartialEq)]
pub enum UnionMember {
    Name(String),
    /// Structured member, rendered in full when the union renders
    Inline(Node),
}

impl UnionMember {
    fn from_node(node: Node) -> Self {
        match node.bare_type().map(str::to_string) {
            Some(name) => UnionMember::Name(name),
            None => UnionMember::Inline(node),
        }
    }

    fn render_with(&self, config: &RenderConfig) -> Value {
        match self {
            UnionMember::Name(name) => Value::from(name.as_str()),
            UnionMember::Inline(node) => node.render_with(config),
        }
    }
}

/// A schema consisting of the `type` keyword alone
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    tag: TypeTag,
}

impl TypeNode {
    /// Single type by name, e.g. `TypeNode::new("integer")`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: TypeTag::Name(name.into()),
        }
    }

    /// No type constraint at all
    pub fn any() -> Self {
        Self {
            tag: TypeTag::Unspecified,
        }
    }

    /// Type names; a single name stays a plain string
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        let tag = match names.len() {
            0 => TypeTag::Unspecified,
            1 => TypeTag::Name(names.remove(0)),
            _ => TypeTag::Union(names.into_iter().map(UnionMember::Name).collect()),
        };
        Self { tag }
    }

    /// Union of nodes.
    ///
    /// Scalar members contribute their type name; structured members are kept
    /// whole and inlined when rendered. A lone scalar yields a plain type name,
    /// a lone structured node a one-member list.
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut members: Vec<UnionMember> =
            members.into_iter().map(UnionMember::from_node).collect();
        let tag = match members.len() {
            0 => TypeTag::Unspecified,
            1 => match members.remove(0) {
                UnionMember::Name(name) => TypeTag::Name(name),
                inline => TypeTag::Union(vec![inline]),
            },
            _ => TypeTag::Union(members),
        };
        Self { tag }
    }

    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }
}

impl Render for TypeNode {
    fn render_with(&self, config: &RenderConfig) -> Value {
        let mut keywords = Keywords::new();
        match &self.tag {
            TypeTag::Unspecified => {}
            TypeTag::Name(name) => keywords.insert("type", Value::from(name.as_str())),
            TypeTag::Union(members) => keywords.insert(
                "type",
                Value::Array(members.iter().map(|m| m.render_with(config)).collect()),
            ),
        }
        keywords.into_value()
    }
}
