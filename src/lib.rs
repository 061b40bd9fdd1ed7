//! Typed JSON Schema Builder
//!
//! Compose draft-04 JSON Schema documents from typed nodes instead of
//! hand-written nested maps, extend object schemas through layered
//! refinements, render them to plain `serde_json::Value` documents and
//! validate data against the result.
//!
//! ## Features
//!
//! - **Typed Nodes**: numbers, strings, null, booleans, enums, arrays, objects,
//!   references, `oneOf` and `type` unions
//! - **Inheritance**: object templates derive children by discarding and adding
//!   required names and properties, without touching the parent
//! - **Pure Rendering**: every render builds a fresh document
//! - **Validation**: rendered documents are checked with the `jsonschema` crate
//!
//! ## Architecture
//!
//! ```text
//! ObjectTemplate ──refine()──▶ ObjectTemplate ──instantiate()──▶ ObjectNode ─┐
//!                                                                            │
//! Node tree (Number, String, Array, Object, Reference, ...) ─────────────────┤
//!                                                                            ▼
//!                                         SchemaDocument ──render()──▶ serde_json::Value
//!                                                │                            │
//!                                                └──validate(data)──▶ Validator (draft-04)
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod node;
pub mod render;
pub mod template;
pub mod validate;

pub use config::{RenderConfig, SchemaConfig, ValidationConfig};
pub use document::{Definitions, DocumentOverrides, DocumentTemplate, SchemaDocument, DRAFT_04};
pub use error::{Result, SchemaError};
pub use node::{
    ArrayNode, BooleanNode, EnumNode, Node, NullNode, NumberNode, ObjectNode, OneOfNode,
    Properties, ReferenceNode, Required, StringFormat, StringNode, TypeNode, TypeTag, UnionMember,
};
pub use render::Render;
pub use template::{Delta, ObjectOverrides, ObjectTemplate, Refinement};
pub use validate::Validator;
