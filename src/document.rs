//! Schema Documents
//!
//! The root of a schema: an object schema plus `$schema` and named
//! `definitions` that [`ReferenceNode`](crate::node::ReferenceNode)s point at.

use jsonschema::ValidationError;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::node::{Node, ObjectNode};
use crate::render::Render;
use crate::template::{ObjectOverrides, ObjectTemplate, Refinement};
use crate::validate::Validator;

/// Value of `$schema` on every rendered document
pub const DRAFT_04: &str = "http://json-schema.org/draft-04/schema#";

/// Definition name to sub-schema
pub type Definitions = BTreeMap<String, Node>;

/// A root schema.
///
/// Build it once, render it as often as needed; rendering and validation
/// never modify it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocument {
    object: ObjectNode,
    definitions: Definitions,
}

impl SchemaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(object: ObjectNode) -> Self {
        Self {
            object,
            definitions: Definitions::new(),
        }
    }

    pub fn with_definition(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.definitions.insert(name.into(), node.into());
        self
    }

    pub fn with_definitions(mut self, definitions: Definitions) -> Self {
        self.definitions = definitions;
        self
    }

    /// The root object schema
    pub fn object(&self) -> &ObjectNode {
        &self.object
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn definition(&self, name: &str) -> Option<&Node> {
        self.definitions.get(name)
    }

    /// Validate `data` against the rendered document.
    ///
    /// Returns the validator's first failure exactly as the validator
    /// reported it.
    pub fn validate(&self, data: &Value) -> std::result::Result<(), ValidationError<'static>> {
        self.validate_with(&Validator::default(), data)
    }

    pub fn validate_with(
        &self,
        validator: &Validator,
        data: &Value,
    ) -> std::result::Result<(), ValidationError<'static>> {
        validator.validate(&self.render(), data)
    }

    pub fn is_valid(&self, data: &Value) -> bool {
        self.is_valid_with(&Validator::default(), data)
    }

    pub fn is_valid_with(&self, validator: &Validator, data: &Value) -> bool {
        validator.is_valid(&self.render(), data)
    }

    /// Pretty-printed JSON of the default render
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Render for SchemaDocument {
    fn render_with(&self, config: &RenderConfig) -> Value {
        let mut keywords = self.object.keywords(config);
        keywords.insert("$schema", Value::from(DRAFT_04));
        if !self.definitions.is_empty() {
            keywords.insert(
                "definitions",
                Value::Object(
                    self.definitions
                        .iter()
                        .map(|(name, node)| (name.clone(), node.render_with(config)))
                        .collect(),
                ),
            );
        }
        keywords.into_value()
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.render().serialize(serializer)
    }
}

// =============================================================================
// Document Template
// =============================================================================

/// Explicit constructor arguments for a document
#[derive(Debug, Clone, Default)]
pub struct DocumentOverrides {
    pub object: ObjectOverrides,
    pub definitions: Option<Definitions>,
}

/// Prototype for documents: an object template plus default definitions
#[derive(Debug, Clone, Default)]
pub struct DocumentTemplate {
    object: ObjectTemplate,
    definitions: Definitions,
}

impl DocumentTemplate {
    pub fn new(object: ObjectTemplate) -> Self {
        Self {
            object,
            definitions: Definitions::new(),
        }
    }

    pub fn with_definition(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.definitions.insert(name.into(), node.into());
        self
    }

    /// Derive a child template; the parent is left as it was
    pub fn refine(&self, refinement: impl Refinement + 'static) -> Self {
        Self {
            object: self.object.refine(refinement),
            definitions: self.definitions.clone(),
        }
    }

    pub fn object(&self) -> &ObjectTemplate {
        &self.object
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn instantiate(&self) -> SchemaDocument {
        self.instantiate_with(DocumentOverrides::default())
    }

    pub fn instantiate_with(&self, overrides: DocumentOverrides) -> SchemaDocument {
        SchemaDocument {
            object: self.object.instantiate_with(overrides.object),
            definitions: overrides
                .definitions
                .unwrap_or_else(|| self.definitions.clone()),
        }
    }
}
