//! Object Templates
//!
//! The inheritance model for object schemas. An [`ObjectTemplate`] is the
//! prototype a family of objects starts from: default required names,
//! default properties and bounds, plus an ordered chain of [`Refinement`]s,
//! one per level of derivation.
//!
//! ```text
//! base ──refine(Δ1)──▶ child ──refine(Δ2)──▶ grandchild
//!
//! grandchild.instantiate():
//!     required   = Δ2.required_override(Δ1.required_override(base.required.clone()))
//!     properties = Δ2.properties_override(Δ1.properties_override(base.properties.clone()))
//! ```
//!
//! Refinements take the collection by value and hand back a new one, so no
//! level can reach the prototype's stored defaults. Deriving a template clones
//! it, leaving the parent and every sibling untouched.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::node::{Node, ObjectNode, Properties, Required};

/// One level of derivation.
///
/// Implementations receive the collection produced by the levels above them
/// and return the collection to pass on. Removing an entry that is not
/// present must be a no-op.
pub trait Refinement: fmt::Debug + Send + Sync {
    fn required_override(&self, required: Required) -> Required {
        required
    }

    fn properties_override(&self, properties: Properties) -> Properties {
        properties
    }
}

/// Declarative refinement: names and properties to discard, then to add.
#[derive(Debug, Clone, Default)]
pub struct Delta {
    discard_required: Vec<String>,
    add_required: Vec<String>,
    discard_properties: Vec<String>,
    add_properties: Vec<(String, Node)>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop requiring `name`
    pub fn discard_required(mut self, name: impl Into<String>) -> Self {
        self.discard_required.push(name.into());
        self
    }

    /// Start requiring `name`
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.add_required.push(name.into());
        self
    }

    pub fn discard_property(mut self, name: impl Into<String>) -> Self {
        self.discard_properties.push(name.into());
        self
    }

    /// Add a property, replacing any inherited one of the same name
    pub fn add_property(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.add_properties.push((name.into(), node.into()));
        self
    }
}

impl Refinement for Delta {
    fn required_override(&self, mut required: Required) -> Required {
        for name in &self.discard_required {
            required.remove(name);
        }
        required.extend(self.add_required.iter().cloned());
        required
    }

    fn properties_override(&self, mut properties: Properties) -> Properties {
        for name in &self.discard_properties {
            properties.remove(name);
        }
        for (name, node) in &self.add_properties {
            properties.insert(name.clone(), node.clone());
        }
        properties
    }
}

/// Explicit constructor arguments.
///
/// A field that is `Some` replaces the template default for that instance;
/// the refinement chain still runs on top of it.
#[derive(Debug, Clone, Default)]
pub struct ObjectOverrides {
    pub required: Option<Required>,
    pub properties: Option<Properties>,
    pub min_properties: Option<u64>,
    pub max_properties: Option<u64>,
    pub additional_properties: Option<bool>,
}

impl ObjectOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_min_properties(mut self, min_properties: u64) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    pub fn with_max_properties(mut self, max_properties: u64) -> Self {
        self.max_properties = Some(max_properties);
        self
    }

    pub fn with_additional_properties(mut self, additional_properties: bool) -> Self {
        self.additional_properties = Some(additional_properties);
        self
    }
}

/// Prototype for object nodes
#[derive(Debug, Clone, Default)]
pub struct ObjectTemplate {
    required: Required,
    properties: Properties,
    min_properties: Option<u64>,
    max_properties: Option<u64>,
    additional_properties: Option<bool>,
    chain: Vec<Arc<dyn Refinement>>,
}

impl ObjectTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.properties.insert(name.into(), node.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_min_properties(mut self, min_properties: u64) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    pub fn with_max_properties(mut self, max_properties: u64) -> Self {
        self.max_properties = Some(max_properties);
        self
    }

    pub fn with_additional_properties(mut self, additional_properties: bool) -> Self {
        self.additional_properties = Some(additional_properties);
        self
    }

    /// Derive a child template with one more level of refinement
    pub fn refine(&self, refinement: impl Refinement + 'static) -> Self {
        let mut child = self.clone();
        child.chain.push(Arc::new(refinement));
        child
    }

    /// Default required names, before any refinement
    pub fn required(&self) -> &Required {
        &self.required
    }

    /// Default properties, before any refinement
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Number of refinement levels below the base
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// Run `required` through every level, base first
    pub fn resolve_required(&self, required: Required) -> Required {
        self.chain
            .iter()
            .enumerate()
            .fold(required, |required, (level, refinement)| {
                trace!(level, count = required.len(), "required override");
                refinement.required_override(required)
            })
    }

    /// Run `properties` through every level, base first
    pub fn resolve_properties(&self, properties: Properties) -> Properties {
        self.chain
            .iter()
            .enumerate()
            .fold(properties, |properties, (level, refinement)| {
                trace!(level, count = properties.len(), "properties override");
                refinement.properties_override(properties)
            })
    }

    pub fn instantiate(&self) -> ObjectNode {
        self.instantiate_with(ObjectOverrides::default())
    }

    pub fn instantiate_with(&self, overrides: ObjectOverrides) -> ObjectNode {
        let required = overrides
            .required
            .unwrap_or_else(|| self.required.clone());
        let properties = overrides
            .properties
            .unwrap_or_else(|| self.properties.clone());

        let required = self.resolve_required(required);
        let properties = self.resolve_properties(properties);

        debug!(
            levels = self.chain.len(),
            required = required.len(),
            properties = properties.len(),
            "instantiated object template"
        );

        ObjectNode::from_parts(
            required,
            properties,
            overrides.min_properties.or(self.min_properties),
            overrides.max_properties.or(self.max_properties),
            overrides.additional_properties.or(self.additional_properties),
        )
    }
}
