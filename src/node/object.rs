//! Object node
//!
//! Holds the *resolved* required set and property map. When built from an
//! [`ObjectTemplate`](crate::template::ObjectTemplate) the refinement chain
//! has already run; rendering reads the cached result and never re-runs it.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

use super::Node;
use crate::config::RenderConfig;
use crate::render::{Keywords, Render};

/// Names of required properties
pub type Required = BTreeSet<String>;

/// Property name to sub-schema
pub type Properties = BTreeMap<String, Node>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectNode {
    required: Required,
    properties: Properties,
    min_properties: Option<u64>,
    max_properties: Option<u64>,
    additional_properties: Option<bool>,
}

impl ObjectNode {
    pub const TYPE: &'static str = "object";

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        required: Required,
        properties: Properties,
        min_properties: Option<u64>,
        max_properties: Option<u64>,
        additional_properties: Option<bool>,
    ) -> Self {
        Self {
            required,
            properties,
            min_properties,
            max_properties,
            additional_properties,
        }
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

    /// Emitted whenever set, `false` included
    pub fn with_additional_properties(mut self, additional_properties: bool) -> Self {
        self.additional_properties = Some(additional_properties);
        self
    }

    /// Resolved required set
    pub fn required(&self) -> &Required {
        &self.required
    }

    /// Resolved property map
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Node> {
        self.properties.get(name)
    }

    pub fn min_properties(&self) -> Option<u64> {
        self.min_properties
    }

    pub fn max_properties(&self) -> Option<u64> {
        self.max_properties
    }

    pub fn additional_properties(&self) -> Option<bool> {
        self.additional_properties
    }

    /// Keywords of this object, for documents that extend it
    pub(crate) fn keywords(&self, config: &RenderConfig) -> Keywords {
        let mut keywords = Keywords::typed(Self::TYPE);
        if !self.properties.is_empty() || config.emit_empty_properties {
            let properties: Map<String, Value> = self
                .properties
                .iter()
                .map(|(name, node)| (name.clone(), node.render_with(config)))
                .collect();
            keywords.insert("properties", Value::Object(properties));
        }
        if !self.required.is_empty() {
            keywords.insert(
                "required",
                Value::Array(self.required.iter().map(|r| Value::from(r.as_str())).collect()),
            );
        }
        keywords.count_truthy("minProperties", self.min_properties);
        keywords.count_truthy("maxProperties", self.max_properties);
        keywords.flag_if_set("additionalProperties", self.additional_properties);
        keywords
    }
}

impl Render for ObjectNode {
    fn render_with(&self, config: &RenderConfig) -> Value {
        self.keywords(config).into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object() {
        assert_eq!(ObjectNode::new().render(), json!({"type": "object"}));
    }

    #[test]
    fn test_empty_properties_follow_config() {
        let config = RenderConfig {
            emit_empty_properties: true,
            ..RenderConfig::default()
        };
        assert_eq!(
            ObjectNode::new().render_with(&config),
            json!({"type": "object", "properties": {}})
        );
    }

    #[test]
    fn test_required_is_sorted_and_deduplicated() {
        let node = ObjectNode::new()
            .require("zip")
            .require("street")
            .require("zip");
        assert_eq!(node.render()["required"], json!(["street", "zip"]));
    }

    #[test]
    fn test_additional_properties_tri_state() {
        assert!(ObjectNode::new().render().get("additionalProperties").is_none());
        assert_eq!(
            ObjectNode::new()
                .with_additional_properties(false)
                .render()["additionalProperties"],
            json!(false)
        );
        assert_eq!(
            ObjectNode::new()
                .with_additional_properties(true)
                .render()["additionalProperties"],
            json!(true)
        );
    }

    #[test]
    fn test_zero_property_bounds_are_not_emitted() {
        let node = ObjectNode::new().with_min_properties(0).with_max_properties(3);
        assert_eq!(node.render(), json!({"type": "object", "maxProperties": 3}));
    }

    #[test]
    fn test_required_without_property_is_kept() {
        let node = ObjectNode::new().require("ghost");
        assert_eq!(node.render(), json!({"type": "object", "required": ["ghost"]}));
    }
}
