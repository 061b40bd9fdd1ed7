//! Array node
//!
//! Items render as an ordered list of sub-schemas (tuple validation), never
//! as a single shared item schema.

use serde_json::Value;

use super::Node;
use crate::config::RenderConfig;
use crate::render::{Keywords, Render};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayNode {
    items: Vec<Node>,
    unique_items: Option<bool>,
    min_items: Option<u64>,
    max_items: Option<u64>,
    additional_items: Option<bool>,
}

impl ArrayNode {
    pub const TYPE: &'static str = "array";

    pub fn new() -> Self {
        Self::default()
    }

    /// Array with the given positional item schemas
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: impl Into<Node>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn with_unique_items(mut self, unique_items: bool) -> Self {
        self.unique_items = Some(unique_items);
        self
    }

    pub fn with_min_items(mut self, min_items: u64) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn with_max_items(mut self, max_items: u64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Emitted whenever set, `false` included
    pub fn with_additional_items(mut self, additional_items: bool) -> Self {
        self.additional_items = Some(additional_items);
        self
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn unique_items(&self) -> Option<bool> {
        self.unique_items
    }

    pub fn min_items(&self) -> Option<u64> {
        self.min_items
    }

    pub fn max_items(&self) -> Option<u64> {
        self.max_items
    }

    pub fn additional_items(&self) -> Option<bool> {
        self.additional_items
    }
}

impl Render for ArrayNode {
    fn render_with(&self, config: &RenderConfig) -> Value {
        let mut keywords = Keywords::typed(Self::TYPE);
        if !self.items.is_empty() || config.emit_empty_items {
            keywords.insert(
                "items",
                Value::Array(self.items.iter().map(|i| i.render_with(config)).collect()),
            );
        }
        keywords.flag_truthy("uniqueItems", self.unique_items);
        keywords.count_truthy("minItems", self.min_items);
        keywords.count_truthy("maxItems", self.max_items);
        keywords.flag_if_set("additionalItems", self.additional_items);
        keywords.into_value()
    }
}
