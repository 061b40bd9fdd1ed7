//! Rendering nodes into plain JSON Schema documents
//!
//! Every node renders to a fresh `serde_json::Value` on each call. Rendering is
//! total: it never fails and never touches the node it reads from.

use serde_json::{Map, Value};

use crate::config::RenderConfig;

/// Conversion of a node tree into draft-04 JSON Schema syntax
pub trait Render {
    /// Render with explicit settings
    fn render_with(&self, config: &RenderConfig) -> Value;

    /// Render with the default [`RenderConfig`]
    fn render(&self) -> Value {
        self.render_with(&RenderConfig::default())
    }
}

/// Builds the keyword map for one sub-schema.
///
/// The `*_truthy` inserts skip unset and falsy values (0, "", false), which is
/// how every optional constraint except the tri-state `additional*` flags is emitted.
#[derive(Debug, Default)]
pub(crate) struct Keywords(Map<String, Value>);

impl Keywords {
    pub(crate) fn new() -> Self {
        Self(Map::new())
    }

    /// Start from `{"type": <name>}`
    pub(crate) fn typed(type_name: &str) -> Self {
        let mut keywords = Self::new();
        keywords.insert("type", Value::from(type_name));
        keywords
    }

    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub(crate) fn count_truthy(&mut self, key: &str, value: Option<u64>) {
        if let Some(n) = value.filter(|n| *n != 0) {
            self.insert(key, Value::from(n));
        }
    }

    /// NaN and infinities count as unset
    pub(crate) fn number_truthy(&mut self, key: &str, value: Option<f64>) {
        if let Some(n) = value.filter(|n| n.is_finite() && *n != 0.0) {
            self.insert(key, number_value(n));
        }
    }

    pub(crate) fn text_truthy(&mut self, key: &str, value: Option<&str>) {
        if let Some(s) = value.filter(|s| !s.is_empty()) {
            self.insert(key, Value::from(s));
        }
    }

    pub(crate) fn flag_truthy(&mut self, key: &str, value: Option<bool>) {
        if value == Some(true) {
            self.insert(key, Value::Bool(true));
        }
    }

    /// Tri-state flag: emitted whenever set, `false` included
    pub(crate) fn flag_if_set(&mut self, key: &str, value: Option<bool>) {
        if let Some(flag) = value {
            self.insert(key, Value::Bool(flag));
        }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Whole numbers render as JSON integers so `minimum: 1` stays `1`, not `1.0`.
pub(crate) fn number_value(n: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}
