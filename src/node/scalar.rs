//! Scalar nodes: number, string, null, boolean and string enums
//!
//! Optional constraints are emitted only when truthy: a bound of `0`, an
//! empty pattern or format, is rendered exactly like an unset one.

use serde_json::Value;
use std::fmt;

use crate::config::RenderConfig;
use crate::error::{Result, SchemaError};
use crate::render::{Keywords, Render};

// =============================================================================
// Number
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberNode {
    minimum: Option<f64>,
    maximum: Option<f64>,
    multiple_of: Option<f64>,
}

impl NumberNode {
    pub const TYPE: &'static str = "number";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }

    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    pub fn multiple_of(&self) -> Option<f64> {
        self.multiple_of
    }
}

impl Render for NumberNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        let mut keywords = Keywords::typed(Self::TYPE);
        keywords.number_truthy("minimum", self.minimum);
        keywords.number_truthy("maximum", self.maximum);
        keywords.number_truthy("multipleOf", self.multiple_of);
        keywords.into_value()
    }
}

// =============================================================================
// String
// =============================================================================

/// Formats recognised by draft-04 validators.
///
/// Advisory only: [`StringNode::with_format`] takes any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    DateTime,
    Date,
    Time,
    Email,
    Uri,
    Hostname,
    Ipv4,
    Ipv6,
}

impl StringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFormat::DateTime => "date-time",
            StringFormat::Date => "date",
            StringFormat::Time => "time",
            StringFormat::Email => "email",
            StringFormat::Uri => "uri",
            StringFormat::Hostname => "hostname",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StringFormat> for String {
    fn from(format: StringFormat) -> Self {
        format.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringNode {
    min_length: Option<u64>,
    max_length: Option<u64>,
    pattern: Option<String>,
    format: Option<String>,
}

impl StringNode {
    pub const TYPE: &'static str = "string";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: u64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn min_length(&self) -> Option<u64> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<u64> {
        self.max_length
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

impl Render for StringNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        let mut keywords = Keywords::typed(Self::TYPE);
        keywords.count_truthy("minLength", self.min_length);
        keywords.count_truthy("maxLength", self.max_length);
        keywords.text_truthy("pattern", self.pattern.as_deref());
        keywords.text_truthy("format", self.format.as_deref());
        keywords.into_value()
    }
}

// =============================================================================
// Null / Boolean
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullNode;

impl NullNode {
    pub const TYPE: &'static str = "null";
}

impl Render for NullNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        Keywords::typed(Self::TYPE).into_value()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanNode;

impl BooleanNode {
    pub const TYPE: &'static str = "boolean";
}

impl Render for BooleanNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        Keywords::typed(Self::TYPE).into_value()
    }
}

// =============================================================================
// Enum
// =============================================================================

/// A string restricted to a fixed list of values
#[derive(Debug, Clone, PartialEq)]
pub struct EnumNode {
    values: Vec<String>,
}

impl EnumNode {
    /// Fails with [`SchemaError::EmptyEnum`] when `values` is empty
    pub fn new<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SchemaError::EmptyEnum);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Render for EnumNode {
    fn render_with(&self, _config: &RenderConfig) -> Value {
        let mut keywords = Keywords::typed(StringNode::TYPE);
        keywords.insert(
            "enum",
            Value::Array(self.values.iter().map(|v| Value::from(v.as_str())).collect()),
        );
        keywords.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_bounds_are_not_emitted() {
        let node = NumberNode::new().with_minimum(0.0).with_maximum(10.0);
        assert_eq!(node.render(), json!({"type": "number", "maximum": 10}));
        assert_eq!(node.minimum(), Some(0.0));
    }

    #[test]
    fn test_non_finite_bounds_are_not_emitted() {
        let node = NumberNode::new()
            .with_minimum(f64::NAN)
            .with_maximum(f64::INFINITY)
            .with_multiple_of(2.0);
        assert_eq!(node.render(), json!({"type": "number", "multipleOf": 2}));
        assert!(node.minimum().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_fractional_multiple_of() {
        let node = NumberNode::new().with_multiple_of(0.25);
        assert_eq!(node.render(), json!({"type": "number", "multipleOf": 0.25}));
    }

    #[test]
    fn test_empty_pattern_is_not_emitted() {
        let node = StringNode::new().with_pattern("").with_min_length(0);
        assert_eq!(node.render(), json!({"type": "string"}));
    }

    #[test]
    fn test_format_accepts_free_strings() {
        let node = StringNode::new().with_format("uuid");
        assert_eq!(node.render(), json!({"type": "string", "format": "uuid"}));

        let node = StringNode::new().with_format(StringFormat::DateTime);
        assert_eq!(node.format(), Some("date-time"));
    }

    #[test]
    fn test_enum_requires_values() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(EnumNode::new(empty), Err(SchemaError::EmptyEnum)));
    }

    #[test]
    fn test_enum_preserves_order() {
        let node = EnumNode::new(["red", "green", "blue"]).unwrap();
        assert_eq!(
            node.render(),
            json!({"type": "string", "enum": ["red", "green", "blue"]})
        );
    }
}
