//! Validation of data against rendered documents
//!
//! A thin seam over the `jsonschema` crate compiled for draft-04. Failures
//! come back as the crate's own [`ValidationError`], carrying the instance
//! path, the schema path and the reason; nothing here re-wraps them.
//!
//! Draft-04 validators accept only type *names* inside a `type` list, so a
//! union that inlines structured members renders fine but will not compile
//! here. Use a `oneOf` node for those.

use std::borrow::Cow;

use jsonschema::{Draft, JSONSchema, ValidationError};
use serde_json::Value;
use tracing::debug;

use crate::config::ValidationConfig;

/// Draft-04 validator
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Compile a rendered document
    pub fn compile(&self, schema: &Value) -> Result<JSONSchema, ValidationError<'static>> {
        debug!(
            validate_formats = self.config.validate_formats,
            "compiling draft-04 schema"
        );
        JSONSchema::options()
            .with_draft(Draft::Draft4)
            .should_validate_formats(self.config.validate_formats)
            .compile(schema)
            .map_err(owned)
    }

    /// First failure, if any
    pub fn validate(&self, schema: &Value, data: &Value) -> Result<(), ValidationError<'static>> {
        let compiled = self.compile(schema)?;
        let first = match compiled.validate(data) {
            Ok(()) => None,
            Err(mut errors) => errors.next().map(owned),
        };
        match first {
            Some(error) => {
                debug!(
                    instance_path = %error.instance_path,
                    schema_path = %error.schema_path,
                    "validation failed"
                );
                Err(error)
            }
            None => Ok(()),
        }
    }

    /// Every failure, in the order the validator reports them
    pub fn validate_all(
        &self,
        schema: &Value,
        data: &Value,
    ) -> Result<(), Vec<ValidationError<'static>>> {
        let compiled = self.compile(schema).map_err(|error| vec![error])?;
        let errors: Vec<ValidationError<'static>> = match compiled.validate(data) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.map(owned).collect(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            debug!(errors = errors.len(), "validation failed");
            Err(errors)
        }
    }

    /// `false` also when the document itself does not compile
    pub fn is_valid(&self, schema: &Value, data: &Value) -> bool {
        self.compile(schema)
            .map(|compiled| compiled.is_valid(data))
            .unwrap_or(false)
    }
}

/// Detach an error from the document or data it points into
fn owned(error: ValidationError<'_>) -> ValidationError<'static> {
    ValidationError {
        instance: Cow::Owned(error.instance.into_owned()),
        kind: error.kind,
        instance_path: error.instance_path,
        schema_path: error.schema_path,
    }
}
