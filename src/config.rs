//! Configuration for rendering and validation
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (schemas.toml)
//! - Environment variables (SCHEMAS__*)
//!
//! ## Example config file (schemas.toml):
//! ```toml
//! [render]
//! emit_empty_items = false
//! emit_empty_properties = false
//!
//! [validation]
//! validate_formats = true
//! ```
//!
//! Environment overrides use `__` between sections, e.g.
//! `SCHEMAS__RENDER__EMIT_EMPTY_ITEMS=false`.

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Controls how empty collections are emitted.
///
/// Everything else about rendering is fixed by the node tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit `"items": []` for arrays without item schemas.
    ///
    /// Draft-04 rejects an empty `items` list, so documents rendered with
    /// this set will not compile in the validator.
    #[serde(default)]
    pub emit_empty_items: bool,

    /// Emit `"properties": {}` for objects without properties
    #[serde(default)]
    pub emit_empty_properties: bool,
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Enforce the `format` keyword on strings
    #[serde(default = "default_true")]
    pub validate_formats: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            emit_empty_items: false,
            emit_empty_properties: false,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_formats: true,
        }
    }
}

impl SchemaConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering a specific file over the default locations
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["schemas.toml", ".schemas.toml", "config/schemas.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("dev", "typed-schema", "typed-schema") {
            let xdg_config = dirs.config_dir().join("schemas.toml");
            if xdg_config.exists() {
                debug!(path = %xdg_config.display(), "using XDG schema config");
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            debug!(path, "using explicit schema config");
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCHEMAS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
