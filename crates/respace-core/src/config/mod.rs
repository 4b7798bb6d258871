//! Configuration system for respace
//!
//! This module provides configuration management with:
//! - JSON, JSONC, YAML and TOML configuration file support
//! - Auto-discovery by traversing up directories
//! - Configuration extension/inheritance (`extends` field)
//! - Strong typing with serde and JSON Schema generation via schemars
//!
//! ## Configuration Files
//!
//! Discovery looks for these names, in order:
//! - `.respacerc.json` - Standard JSON
//! - `.respacerc.jsonc` - JSON with comments and trailing commas
//! - `respace.yaml` / `respace.yml` - YAML
//! - `respace.toml` - TOML
//!
//! ## Configuration Inheritance
//!
//! Configurations can extend other configurations using the `extends` field.
//! Values of the extending file take precedence:
//!
//! ```jsonc
//! {
//!   "extends": ["../team/respace.yaml"],
//!   "formatter": {
//!     "blankLines": {
//!       "keepMaximum": { "inDeclarations": 1 }
//!     }
//!   }
//! }
//! ```
//!
//! ## Example Configuration
//!
//! ```yaml
//! root: true
//! formatter:
//!   enabled: true
//!   blankLines:
//!     keepMaximum:
//!       inDeclarations: 1
//!     minimum:
//!       aroundMethod: 1
//! ```

mod loader;
mod merge;
mod respace_config;

// Re-export main types
pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use respace_config::{
    BlankLinesConfiguration, FormatterConfiguration, KeepMaximumConfiguration,
    MinimumConfiguration, RespaceConfiguration,
};

// Re-export Result type
pub use loader::Result;

/// JSON Schema of the configuration file format
pub fn schema() -> serde_json::Value {
    let schema = schemars::schema_for!(RespaceConfiguration);
    let mut schema_json = serde_json::to_value(schema).unwrap_or_default();

    if let Some(object) = schema_json.as_object_mut() {
        object.insert(
            "title".to_string(),
            serde_json::json!("respace Configuration"),
        );
        object.insert(
            "description".to_string(),
            serde_json::json!("Configuration file schema for respace blank line formatting"),
        );
    }

    schema_json
}
