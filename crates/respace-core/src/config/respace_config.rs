//! Configuration types for respace
//!
//! Every value is optional so that a file only has to name what it changes;
//! missing values are filled from `extends` parents and finally from the
//! built-in style. Bounds are read as signed integers so that a negative value
//! can be reported as an invalid setting instead of a parse error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RespaceConfiguration {
    /// JSON schema reference, for editor support
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Stop configuration discovery at this file
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Stop searching parent directories for configuration")]
    pub root: Option<bool>,

    /// Parent configurations, resolved relative to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Configuration files this one extends; values here take precedence")]
    pub extends: Option<Vec<String>>,

    /// Formatter configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<FormatterConfiguration>,
}

/// Formatter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfiguration {
    /// Enable/disable formatter
    #[schemars(description = "Enable or disable the formatter")]
    pub enabled: Option<bool>,

    /// Blank line style
    #[schemars(description = "Bounds on the number of blank lines around declarations and statements")]
    pub blank_lines: Option<BlankLinesConfiguration>,
}

/// Blank line style: upper bounds and lower bounds per context
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlankLinesConfiguration {
    #[schemars(description = "Maximum number of blank lines to keep")]
    pub keep_maximum: Option<KeepMaximumConfiguration>,

    #[schemars(description = "Minimum number of blank lines to enforce")]
    pub minimum: Option<MinimumConfiguration>,
}

/// Upper bounds, enforced by removing blank lines
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeepMaximumConfiguration {
    #[schemars(description = "Between members of a class or interface body")]
    pub in_declarations: Option<i64>,

    #[schemars(description = "Between statements of a method or nested block")]
    pub in_code: Option<i64>,

    #[schemars(description = "Before the closing brace of a block")]
    pub before_end_of_block: Option<i64>,

    #[schemars(description = "Between a file header comment and the package declaration")]
    pub between_header_and_package: Option<i64>,
}

/// Lower bounds, enforced by inserting blank lines
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimumConfiguration {
    #[schemars(description = "Before the package declaration")]
    pub before_package: Option<i64>,

    #[schemars(description = "After the package declaration")]
    pub after_package: Option<i64>,

    #[schemars(description = "Before the first import")]
    pub before_imports: Option<i64>,

    #[schemars(description = "After the imports, before the first type")]
    pub after_imports: Option<i64>,

    #[schemars(description = "Between top-level types")]
    pub around_class: Option<i64>,

    #[schemars(description = "After a class header, before its first member")]
    pub after_class_header: Option<i64>,

    #[schemars(description = "Before the closing brace of a class body")]
    pub before_class_end: Option<i64>,

    #[schemars(description = "After the header of an anonymous class")]
    pub after_anonymous_class_header: Option<i64>,

    #[schemars(description = "Around fields of an interface")]
    pub around_field_in_interface: Option<i64>,

    #[schemars(description = "Around fields")]
    pub around_field: Option<i64>,

    #[schemars(description = "Around methods of an interface")]
    pub around_method_in_interface: Option<i64>,

    #[schemars(description = "Around methods")]
    pub around_method: Option<i64>,

    #[schemars(description = "At the start of a method body")]
    pub before_method_body: Option<i64>,

    #[schemars(description = "Around initializer blocks")]
    pub around_initializer: Option<i64>,
}

impl RespaceConfiguration {
    /// Blank line settings, if any file configured them
    pub fn blank_lines(&self) -> Option<&BlankLinesConfiguration> {
        self.formatter.as_ref()?.blank_lines.as_ref()
    }

    /// Whether the formatter is enabled; on unless configured off
    pub fn formatter_enabled(&self) -> bool {
        self.formatter
            .as_ref()
            .and_then(|formatter| formatter.enabled)
            .unwrap_or(true)
    }
}
