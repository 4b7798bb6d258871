//! Blank line style
//!
//! A [`BlankLineStyle`] is the resolved pair of bound tables one pass run
//! works with. Sources may carry their own style; everything else gets the
//! built-in IntelliJ defaults, possibly overlaid with configuration.

use respace_core::{BlankLinesConfiguration, RespaceError, Result};
use serde::{Deserialize, Serialize};

use crate::source::SourceFile;

/// Upper bounds on blank lines, enforced by removing lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepMaximum {
    pub in_declarations: u32,
    pub in_code: u32,
    pub before_end_of_block: u32,
    pub between_header_and_package: u32,
}

impl Default for KeepMaximum {
    fn default() -> Self {
        Self {
            in_declarations: 2,
            in_code: 2,
            before_end_of_block: 2,
            between_header_and_package: 2,
        }
    }
}

/// Lower bounds on blank lines, enforced by inserting lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Minimum {
    pub before_package: u32,
    pub after_package: u32,
    pub before_imports: u32,
    pub after_imports: u32,
    pub around_class: u32,
    pub after_class_header: u32,
    pub before_class_end: u32,
    pub after_anonymous_class_header: u32,
    pub around_field_in_interface: u32,
    pub around_field: u32,
    pub around_method_in_interface: u32,
    pub around_method: u32,
    pub before_method_body: u32,
    pub around_initializer: u32,
}

impl Default for Minimum {
    fn default() -> Self {
        Self {
            before_package: 0,
            after_package: 1,
            before_imports: 1,
            after_imports: 1,
            around_class: 1,
            after_class_header: 0,
            before_class_end: 0,
            after_anonymous_class_header: 0,
            around_field_in_interface: 0,
            around_field: 0,
            around_method_in_interface: 1,
            around_method: 1,
            before_method_body: 0,
            around_initializer: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlankLineStyle {
    pub keep_maximum: KeepMaximum,
    pub minimum: Minimum,
}

impl BlankLineStyle {
    /// IntelliJ IDEA's default blank line settings
    pub fn intellij() -> Self {
        Self::default()
    }

    /// Overlay configured values on the defaults
    ///
    /// Fails on the first value that is negative or does not fit a `u32`.
    pub fn from_config(config: &BlankLinesConfiguration) -> Result<Self> {
        let mut style = Self::default();

        if let Some(keep) = &config.keep_maximum {
            let target = &mut style.keep_maximum;
            overlay(
                &mut target.in_declarations,
                keep.in_declarations,
                "keepMaximum.inDeclarations",
            )?;
            overlay(&mut target.in_code, keep.in_code, "keepMaximum.inCode")?;
            overlay(
                &mut target.before_end_of_block,
                keep.before_end_of_block,
                "keepMaximum.beforeEndOfBlock",
            )?;
            overlay(
                &mut target.between_header_and_package,
                keep.between_header_and_package,
                "keepMaximum.betweenHeaderAndPackage",
            )?;
        }

        if let Some(min) = &config.minimum {
            let target = &mut style.minimum;
            overlay(&mut target.before_package, min.before_package, "minimum.beforePackage")?;
            overlay(&mut target.after_package, min.after_package, "minimum.afterPackage")?;
            overlay(&mut target.before_imports, min.before_imports, "minimum.beforeImports")?;
            overlay(&mut target.after_imports, min.after_imports, "minimum.afterImports")?;
            overlay(&mut target.around_class, min.around_class, "minimum.aroundClass")?;
            overlay(
                &mut target.after_class_header,
                min.after_class_header,
                "minimum.afterClassHeader",
            )?;
            overlay(&mut target.before_class_end, min.before_class_end, "minimum.beforeClassEnd")?;
            overlay(
                &mut target.after_anonymous_class_header,
                min.after_anonymous_class_header,
                "minimum.afterAnonymousClassHeader",
            )?;
            overlay(
                &mut target.around_field_in_interface,
                min.around_field_in_interface,
                "minimum.aroundFieldInInterface",
            )?;
            overlay(&mut target.around_field, min.around_field, "minimum.aroundField")?;
            overlay(
                &mut target.around_method_in_interface,
                min.around_method_in_interface,
                "minimum.aroundMethodInInterface",
            )?;
            overlay(&mut target.around_method, min.around_method, "minimum.aroundMethod")?;
            overlay(
                &mut target.before_method_body,
                min.before_method_body,
                "minimum.beforeMethodBody",
            )?;
            overlay(
                &mut target.around_initializer,
                min.around_initializer,
                "minimum.aroundInitializer",
            )?;
        }

        Ok(style)
    }
}

fn overlay(target: &mut u32, value: Option<i64>, setting: &str) -> Result<()> {
    if let Some(value) = value {
        *target = u32::try_from(value).map_err(|_| RespaceError::invalid_style(setting, value))?;
    }
    Ok(())
}

/// Style to format `source` with: its own style, or the defaults
pub fn resolve(source: &SourceFile) -> BlankLineStyle {
    source.style().copied().unwrap_or_default()
}
