//! Configuration merging logic
//!
//! This module provides merge functionality for combining multiple configuration
//! sources (e.g., base configs and overrides via `extends`).

use super::respace_config::*;

impl RespaceConfiguration {
    /// Merge another config into this one (current takes precedence)
    ///
    /// The `schema`, `root`, and `extends` fields are not merged (file-specific).
    pub fn merge_with(&mut self, other: RespaceConfiguration) {
        if let Some(other_formatter) = other.formatter {
            if let Some(ref mut formatter) = self.formatter {
                formatter.merge_with(other_formatter);
            } else {
                self.formatter = Some(other_formatter);
            }
        }
    }
}

impl FormatterConfiguration {
    /// Merge formatter configuration (current takes precedence)
    pub fn merge_with(&mut self, other: FormatterConfiguration) {
        self.enabled = self.enabled.or(other.enabled);

        if let Some(other_blank_lines) = other.blank_lines {
            if let Some(ref mut blank_lines) = self.blank_lines {
                blank_lines.merge_with(other_blank_lines);
            } else {
                self.blank_lines = Some(other_blank_lines);
            }
        }
    }
}

impl BlankLinesConfiguration {
    /// Merge blank line settings value by value (current takes precedence)
    pub fn merge_with(&mut self, other: BlankLinesConfiguration) {
        if let Some(other_keep_maximum) = other.keep_maximum {
            if let Some(ref mut keep_maximum) = self.keep_maximum {
                keep_maximum.merge_with(other_keep_maximum);
            } else {
                self.keep_maximum = Some(other_keep_maximum);
            }
        }

        if let Some(other_minimum) = other.minimum {
            if let Some(ref mut minimum) = self.minimum {
                minimum.merge_with(other_minimum);
            } else {
                self.minimum = Some(other_minimum);
            }
        }
    }
}

impl KeepMaximumConfiguration {
    pub fn merge_with(&mut self, other: KeepMaximumConfiguration) {
        self.in_declarations = self.in_declarations.or(other.in_declarations);
        self.in_code = self.in_code.or(other.in_code);
        self.before_end_of_block = self.before_end_of_block.or(other.before_end_of_block);
        self.between_header_and_package = self
            .between_header_and_package
            .or(other.between_header_and_package);
    }
}

impl MinimumConfiguration {
    pub fn merge_with(&mut self, other: MinimumConfiguration) {
        self.before_package = self.before_package.or(other.before_package);
        self.after_package = self.after_package.or(other.after_package);
        self.before_imports = self.before_imports.or(other.before_imports);
        self.after_imports = self.after_imports.or(other.after_imports);
        self.around_class = self.around_class.or(other.around_class);
        self.after_class_header = self.after_class_header.or(other.after_class_header);
        self.before_class_end = self.before_class_end.or(other.before_class_end);
        self.after_anonymous_class_header = self
            .after_anonymous_class_header
            .or(other.after_anonymous_class_header);
        self.around_field_in_interface = self
            .around_field_in_interface
            .or(other.around_field_in_interface);
        self.around_field = self.around_field.or(other.around_field);
        self.around_method_in_interface = self
            .around_method_in_interface
            .or(other.around_method_in_interface);
        self.around_method = self.around_method.or(other.around_method);
        self.before_method_body = self.before_method_body.or(other.before_method_body);
        self.around_initializer = self.around_initializer.or(other.around_initializer);
    }
}
