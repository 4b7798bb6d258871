//! respace formatter
//!
//! Blank line normalization for Java sources held as lossless syntax trees.
//! The [`BlankLines`] pass rewrites only the whitespace before declarations,
//! statements and closing braces, so that blank lines stay within the
//! bounds of a [`BlankLineStyle`]. [`Formatter`] runs passes over one or
//! many [`SourceFile`]s and reports what changed.

pub mod blank_lines;
pub mod format;
pub mod source;
pub mod style;
pub mod whitespace;

pub use blank_lines::BlankLines;
pub use format::{
    DiffChange, DiffChangeType, FormatDiff, FormatMode, FormatOutput, FormatPass, FormatResult,
    Formatter,
};
pub use respace_core::{FormatterConfiguration, RespaceConfiguration};
pub use source::SourceFile;
pub use style::{BlankLineStyle, KeepMaximum, Minimum, resolve};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use super::{
        BlankLineStyle, BlankLines, FormatMode, FormatPass, FormatResult, Formatter, SourceFile,
    };
}
