//! Formatter pipeline
//!
//! A [`Formatter`] runs an ordered list of [`FormatPass`]es over source
//! files. Passes are pure tree-to-tree functions, so independent sources are
//! formatted in parallel by [`Formatter::format_all`].

use std::fmt::Write as _;
use std::sync::Arc;

use rayon::prelude::*;
use respace_core::{GreenNode, RespaceConfiguration, Result, print};
use similar::{ChangeTag, TextDiff};
use tracing::{debug, info};

use crate::blank_lines::BlankLines;
use crate::source::SourceFile;
use crate::style::BlankLineStyle;

/// One rewrite step of the pipeline
pub trait FormatPass: Send + Sync {
    /// Stable name, used in logs
    fn name(&self) -> &'static str;

    /// Rewrite the tree of `source`; returns the same tree when nothing changes
    fn run(&self, source: &SourceFile) -> GreenNode;
}

/// Formatting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Format and return the result
    Format,
    /// Check if formatting is needed without applying changes
    Check,
    /// Show diff of proposed changes
    Diff,
}

/// Result of formatting one source
#[derive(Debug, Clone)]
pub struct FormatResult {
    /// The formatted source
    pub source: SourceFile,
    /// Whether any pass changed the tree
    pub changed: bool,
    /// Original content for comparison
    pub original: String,
    /// The formatted content
    pub content: String,
}

/// What [`Formatter::process`] produced for a mode
#[derive(Debug, Clone)]
pub enum FormatOutput {
    Formatted(FormatResult),
    /// Whether the source needs formatting
    Checked(bool),
    Diff(FormatDiff),
}

/// Diff information for formatting changes
#[derive(Debug, Clone)]
pub struct FormatDiff {
    /// Original content
    pub original: String,
    /// Formatted content
    pub formatted: String,
    /// Line-by-line diff information
    pub changes: Vec<DiffChange>,
}

/// Individual diff change
#[derive(Debug, Clone)]
pub struct DiffChange {
    /// Line number in original (1-based), 0 for added lines
    pub original_line: usize,
    /// Line number in formatted (1-based), 0 for removed lines
    pub formatted_line: usize,
    /// Type of change
    pub change_type: DiffChangeType,
    /// Content of the line, without its line break
    pub content: String,
}

/// Type of diff change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffChangeType {
    /// Line was added
    Added,
    /// Line was removed
    Removed,
    /// Line is unchanged (context)
    Unchanged,
}

impl FormatResult {
    /// Check if formatting made any changes
    pub fn has_changes(&self) -> bool {
        self.changed
    }

    /// Get the formatted content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the original content
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn diff(&self) -> FormatDiff {
        FormatDiff::new(&self.original, &self.content)
    }
}

impl FormatDiff {
    pub fn new(original: &str, formatted: &str) -> Self {
        let diff = TextDiff::from_lines(original, formatted);
        let changes = diff
            .iter_all_changes()
            .map(|change| {
                let change_type = match change.tag() {
                    ChangeTag::Delete => DiffChangeType::Removed,
                    ChangeTag::Insert => DiffChangeType::Added,
                    ChangeTag::Equal => DiffChangeType::Unchanged,
                };
                DiffChange {
                    original_line: change.old_index().map_or(0, |index| index + 1),
                    formatted_line: change.new_index().map_or(0, |index| index + 1),
                    change_type,
                    content: change.value().trim_end_matches(['\r', '\n']).to_string(),
                }
            })
            .collect();

        Self {
            original: original.to_string(),
            formatted: formatted.to_string(),
            changes,
        }
    }

    /// Get the number of changes
    pub fn change_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|change| change.change_type != DiffChangeType::Unchanged)
            .count()
    }

    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }

    /// Get changes of a specific type
    pub fn changes_of_type(&self, change_type: DiffChangeType) -> Vec<&DiffChange> {
        self.changes
            .iter()
            .filter(|change| change.change_type == change_type)
            .collect()
    }

    /// Plain `+`/`-` rendering with original line numbers
    pub fn render(&self) -> String {
        let mut output = String::new();
        for change in &self.changes {
            let (marker, line) = match change.change_type {
                DiffChangeType::Removed => ('-', change.original_line),
                DiffChangeType::Added => ('+', change.formatted_line),
                DiffChangeType::Unchanged => (' ', change.original_line),
            };
            let _ = writeln!(output, "{marker} {line:>4} │ {}", change.content);
        }
        output
    }
}

/// Runs format passes over source files
#[derive(Clone)]
pub struct Formatter {
    passes: Vec<Arc<dyn FormatPass>>,
    style: Option<BlankLineStyle>,
    enabled: bool,
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let passes: Vec<_> = self.passes.iter().map(|pass| pass.name()).collect();
        f.debug_struct("Formatter")
            .field("passes", &passes)
            .field("style", &self.style)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Formatter running the blank line pass
    pub fn new() -> Self {
        Self::empty().with_pass(BlankLines::new())
    }

    /// Formatter without any pass
    pub fn empty() -> Self {
        Self {
            passes: Vec::new(),
            style: None,
            enabled: true,
        }
    }

    /// Append a pass; passes run in the order they were added
    pub fn with_pass(mut self, pass: impl FormatPass + 'static) -> Self {
        self.passes.push(Arc::new(pass));
        self
    }

    /// Style for sources that do not carry their own
    pub fn with_style(mut self, style: BlankLineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Build a formatter from loaded configuration
    ///
    /// Fails if a configured blank line bound is out of range.
    pub fn from_config(config: &RespaceConfiguration) -> Result<Self> {
        let mut formatter = Self::new();
        formatter.enabled = config.formatter_enabled();
        if let Some(blank_lines) = config.blank_lines() {
            formatter.style = Some(BlankLineStyle::from_config(blank_lines)?);
        }
        Ok(formatter)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self) -> Option<&BlankLineStyle> {
        self.style.as_ref()
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Run every pass over `source`
    pub fn format(&self, source: &SourceFile) -> FormatResult {
        let original = source.text();
        if !self.enabled {
            return FormatResult {
                source: source.clone(),
                changed: false,
                content: original.clone(),
                original,
            };
        }

        let mut current = match (source.style(), self.style) {
            (None, Some(style)) => source.clone().with_style(style),
            _ => source.clone(),
        };
        for pass in &self.passes {
            let tree = pass.run(&current);
            if tree != *current.tree() {
                debug!("Pass '{}' changed the source", pass.name());
                current = current.with_tree(tree);
            }
        }

        let changed = current.tree() != source.tree();
        let content = if changed {
            print(current.tree())
        } else {
            original.clone()
        };
        // keep the caller's style attachment, the formatter default is internal
        let formatted = source.with_tree(current.tree().clone());

        FormatResult {
            source: formatted,
            changed,
            original,
            content,
        }
    }

    /// Whether `source` needs formatting
    pub fn check(&self, source: &SourceFile) -> bool {
        self.format(source).changed
    }

    /// Format many sources in parallel; results keep the input order
    pub fn format_all(&self, sources: &[SourceFile]) -> Vec<FormatResult> {
        let results: Vec<FormatResult> =
            sources.par_iter().map(|source| self.format(source)).collect();
        let changed = results.iter().filter(|result| result.changed).count();
        info!("Formatted {} sources, {} changed", results.len(), changed);
        results
    }

    /// Format according to the specified mode
    pub fn process(&self, source: &SourceFile, mode: FormatMode) -> FormatOutput {
        match mode {
            FormatMode::Format => FormatOutput::Formatted(self.format(source)),
            FormatMode::Check => FormatOutput::Checked(self.check(source)),
            FormatMode::Diff => FormatOutput::Diff(self.format(source).diff()),
        }
    }
}
