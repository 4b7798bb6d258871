//! Source files handed to the formatter

use std::path::{Path, PathBuf};

use respace_core::{GreenNode, print};

use crate::style::BlankLineStyle;

/// One compilation unit: its tree, where it came from, and the style
/// attached to it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: Option<PathBuf>,
    tree: GreenNode,
    style: Option<BlankLineStyle>,
}

impl SourceFile {
    pub fn new(tree: GreenNode) -> Self {
        Self {
            path: None,
            tree,
            style: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach a style that takes precedence over the formatter's
    pub fn with_style(mut self, style: BlankLineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// The same source with another tree
    pub fn with_tree(&self, tree: GreenNode) -> Self {
        Self {
            path: self.path.clone(),
            tree,
            style: self.style,
        }
    }

    pub fn tree(&self) -> &GreenNode {
        &self.tree
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn style(&self) -> Option<&BlankLineStyle> {
        self.style.as_ref()
    }

    /// Source text
    pub fn text(&self) -> String {
        print(&self.tree)
    }
}
