//! Type aliases and utilities for Java CST nodes
//!
//! Passes work on green nodes, which are immutable, position independent and
//! `Send + Sync`. The red-tree aliases below are the read-only view used to
//! print a tree or to navigate it with parent pointers.

use super::JavaLanguage;

/// A node in the Java concrete syntax tree (red view)
///
/// # Example
///
/// ```rust,ignore
/// use respace_core::cst::{JavaSyntaxNode, JavaSyntaxKind};
///
/// let node = JavaSyntaxNode::new_root(green);
/// assert_eq!(node.kind(), JavaSyntaxKind::CompilationUnit);
///
/// // Lossless text
/// let source_text = node.text().to_string();
/// ```
pub type JavaSyntaxNode = rowan::SyntaxNode<JavaLanguage>;

/// A token in the Java concrete syntax tree
pub type JavaSyntaxToken = rowan::SyntaxToken<JavaLanguage>;

/// Either a node or a token in the CST
pub type JavaSyntaxElement = rowan::SyntaxElement<JavaLanguage>;

/// Owned green element: what a parent stores for each child
pub type GreenElement = rowan::NodeOrToken<rowan::GreenNode, rowan::GreenToken>;

/// Borrowed green element, as yielded by `GreenNodeData::children`
pub type GreenElementRef<'a> =
    rowan::NodeOrToken<&'a rowan::GreenNodeData, &'a rowan::GreenTokenData>;

// Re-export common rowan types for convenience
pub use rowan::{
    GreenNode, GreenNodeData, GreenToken, GreenTokenData, NodeOrToken, TextRange, TextSize,
};

/// Reproduce the source text of a tree
pub fn print(tree: &GreenNode) -> String {
    JavaSyntaxNode::new_root(tree.clone()).to_string()
}

/// Clone a borrowed green element into an owned one
pub fn to_owned_element(element: GreenElementRef<'_>) -> GreenElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.to_owned()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.to_owned()),
    }
}
