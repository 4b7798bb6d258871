//! Typed AST layer over the green tree
//!
//! Passes rewrite green nodes, so the typed wrappers here borrow
//! [`GreenNodeData`] directly instead of red nodes. Each wrapper implements
//! `cast()` to safely convert from an untyped node and reports the positions
//! of the children the passes edit. Positions are indices into
//! `GreenNodeData::children()`, which counts tokens as well as nodes, so they
//! can be handed straight to `replace_child`.
//!
//! # Example
//!
//! ```rust,ignore
//! use respace_core::cst::ast::{AstNode, ClassDecl, ClassKind};
//!
//! let class = ClassDecl::cast(&green).unwrap();
//! assert_eq!(class.kind(), ClassKind::Interface);
//! let body = class.body().unwrap();
//! ```

use super::{GreenElementRef, GreenNodeData, JavaLanguage, JavaSyntaxKind, NodeOrToken};

/// Helper trait for casting green nodes to typed wrappers
pub trait AstNode<'a>: Sized {
    fn can_cast(kind: JavaSyntaxKind) -> bool;
    fn cast(node: &'a GreenNodeData) -> Option<Self>;
    fn syntax(&self) -> &'a GreenNodeData;
}

/// Kind of a green node
pub fn node_kind(node: &GreenNodeData) -> JavaSyntaxKind {
    JavaLanguage::kind_of(node.kind())
}

/// Kind of a green child, node or token
pub fn element_kind(element: GreenElementRef<'_>) -> JavaSyntaxKind {
    match element {
        NodeOrToken::Node(node) => JavaLanguage::kind_of(node.kind()),
        NodeOrToken::Token(token) => JavaLanguage::kind_of(token.kind()),
    }
}

/// Child node at `index`, if that child is a node
pub fn child_node(parent: &GreenNodeData, index: usize) -> Option<&GreenNodeData> {
    parent.children().nth(index).and_then(NodeOrToken::into_node)
}

/// Positions and kinds of the child nodes of `parent`
fn child_nodes(parent: &GreenNodeData) -> impl Iterator<Item = (usize, JavaSyntaxKind)> + '_ {
    parent
        .children()
        .enumerate()
        .filter_map(|(index, child)| child.into_node().map(|node| (index, node_kind(node))))
}

/// Position of the last child node of `kind`
fn last_child_of_kind(parent: &GreenNodeData, kind: JavaSyntaxKind) -> Option<usize> {
    child_nodes(parent)
        .filter(|&(_, k)| k == kind)
        .map(|(index, _)| index)
        .last()
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        impl<'a> AstNode<'a> for $name<'a> {
            fn can_cast(kind: JavaSyntaxKind) -> bool {
                kind == JavaSyntaxKind::$kind
            }

            fn cast(node: &'a GreenNodeData) -> Option<Self> {
                if Self::can_cast(node_kind(node)) {
                    Some(Self { syntax: node })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &'a GreenNodeData {
                self.syntax
            }
        }
    };
}

// ============================================================================
// CompilationUnit
// ============================================================================

/// Root of a source file: optional package, imports, type declarations
#[derive(Debug, Clone, Copy)]
pub struct CompilationUnit<'a> {
    syntax: &'a GreenNodeData,
}

ast_node!(CompilationUnit, CompilationUnit);

impl<'a> CompilationUnit<'a> {
    pub fn package_index(&self) -> Option<usize> {
        child_nodes(self.syntax)
            .find(|&(_, kind)| kind == JavaSyntaxKind::PackageDecl)
            .map(|(index, _)| index)
    }

    pub fn import_indices(&self) -> Vec<usize> {
        child_nodes(self.syntax)
            .filter(|&(_, kind)| kind == JavaSyntaxKind::Import)
            .map(|(index, _)| index)
            .collect()
    }

    /// Top-level type declarations, in source order
    pub fn type_indices(&self) -> Vec<usize> {
        child_nodes(self.syntax)
            .filter(|&(_, kind)| kind == JavaSyntaxKind::ClassDecl)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn has_package(&self) -> bool {
        self.package_index().is_some()
    }
}

// ============================================================================
// ClassDecl
// ============================================================================

/// Flavour of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    /// The keyword introducing the declaration
    pub const fn keyword(self) -> JavaSyntaxKind {
        match self {
            Self::Class => JavaSyntaxKind::ClassKw,
            Self::Interface => JavaSyntaxKind::InterfaceKw,
            Self::Enum => JavaSyntaxKind::EnumKw,
            Self::Annotation => JavaSyntaxKind::AnnotationKw,
        }
    }

    pub const fn from_keyword(kind: JavaSyntaxKind) -> Option<Self> {
        match kind {
            JavaSyntaxKind::ClassKw => Some(Self::Class),
            JavaSyntaxKind::InterfaceKw => Some(Self::Interface),
            JavaSyntaxKind::EnumKw => Some(Self::Enum),
            JavaSyntaxKind::AnnotationKw => Some(Self::Annotation),
            _ => None,
        }
    }
}

/// Class, interface, enum or annotation type declaration
#[derive(Debug, Clone, Copy)]
pub struct ClassDecl<'a> {
    syntax: &'a GreenNodeData,
}

ast_node!(ClassDecl, ClassDecl);

impl<'a> ClassDecl<'a> {
    /// Declaration flavour, taken from the first declaration keyword
    pub fn kind(&self) -> ClassKind {
        self.syntax
            .children()
            .filter_map(NodeOrToken::into_token)
            .find_map(|token| ClassKind::from_keyword(JavaLanguage::kind_of(token.kind())))
            .unwrap_or(ClassKind::Class)
    }

    pub fn body_index(&self) -> Option<usize> {
        last_child_of_kind(self.syntax, JavaSyntaxKind::Block)
    }

    pub fn body(&self) -> Option<Block<'a>> {
        self.body_index()
            .and_then(|index| child_node(self.syntax, index))
            .and_then(Block::cast)
    }
}

// ============================================================================
// MethodDecl
// ============================================================================

/// Method or constructor declaration; abstract and interface methods have no body
#[derive(Debug, Clone, Copy)]
pub struct MethodDecl<'a> {
    syntax: &'a GreenNodeData,
}

ast_node!(MethodDecl, MethodDecl);

impl<'a> MethodDecl<'a> {
    pub fn body_index(&self) -> Option<usize> {
        last_child_of_kind(self.syntax, JavaSyntaxKind::Block)
    }

    pub fn body(&self) -> Option<Block<'a>> {
        self.body_index()
            .and_then(|index| child_node(self.syntax, index))
            .and_then(Block::cast)
    }
}

// ============================================================================
// NewClass
// ============================================================================

/// Instance creation expression; the body is present for anonymous classes
#[derive(Debug, Clone, Copy)]
pub struct NewClass<'a> {
    syntax: &'a GreenNodeData,
}

ast_node!(NewClass, NewClass);

impl<'a> NewClass<'a> {
    pub fn body_index(&self) -> Option<usize> {
        last_child_of_kind(self.syntax, JavaSyntaxKind::Block)
    }

    pub fn body(&self) -> Option<Block<'a>> {
        self.body_index()
            .and_then(|index| child_node(self.syntax, index))
            .and_then(Block::cast)
    }
}

// ============================================================================
// Block
// ============================================================================

/// A member of a block: its position among the block's children and its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub index: usize,
    pub kind: JavaSyntaxKind,
}

/// `{ ... }`: class bodies, method bodies, initializers and nested blocks
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    syntax: &'a GreenNodeData,
}

ast_node!(Block, Block);

impl<'a> Block<'a> {
    /// Statements or declarations, in source order
    pub fn members(&self) -> Vec<Member> {
        child_nodes(self.syntax)
            .map(|(index, kind)| Member { index, kind })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        child_nodes(self.syntax).next().is_none()
    }
}
