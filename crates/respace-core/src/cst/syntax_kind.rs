//! Syntax kind enumeration for the Java CST
//!
//! This module defines all node and token types the rewriting engine keeps in
//! its lossless Java syntax tree. Only the structure that formatting passes
//! need is modelled; the rest of a declaration or statement is carried as
//! opaque [`JavaSyntaxKind::Code`] tokens.

use std::fmt;

/// Syntax kind for Java language elements
///
/// The numbering is grouped the same way for every language the engine hosts:
/// - Trivia (0-9)
/// - Keywords (10-99)
/// - Punctuation (100-149)
/// - Identifiers and opaque code (150-199)
/// - Structural nodes (200-399)
/// - Special kinds (400+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum JavaSyntaxKind {
    // ==================
    // Trivia (0-9)
    // ==================
    /// Whitespace, including line breaks
    Whitespace = 0,
    /// Line comment starting with //
    LineComment = 1,
    /// Block comment /* ... */
    BlockComment = 2,
    /// Javadoc comment /** ... */
    JavadocComment = 3,

    // ==================
    // Keywords (10-99)
    // ==================
    /// "package" keyword
    PackageKw = 10,
    /// "import" keyword
    ImportKw = 11,
    /// "static" keyword (static imports)
    StaticKw = 12,
    /// "class" keyword
    ClassKw = 13,
    /// "interface" keyword
    InterfaceKw = 14,
    /// "enum" keyword
    EnumKw = 15,
    /// "@interface" keyword of annotation type declarations
    AnnotationKw = 16,
    /// "new" keyword
    NewKw = 17,

    // ==================
    // Punctuation (100-149)
    // ==================
    /// {
    LBrace = 100,
    /// }
    RBrace = 101,
    /// ;
    Semicolon = 102,

    // ==================
    // Identifiers and opaque code (150-199)
    // ==================
    /// Identifier (type names)
    Ident = 150,
    /// Source text the formatting passes never look into
    Code = 151,

    // ==================
    // Structure nodes (200-399)
    // ==================
    /// Root of a source file
    CompilationUnit = 200,
    /// `package a.b.c;`
    PackageDecl = 201,
    /// `import a.b.C;`
    Import = 202,
    /// Class, interface, enum or annotation type declaration
    ClassDecl = 210,
    /// `{ ... }`: class bodies, method bodies, initializers and nested blocks
    Block = 211,
    /// Method or constructor declaration
    MethodDecl = 212,
    /// Field or local variable declaration
    VariableDecls = 213,
    /// Instance creation; carries a body for anonymous classes
    NewClass = 214,
    /// Any other statement
    Statement = 215,

    // ==================
    // Special (400+)
    // ==================
    /// Error recovery node produced by the parser
    Error = 400,
}

impl JavaSyntaxKind {
    /// Check if this is a trivia kind (whitespace, comments)
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::JavadocComment
        )
    }

    /// Check if this is a comment
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LineComment | Self::BlockComment | Self::JavadocComment
        )
    }

    /// Check if this is a keyword
    pub const fn is_keyword(self) -> bool {
        (self as u16) >= 10 && (self as u16) < 100
    }

    /// Check if this is punctuation
    pub const fn is_punct(self) -> bool {
        (self as u16) >= 100 && (self as u16) < 150
    }

    /// Check if this is a structural node
    pub const fn is_node(self) -> bool {
        (self as u16) >= 200 && (self as u16) < 400
    }

    /// Get the text of keyword and punctuation tokens
    pub const fn token_text(self) -> Option<&'static str> {
        match self {
            Self::PackageKw => Some("package"),
            Self::ImportKw => Some("import"),
            Self::StaticKw => Some("static"),
            Self::ClassKw => Some("class"),
            Self::InterfaceKw => Some("interface"),
            Self::EnumKw => Some("enum"),
            Self::AnnotationKw => Some("@interface"),
            Self::NewKw => Some("new"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::Semicolon => Some(";"),
            _ => None,
        }
    }
}

impl fmt::Display for JavaSyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<JavaSyntaxKind> for rowan::SyntaxKind {
    fn from(kind: JavaSyntaxKind) -> Self {
        Self(kind as u16)
    }
}
