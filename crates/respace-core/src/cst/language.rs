//! Rowan language implementation for Java
//!
//! This module implements the `rowan::Language` trait for Java, which connects
//! our JavaSyntaxKind enum to Rowan's generic CST infrastructure.

use rowan::Language;

use super::JavaSyntaxKind;

/// Language implementation for Java
///
/// This is a zero-sized type that implements `rowan::Language` to provide
/// the connection between our syntax kinds and Rowan's generic tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaLanguage;

impl JavaLanguage {
    /// Map a raw rowan kind back to a [`JavaSyntaxKind`]
    ///
    /// Green nodes only ever carry kinds produced by `kind_to_raw`, so an
    /// unknown value means the tree was built by foreign code.
    pub fn kind_from_u16(raw: u16) -> Option<JavaSyntaxKind> {
        let kind = match raw {
            // Trivia
            0 => JavaSyntaxKind::Whitespace,
            1 => JavaSyntaxKind::LineComment,
            2 => JavaSyntaxKind::BlockComment,
            3 => JavaSyntaxKind::JavadocComment,

            // Keywords
            10 => JavaSyntaxKind::PackageKw,
            11 => JavaSyntaxKind::ImportKw,
            12 => JavaSyntaxKind::StaticKw,
            13 => JavaSyntaxKind::ClassKw,
            14 => JavaSyntaxKind::InterfaceKw,
            15 => JavaSyntaxKind::EnumKw,
            16 => JavaSyntaxKind::AnnotationKw,
            17 => JavaSyntaxKind::NewKw,

            // Punctuation
            100 => JavaSyntaxKind::LBrace,
            101 => JavaSyntaxKind::RBrace,
            102 => JavaSyntaxKind::Semicolon,

            // Identifiers and opaque code
            150 => JavaSyntaxKind::Ident,
            151 => JavaSyntaxKind::Code,

            // Structure nodes
            200 => JavaSyntaxKind::CompilationUnit,
            201 => JavaSyntaxKind::PackageDecl,
            202 => JavaSyntaxKind::Import,
            210 => JavaSyntaxKind::ClassDecl,
            211 => JavaSyntaxKind::Block,
            212 => JavaSyntaxKind::MethodDecl,
            213 => JavaSyntaxKind::VariableDecls,
            214 => JavaSyntaxKind::NewClass,
            215 => JavaSyntaxKind::Statement,

            400 => JavaSyntaxKind::Error,

            _ => return None,
        };
        Some(kind)
    }

    /// Kind of a green element, `Error` for kinds this language does not know
    pub fn kind_of(raw: rowan::SyntaxKind) -> JavaSyntaxKind {
        Self::kind_from_raw(raw)
    }
}

impl Language for JavaLanguage {
    type Kind = JavaSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        Self::kind_from_u16(raw.0).unwrap_or_else(|| {
            tracing::warn!("Unknown syntax kind: {}", raw.0);
            JavaSyntaxKind::Error
        })
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}
