//! respace core
//!
//! Core building blocks of the respace formatter: a lossless, Rowan-based
//! syntax tree for Java sources, the rewrite mechanism passes are written
//! against, and configuration loading.

pub mod config;
pub mod cst; // Concrete Syntax Tree (lossless, Rowan-based)
pub mod error;
pub mod result;

// Configuration system
pub use config::{
    BlankLinesConfiguration, ConfigLoader, FormatterConfiguration, KeepMaximumConfiguration,
    MinimumConfiguration, RespaceConfiguration,
};
pub use cst::{
    Cursor, GreenNode, GreenNodeData, JavaLanguage, JavaSyntaxKind, JavaSyntaxNode, NodeEdit,
    Space, TreeRewriter, print, rewrite,
};
pub use error::{ErrorKind, RespaceError};
pub use result::{Result, ResultExt};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("respace=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
