//! # vibeparse-core - Core Domain Types
//!
//! Foundation crate for VibeParse. Provides the backend data contracts,
//! ingestion validation, error handling, logging, and the small pieces of
//! shared logic the client, app and TUI crates build on.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Script (`script`)
//! - [`Script`], [`Scene`], [`CodeHighlight`] - Generated lesson, validated at ingestion
//! - [`HighlightCode`], [`InvalidCode`] - Per-highlight code body or typed violation
//! - [`Chapter`] - Consecutive scenes grouped by primary file
//!
//! ### Contracts (`contract`)
//! - [`GenerateRequest`], [`GenerateResponse`], [`ErrorDetail`], [`ServerConfig`]
//! - [`Proficiency`], [`Depth`], [`normalize_depth_label()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Other
//! - [`GithubTarget`] - Parsed GitHub repository/tree/blob URL
//! - [`Highlighter`], [`Language`] - Lexical code colouring
//! - [`ListenerRegistry`], [`Subscription`] - Scoped listener registrations
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use vibeparse_core::prelude::*;
//! ```

pub mod contract;
pub mod error;
pub mod github;
pub mod listeners;
pub mod logging;
pub mod script;
pub mod syntax;

/// Prelude for common imports used throughout all VibeParse crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use contract::{
    normalize_depth_label, Depth, ErrorDetail, GenerateRequest, GenerateResponse, Proficiency,
    ServerConfig, FILE_TYPES,
};
pub use error::{Error, Result, ResultExt};
pub use github::GithubTarget;
pub use listeners::{ListenerId, ListenerRegistry, Subscription};
pub use script::{
    Chapter, CodeHighlight, HighlightCode, InvalidCode, JsonKind, Scene, Script, ScriptError,
};
pub use syntax::{Highlighter, Language, Token, TokenKind};
