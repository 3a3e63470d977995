//! Compilation errors.
//!
//! Compilation is a deterministic, pure transform: every failure is
//! reproducible, surfaces immediately, and aborts the whole tree — a partial
//! [`CompiledStyle`](crate::CompiledStyle) is never returned. There is no
//! retry logic anywhere.

use thiserror::Error;

/// Errors produced while compiling or overriding a style specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A leaf value has an unsupported shape (for example a list nested
    /// inside a list).
    #[error("unsupported value for property `{property}`: {reason}")]
    Value {
        /// The offending property key as written in the spec.
        property: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// An override patch put a nested spec where the base holds a leaf
    /// value; the shapes conflict and nothing sensible can be merged.
    #[error("cannot merge a nested patch into leaf property `{key}`")]
    Merge {
        /// The key at which the shapes conflict.
        key: String,
    },
}
