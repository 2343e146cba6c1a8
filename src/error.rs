//! Error kinds surfaced by the graph facade, storage specifics and the
//! matching engine.
//!
//! Grounded on `petgraph-core`'s `error` module, which wraps every
//! fallible storage operation in an `error_stack::Report<Error>`; we grow
//! the single placeholder variant it ships into the five abstract
//! categories the surrounding specification calls for.

use core::fmt;

use error_stack::Context;

/// The category of an error raised anywhere in the public API.
///
/// These are abstract categories, not a one-to-one mapping onto Rust
/// exception types: several operations share a kind (e.g. every
/// "endpoint not found" condition is `IllegalArg`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required vertex or edge argument was missing where one was
    /// expected (the closest Rust analogue of a null reference).
    NullArg {
        /// Name of the missing argument, for diagnostics.
        what: &'static str,
    },
    /// An endpoint is absent from the graph, a self-loop was attempted on
    /// a graph that forbids them, or a supplier yielded a value already
    /// present.
    IllegalArg {
        /// Human-readable explanation.
        reason: String,
    },
    /// The operation is not supported by this graph's type or storage:
    /// mutating an unmodifiable view, setting a weight on an unweighted
    /// graph, mutating CSR storage, or calling a no-argument `add`
    /// without a configured supplier.
    Unsupported {
        /// Name of the unsupported operation.
        operation: &'static str,
    },
    /// A 32-bit count overflowed; the caller should use the 64-bit
    /// iterables facade instead.
    Arithmetic {
        /// What overflowed.
        what: &'static str,
    },
    /// The importer boundary failed to parse input or hit a structural
    /// violation translating external data into the graph.
    Import {
        /// Human-readable explanation.
        reason: String,
    },
}

impl Error {
    /// Shorthand for [`Error::NullArg`].
    #[must_use]
    pub fn null_arg(what: &'static str) -> Self {
        Self::NullArg { what }
    }

    /// Shorthand for [`Error::IllegalArg`].
    #[must_use]
    pub fn illegal_arg(reason: impl Into<String>) -> Self {
        Self::IllegalArg {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::Unsupported`].
    #[must_use]
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Shorthand for [`Error::Arithmetic`].
    #[must_use]
    pub fn arithmetic(what: &'static str) -> Self {
        Self::Arithmetic { what }
    }

    /// Shorthand for [`Error::Import`].
    #[must_use]
    pub fn import(reason: impl Into<String>) -> Self {
        Self::Import {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArg { what } => write!(f, "missing required argument: {what}"),
            Self::IllegalArg { reason } => write!(f, "illegal argument: {reason}"),
            Self::Unsupported { operation } => write!(f, "unsupported operation: {operation}"),
            Self::Arithmetic { what } => {
                write!(f, "32-bit arithmetic overflow in {what}; use iterables()")
            }
            Self::Import { reason } => write!(f, "import failed: {reason}"),
        }
    }
}

impl Context for Error {}

/// `Result` alias threaded through the public API, mirroring the
/// `error_stack::Result<T, Error>` convention `petgraph-core` already
/// uses for every fallible storage operation.
pub type Result<T> = error_stack::Result<T, Error>;
