use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dalal workspace.
///
/// Lookup misses (unknown timeframe codes and symbols) are kept distinct from
/// argument validation so that callers running in strict mode can map them to
/// precise responses.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DalalError {
    /// The timeframe code is not present in the timeframe table.
    #[error("unknown timeframe: {code}")]
    UnknownTimeframe {
        /// The code as supplied by the caller (e.g. "2w").
        code: String,
    },

    /// The symbol has no entry in the reference tables.
    #[error("unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol as supplied by the caller.
        symbol: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "news").
        capability: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "static asset app.js".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl DalalError {
    /// Helper: build an `UnknownTimeframe` error for a timeframe code.
    pub fn unknown_timeframe(code: impl Into<String>) -> Self {
        Self::UnknownTimeframe { code: code.into() }
    }

    /// Helper: build an `UnknownSymbol` error for a symbol.
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if the error stems from a failed table lookup.
    ///
    /// These are the conditions a lenient caller substitutes a default for.
    #[must_use]
    pub const fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::UnknownTimeframe { .. } | Self::UnknownSymbol { .. }
        )
    }
}
