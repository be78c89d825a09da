//! Configuration primitives shared by the generator, connectors and the service.

use serde::{Deserialize, Serialize};

/// What to do when a timeframe code or symbol is missing from the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ResolutionMode {
    /// Substitute a default: `1mo` for unknown timeframes, a randomized base
    /// price or quote for unknown symbols.
    #[default]
    Lenient,
    /// Surface `UnknownTimeframe` / `UnknownSymbol` to the caller.
    Strict,
}

impl ResolutionMode {
    /// Whether lookup misses are substituted instead of reported.
    #[must_use]
    pub const fn substitutes(self) -> bool {
        matches!(self, Self::Lenient)
    }
}
