//! Error types for multi-tenancy configuration.

use thiserror::Error;

/// A strategy name that does not match any known multi-tenancy strategy.
///
/// Returned by [`MultiTenancyStrategy::from_str`](crate::MultiTenancyStrategy).
/// Strategy resolution itself never surfaces this error; it falls back to
/// `{None}` and emits a diagnostic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown multi-tenancy strategy: {name}")]
pub struct UnknownStrategyError {
    /// The name that failed to parse, as given.
    pub name: String,
}
