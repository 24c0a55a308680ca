//! Resolution of multi-tenancy strategies from engine settings.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::settings::{MULTI_TENANCY, SettingValue, Settings};

use super::{MultiTenancyStrategy, StrategySet};

/// Determines the multi-tenancy strategies from the given settings.
///
/// Equivalent to [`resolve_with`] using the default [`TracingSink`] for
/// diagnostics.
pub fn resolve(settings: &Settings) -> StrategySet {
    resolve_with(settings, &TracingSink)
}

/// Determines the multi-tenancy strategies from the given settings,
/// emitting diagnostics to the supplied sink.
///
/// This function is total: it never fails, and `{None}` is always the
/// fallback. The value under [`MULTI_TENANCY`] is interpreted in priority
/// order:
///
/// 1. Key absent: `{None}`, silently.
/// 2. An already-typed [`MultiTenancyStrategy`]: a singleton set, silently.
/// 3. A string naming a single strategy (case-insensitive): a singleton set.
/// 4. A comma-separated list of strategy names: the accumulated set, with
///    duplicates collapsed. The accumulated set is returned as-is, even when
///    it is empty or mixes [`MultiTenancyStrategy::None`] with other
///    strategies.
/// 5. Anything else: one warning naming the raw value, then `{None}`.
///
/// Tokens are matched exactly after case normalization; surrounding
/// whitespace is not trimmed, so `"schema, database"` does not resolve.
/// Empty tokens at the end of a list are discarded (`"schema,"` resolves to
/// `{Schema}`), while leading and interior empty tokens fail the whole list.
///
/// # Example
///
/// ```
/// use strata_multitenancy::settings::{Settings, MULTI_TENANCY};
/// use strata_multitenancy::strategy::{MultiTenancyStrategy, resolve};
///
/// let strategies = resolve(&Settings::new().with(MULTI_TENANCY, "discriminator,schema"));
/// assert!(strategies.contains(MultiTenancyStrategy::Discriminator));
/// assert!(strategies.contains(MultiTenancyStrategy::Schema));
///
/// // Missing key means no multi-tenancy.
/// let strategies = resolve(&Settings::new());
/// assert!(!strategies.enabled());
/// ```
pub fn resolve_with(settings: &Settings, diagnostics: &dyn DiagnosticSink) -> StrategySet {
    let Some(value) = settings.get(MULTI_TENANCY) else {
        return StrategySet::only(MultiTenancyStrategy::None);
    };

    let raw = match value {
        SettingValue::Strategy(strategy) => return StrategySet::only(*strategy),
        SettingValue::Text(raw) => raw,
    };

    let normalized = raw.to_uppercase();
    if let Ok(strategy) = normalized.parse::<MultiTenancyStrategy>() {
        return StrategySet::only(strategy);
    }

    match parse_list(&normalized) {
        Some(strategies) => strategies,
        None => {
            diagnostics.warn(&format!(
                "unknown multi-tenancy strategy [{raw}], falling back to none"
            ));
            StrategySet::only(MultiTenancyStrategy::None)
        }
    }
}

/// Parses a comma-separated list of strategy names, or `None` if any token
/// is unrecognized.
fn parse_list(normalized: &str) -> Option<StrategySet> {
    let mut tokens: Vec<&str> = normalized.split(',').collect();

    // Empty tokens at the end of a list are not significant; a sole empty
    // token (the whole value was empty) still has to fail below.
    if tokens.len() > 1 {
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
    }

    let mut strategies = StrategySet::empty();
    for token in tokens {
        strategies.insert(token.parse().ok()?);
    }
    Some(strategies)
}
