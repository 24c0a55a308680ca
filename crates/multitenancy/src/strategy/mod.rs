//! Multi-tenancy strategies understood by the persistence engine.
//!
//! This module defines the approaches to multi-tenancy the engine can route
//! connections for:
//!
//! - [`MultiTenancyStrategy::Discriminator`] - All tenants in one schema,
//!   separated by a discriminator column
//! - [`MultiTenancyStrategy::Schema`] - Separate database schema per tenant
//! - [`MultiTenancyStrategy::Database`] - Separate database per tenant
//! - [`MultiTenancyStrategy::None`] - No multi-tenancy
//!
//! # Choosing a Strategy
//!
//! | Strategy | Isolation | Connection routing |
//! |----------|-----------|--------------------|
//! | Discriminator | Logical | Conventional connection provider |
//! | Schema | Schema-level | Multi-tenant connection provider |
//! | Database | Physical | Multi-tenant connection provider |
//! | None | n/a | Conventional connection provider |
//!
//! `Schema` and `Database` affect which connection a tenant's work runs on,
//! so they require a tenant-aware connection provider. `Discriminator`
//! isolation happens inside SQL statements and works with a conventional
//! provider, as does running with no multi-tenancy at all.
//!
//! # Example
//!
//! ```
//! use strata_multitenancy::strategy::{MultiTenancyStrategy, resolve};
//! use strata_multitenancy::settings::{Settings, MULTI_TENANCY};
//!
//! let settings = Settings::new().with(MULTI_TENANCY, "schema");
//! let strategies = resolve(&settings);
//!
//! assert!(strategies.contains(MultiTenancyStrategy::Schema));
//! assert!(strategies.enabled());
//! assert!(strategies.requires_multi_tenant_connection_provider());
//! ```

mod resolver;
mod set;

pub use resolver::{resolve, resolve_with};
pub use set::StrategySet;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownStrategyError;

/// A multi-tenancy strategy the persistence engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiTenancyStrategy {
    /// Multi-tenancy implemented by use of discriminator columns.
    Discriminator,

    /// Multi-tenancy implemented as separate schemas.
    Schema,

    /// Multi-tenancy implemented as separate databases.
    Database,

    /// No multi-tenancy.
    None,
}

impl MultiTenancyStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [MultiTenancyStrategy; 4] = [
        MultiTenancyStrategy::Discriminator,
        MultiTenancyStrategy::Schema,
        MultiTenancyStrategy::Database,
        MultiTenancyStrategy::None,
    ];

    /// Returns `true` if this strategy requires a specialized multi-tenant
    /// connection provider rather than a conventional one.
    ///
    /// `Database` and `Schema` route tenants to different connections and
    /// need a tenant-aware provider; `Discriminator` and `None` do not.
    pub fn requires_multi_tenant_connection_provider(&self) -> bool {
        matches!(
            self,
            MultiTenancyStrategy::Database | MultiTenancyStrategy::Schema
        )
    }
}

impl fmt::Display for MultiTenancyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiTenancyStrategy::Discriminator => write!(f, "discriminator"),
            MultiTenancyStrategy::Schema => write!(f, "schema"),
            MultiTenancyStrategy::Database => write!(f, "database"),
            MultiTenancyStrategy::None => write!(f, "none"),
        }
    }
}

impl FromStr for MultiTenancyStrategy {
    type Err = UnknownStrategyError;

    /// Parses a strategy name case-insensitively.
    ///
    /// Matching is exact after case normalization: surrounding whitespace is
    /// not trimmed and partial names are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DISCRIMINATOR" => Ok(MultiTenancyStrategy::Discriminator),
            "SCHEMA" => Ok(MultiTenancyStrategy::Schema),
            "DATABASE" => Ok(MultiTenancyStrategy::Database),
            "NONE" => Ok(MultiTenancyStrategy::None),
            _ => Err(UnknownStrategyError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_multi_tenant_connection_provider() {
        assert!(MultiTenancyStrategy::Database.requires_multi_tenant_connection_provider());
        assert!(MultiTenancyStrategy::Schema.requires_multi_tenant_connection_provider());
        assert!(!MultiTenancyStrategy::Discriminator.requires_multi_tenant_connection_provider());
        assert!(!MultiTenancyStrategy::None.requires_multi_tenant_connection_provider());
    }

    #[test]
    fn test_display() {
        assert_eq!(MultiTenancyStrategy::Discriminator.to_string(), "discriminator");
        assert_eq!(MultiTenancyStrategy::Schema.to_string(), "schema");
        assert_eq!(MultiTenancyStrategy::Database.to_string(), "database");
        assert_eq!(MultiTenancyStrategy::None.to_string(), "none");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "schema".parse::<MultiTenancyStrategy>().unwrap(),
            MultiTenancyStrategy::Schema
        );
        assert_eq!(
            "SCHEMA".parse::<MultiTenancyStrategy>().unwrap(),
            MultiTenancyStrategy::Schema
        );
        assert_eq!(
            "DaTaBaSe".parse::<MultiTenancyStrategy>().unwrap(),
            MultiTenancyStrategy::Database
        );
    }

    #[test]
    fn test_from_str_no_trimming() {
        assert!(" schema".parse::<MultiTenancyStrategy>().is_err());
        assert!("schema ".parse::<MultiTenancyStrategy>().is_err());
    }

    #[test]
    fn test_from_str_rejects_partial_names() {
        assert!("schem".parse::<MultiTenancyStrategy>().is_err());
        assert!("schemas".parse::<MultiTenancyStrategy>().is_err());
        assert!("".parse::<MultiTenancyStrategy>().is_err());
    }

    #[test]
    fn test_from_str_error_carries_input() {
        let err = "bogus".parse::<MultiTenancyStrategy>().unwrap_err();
        assert_eq!(err.name, "bogus");
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_serde_round_trip() {
        for strategy in MultiTenancyStrategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            let back: MultiTenancyStrategy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, strategy);
        }
        assert_eq!(
            serde_json::to_string(&MultiTenancyStrategy::Discriminator).unwrap(),
            "\"discriminator\""
        );
    }
}
