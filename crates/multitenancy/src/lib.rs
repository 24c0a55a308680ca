//! Strata Persistence Engine Multi-Tenancy Layer
//!
//! This crate resolves which multi-tenancy strategy (or combination of
//! strategies) the persistence engine should use to route database
//! connections. Consumers use the resolved set to decide whether a
//! specialized multi-tenant-aware connection provider is required, versus a
//! conventional single-tenant provider.
//!
//! # Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - [`strategy`] - The [`MultiTenancyStrategy`] variants, the resolved
//!   [`StrategySet`], and the [`resolve`] algorithm
//! - [`settings`] - The configuration surface (well-known key and value shapes)
//! - [`diagnostics`] - The injected warning sink used on fallback
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```
//! use strata_multitenancy::{MultiTenancyStrategy, resolve};
//! use strata_multitenancy::settings::{Settings, MULTI_TENANCY};
//!
//! // From a property-file style string value (case-insensitive,
//! // optionally comma-separated):
//! let settings = Settings::new().with(MULTI_TENANCY, "discriminator,schema");
//! let strategies = resolve(&settings);
//!
//! assert!(strategies.enabled());
//! assert!(strategies.requires_multi_tenant_connection_provider());
//!
//! // From an already-typed value:
//! let settings = Settings::new().with(MULTI_TENANCY, MultiTenancyStrategy::Database);
//! let strategies = resolve(&settings);
//! assert!(strategies.contains(MultiTenancyStrategy::Database));
//! ```
//!
//! # Fallback Behavior
//!
//! Resolution is total. A missing key silently resolves to
//! `{MultiTenancyStrategy::None}`; an unrecognized value resolves the same
//! way but emits a single warning diagnostic naming the offending value.
//! Nothing here validates that a resolved strategy is actually usable
//! against a given database backend - that is the connection provider's
//! concern.
//!
//! ```
//! use strata_multitenancy::resolve;
//! use strata_multitenancy::settings::{Settings, MULTI_TENANCY};
//!
//! let strategies = resolve(&Settings::new().with(MULTI_TENANCY, "bogus"));
//! assert!(!strategies.enabled());
//! assert!(!strategies.requires_multi_tenant_connection_provider());
//! ```

pub mod diagnostics;
pub mod error;
pub mod settings;
pub mod strategy;

pub use strategy::{MultiTenancyStrategy, StrategySet, resolve, resolve_with};
