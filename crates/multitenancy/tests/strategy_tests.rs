//! Capability query tests for strategies and strategy sets.
//!
//! These cover the two decisions consumers make against a resolved set:
//! whether multi-tenancy is on at all, and whether connection-provider
//! wiring needs the multi-tenant-aware variant.

use strata_multitenancy::{MultiTenancyStrategy, StrategySet};

#[test]
fn test_variant_connection_provider_requirement() {
    assert!(MultiTenancyStrategy::Database.requires_multi_tenant_connection_provider());
    assert!(MultiTenancyStrategy::Schema.requires_multi_tenant_connection_provider());
    assert!(!MultiTenancyStrategy::Discriminator.requires_multi_tenant_connection_provider());
    assert!(!MultiTenancyStrategy::None.requires_multi_tenant_connection_provider());
}

#[test]
fn test_set_connection_provider_requirement() {
    let schema_and_discriminator: StrategySet = [
        MultiTenancyStrategy::Schema,
        MultiTenancyStrategy::Discriminator,
    ]
    .into_iter()
    .collect();
    assert!(schema_and_discriminator.requires_multi_tenant_connection_provider());

    let discriminator_only = StrategySet::only(MultiTenancyStrategy::Discriminator);
    assert!(!discriminator_only.requires_multi_tenant_connection_provider());
}

#[test]
fn test_set_enabled_gate() {
    assert!(!StrategySet::only(MultiTenancyStrategy::None).enabled());
    assert!(StrategySet::only(MultiTenancyStrategy::Discriminator).enabled());
    assert!(StrategySet::only(MultiTenancyStrategy::Database).enabled());
}

#[test]
fn test_set_queries_agree_with_variant_queries() {
    for strategy in MultiTenancyStrategy::ALL {
        let singleton = StrategySet::only(strategy);
        assert_eq!(
            singleton.requires_multi_tenant_connection_provider(),
            strategy.requires_multi_tenant_connection_provider(),
            "strategy {strategy}"
        );
    }
}

#[test]
fn test_strategy_name_round_trip() {
    // Display output parses back to the same variant, which is what lets a
    // resolved strategy be written back to a property file.
    for strategy in MultiTenancyStrategy::ALL {
        let parsed: MultiTenancyStrategy = strategy.to_string().parse().unwrap();
        assert_eq!(parsed, strategy);
    }
}
