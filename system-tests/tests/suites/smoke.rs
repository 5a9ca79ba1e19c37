// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Full-lifecycle deployment verification against the devnet.
// Purpose: Prove deploy-fresh, per-group resolve, and the address assertion.
// Dependencies: system-tests helpers
// ============================================================================

//! Smoke tests for the Deploy Gate deployment fixture.

use std::time::Duration;

use deploy_gate_core::FixtureEvent;
use deploy_gate_core::FixturePhase;
use tokio::time::timeout;

use crate::helpers::artifacts::TestReporter;
use crate::helpers::harness;
use crate::helpers::timeouts::resolve_timeout;

#[tokio::test(flavor = "multi_thread")]
async fn contract_deploys_and_is_addressable() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("contract_deploys_and_is_addressable")?;
    let context = harness::run_context()?;
    reporter.set_contract(&context.config.contract.name);
    let mut fixture = context.fixture()?;

    let deploy_timeout =
        resolve_timeout(Duration::from_millis(context.config.timeouts.deploy_ms));
    let fresh = timeout(deploy_timeout, fixture.deploy_fresh()).await??;
    assert_eq!(fixture.phase(), FixturePhase::GlobalReady);

    let resolve_limit =
        resolve_timeout(Duration::from_millis(context.config.timeouts.resolve_ms));
    for _group in 0 .. 2 {
        let resolved = timeout(resolve_limit, fixture.resolve_deployed()).await??;
        assert_eq!(resolved.address(), fresh.address());
        let address = fixture.assert_deployed(&resolved)?;
        let again = fixture.assert_deployed(&resolved)?;
        assert_eq!(address, again);
        assert!(address.as_str().starts_with("0x"));
        reporter.set_observed_address(address.as_str());
    }
    assert_eq!(fixture.phase(), FixturePhase::Asserted);

    let resolved_config = toml::to_string(&context.config)?;
    reporter.artifacts().write_text("config.resolved.toml", &resolved_config)?;
    reporter.artifacts().write_trace("fixture_trace.json", fixture.trace())?;
    reporter.finish(
        "pass",
        vec!["fresh deploy plus two resolved groups asserted one address".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "config.resolved.toml".to_string(),
            "fixture_trace.json".to_string(),
        ],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn trace_orders_deploy_before_resolve_before_assert()
-> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("trace_orders_deploy_before_resolve_before_assert")?;
    let context = harness::run_context()?;
    reporter.set_contract(&context.config.contract.name);
    let mut fixture = context.fixture()?;

    fixture.deploy_fresh().await?;
    let resolved = fixture.resolve_deployed().await?;
    fixture.assert_deployed(&resolved)?;

    let steps: Vec<&FixtureEvent> =
        fixture.trace().records().iter().map(|record| &record.event).collect();
    assert!(matches!(steps.first(), Some(FixtureEvent::DeployStarted)));
    assert!(matches!(steps.last(), Some(FixtureEvent::AddressAsserted { .. })));
    let deploy_seq = fixture
        .trace()
        .records()
        .iter()
        .find(|record| matches!(record.event, FixtureEvent::DeployCompleted { .. }))
        .map(|record| record.seq)
        .ok_or("missing deploy-completed record")?;
    let resolve_seq = fixture
        .trace()
        .records()
        .iter()
        .find(|record| matches!(record.event, FixtureEvent::ResolveCompleted { .. }))
        .map(|record| record.seq)
        .ok_or("missing resolve-completed record")?;
    assert!(deploy_seq < resolve_seq);

    reporter.artifacts().write_trace("fixture_trace.json", fixture.trace())?;
    reporter.finish(
        "pass",
        vec!["lifecycle trace preserves deploy -> resolve -> assert ordering".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "fixture_trace.json".to_string(),
        ],
    )?;
    Ok(())
}
