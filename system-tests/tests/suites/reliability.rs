// system-tests/tests/suites/reliability.rs
// ============================================================================
// Module: Reliability Tests
// Description: Failure-path coverage for the deployment fixture.
// Purpose: Prove fatal setup failures and per-test assertion isolation.
// Dependencies: system-tests helpers
// ============================================================================

//! Reliability tests for the Deploy Gate deployment fixture.

use deploy_gate_core::DeploymentError;
use deploy_gate_core::FixtureError;
use deploy_gate_core::FixturePhase;
use deploy_gate_core::ResolutionError;

use crate::helpers::artifacts::TestReporter;
use crate::helpers::harness;

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_target_aborts_run_with_no_results()
-> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("unreachable_target_aborts_run_with_no_results")?;
    let context = harness::run_context()?;
    reporter.set_contract(&context.config.contract.name);
    context.devnet.fail_deploys("connection refused")?;
    let mut fixture = context.fixture()?;

    match fixture.deploy_fresh().await {
        Err(FixtureError::Deployment(DeploymentError::TargetUnreachable(reason))) => {
            assert_eq!(reason, "connection refused");
        }
        other => panic!("expected target-unreachable failure, got {other:?}"),
    }
    assert_eq!(fixture.phase(), FixturePhase::Uninitialized);
    assert_eq!(context.devnet.deploy_count()?, 0);

    match fixture.resolve_deployed().await {
        Err(FixtureError::Resolution(ResolutionError::NoActiveDeployment(_))) => {}
        other => panic!("expected no-active-deployment failure, got {other:?}"),
    }

    reporter.artifacts().write_trace("fixture_trace.json", fixture.trace())?;
    reporter.finish(
        "pass",
        vec!["deploy failure is fatal and leaves zero deployments".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "fixture_trace.json".to_string(),
        ],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_deploy_fails_one_assertion_only() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("malformed_deploy_fails_one_assertion_only")?;

    // Group with a malformed deployment: assertion fails per-test.
    let broken = harness::run_context()?;
    broken.devnet.strip_addresses()?;
    let mut broken_fixture = broken.fixture()?;
    let instance = broken_fixture.deploy_fresh().await?;
    let error = match broken_fixture.assert_deployed(&instance) {
        Err(error) => error,
        Ok(address) => panic!("expected assertion failure, got address {address}"),
    };
    assert_eq!(error.expected, "non-null address");
    assert_eq!(error.actual, None);

    // Sibling group with its own valid deployment still passes.
    let healthy = harness::run_context()?;
    reporter.set_contract(&healthy.config.contract.name);
    let mut healthy_fixture = healthy.fixture()?;
    healthy_fixture.deploy_fresh().await?;
    let resolved = healthy_fixture.resolve_deployed().await?;
    let address = healthy_fixture.assert_deployed(&resolved)?;
    reporter.set_observed_address(address.as_str());

    reporter.artifacts().write_json("assertion_failure.json", &error.to_string())?;
    reporter.finish(
        "pass",
        vec![
            "null address fails exactly one assertion".to_string(),
            "sibling group with a valid instance still passes".to_string(),
        ],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "assertion_failure.json".to_string(),
        ],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_ordering_violations_fail_closed() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("lifecycle_ordering_violations_fail_closed")?;
    let context = harness::run_context()?;
    reporter.set_contract(&context.config.contract.name);

    // Resolution before the run-level deployment is a scope violation.
    let mut early = context.fixture()?;
    match early.resolve_deployed().await {
        Err(FixtureError::Resolution(ResolutionError::NoActiveDeployment(name))) => {
            assert_eq!(name, harness::SAMPLE_CONTRACT);
        }
        other => panic!("expected no-active-deployment failure, got {other:?}"),
    }

    // The run-level deployment happens at most once.
    let mut fixture = context.fixture()?;
    fixture.deploy_fresh().await?;
    match fixture.deploy_fresh().await {
        Err(FixtureError::AlreadyDeployed(name)) => {
            assert_eq!(name, harness::SAMPLE_CONTRACT);
        }
        other => panic!("expected already-deployed failure, got {other:?}"),
    }

    reporter.finish(
        "pass",
        vec!["resolve-before-deploy and double deploy both fail closed".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}
