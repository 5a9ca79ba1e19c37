// crates/deploy-gate-core/src/runtime/fixture.rs
// ============================================================================
// Module: Deploy Gate Deployment Fixture
// Description: Run-scoped fixture driving deploy, resolve, and assertion.
// Purpose: Guarantee one addressable instance exists before assertions run.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The deployment fixture mediates between a test run and the deployment
//! runtime. It is an explicit object constructed once per test-run context
//! and passed into each group's setup; there is no module-global instance.
//! The lifecycle is strictly linear: one fresh deployment for the run, one
//! resolution per test group, then per-test address assertions. Ordering
//! violations fail closed instead of being left undefined.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Address;
use crate::core::ContractArtifact;
use crate::core::ContractName;
use crate::core::DeployedInstance;
use crate::core::FixtureEvent;
use crate::core::FixtureTrace;
use crate::interfaces::ArtifactCatalog;
use crate::interfaces::ArtifactError;
use crate::interfaces::AssertionError;
use crate::interfaces::DeploymentError;
use crate::interfaces::DeploymentRuntime;
use crate::interfaces::ResolutionError;

// ============================================================================
// SECTION: Phases
// ============================================================================

/// Lifecycle phase of the deployment fixture.
///
/// # Invariants
/// - Phases only ever advance along
///   `Uninitialized -> GlobalReady -> GroupReady -> Asserted`; the last two
///   transitions repeat per group and per test respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixturePhase {
    /// No deployment has been issued yet.
    Uninitialized,
    /// The run-level fresh deployment completed.
    GlobalReady,
    /// A group-level resolution completed.
    GroupReady,
    /// At least one address assertion passed.
    Asserted,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Deployment fixture errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Artifact catalog lookup failed.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    /// Target runtime could not construct the instance.
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    /// Active deployment could not be resolved for the scope.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// The run already performed its fresh deployment.
    #[error("contract already deployed for this run: {0}")]
    AlreadyDeployed(String),
}

// ============================================================================
// SECTION: Deployment Fixture
// ============================================================================

/// Run-scoped deployment fixture.
///
/// # Invariants
/// - The artifact is resolved once at construction and never changes.
/// - At most one fresh deployment exists per fixture; a second
///   [`DeploymentFixture::deploy_fresh`] fails with
///   [`FixtureError::AlreadyDeployed`].
/// - Resolved instances must carry the fresh deployment's address; a
///   divergent address fails with
///   [`ResolutionError::DeploymentMismatch`].
#[derive(Debug)]
pub struct DeploymentFixture<R> {
    /// Artifact resolved at construction.
    artifact: ContractArtifact,
    /// Deployment runtime seam.
    runtime: R,
    /// Current lifecycle phase.
    phase: FixturePhase,
    /// Fresh instance retained for the run, set by `deploy_fresh`.
    fresh: Option<DeployedInstance>,
    /// Deterministic lifecycle trace.
    trace: FixtureTrace,
}

impl<R> DeploymentFixture<R>
where
    R: DeploymentRuntime,
{
    /// Creates a fixture for the named contract, resolving its artifact
    /// through the catalog exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Artifact`] when the catalog has no artifact
    /// for the name.
    pub fn new<C>(catalog: &C, runtime: R, contract: &ContractName) -> Result<Self, FixtureError>
    where
        C: ArtifactCatalog,
    {
        let artifact = catalog.by_name(contract)?;
        Ok(Self {
            artifact,
            runtime,
            phase: FixturePhase::Uninitialized,
            fresh: None,
            trace: FixtureTrace::new(),
        })
    }

    /// Performs the run-level fresh deployment.
    ///
    /// Invoked once, before any test group runs. The returned instance is
    /// also retained by the fixture as the run-level deployment.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::AlreadyDeployed`] when the run already
    /// deployed, or [`FixtureError::Deployment`] when the target rejects
    /// construction. Deployment failures are fatal for the run: no retry,
    /// no fallback.
    pub async fn deploy_fresh(&mut self) -> Result<DeployedInstance, FixtureError> {
        if self.fresh.is_some() {
            return Err(FixtureError::AlreadyDeployed(self.artifact.name().to_string()));
        }
        self.trace.record(FixtureEvent::DeployStarted);
        let instance = self.runtime.new_instance(&self.artifact).await?;
        self.trace.record(FixtureEvent::DeployCompleted {
            address: instance.address().cloned(),
        });
        self.fresh = Some(instance.clone());
        self.phase = FixturePhase::GlobalReady;
        Ok(instance)
    }

    /// Resolves the already-active deployment for a test group.
    ///
    /// Invoked before each test group. Fails locally, without touching the
    /// runtime, when no fresh deployment exists for the run.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::NoActiveDeployment`] when called before
    /// [`DeploymentFixture::deploy_fresh`], [`ResolutionError::DeploymentMismatch`]
    /// when the resolved address differs from the fresh deployment's
    /// address, and [`FixtureError::Resolution`] for runtime failures. All
    /// are fatal for the run.
    pub async fn resolve_deployed(&mut self) -> Result<DeployedInstance, FixtureError> {
        let fresh_address = match &self.fresh {
            Some(instance) => instance.address().cloned(),
            None => {
                return Err(FixtureError::Resolution(ResolutionError::NoActiveDeployment(
                    self.artifact.name().to_string(),
                )));
            }
        };
        self.trace.record(FixtureEvent::ResolveStarted);
        let resolved = self.runtime.active_instance(&self.artifact).await?;
        if let (Some(expected), Some(actual)) = (&fresh_address, resolved.address()) {
            if expected != actual {
                return Err(FixtureError::Resolution(ResolutionError::DeploymentMismatch {
                    expected: expected.clone(),
                    actual: actual.clone(),
                }));
            }
        }
        self.trace.record(FixtureEvent::ResolveCompleted {
            address: resolved.address().cloned(),
        });
        self.phase = FixturePhase::GroupReady;
        Ok(resolved)
    }

    /// Asserts that an instance is addressable.
    ///
    /// The sole behavioral check of the harness: succeeds iff the instance
    /// carries a non-null address, returning the observed address.
    /// Idempotent; repeated calls on the same instance return the same
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError`] carrying the expected condition and the
    /// observed address when the address is absent. Assertion failures are
    /// reported per test and never abort sibling tests.
    pub fn assert_deployed(
        &mut self,
        instance: &DeployedInstance,
    ) -> Result<Address, AssertionError> {
        match instance.address() {
            Some(address) => {
                self.trace.record(FixtureEvent::AddressAsserted {
                    address: address.clone(),
                });
                self.phase = FixturePhase::Asserted;
                Ok(address.clone())
            }
            None => Err(AssertionError {
                expected: "non-null address",
                actual: None,
            }),
        }
    }

    /// Returns the artifact resolved at construction.
    #[must_use]
    pub const fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> FixturePhase {
        self.phase
    }

    /// Returns the run-level fresh instance when one exists.
    #[must_use]
    pub const fn fresh_instance(&self) -> Option<&DeployedInstance> {
        self.fresh.as_ref()
    }

    /// Returns the lifecycle trace recorded so far.
    #[must_use]
    pub const fn trace(&self) -> &FixtureTrace {
        &self.trace
    }
}
