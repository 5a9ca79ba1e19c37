// crates/deploy-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Deploy Gate Interfaces
// Description: Target-agnostic interfaces for artifact lookup and deployment.
// Purpose: Define the seams between the fixture and the chain runtime.
// Dependencies: crate::core, async-trait
// ============================================================================

//! ## Overview
//! Interfaces define how Deploy Gate reaches the surrounding tooling without
//! embedding target-specific details. The artifact catalog is consulted once
//! at fixture construction; the deployment runtime is awaited one call at a
//! time. Implementations must fail closed on missing or invalid data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::Address;
use crate::core::ContractArtifact;
use crate::core::ContractName;
use crate::core::DeployedInstance;

// ============================================================================
// SECTION: Artifact Catalog
// ============================================================================

/// Artifact catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// No artifact is registered under the requested name.
    #[error("unknown contract: {0}")]
    UnknownContract(String),
    /// Catalog backend reported an error.
    #[error("artifact catalog error: {0}")]
    Catalog(String),
}

/// Named-lookup catalog supplied by the surrounding build tooling.
pub trait ArtifactCatalog {
    /// Resolves a contract artifact by name.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when the name is unknown or the backend
    /// fails.
    fn by_name(&self, name: &ContractName) -> Result<ContractArtifact, ArtifactError>;
}

// ============================================================================
// SECTION: Deployment Runtime
// ============================================================================

/// Deployment errors raised when the target cannot construct an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    /// Target runtime was unreachable.
    #[error("deployment target unreachable: {0}")]
    TargetUnreachable(String),
    /// Target runtime rejected the artifact.
    #[error("artifact rejected by target: {0}")]
    ArtifactRejected(String),
    /// Target runtime ran out of resources during construction.
    #[error("deployment target out of resource: {0}")]
    OutOfResource(String),
    /// Target runtime reported an error.
    #[error("deployment runtime error: {0}")]
    Runtime(String),
}

/// Resolution errors raised when an active deployment cannot be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// No deployment is active for the scope.
    #[error("no active deployment for contract: {0}")]
    NoActiveDeployment(String),
    /// Resolved deployment does not match the run's fresh deployment.
    #[error("resolved deployment mismatch: expected {expected}, found {actual}")]
    DeploymentMismatch {
        /// Address of the run's fresh deployment.
        expected: Address,
        /// Address the resolution reported.
        actual: Address,
    },
    /// Target runtime reported an error.
    #[error("resolution runtime error: {0}")]
    Runtime(String),
}

/// Target runtime seam executing deployment and resolution.
///
/// # Invariants
/// - Calls suspend the run until the target responds; the fixture never
///   issues two calls concurrently.
#[async_trait]
pub trait DeploymentRuntime {
    /// Deploys a new instance of the artifact.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentError`] when the target rejects construction.
    async fn new_instance(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeployedInstance, DeploymentError>;

    /// Resolves the already-active deployment of the artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when no deployment is active for the
    /// scope.
    async fn active_instance(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeployedInstance, ResolutionError>;
}

// ============================================================================
// SECTION: Address Assertion
// ============================================================================

/// Assertion failure for the address smoke check.
///
/// Carries the expected description and the observed address so the failure
/// reads like the assertion it replaces. Reported per test; never aborts
/// sibling tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {actual:?}")]
pub struct AssertionError {
    /// Description of the expected condition.
    pub expected: &'static str,
    /// Address the assertion observed, absent when the deploy was malformed.
    pub actual: Option<Address>,
}
