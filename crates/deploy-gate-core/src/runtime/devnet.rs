// crates/deploy-gate-core/src/runtime/devnet.rs
// ============================================================================
// Module: Deploy Gate In-Memory Devnet
// Description: In-memory catalog and deployment runtime for tests and examples.
// Purpose: Provide a deterministic runtime target without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of
//! [`ArtifactCatalog`] and [`DeploymentRuntime`] for tests and local demos.
//! Addresses are derived deterministically from the artifact hash and a
//! per-devnet deployment counter, so replayed runs observe identical
//! handles. It is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::Address;
use crate::core::ContractArtifact;
use crate::core::ContractName;
use crate::core::DeployedInstance;
use crate::core::hash_bytes_hex;
use crate::interfaces::ArtifactCatalog;
use crate::interfaces::ArtifactError;
use crate::interfaces::DeploymentError;
use crate::interfaces::DeploymentRuntime;
use crate::interfaces::ResolutionError;

// ============================================================================
// SECTION: Devnet State
// ============================================================================

/// Mutable devnet state behind the shared mutex.
#[derive(Debug, Default)]
struct DevnetState {
    /// Registered artifacts keyed by contract name.
    catalog: BTreeMap<String, ContractArtifact>,
    /// Active deployments keyed by artifact content hash.
    active: BTreeMap<String, DeployedInstance>,
    /// Number of deployments performed so far.
    deploy_count: u64,
    /// When set, deployments fail with the given unreachable reason.
    deploy_failure: Option<String>,
    /// When set, deployments record instances without addresses.
    strip_addresses: bool,
}

// ============================================================================
// SECTION: In-Memory Devnet
// ============================================================================

/// In-memory devnet implementing both harness seams for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDevnet {
    /// Devnet state protected by a mutex.
    state: Arc<Mutex<DevnetState>>,
}

impl InMemoryDevnet {
    /// Creates an empty devnet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DevnetState::default())),
        }
    }

    /// Registers an artifact with the devnet catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Catalog`] when the devnet mutex is
    /// poisoned.
    pub fn register(&self, artifact: ContractArtifact) -> Result<(), ArtifactError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ArtifactError::Catalog("devnet mutex poisoned".to_string()))?;
        state.catalog.insert(artifact.name().to_string(), artifact);
        Ok(())
    }

    /// Makes subsequent deployments fail as target-unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentError::Runtime`] when the devnet mutex is
    /// poisoned.
    pub fn fail_deploys(&self, reason: impl Into<String>) -> Result<(), DeploymentError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| DeploymentError::Runtime("devnet mutex poisoned".to_string()))?;
        state.deploy_failure = Some(reason.into());
        Ok(())
    }

    /// Makes subsequent deployments record instances without addresses,
    /// simulating a malformed deploy.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentError::Runtime`] when the devnet mutex is
    /// poisoned.
    pub fn strip_addresses(&self) -> Result<(), DeploymentError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| DeploymentError::Runtime("devnet mutex poisoned".to_string()))?;
        state.strip_addresses = true;
        Ok(())
    }

    /// Returns the number of deployments performed so far.
    ///
    /// # Errors
    ///
    /// Returns [`DeploymentError::Runtime`] when the devnet mutex is
    /// poisoned.
    pub fn deploy_count(&self) -> Result<u64, DeploymentError> {
        let state = self
            .state
            .lock()
            .map_err(|_| DeploymentError::Runtime("devnet mutex poisoned".to_string()))?;
        Ok(state.deploy_count)
    }
}

/// Derives a deterministic instance address from an artifact hash and a
/// deployment counter.
fn derive_address(artifact_hash: &str, counter: u64) -> Option<Address> {
    let seed = format!("{artifact_hash}:{counter}");
    let digest = hash_bytes_hex(seed.as_bytes());
    let short = digest.get(..40)?;
    Address::parse(format!("0x{short}")).ok()
}

impl ArtifactCatalog for InMemoryDevnet {
    fn by_name(&self, name: &ContractName) -> Result<ContractArtifact, ArtifactError> {
        let state = self
            .state
            .lock()
            .map_err(|_| ArtifactError::Catalog("devnet mutex poisoned".to_string()))?;
        state
            .catalog
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| ArtifactError::UnknownContract(name.to_string()))
    }
}

#[async_trait]
impl DeploymentRuntime for InMemoryDevnet {
    async fn new_instance(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeployedInstance, DeploymentError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| DeploymentError::Runtime("devnet mutex poisoned".to_string()))?;
        if let Some(reason) = &state.deploy_failure {
            return Err(DeploymentError::TargetUnreachable(reason.clone()));
        }
        let counter = state.deploy_count;
        state.deploy_count = counter.saturating_add(1);
        let address = if state.strip_addresses {
            None
        } else {
            derive_address(artifact.content_hash(), counter)
        };
        let instance =
            DeployedInstance::new(artifact.name().clone(), artifact.content_hash(), address);
        state.active.insert(artifact.content_hash().to_string(), instance.clone());
        Ok(instance)
    }

    async fn active_instance(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeployedInstance, ResolutionError> {
        let state = self
            .state
            .lock()
            .map_err(|_| ResolutionError::Runtime("devnet mutex poisoned".to_string()))?;
        state
            .active
            .get(artifact.content_hash())
            .cloned()
            .ok_or_else(|| ResolutionError::NoActiveDeployment(artifact.name().to_string()))
    }
}
