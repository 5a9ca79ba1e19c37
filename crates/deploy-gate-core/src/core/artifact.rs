// crates/deploy-gate-core/src/core/artifact.rs
// ============================================================================
// Module: Deploy Gate Artifact Model
// Description: Contract artifacts and the instance handles they deploy into.
// Purpose: Provide immutable artifact references and deployment handles.
// Dependencies: crate::core::{hashing, identifiers}, serde
// ============================================================================

//! ## Overview
//! A [`ContractArtifact`] is an immutable reference to a deployable unit of
//! logic, resolved once at harness start. A [`DeployedInstance`] is the
//! runtime handle produced by deploying, or resolving a prior deployment of,
//! an artifact. Instances are immutable after creation: once an instance
//! exists its address is stable for the remainder of the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::hash_bytes_hex;
use crate::core::identifiers::Address;
use crate::core::identifiers::ContractName;

// ============================================================================
// SECTION: Contract Artifact
// ============================================================================

/// Immutable reference to a deployable unit of contract logic.
///
/// # Invariants
/// - The content hash is computed over the bytecode at construction and
///   never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Contract name the artifact was resolved under.
    name: ContractName,
    /// Raw deployable bytecode.
    bytecode: Vec<u8>,
    /// Lowercase hex SHA-256 digest of the bytecode.
    content_hash: String,
}

impl ContractArtifact {
    /// Creates an artifact from a name and its deployable bytecode.
    #[must_use]
    pub fn new(name: ContractName, bytecode: Vec<u8>) -> Self {
        let content_hash = hash_bytes_hex(&bytecode);
        Self {
            name,
            bytecode,
            content_hash,
        }
    }

    /// Returns the contract name.
    #[must_use]
    pub const fn name(&self) -> &ContractName {
        &self.name
    }

    /// Returns the deployable bytecode.
    #[must_use]
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Returns the hex-encoded content hash identifying this artifact.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

// ============================================================================
// SECTION: Deployed Instance
// ============================================================================

/// Runtime handle for a deployed contract instance.
///
/// # Invariants
/// - Handles are immutable after creation; repeated reads of the address
///   observe the same value.
/// - A `None` address models a malformed deployment (the runtime accepted
///   construction but returned no usable identifier); only
///   [`DeploymentFixture::assert_deployed`](crate::runtime::DeploymentFixture::assert_deployed)
///   judges that condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedInstance {
    /// Name of the contract this instance was deployed from.
    contract: ContractName,
    /// Content hash of the artifact this instance was deployed from.
    artifact_hash: String,
    /// Instance address, absent when the deployment was malformed.
    address: Option<Address>,
}

impl DeployedInstance {
    /// Creates an instance handle.
    #[must_use]
    pub fn new(
        contract: ContractName,
        artifact_hash: impl Into<String>,
        address: Option<Address>,
    ) -> Self {
        Self {
            contract,
            artifact_hash: artifact_hash.into(),
            address,
        }
    }

    /// Returns the contract name this instance belongs to.
    #[must_use]
    pub const fn contract(&self) -> &ContractName {
        &self.contract
    }

    /// Returns the content hash of the originating artifact.
    #[must_use]
    pub fn artifact_hash(&self) -> &str {
        &self.artifact_hash
    }

    /// Returns the instance address when the deployment produced one.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}
