// crates/deploy-gate-core/src/lib.rs
// ============================================================================
// Module: Deploy Gate Core Library
// Description: Public API surface for the Deploy Gate core.
// Purpose: Expose core types, interfaces, and the deployment fixture.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Deploy Gate core provides the deployment-verification fixture for contract
//! smoke runs: deploy a named contract once per run, resolve the shared
//! deployment per test group, and assert that the instance is addressable.
//! It is target-agnostic and integrates through explicit interfaces rather
//! than embedding into any particular chain client.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use crate::interfaces::ArtifactCatalog;
pub use crate::interfaces::ArtifactError;
pub use crate::interfaces::AssertionError;
pub use crate::interfaces::DeploymentError;
pub use crate::interfaces::DeploymentRuntime;
pub use crate::interfaces::ResolutionError;
pub use crate::runtime::DeploymentFixture;
pub use crate::runtime::FixtureError;
pub use crate::runtime::FixturePhase;
pub use crate::runtime::InMemoryDevnet;
