// crates/deploy-gate-core/examples/minimal.rs
// ============================================================================
// Module: Deploy Gate Minimal Example
// Description: Minimal end-to-end deployment verification using the devnet.
// Purpose: Demonstrate deploy-fresh, per-group resolve, and the assertion.
// Dependencies: deploy-gate-core
// ============================================================================

//! ## Overview
//! Runs the full fixture lifecycle against the in-memory devnet: one fresh
//! deployment, two resolved groups, and an address assertion per group.
//! This example is target-agnostic and suitable for quick verification.

use deploy_gate_core::ContractArtifact;
use deploy_gate_core::ContractName;
use deploy_gate_core::DeploymentFixture;
use deploy_gate_core::InMemoryDevnet;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let contract = ContractName::new("nftime");
    let devnet = InMemoryDevnet::new();
    devnet.register(ContractArtifact::new(contract.clone(), b"nftime-bytecode".to_vec()))?;

    let mut fixture = DeploymentFixture::new(&devnet, devnet.clone(), &contract)?;
    let fresh = fixture.deploy_fresh().await?;
    if fresh.address().is_none() {
        return Err(ExampleError("fresh deployment must carry an address").into());
    }

    for _group in 0 .. 2 {
        let resolved = fixture.resolve_deployed().await?;
        let address = fixture.assert_deployed(&resolved)?;
        if Some(&address) != fresh.address() {
            return Err(ExampleError("resolved address must match the fresh deploy").into());
        }
    }
    Ok(())
}
