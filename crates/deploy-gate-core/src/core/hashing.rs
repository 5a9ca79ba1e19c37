// crates/deploy-gate-core/src/core/hashing.rs
// ============================================================================
// Module: Deploy Gate Content Hashing
// Description: Content hashing for contract artifacts and derived addresses.
// Purpose: Provide deterministic, hex-encoded digests over raw bytes.
// Dependencies: sha2
// ============================================================================

//! ## Overview
//! Artifact identity in Deploy Gate is a SHA-256 digest over the artifact
//! bytecode, hex-encoded lowercase. The in-memory devnet also derives
//! deterministic instance addresses from these digests so replayed runs
//! produce identical handles.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sha2::Digest;
use sha2::Sha256;

// ============================================================================
// SECTION: Hashing
// ============================================================================

/// Hashes raw bytes with SHA-256 and returns the lowercase hex digest.
#[must_use]
pub fn hash_bytes_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex_encode(&hasher.finalize())
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
