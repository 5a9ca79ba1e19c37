// crates/deploy-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Deploy Gate Identifiers
// Description: Canonical identifiers for contracts and deployed instances.
// Purpose: Provide strongly typed, serializable names and addresses.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! Deploy Gate. Contract names are opaque and serialize as strings; validation
//! happens at config and catalog boundaries rather than within the wrapper.
//! Addresses are the exception: an [`Address`] is checked at construction so
//! that a held value can never be empty, keeping "address is null" a property
//! of the instance handle rather than of the identifier type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Contract Name
// ============================================================================

/// Contract name identifying a deployable artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractName(String);

impl ContractName {
    /// Creates a new contract name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ContractName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContractName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Address
// ============================================================================

/// Address construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address text was empty or all whitespace.
    #[error("address must not be empty")]
    Empty,
}

/// Instance address uniquely naming a deployment within the target runtime.
///
/// # Invariants
/// - The inner text is never empty or all whitespace; [`Address::parse`] is
///   the only way to construct a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses an address from raw text.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Empty`] when the text is empty or all
    /// whitespace.
    pub fn parse(text: impl Into<String>) -> Result<Self, AddressError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Self(text))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}
