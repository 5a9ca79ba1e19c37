// crates/deploy-gate-core/src/core/trace.rs
// ============================================================================
// Module: Deploy Gate Fixture Trace
// Description: Deterministic lifecycle records emitted by the fixture.
// Purpose: Provide a replayable observability surface without a logger.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The fixture records every lifecycle step as a [`FixtureEvent`] stamped
//! with a monotonic logical sequence number. The core never reads wall-clock
//! time and never writes to stdout or stderr; hosts that want timestamps or
//! log lines derive them from the trace at the harness boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::Address;

// ============================================================================
// SECTION: Trace Events
// ============================================================================

/// Lifecycle step recorded by the deployment fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum FixtureEvent {
    /// Fresh deployment was issued to the runtime.
    DeployStarted,
    /// Fresh deployment completed with the observed address.
    DeployCompleted {
        /// Address reported by the runtime, absent for malformed deploys.
        address: Option<Address>,
    },
    /// Group-level resolution was issued to the runtime.
    ResolveStarted,
    /// Group-level resolution completed with the observed address.
    ResolveCompleted {
        /// Address reported by the runtime, absent for malformed deploys.
        address: Option<Address>,
    },
    /// Address assertion passed for the given address.
    AddressAsserted {
        /// Address the assertion observed.
        address: Address,
    },
}

/// Trace record pairing an event with its logical sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Monotonic logical sequence number, starting at zero.
    pub seq: u64,
    /// Recorded lifecycle event.
    pub event: FixtureEvent,
}

// ============================================================================
// SECTION: Trace
// ============================================================================

/// Append-only trace of fixture lifecycle events.
///
/// # Invariants
/// - Sequence numbers are assigned in append order and never reused.
/// - Records are never mutated or removed once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureTrace {
    /// Recorded events in append order.
    records: Vec<TraceRecord>,
}

impl FixtureTrace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends an event, assigning the next sequence number.
    pub fn record(&mut self, event: FixtureEvent) {
        let seq = u64::try_from(self.records.len()).unwrap_or(u64::MAX);
        self.records.push(TraceRecord {
            seq,
            event,
        });
    }

    /// Returns the recorded events in append order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
