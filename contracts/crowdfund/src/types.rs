//! # Types
//!
//! Shared data structures of the Crowdfund protocol.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Proposal` is internally stored as two separate ledger entries:
//!
//! - [`ProposalConfig`] — written once at submission; never mutated.
//! - [`ProposalState`] — written on every fund, withdrawal and payout.
//!
//! Per-funder contributions live in their own keyed entries (see
//! `storage::DataKey::Contribution`), so a funding write never touches
//! another funder's record and each funder stays individually reconcilable.
//! The public API exposes the reconstructed [`Proposal`] struct.
//!
//! The split also pins down the upgrade guarantee: the logic upgrade only
//! adds submit-time validation; it never reorders or resizes either stored
//! record, so proposals written before the upgrade read back unchanged.
//!
//! ### Status as a state machine
//!
//! [`ProposalStatus`] transitions:
//!
//! ```text
//! Initiated ──► Achieved      (funds_received >= funding_goal)
//! Achieved  ──► Initiated     (refund drops the total below the goal)
//! Initiated ──► Cancelled     (explicit cancel)
//! Achieved  ──► Cancelled     (explicit cancel)
//! ```
//!
//! `Cancelled` is terminal for the funding path. `Achieved` is not sticky:
//! a full refund before the campaign ends reverses it. Payout drains the
//! escrow but leaves the status at `Achieved`.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a funding campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Accepting contributions within the campaign window.
    Initiated,
    /// Funding goal reached; further contributions are rejected.
    Achieved,
    /// Explicitly cancelled by the admin or the proposal's owner.
    Cancelled,
    /// Campaign ended below goal. Declared for the domain vocabulary;
    /// no operation currently produces it.
    Failed,
}

/// Immutable campaign configuration, written once at submission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalConfig {
    pub id: u64,
    pub project_owner: Address,
    pub name: String,
    pub funding_goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Mutable campaign state, updated on funding, refunds and payout.
///
/// Kept small so the high-frequency writes (funding) stay cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalState {
    pub status: ProposalStatus,
    pub funds_received: i128,
}

/// Full representation of a funding campaign.
///
/// Public API return type; reconstructed from the split
/// `ProposalConfig` + `ProposalState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Unique identifier (auto-incremented, first id is 0).
    pub id: u64,
    /// Account that submitted the proposal and receives the payout.
    pub project_owner: Address,
    /// Display name of the campaign.
    pub name: String,
    /// Target amount of escrow tokens.
    pub funding_goal: i128,
    /// Ledger timestamp at which funding opens.
    pub start_time: u64,
    /// Ledger timestamp after which funding and refunds close.
    pub end_time: u64,
    /// Current lifecycle status.
    pub status: ProposalStatus,
    /// Total escrowed amount; always the sum of per-funder contributions.
    pub funds_received: i128,
}
