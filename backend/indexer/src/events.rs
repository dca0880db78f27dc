//! Canonical event types emitted by the Crowdfund protocol contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfund/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the Crowdfund contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign proposal was submitted (`submitted` topic).
    ProposalSubmitted,
    /// A contribution was escrowed (`funded` topic).
    ProposalFunded,
    /// A funder took their full refund (`withdrawn` topic).
    FundsWithdrawn,
    /// A campaign was cancelled (`cancelled` topic).
    ProposalCancelled,
    /// An achieved campaign's escrow was paid out (`paid_out` topic).
    FundsTransferred,
    /// An account was granted the project-owner role (`owner_add` topic).
    ProjectOwnerAdded,
    /// The administrator role changed hands (`adm_xfer` topic).
    AdminTransferred,
    /// The strict validation layer was activated (`upgraded` topic).
    LogicUpgraded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "submitted" => Self::ProposalSubmitted,
            "funded" => Self::ProposalFunded,
            "withdrawn" => Self::FundsWithdrawn,
            "cancelled" => Self::ProposalCancelled,
            "paid_out" => Self::FundsTransferred,
            "owner_add" => Self::ProjectOwnerAdded,
            "adm_xfer" => Self::AdminTransferred,
            "upgraded" => Self::LogicUpgraded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProposalSubmitted => "proposal_submitted",
            Self::ProposalFunded => "proposal_funded",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::ProposalCancelled => "proposal_cancelled",
            Self::FundsTransferred => "funds_transferred",
            Self::ProjectOwnerAdded => "project_owner_added",
            Self::AdminTransferred => "admin_transferred",
            Self::LogicUpgraded => "logic_upgraded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded Crowdfund event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundEvent {
    pub event_type: String,
    pub proposal_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub proposal_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
