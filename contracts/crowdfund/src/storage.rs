//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the protocol:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                     | Type      | Description                         |
//! |-------------------------|-----------|-------------------------------------|
//! | `Admin`                 | `Address` | Contract administrator              |
//! | `Token`                 | `Address` | Escrow token contract address       |
//! | `ProposalCount`         | `u64`     | Auto-increment proposal ID counter  |
//! | `LogicVersion`          | `u32`     | Active validation-layer version     |
//! | `ProjectOwner(Address)` | `bool`    | Project-owner role membership       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                       | Type             | Description                     |
//! |---------------------------|------------------|---------------------------------|
//! | `PropConfig(id)`          | `ProposalConfig` | Immutable campaign parameters   |
//! | `PropState(id)`           | `ProposalState`  | Mutable campaign state          |
//! | `Contribution(id, addr)`  | `i128`           | One funder's escrowed amount    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Why split Config and State?
//!
//! Funding and refunds are the high-frequency writes. Writing the full
//! `Proposal` struct on every contribution is wasteful; `ProposalState` is a
//! handful of bytes, and each funder's running total lives in its own
//! `Contribution` entry so concurrent funders never rewrite each other's
//! records. The public API stays clean via the reconstructed [`Proposal`].

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{Proposal, ProposalConfig, ProposalState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys live as long as the contract and are extended
/// together. Persistent-tier keys hold per-campaign data with independent
/// TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract administrator (Instance).
    Admin,
    /// Escrow token contract address (Instance).
    Token,
    /// Global auto-increment counter for proposal IDs (Instance).
    ProposalCount,
    /// Active validation-layer version, absent means v1 (Instance).
    LogicVersion,
    /// Project-owner role membership flag (Instance).
    ProjectOwner(Address),
    /// Immutable campaign configuration keyed by ID (Persistent).
    PropConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    PropState(u64),
    /// A single funder's escrowed amount for one campaign (Persistent).
    Contribution(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// True once `init` has stored the administrator.
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the administrator address.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Retrieve the administrator address.
/// Aborts with `AccessDenied` if the contract was never initialised.
pub fn get_admin(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Admin) {
        Some(admin) => admin,
        None => panic_with_error!(env, Error::AccessDenied),
    }
}

/// Store the escrow token contract address.
pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Retrieve the escrow token contract address.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Token) {
        Some(token) => token,
        None => panic_with_error!(env, Error::AccessDenied),
    }
}

/// Atomically reads, increments, and stores the proposal counter.
/// Returns the ID to use for the *current* proposal (pre-increment value).
pub fn get_and_increment_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(current + 1));
    current
}

/// Record `account` as a project owner. Overwrites silently.
pub fn add_project_owner(env: &Env, account: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::ProjectOwner(account.clone()), &true);
    bump_instance(env);
}

/// True if `account` has been granted the project-owner role.
pub fn is_project_owner(env: &Env, account: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ProjectOwner(account.clone()))
        .unwrap_or(false)
}

/// Active validation-layer version; 1 until `upgrade` is called.
pub fn get_logic_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::LogicVersion)
        .unwrap_or(crate::validation::BASE_LOGIC_VERSION)
}

/// Persist a new validation-layer version.
pub fn set_logic_version(env: &Env, version: u32) {
    env.storage()
        .instance()
        .set(&DataKey::LogicVersion, &version);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let config_key = DataKey::PropConfig(proposal.id);
    let state_key = DataKey::PropState(proposal.id);

    let config = ProposalConfig {
        id: proposal.id,
        project_owner: proposal.project_owner.clone(),
        name: proposal.name.clone(),
        funding_goal: proposal.funding_goal,
        start_time: proposal.start_time,
        end_time: proposal.end_time,
    };

    let state = ProposalState {
        status: proposal.status.clone(),
        funds_received: proposal.funds_received,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Proposal` by combining config and state.
/// Aborts with `InvalidProposal` if the ID is unknown.
pub fn load_proposal(env: &Env, id: u64) -> Proposal {
    let config = load_proposal_config(env, id);
    let state = load_proposal_state(env, id);
    Proposal {
        id: config.id,
        project_owner: config.project_owner,
        name: config.name,
        funding_goal: config.funding_goal,
        start_time: config.start_time,
        end_time: config.end_time,
        status: state.status,
        funds_received: state.funds_received,
    }
}

/// Load only the immutable campaign configuration.
/// Aborts with `InvalidProposal` if the ID is unknown.
pub fn load_proposal_config(env: &Env, id: u64) -> ProposalConfig {
    let key = DataKey::PropConfig(id);
    let config: ProposalConfig = match env.storage().persistent().get(&key) {
        Some(config) => config,
        None => panic_with_error!(env, Error::InvalidProposal),
    };
    bump_persistent(env, &key);
    config
}

/// Load only the mutable campaign state.
/// Aborts with `InvalidProposal` if the ID is unknown.
pub fn load_proposal_state(env: &Env, id: u64) -> ProposalState {
    let key = DataKey::PropState(id);
    let state: ProposalState = match env.storage().persistent().get(&key) {
        Some(state) => state,
        None => panic_with_error!(env, Error::InvalidProposal),
    };
    bump_persistent(env, &key);
    state
}

/// Save only the mutable campaign state (the high-frequency write).
pub fn save_proposal_state(env: &Env, id: u64, state: &ProposalState) {
    let key = DataKey::PropState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Read one funder's recorded contribution; 0 when they never funded.
pub fn get_contribution(env: &Env, id: u64, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(id, funder.clone()))
        .unwrap_or(0)
}

/// Overwrite one funder's recorded contribution.
pub fn set_contribution(env: &Env, id: u64, funder: &Address, amount: i128) {
    let key = DataKey::Contribution(id, funder.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
