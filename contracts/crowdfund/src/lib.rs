//! # Crowdfund Protocol Contract
//!
//! Root crate of the **Crowdfund Protocol**. It exposes the single Soroban
//! contract `CrowdFunding` whose entry points cover the full campaign
//! lifecycle:
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Bootstrap    | [`CrowdFunding::init`]                                |
//! | Role admin   | `add_project_owner`, `transfer_admin`                 |
//! | Submission   | [`CrowdFunding::submit_proposal`]                     |
//! | Funding      | [`CrowdFunding::fund_proposal`]                       |
//! | Refunds      | [`CrowdFunding::withdraw_funds`]                      |
//! | Cancellation | [`CrowdFunding::cancel_proposal`]                     |
//! | Payout       | [`CrowdFunding::payout_to_project_owner`]             |
//! | Upgrade      | [`CrowdFunding::upgrade`]                             |
//! | Queries      | `get_proposal`, `get_contribution`, `is_project_owner`, `admin`, `duration`, `logic_version` |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`roles`]. Storage access is fully
//! delegated to [`storage`]. Event payloads live in [`events`], and the
//! upgrade-gated submit-time checks in [`validation`]. This file contains
//! **only** the public entry points and their guard sequences.
//!
//! Every guard failure aborts the whole invocation via `panic_with_error!`,
//! so a rejected operation never commits partial state.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};

mod storage;
mod types;
pub mod events;
pub mod roles;
pub mod validation;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_upgrade;

use storage::{
    get_and_increment_proposal_id, get_contribution, get_token, load_proposal,
    load_proposal_config, load_proposal_state, save_proposal, save_proposal_state,
    set_contribution, set_token,
};
pub use types::{Proposal, ProposalConfig, ProposalState, ProposalStatus};
pub use validation::MAX_DURATION;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    AccessDenied       = 2,
    InvalidProposal    = 3,
    CampaignNotStarted = 4,
    CampaignEnded      = 5,
    CampaignInactive   = 6,
    CampaignNotEnded   = 7,
    NoContribution     = 8,
    GoalNotAchieved    = 9,
    NotCampaignOwner   = 10,
    InvalidAmount      = 11,
    // Strict validation layer only:
    InvalidTimeRange   = 12,
    InvalidDuration    = 13,
}

#[contract]
pub struct CrowdFunding;

#[contractimpl]
impl CrowdFunding {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its administrator and escrow token.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls abort with `Error::AlreadyInitialized`.
    ///
    /// - `admin` must sign; it becomes the sole role-granting authority.
    /// - `token` is the fungible-token contract all campaigns escrow in.
    pub fn init(env: Env, admin: Address, token: Address) {
        admin.require_auth();
        roles::init_admin(&env, &admin);
        set_token(&env, &token);
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Hand the administrator role to `new_admin`.
    ///
    /// - `caller` must authorize and be the current administrator.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) {
        caller.require_auth();
        roles::transfer_admin(&env, &caller, &new_admin);
        events::admin_transferred(&env, &caller, &new_admin);
    }

    /// Grant the project-owner role to `account`.
    ///
    /// - `caller` must authorize and be the administrator.
    /// - Granting an existing member again is a silent overwrite.
    pub fn add_project_owner(env: Env, caller: Address, account: Address) {
        caller.require_auth();
        roles::add_project_owner(&env, &caller, &account);
        events::project_owner_added(&env, &account);
    }

    /// Return `true` if `account` holds the project-owner role.
    pub fn is_project_owner(env: Env, account: Address) -> bool {
        roles::is_project_owner(&env, &account)
    }

    /// The current administrator.
    pub fn admin(env: Env) -> Address {
        roles::get_admin(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Submit a new funding campaign.
    ///
    /// - `caller` must authorize and hold the project-owner role.
    /// - `funding_goal` must be positive.
    /// - Under the strict validation layer (post-[`CrowdFunding::upgrade`]):
    ///   `end_time > start_time` and the window may not exceed
    ///   [`MAX_DURATION`]. The base layer accepts any window.
    ///
    /// The window may lie arbitrarily in the future; there is no ordering
    /// requirement against the current ledger time.
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        name: String,
        funding_goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Proposal {
        caller.require_auth();
        roles::require_project_owner(&env, &caller);

        if funding_goal <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        validation::validate_schedule(&env, start_time, end_time);

        let id = get_and_increment_proposal_id(&env);

        let proposal = Proposal {
            id,
            project_owner: caller.clone(),
            name,
            funding_goal,
            start_time,
            end_time,
            status: ProposalStatus::Initiated,
            funds_received: 0,
        };

        save_proposal(&env, &proposal);
        events::proposal_submitted(&env, id, &caller, funding_goal);
        proposal
    }

    /// Contribute `amount` escrow tokens to a campaign.
    ///
    /// Open to any account; repeated contributions accumulate. Rejected with
    /// `CampaignInactive` once the goal is achieved (no over-funding) or the
    /// campaign is cancelled. The token pull aborts the whole invocation if
    /// the funder's balance is insufficient.
    pub fn fund_proposal(env: Env, id: u64, funder: Address, amount: i128) {
        funder.require_auth();

        let config = load_proposal_config(&env, id);
        let mut state = load_proposal_state(&env, id);

        let now = env.ledger().timestamp();
        if now < config.start_time {
            panic_with_error!(&env, Error::CampaignNotStarted);
        }
        if now > config.end_time {
            panic_with_error!(&env, Error::CampaignEnded);
        }
        if state.status != ProposalStatus::Initiated {
            panic_with_error!(&env, Error::CampaignInactive);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        // Pull tokens from the funder into contract escrow.
        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&funder, &env.current_contract_address(), &amount);

        let contributed = get_contribution(&env, id, &funder);
        set_contribution(&env, id, &funder, contributed + amount);

        state.funds_received += amount;
        if state.funds_received >= config.funding_goal {
            state.status = ProposalStatus::Achieved;
        }
        save_proposal_state(&env, id, &state);

        events::proposal_funded(&env, id, &funder, amount);
    }

    /// Refund the caller's entire recorded contribution.
    ///
    /// Permitted while the campaign window is still open, regardless of
    /// status. If the refund drops the total below the goal, an `Achieved`
    /// campaign reverts to `Initiated` — achievement is not sticky.
    pub fn withdraw_funds(env: Env, id: u64, funder: Address) {
        funder.require_auth();

        let config = load_proposal_config(&env, id);
        let mut state = load_proposal_state(&env, id);

        let now = env.ledger().timestamp();
        if now > config.end_time {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        let contributed = get_contribution(&env, id, &funder);
        if contributed == 0 {
            panic_with_error!(&env, Error::NoContribution);
        }

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &funder, &contributed);

        set_contribution(&env, id, &funder, 0);

        state.funds_received -= contributed;
        if state.status == ProposalStatus::Achieved && state.funds_received < config.funding_goal {
            state.status = ProposalStatus::Initiated;
        }
        save_proposal_state(&env, id, &state);

        events::funds_withdrawn(&env, id, &funder, contributed);
    }

    /// Cancel a campaign.
    ///
    /// - `caller` must authorize and be the administrator or this
    ///   proposal's owner.
    /// - No time restriction: before, during or after the window.
    /// - Sets `Cancelled` unconditionally. Outstanding contributions stay
    ///   in escrow; funders recover them via `withdraw_funds` while the
    ///   window is open.
    pub fn cancel_proposal(env: Env, id: u64, caller: Address) {
        caller.require_auth();

        let config = load_proposal_config(&env, id);
        roles::require_admin_or_proposal_owner(&env, &caller, &config.project_owner);

        let mut state = load_proposal_state(&env, id);
        state.status = ProposalStatus::Cancelled;
        save_proposal_state(&env, id, &state);

        events::proposal_cancelled(&env, id, &caller);
    }

    /// Transfer the escrowed funds of an achieved, ended campaign to its
    /// project owner.
    ///
    /// - `caller` must authorize, hold the project-owner role, and own this
    ///   specific proposal.
    /// - Only after the window closed (`CampaignNotEnded` otherwise) and
    ///   only while `Achieved` (`GoalNotAchieved` otherwise).
    ///
    /// Drains `funds_received` to 0; a second call transfers 0, so payout
    /// is idempotent without a dedicated completed state. Per-funder
    /// contribution entries are left intact — the closed window already
    /// blocks `withdraw_funds` against the drained escrow.
    pub fn payout_to_project_owner(env: Env, id: u64, caller: Address) {
        caller.require_auth();

        let config = load_proposal_config(&env, id);
        roles::require_project_owner(&env, &caller);
        if caller != config.project_owner {
            panic_with_error!(&env, Error::NotCampaignOwner);
        }

        let now = env.ledger().timestamp();
        if now <= config.end_time {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }

        let mut state = load_proposal_state(&env, id);
        if state.status != ProposalStatus::Achieved {
            panic_with_error!(&env, Error::GoalNotAchieved);
        }

        let amount = state.funds_received;
        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        state.funds_received = 0;
        save_proposal_state(&env, id, &state);

        events::funds_transferred(&env, id, &caller, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Upgrade
    // ─────────────────────────────────────────────────────────

    /// Activate the strict validation layer.
    ///
    /// - `caller` must authorize and be the administrator.
    ///
    /// Bumps the stored logic version so `submit_proposal` enforces the
    /// time-range and max-duration rules. Stored campaigns are not touched:
    /// proposals submitted before the upgrade keep their exact values and
    /// every other operation treats them identically.
    pub fn upgrade(env: Env, caller: Address) {
        caller.require_auth();
        roles::require_admin(&env, &caller);
        storage::set_logic_version(&env, validation::STRICT_LOGIC_VERSION);
        events::logic_upgraded(&env, validation::STRICT_LOGIC_VERSION);
    }

    /// The active validation-layer version (1 = base, 2 = strict).
    pub fn logic_version(env: Env) -> u32 {
        storage::get_logic_version(&env)
    }

    /// The maximum campaign duration enforced by the strict layer.
    pub fn duration(_env: Env) -> u64 {
        MAX_DURATION
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a campaign by its ID.
    pub fn get_proposal(env: Env, id: u64) -> Proposal {
        load_proposal(&env, id)
    }

    /// One funder's currently escrowed contribution to a campaign.
    pub fn get_contribution(env: Env, id: u64, funder: Address) -> i128 {
        get_contribution(&env, id, &funder)
    }
}
