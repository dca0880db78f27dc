//! # Events
//!
//! Domain events published by the contract. Topics follow the protocol
//! convention `(Symbol, proposal_id)` where a campaign is involved, with a
//! `#[contracttype]` struct as the data payload so off-chain consumers (the
//! indexer) can decode fields by name.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Data for the `owner_add` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectOwnerAdded {
    pub account: Address,
}

/// Data for the `adm_xfer` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    pub previous_admin: Address,
    pub new_admin: Address,
}

/// Data for the `submitted` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSubmitted {
    pub proposal_id: u64,
    pub project_owner: Address,
    pub funding_goal: i128,
}

/// Data for the `funded` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalFunded {
    pub proposal_id: u64,
    pub funder: Address,
    pub amount: i128,
}

/// Data for the `withdrawn` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub proposal_id: u64,
    pub funder: Address,
    pub amount: i128,
}

/// Data for the `cancelled` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCancelled {
    pub proposal_id: u64,
    pub caller: Address,
}

/// Data for the `paid_out` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsTransferred {
    pub proposal_id: u64,
    pub caller: Address,
    pub amount: i128,
}

/// Data for the `upgraded` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicUpgraded {
    pub version: u32,
}

pub fn project_owner_added(env: &Env, account: &Address) {
    env.events().publish(
        (symbol_short!("owner_add"),),
        ProjectOwnerAdded {
            account: account.clone(),
        },
    );
}

pub fn admin_transferred(env: &Env, previous_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"),),
        AdminTransferred {
            previous_admin: previous_admin.clone(),
            new_admin: new_admin.clone(),
        },
    );
}

pub fn proposal_submitted(env: &Env, id: u64, project_owner: &Address, funding_goal: i128) {
    env.events().publish(
        (symbol_short!("submitted"), id),
        ProposalSubmitted {
            proposal_id: id,
            project_owner: project_owner.clone(),
            funding_goal,
        },
    );
}

pub fn proposal_funded(env: &Env, id: u64, funder: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funded"), id),
        ProposalFunded {
            proposal_id: id,
            funder: funder.clone(),
            amount,
        },
    );
}

pub fn funds_withdrawn(env: &Env, id: u64, funder: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), id),
        FundsWithdrawn {
            proposal_id: id,
            funder: funder.clone(),
            amount,
        },
    );
}

pub fn proposal_cancelled(env: &Env, id: u64, caller: &Address) {
    env.events().publish(
        (symbol_short!("cancelled"), id),
        ProposalCancelled {
            proposal_id: id,
            caller: caller.clone(),
        },
    );
}

pub fn funds_transferred(env: &Env, id: u64, caller: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("paid_out"), id),
        FundsTransferred {
            proposal_id: id,
            caller: caller.clone(),
            amount,
        },
    );
}

pub fn logic_upgraded(env: &Env, version: u32) {
    env.events()
        .publish((symbol_short!("upgraded"),), LogicUpgraded { version });
}
