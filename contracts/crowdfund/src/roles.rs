//! # Roles
//!
//! Role registry for the two capabilities the protocol distinguishes:
//!
//! - **Administrator** — a single account, set once at `init` and
//!   transferable. Gates role grants, cancellation, and the logic upgrade.
//! - **Project owner** — a set of accounts allowed to submit proposals and
//!   collect payouts. Granted only by the administrator, never revoked.
//!
//! Holding the project-owner role and owning a *specific* proposal are
//! distinct checks: [`require_project_owner`] answers the first, the
//! caller-vs-`ProposalConfig::project_owner` comparison in the entry points
//! answers the second.
//!
//! All functions take the already-authenticated caller; `require_auth` stays
//! in the entry points.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage;
use crate::Error;

/// Store the first administrator. Aborts with `AlreadyInitialized` when an
/// administrator is already present.
pub fn init_admin(env: &Env, admin: &Address) {
    if storage::has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
}

/// The current administrator.
pub fn get_admin(env: &Env) -> Address {
    storage::get_admin(env)
}

/// Abort with `AccessDenied` unless `caller` is the administrator.
pub fn require_admin(env: &Env, caller: &Address) {
    if *caller != storage::get_admin(env) {
        panic_with_error!(env, Error::AccessDenied);
    }
}

/// Hand the administrator role to `new_admin`. The previous administrator
/// loses it immediately.
pub fn transfer_admin(env: &Env, caller: &Address, new_admin: &Address) {
    require_admin(env, caller);
    storage::set_admin(env, new_admin);
}

/// Grant the project-owner role to `account`. Administrator only.
/// No duplicate check: granting an existing member is a silent overwrite.
pub fn add_project_owner(env: &Env, caller: &Address, account: &Address) {
    require_admin(env, caller);
    storage::add_project_owner(env, account);
}

/// True if `account` holds the project-owner role. Pure read.
pub fn is_project_owner(env: &Env, account: &Address) -> bool {
    storage::is_project_owner(env, account)
}

/// Abort with `AccessDenied` unless `caller` holds the project-owner role.
pub fn require_project_owner(env: &Env, caller: &Address) {
    if !storage::is_project_owner(env, caller) {
        panic_with_error!(env, Error::AccessDenied);
    }
}

/// Abort with `AccessDenied` unless `caller` is the administrator or the
/// owner of this specific proposal. Used by cancellation.
pub fn require_admin_or_proposal_owner(env: &Env, caller: &Address, proposal_owner: &Address) {
    if *caller != storage::get_admin(env) && caller != proposal_owner {
        panic_with_error!(env, Error::AccessDenied);
    }
}
