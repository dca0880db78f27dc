//! # Validation
//!
//! The additive validation layer introduced by the in-place logic upgrade.
//!
//! Version 1 (the base layer) accepts any `(start_time, end_time)` pair.
//! Version 2 adds two submit-time rules:
//!
//! - `end_time > start_time`, otherwise `InvalidTimeRange`;
//! - `end_time - start_time <= MAX_DURATION`, otherwise `InvalidDuration`.
//!
//! The rules are pure functions layered on the write path and gated by the
//! stored [`storage::get_logic_version`] flag. Nothing here touches stored
//! campaign records: proposals submitted under version 1 keep their exact
//! stored values and remain fully operable after the upgrade.

use soroban_sdk::{panic_with_error, Env};

use crate::storage;
use crate::Error;

/// Validation rules as originally deployed.
pub const BASE_LOGIC_VERSION: u32 = 1;

/// Validation rules after the upgrade.
pub const STRICT_LOGIC_VERSION: u32 = 2;

/// Longest permitted campaign window (in ledger seconds), enforced from
/// [`STRICT_LOGIC_VERSION`] onward.
pub const MAX_DURATION: u64 = 30_000;

/// True once the strict submit-time rules are active.
pub fn strict_rules_active(env: &Env) -> bool {
    storage::get_logic_version(env) >= STRICT_LOGIC_VERSION
}

/// Check a campaign window against the rules of the active logic version.
///
/// A no-op under the base version; aborts with `InvalidTimeRange` or
/// `InvalidDuration` under the strict version.
pub fn validate_schedule(env: &Env, start_time: u64, end_time: u64) {
    if !strict_rules_active(env) {
        return;
    }
    if end_time <= start_time {
        panic_with_error!(env, Error::InvalidTimeRange);
    }
    if end_time - start_time > MAX_DURATION {
        panic_with_error!(env, Error::InvalidDuration);
    }
}
