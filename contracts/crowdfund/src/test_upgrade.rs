extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::validation::{BASE_LOGIC_VERSION, STRICT_LOGIC_VERSION};
use crate::{CrowdFunding, CrowdFundingClient, Error, ProposalStatus, MAX_DURATION};

const START_TIME: u64 = 1_000;
const GOAL: i128 = 2_000;

fn setup() -> (Env, CrowdFundingClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdFunding, ());
    let client = CrowdFundingClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone());
    client.init(&admin, &token.address());
    let project_owner = Address::generate(&env);
    client.add_project_owner(&admin, &project_owner);
    (env, client, admin, token.address(), project_owner)
}

#[test]
fn duration_constant_is_30000() {
    let (_env, client, _admin, _token, _project_owner) = setup();
    assert_eq!(client.duration(), 30_000);
    assert_eq!(MAX_DURATION, 30_000);
}

#[test]
fn base_layer_accepts_any_window() {
    let (env, client, _admin, _token, project_owner) = setup();
    assert_eq!(client.logic_version(), BASE_LOGIC_VERSION);

    // End before start and a window far beyond MAX_DURATION: both pass
    // under the base rules.
    let inverted = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Inverted"),
        &GOAL,
        &START_TIME,
        &(START_TIME - 500),
    );
    assert_eq!(inverted.end_time, START_TIME - 500);

    let oversized = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Oversized"),
        &GOAL,
        &START_TIME,
        &(START_TIME + MAX_DURATION + 50_000),
    );
    assert_eq!(oversized.end_time, START_TIME + MAX_DURATION + 50_000);
}

#[test]
fn upgrade_requires_admin() {
    let (env, client, _admin, _token, project_owner) = setup();

    assert_eq!(
        client.try_upgrade(&project_owner),
        Err(Ok(Error::AccessDenied))
    );
    let outsider = Address::generate(&env);
    assert_eq!(client.try_upgrade(&outsider), Err(Ok(Error::AccessDenied)));
}

#[test]
fn upgrade_bumps_logic_version() {
    let (_env, client, admin, _token, _project_owner) = setup();

    assert_eq!(client.logic_version(), BASE_LOGIC_VERSION);
    client.upgrade(&admin);
    assert_eq!(client.logic_version(), STRICT_LOGIC_VERSION);
}

#[test]
fn strict_layer_rejects_inverted_window() {
    let (env, client, admin, _token, project_owner) = setup();
    client.upgrade(&admin);

    assert_eq!(
        client.try_submit_proposal(
            &project_owner,
            &String::from_str(&env, "Inverted"),
            &GOAL,
            &START_TIME,
            &(START_TIME - 500),
        ),
        Err(Ok(Error::InvalidTimeRange))
    );
}

#[test]
fn strict_layer_rejects_zero_length_window() {
    let (env, client, admin, _token, project_owner) = setup();
    client.upgrade(&admin);

    assert_eq!(
        client.try_submit_proposal(
            &project_owner,
            &String::from_str(&env, "Empty"),
            &GOAL,
            &START_TIME,
            &START_TIME,
        ),
        Err(Ok(Error::InvalidTimeRange))
    );
}

#[test]
fn strict_layer_rejects_overlong_window() {
    let (env, client, admin, _token, project_owner) = setup();
    client.upgrade(&admin);

    assert_eq!(
        client.try_submit_proposal(
            &project_owner,
            &String::from_str(&env, "Too long"),
            &GOAL,
            &START_TIME,
            &(START_TIME + MAX_DURATION + 1),
        ),
        Err(Ok(Error::InvalidDuration))
    );
}

#[test]
fn strict_layer_accepts_max_duration_window() {
    let (env, client, admin, _token, project_owner) = setup();
    client.upgrade(&admin);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Exactly max"),
        &GOAL,
        &START_TIME,
        &(START_TIME + MAX_DURATION),
    );
    assert_eq!(proposal.start_time, START_TIME);
    assert_eq!(proposal.end_time, START_TIME + MAX_DURATION);
    assert_eq!(proposal.status, ProposalStatus::Initiated);
}

/// Campaigns stored before the upgrade keep their exact values and stay
/// fully operable afterwards, even when their window would no longer pass
/// the strict submit-time rules.
#[test]
fn pre_upgrade_proposals_survive_upgrade_untouched() {
    let (env, client, admin, token, project_owner) = setup();

    // Legal only under the base rules.
    let end_time = START_TIME + MAX_DURATION + 10_000;
    let before = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Legacy"),
        &GOAL,
        &START_TIME,
        &end_time,
    );

    client.upgrade(&admin);

    // Identical queryable values post-upgrade.
    let after = client.get_proposal(&before.id);
    assert_eq!(before, after);

    // And the legacy campaign still accepts funding inside its window.
    let funder = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&funder, &GOAL);
    env.ledger().with_mut(|li| li.timestamp = START_TIME + 1);
    client.fund_proposal(&before.id, &funder, &GOAL);
    assert_eq!(
        client.get_proposal(&before.id).status,
        ProposalStatus::Achieved
    );
}
