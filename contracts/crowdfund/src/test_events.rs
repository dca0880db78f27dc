extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    FundsTransferred, FundsWithdrawn, ProjectOwnerAdded, ProposalCancelled, ProposalFunded,
    ProposalSubmitted,
};
use crate::{CrowdFunding, CrowdFundingClient};

const START_TIME: u64 = 1_000;
const END_TIME: u64 = 2_000;
const GOAL: i128 = 2_000;

fn setup() -> (Env, CrowdFundingClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdFunding, ());
    let client = CrowdFundingClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone());
    client.init(&admin, &token.address());
    (env, client, admin, token.address())
}

fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

#[test]
fn test_project_owner_added_event() {
    let (env, client, admin, _token) = setup();
    let account = Address::generate(&env);

    client.add_project_owner(&admin, &account);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("owner_add"),)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("owner_add").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectOwnerAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, ProjectOwnerAdded { account });
}

#[test]
fn test_proposal_submitted_event() {
    let (env, client, admin, _token) = setup();
    let project_owner = Address::generate(&env);
    client.add_project_owner(&admin, &project_owner);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Project A"),
        &GOAL,
        &START_TIME,
        &END_TIME,
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("submitted"), proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("submitted").into_val(&env),
        proposal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalSubmitted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalSubmitted {
            proposal_id: proposal.id,
            project_owner: project_owner.clone(),
            funding_goal: GOAL,
        }
    );
}

#[test]
fn test_proposal_funded_event() {
    let (env, client, admin, token) = setup();
    let project_owner = Address::generate(&env);
    let funder = Address::generate(&env);
    let amount = 1_000i128;
    client.add_project_owner(&admin, &project_owner);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Project A"),
        &GOAL,
        &START_TIME,
        &END_TIME,
    );

    mint(&env, &token, &funder, amount);
    env.ledger().with_mut(|li| li.timestamp = START_TIME + 1);
    client.fund_proposal(&proposal.id, &funder, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        proposal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalFunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalFunded {
            proposal_id: proposal.id,
            funder: funder.clone(),
            amount,
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client, admin, token) = setup();
    let project_owner = Address::generate(&env);
    let funder = Address::generate(&env);
    let amount = 1_000i128;
    client.add_project_owner(&admin, &project_owner);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Project A"),
        &GOAL,
        &START_TIME,
        &END_TIME,
    );

    mint(&env, &token, &funder, amount);
    env.ledger().with_mut(|li| li.timestamp = START_TIME + 1);
    client.fund_proposal(&proposal.id, &funder, &amount);
    client.withdraw_funds(&proposal.id, &funder);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdrawn"), proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        proposal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            proposal_id: proposal.id,
            funder: funder.clone(),
            amount,
        }
    );
}

#[test]
fn test_proposal_cancelled_event() {
    let (env, client, admin, _token) = setup();
    let project_owner = Address::generate(&env);
    client.add_project_owner(&admin, &project_owner);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Project A"),
        &GOAL,
        &START_TIME,
        &END_TIME,
    );

    client.cancel_proposal(&proposal.id, &admin);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("cancelled"), proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("cancelled").into_val(&env),
        proposal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalCancelled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalCancelled {
            proposal_id: proposal.id,
            caller: admin.clone(),
        }
    );
}

/// Integration: payout emits `paid_out` and actually moves the escrow.
#[test]
fn test_funds_transferred_event() {
    let (env, client, admin, token) = setup();
    let project_owner = Address::generate(&env);
    let funder = Address::generate(&env);
    client.add_project_owner(&admin, &project_owner);

    let proposal = client.submit_proposal(
        &project_owner,
        &String::from_str(&env, "Project A"),
        &GOAL,
        &START_TIME,
        &END_TIME,
    );

    mint(&env, &token, &funder, GOAL);
    env.ledger().with_mut(|li| li.timestamp = START_TIME + 1);
    client.fund_proposal(&proposal.id, &funder, &GOAL);

    env.ledger().with_mut(|li| li.timestamp = END_TIME + 1);
    client.payout_to_project_owner(&proposal.id, &project_owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("paid_out"), proposal_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("paid_out").into_val(&env),
        proposal.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsTransferred = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsTransferred {
            proposal_id: proposal.id,
            caller: project_owner.clone(),
            amount: GOAL,
        }
    );

    let owner_balance = token::Client::new(&env, &token).balance(&project_owner);
    assert_eq!(owner_balance, GOAL, "Project owner should receive the escrow");
    let contract_balance = token::Client::new(&env, &token).balance(&client.address);
    assert_eq!(contract_balance, 0, "Contract should hold nothing after payout");
}
