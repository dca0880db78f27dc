#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::{CrowdFundingClient, Proposal, ProposalStatus};

/// INV-1: the aggregate escrow must equal the sum of per-funder
/// contributions after every fund/withdraw operation.
pub fn assert_ledger_reconciles(client: &CrowdFundingClient, id: u64, funders: &[Address]) {
    let proposal = client.get_proposal(&id);
    let sum: i128 = funders
        .iter()
        .map(|f| client.get_contribution(&id, f))
        .sum();
    assert_eq!(
        proposal.funds_received, sum,
        "INV-1 violated: proposal {} has funds_received {} but contributions sum to {}",
        id, proposal.funds_received, sum
    );
}

/// INV-2: on the funding/refund path, `Achieved` holds exactly when the
/// escrow covers the goal. (Payout deliberately breaks this pairing by
/// draining the escrow while leaving the status `Achieved`, so only apply
/// this check before any payout.)
pub fn assert_goal_status_consistent(proposal: &Proposal) {
    if proposal.status == ProposalStatus::Cancelled {
        return;
    }
    let achieved = proposal.status == ProposalStatus::Achieved;
    assert_eq!(
        achieved,
        proposal.funds_received >= proposal.funding_goal,
        "INV-2 violated: proposal {} is {:?} with funds_received {} against goal {}",
        proposal.id,
        proposal.status,
        proposal.funds_received,
        proposal.funding_goal
    );
}

/// INV-3 companion: a refund never leaves a negative recorded contribution.
pub fn assert_contribution_non_negative(client: &CrowdFundingClient, id: u64, funder: &Address) {
    let contributed = client.get_contribution(&id, funder);
    assert!(
        contributed >= 0,
        "INV-4 violated: funder contribution for proposal {} is negative ({})",
        id,
        contributed
    );
}

/// INV-5: fields fixed at submission never change afterwards.
pub fn assert_immutable_fields(original: &Proposal, current: &Proposal) {
    assert_eq!(original.id, current.id, "INV-5 violated: proposal id changed");
    assert_eq!(
        original.project_owner, current.project_owner,
        "INV-5 violated: project_owner changed"
    );
    assert_eq!(original.name, current.name, "INV-5 violated: name changed");
    assert_eq!(
        original.funding_goal, current.funding_goal,
        "INV-5 violated: funding_goal changed"
    );
    assert_eq!(
        original.start_time, current.start_time,
        "INV-5 violated: start_time changed"
    );
    assert_eq!(
        original.end_time, current.end_time,
        "INV-5 violated: end_time changed"
    );
}

/// INV-6: proposal IDs are sequential starting from 0.
pub fn assert_sequential_ids(proposals: &[Proposal]) {
    for (i, proposal) in proposals.iter().enumerate() {
        assert_eq!(
            proposal.id, i as u64,
            "INV-6 violated: expected id {}, got {}",
            i, proposal.id
        );
    }
}
