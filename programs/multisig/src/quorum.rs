// Approval tracking and quorum evaluation
//
// Approvals are stored as owner identities on the proposal and are always
// counted against the owner set read at execution time. An approval from an
// identity that governance has since removed stays on the record but no
// longer counts. Counts are never cached on the proposal.
use anchor_lang::prelude::*;

/// Number of recorded approvals that belong to a current owner
#[must_use]
pub fn live_approvals(approvals: &[Pubkey], owners: &[Pubkey]) -> u64 {
    approvals
        .iter()
        .filter(|approver| owners.contains(approver))
        .count() as u64
}

/// Whether the live approvals satisfy the threshold
#[must_use]
pub const fn meets_threshold(live_approvals: u64, threshold: u64) -> bool {
    live_approvals >= threshold
}

/// Drop approvals from identities that are no longer owners.
///
/// Only used to make room when the approval list is full; the dropped
/// entries contribute nothing to `live_approvals` under `owners`.
/// Returns the number of approvals removed.
pub fn prune_stale(approvals: &mut Vec<Pubkey>, owners: &[Pubkey]) -> usize {
    let before = approvals.len();
    approvals.retain(|approver| owners.contains(approver));
    before - approvals.len()
}
