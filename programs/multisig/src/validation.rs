// Input validation for registry and proposal parameters
//
// Owner lists and thresholds arrive from untrusted instruction data, both at
// creation and through governance. The registry invariants
// (non-empty unique owners, 1 <= threshold <= owners) are enforced here so
// every entrypoint applies exactly the same rules.
use crate::{
    errors::MultisigError,
    state::ProposalAccount,
    MAX_OWNERS, MAX_PAYLOAD_SIZE, MAX_TARGET_ACCOUNTS,
};
use anchor_lang::prelude::*;
use std::collections::HashSet;

/// Validate an owner set: non-empty, bounded and free of duplicates
pub fn validate_owners(owners: &[Pubkey]) -> Result<()> {
    require!(
        !owners.is_empty() && owners.len() <= MAX_OWNERS,
        MultisigError::InvalidOwners
    );

    let mut seen = HashSet::with_capacity(owners.len());
    for owner in owners {
        require!(seen.insert(owner), MultisigError::InvalidOwners);
    }
    Ok(())
}

/// Validate a threshold against the number of owners it applies to
pub fn validate_threshold(threshold: u64, owner_count: usize) -> Result<()> {
    require!(
        threshold >= 1 && threshold <= owner_count as u64,
        MultisigError::InvalidThreshold
    );
    Ok(())
}

/// Validate the instruction a proposal carries fits within the proposal limits
pub fn validate_proposal_size(accounts: &[ProposalAccount], payload: &[u8]) -> Result<()> {
    require!(
        accounts.len() <= MAX_TARGET_ACCOUNTS && payload.len() <= MAX_PAYLOAD_SIZE,
        MultisigError::ProposalTooLarge
    );
    Ok(())
}
