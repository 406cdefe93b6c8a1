// Approve instruction
use anchor_lang::prelude::*;
use crate::{
    errors::MultisigError,
    events::ProposalApproved,
    state::{Multisig, Proposal},
};

/// Approve a proposal on behalf of one owner
pub fn approve(ctx: Context<Approve>) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let proposal_key = ctx.accounts.proposal.key();
    let owner = ctx.accounts.owner.key();

    let multisig = &ctx.accounts.multisig;
    let proposal = &mut ctx.accounts.proposal;
    proposal.record_approval(owner, &multisig.owners)?;
    let live_approvals = proposal.live_approvals(&multisig.owners);

    msg!(
        "Owner {} approved proposal {} ({} of {} required)",
        owner,
        proposal_key,
        live_approvals,
        multisig.threshold
    );

    emit!(ProposalApproved {
        multisig: multisig_key,
        proposal: proposal_key,
        owner,
        live_approvals,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Approve<'info> {
    pub multisig: Account<'info, Multisig>,

    #[account(mut, has_one = multisig @ MultisigError::RegistryMismatch)]
    pub proposal: Account<'info, Proposal>,

    /// One of the multisig owners, checked in the handler
    pub owner: Signer<'info>,
}
