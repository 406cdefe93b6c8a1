// Create proposal instruction
use anchor_lang::prelude::*;
use crate::{
    errors::MultisigError,
    events::ProposalCreated,
    state::{Multisig, Proposal, ProposalAccount},
    validation,
};

/// Propose an instruction for the multisig signer to execute.
///
/// The payload is stored as opaque bytes and never interpreted here.
pub fn create_proposal(
    ctx: Context<CreateProposal>,
    target_program: Pubkey,
    target_accounts: Vec<ProposalAccount>,
    payload: Vec<u8>,
) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let proposal_key = ctx.accounts.proposal.key();
    let proposer = ctx.accounts.proposer.key();

    require!(
        ctx.accounts.multisig.is_owner(&proposer),
        MultisigError::UnauthorizedProposer
    );
    validation::validate_proposal_size(&target_accounts, &payload)?;

    let proposal = &mut ctx.accounts.proposal;
    **proposal = Proposal::new(multisig_key, proposer, target_program, target_accounts, payload);

    msg!(
        "Proposal {} created by {} targeting {}",
        proposal_key,
        proposer,
        target_program
    );

    emit!(ProposalCreated {
        multisig: multisig_key,
        proposal: proposal_key,
        proposer,
        target_program,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(target_program: Pubkey, target_accounts: Vec<ProposalAccount>, payload: Vec<u8>)]
pub struct CreateProposal<'info> {
    pub multisig: Account<'info, Multisig>,

    #[account(
        init,
        payer = proposer,
        space = Proposal::space(target_accounts.len(), payload.len())
    )]
    pub proposal: Account<'info, Proposal>,

    /// Owner creating the proposal; pays for its storage
    #[account(mut)]
    pub proposer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
