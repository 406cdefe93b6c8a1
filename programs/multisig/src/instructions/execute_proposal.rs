// Proposal execution engine
//
// Executes a proposal's instruction with the multisig signer's authority once
// enough current owners have approved it. Quorum is recomputed on every call
// from the live owner set and threshold, so approvals from owners removed by
// governance no longer count.
//
// The target program is invoked through `invoke_signed` with the signer's
// seeds; this is the only code path that can produce the signer's signature,
// which is what lets a proposal call the registry's governance entrypoints.
//
// EXACTLY ONCE: the proposal is marked executed and persisted before the
// invocation so that a re-entrant call into this program sees it as executed.
// A failed invocation fails the instruction and the runtime discards the
// mark, leaving the proposal pending for a retry.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program::invoke_signed};
use anchor_lang::AccountsExit;
use crate::{
    errors::MultisigError,
    events::ProposalExecuted,
    quorum,
    state::{Multisig, Proposal},
};

// ================================
// Instruction Handler
// ================================

/// Execute a proposal that has reached quorum.
///
/// Every account the proposal names, and its target program, must be passed
/// in `remaining_accounts`, except the multisig signer which is supplied as
/// a named account.
pub fn execute_proposal<'info>(
    ctx: Context<'_, '_, '_, 'info, ExecuteProposal<'info>>,
) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let proposal_key = ctx.accounts.proposal.key();
    let multisig = &ctx.accounts.multisig;
    let proposal = &mut ctx.accounts.proposal;

    require!(!proposal.did_execute, MultisigError::AlreadyExecuted);

    let live_approvals = proposal.live_approvals(&multisig.owners);
    require!(
        quorum::meets_threshold(live_approvals, multisig.threshold),
        MultisigError::ThresholdNotMet
    );

    let signer = ctx.accounts.multisig_signer.to_account_info();
    let ix = proposal.signed_instruction(signer.key);
    let account_infos = link_accounts(&ix, &signer, ctx.remaining_accounts)?;

    proposal.did_execute = true;
    proposal.exit(&crate::ID)?;

    let bump = [multisig.nonce];
    let seeds: &[&[u8]] = &[multisig_key.as_ref(), &bump];

    invoke_signed(&ix, &account_infos, &[seeds]).map_err(|err| {
        msg!("Target program {} failed: {:?}", ix.program_id, err);
        error!(MultisigError::InvocationFailed)
    })?;

    msg!(
        "Executed proposal {} against {} with {} of {} approvals",
        proposal_key,
        ix.program_id,
        live_approvals,
        multisig.threshold
    );

    emit!(ProposalExecuted {
        multisig: multisig_key,
        proposal: proposal_key,
        target_program: ix.program_id,
        live_approvals,
    });

    Ok(())
}

/// Resolve the account infos for `ix` from the supplied accounts.
///
/// Returns the infos in instruction order followed by the target program.
/// A missing account fails with `InvocationFailed` before anything is invoked.
fn link_accounts<'info>(
    ix: &Instruction,
    signer: &AccountInfo<'info>,
    remaining_accounts: &[AccountInfo<'info>],
) -> Result<Vec<AccountInfo<'info>>> {
    let resolve = |key: &Pubkey| -> Option<AccountInfo<'info>> {
        if key == signer.key {
            return Some(signer.clone());
        }
        remaining_accounts.iter().find(|info| info.key == key).cloned()
    };

    let mut account_infos = Vec::with_capacity(ix.accounts.len() + 1);
    for meta in &ix.accounts {
        let Some(info) = resolve(&meta.pubkey) else {
            msg!("Missing account {} for target instruction", meta.pubkey);
            return err!(MultisigError::InvocationFailed);
        };
        account_infos.push(info);
    }

    let Some(program) = resolve(&ix.program_id) else {
        msg!("Missing target program {}", ix.program_id);
        return err!(MultisigError::InvocationFailed);
    };
    account_infos.push(program);

    Ok(account_infos)
}

// ================================
// Account Context
// ================================

#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    pub multisig: Account<'info, Multisig>,

    /// CHECK: program address derived from the multisig key and nonce. Holds
    /// no data; it only signs the invoked instruction.
    #[account(
        seeds = [multisig.key().as_ref()],
        bump = multisig.nonce,
    )]
    pub multisig_signer: UncheckedAccount<'info>,

    #[account(mut, has_one = multisig @ MultisigError::RegistryMismatch)]
    pub proposal: Account<'info, Proposal>,
}
