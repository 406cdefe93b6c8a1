// Registry governance entrypoints
//
// These mutate the multisig itself and require the multisig signer to have
// signed. A program address can only sign through `invoke_signed` from this
// program, and the only place that happens is proposal execution, so owners
// and threshold change only after the current owners reached quorum.
use anchor_lang::prelude::*;
use crate::{
    errors::MultisigError,
    events::{OwnersChanged, ThresholdChanged},
    state::Multisig,
};

// ================================
// Instruction Handlers
// ================================

/// Replace the owner set.
///
/// Approvals already recorded on pending proposals are kept; execution
/// only counts the ones that belong to the new owners.
pub fn set_owners(ctx: Context<Auth>, owners: Vec<Pubkey>) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let multisig = &mut ctx.accounts.multisig;
    multisig.set_owners(owners)?;

    msg!("Multisig {} now has {} owners", multisig_key, multisig.owners.len());
    emit!(OwnersChanged {
        multisig: multisig_key,
        owners: multisig.owners.clone(),
    });
    Ok(())
}

/// Change the approval threshold
pub fn change_threshold(ctx: Context<Auth>, threshold: u64) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let multisig = &mut ctx.accounts.multisig;
    let previous = multisig.threshold;
    multisig.change_threshold(threshold)?;

    msg!("Multisig {} threshold {} -> {}", multisig_key, previous, threshold);
    emit!(ThresholdChanged {
        multisig: multisig_key,
        previous,
        threshold,
    });
    Ok(())
}

/// Replace owners and threshold in one step, validated as a pair.
/// Needed when the new owner set is smaller than the current threshold.
pub fn set_owners_and_change_threshold(
    ctx: Context<Auth>,
    owners: Vec<Pubkey>,
    threshold: u64,
) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let multisig = &mut ctx.accounts.multisig;
    let previous = multisig.threshold;
    multisig.reconfigure(owners, threshold)?;

    msg!(
        "Multisig {} reconfigured: {} owners, threshold {} -> {}",
        multisig_key,
        multisig.owners.len(),
        previous,
        threshold
    );
    emit!(OwnersChanged {
        multisig: multisig_key,
        owners: multisig.owners.clone(),
    });
    emit!(ThresholdChanged {
        multisig: multisig_key,
        previous,
        threshold,
    });
    Ok(())
}

// ================================
// Account Context
// ================================

/// Authorization context shared by every registry mutation
#[derive(Accounts)]
pub struct Auth<'info> {
    #[account(mut)]
    pub multisig: Account<'info, Multisig>,

    /// CHECK: program address derived from the multisig key and nonce; it
    /// must have signed, which only proposal execution can arrange.
    #[account(
        seeds = [multisig.key().as_ref()],
        bump = multisig.nonce,
        constraint = multisig_signer.is_signer @ MultisigError::UnauthorizedGovernanceCall,
    )]
    pub multisig_signer: UncheckedAccount<'info>,
}
