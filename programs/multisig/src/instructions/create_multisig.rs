// Create multisig instruction
// Allocates the registry and binds it to its derived signer
use anchor_lang::prelude::*;
use crate::{events::MultisigCreated, state::Multisig};

// ================================
// Instruction Handler
// ================================

/// Initialize a multisig with its owners, threshold and signer nonce.
///
/// The nonce must derive a valid program address together with the
/// multisig key, otherwise no proposal could ever be executed.
pub fn create_multisig(
    ctx: Context<CreateMultisig>,
    owners: Vec<Pubkey>,
    threshold: u64,
    nonce: u8,
) -> Result<()> {
    let multisig_key = ctx.accounts.multisig.key();
    let signer = Multisig::signer_address(&multisig_key, nonce)?;

    let multisig = &mut ctx.accounts.multisig;
    **multisig = Multisig::new(owners, threshold, nonce)?;

    msg!(
        "Multisig {} created with {} owners, threshold {}, signer {}",
        multisig_key,
        multisig.owners.len(),
        multisig.threshold,
        signer
    );

    emit!(MultisigCreated {
        multisig: multisig_key,
        signer,
        owners: multisig.owners.clone(),
        threshold: multisig.threshold,
    });

    Ok(())
}

// ================================
// Account Context
// ================================

#[derive(Accounts)]
pub struct CreateMultisig<'info> {
    /// The multisig account, sized for the maximum owner count
    #[account(init, payer = payer, space = Multisig::SIZE)]
    pub multisig: Account<'info, Multisig>,

    /// Funds the multisig account
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
