#![allow(deprecated, unexpected_cfgs)]
use anchor_lang::prelude::*;

// ================================
// Module Declarations
// ================================

pub mod errors;
pub mod events;
pub mod instructions;
pub mod quorum;
pub mod state;
pub mod validation;


// ================================
// Public API Exports
// ================================

pub use errors::MultisigError;
pub use events::*;
pub use state::*;

// Re-export all instruction items at crate root for Anchor's macro
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;

// ================================
// Capacity Constants
// ================================
// Multisig accounts are allocated once at their maximum size so governance
// never has to reallocate. Proposal accounts are sized to their contents,
// bounded by the limits below to stay within a single transaction.

/// Maximum number of owners a multisig can hold
pub const MAX_OWNERS: usize = 16;

/// Maximum number of account descriptors a proposal can carry
pub const MAX_TARGET_ACCOUNTS: usize = 24;

/// Maximum size of a proposal's opaque instruction payload
pub const MAX_PAYLOAD_SIZE: usize = 1024;

// ================================
// Program ID Declaration
// ================================

declare_id!("mof7nJDsVuwYw1WfJkEKo37WqkjHEBRy6UPMSnqKyey");

// Make ID accessible for tests
pub const PROGRAM_ID: Pubkey = ID;

// ================================
// Program Instruction Handlers
// ================================

#[allow(deprecated, unexpected_cfgs)]
#[program]
pub mod multisig {
    use super::*;
    use crate::instructions;

    /// Create a multisig with its owner set, approval threshold and signer nonce
    pub fn create_multisig(
        ctx: Context<CreateMultisig>,
        owners: Vec<Pubkey>,
        threshold: u64,
        nonce: u8,
    ) -> Result<()> {
        instructions::create_multisig(ctx, owners, threshold, nonce)
    }

    /// Propose an arbitrary instruction to be executed by the multisig signer.
    /// The proposer is recorded as the first approval.
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        target_program: Pubkey,
        target_accounts: Vec<ProposalAccount>,
        payload: Vec<u8>,
    ) -> Result<()> {
        instructions::create_proposal(ctx, target_program, target_accounts, payload)
    }

    /// Approve a pending proposal on behalf of one owner
    pub fn approve(ctx: Context<Approve>) -> Result<()> {
        instructions::approve(ctx)
    }

    /// Execute a proposal once the current owners have reached the threshold
    pub fn execute_proposal<'info>(
        ctx: Context<'_, '_, '_, 'info, ExecuteProposal<'info>>,
    ) -> Result<()> {
        instructions::execute_proposal(ctx)
    }

    /// Replace the owner set. Only reachable through an executed proposal.
    pub fn set_owners(ctx: Context<Auth>, owners: Vec<Pubkey>) -> Result<()> {
        instructions::set_owners(ctx, owners)
    }

    /// Change the approval threshold. Only reachable through an executed proposal.
    pub fn change_threshold(ctx: Context<Auth>, threshold: u64) -> Result<()> {
        instructions::change_threshold(ctx, threshold)
    }

    /// Replace owners and threshold together. Only reachable through an executed proposal.
    pub fn set_owners_and_change_threshold(
        ctx: Context<Auth>,
        owners: Vec<Pubkey>,
        threshold: u64,
    ) -> Result<()> {
        instructions::set_owners_and_change_threshold(ctx, owners, threshold)
    }
}
