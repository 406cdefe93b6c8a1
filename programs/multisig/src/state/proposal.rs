// Proposal account: one pending instruction plus its approvals
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use crate::{errors::MultisigError, quorum, MAX_OWNERS};

// ================================
// Account Descriptor
// ================================

/// Account required by the proposed instruction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProposalAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl ProposalAccount {
    pub const SIZE: usize = 32 + 1 + 1;
}

impl From<&ProposalAccount> for AccountMeta {
    fn from(account: &ProposalAccount) -> Self {
        if account.is_writable {
            AccountMeta::new(account.pubkey, account.is_signer)
        } else {
            AccountMeta::new_readonly(account.pubkey, account.is_signer)
        }
    }
}

// ================================
// Proposal Account
// ================================

#[account]
pub struct Proposal {
    /// Multisig this proposal belongs to
    pub multisig: Pubkey,
    /// Owner that created the proposal
    pub proposer: Pubkey,
    /// Program the instruction is invoked against
    pub target_program: Pubkey,
    /// Accounts the instruction requires, in order
    pub target_accounts: Vec<ProposalAccount>,
    /// Opaque instruction data, forwarded unmodified
    pub payload: Vec<u8>,
    /// Identities that approved while they were owners
    pub approvals: Vec<Pubkey>,
    /// Set once the instruction has run
    pub did_execute: bool,
}

impl Proposal {
    /// Space needed for a proposal carrying the given instruction
    #[must_use]
    pub const fn space(accounts_len: usize, payload_len: usize) -> usize {
        8 + // discriminator
        32 + // multisig
        32 + // proposer
        32 + // target_program
        4 + (ProposalAccount::SIZE * accounts_len) + // target_accounts vec
        4 + payload_len + // payload vec
        4 + (32 * MAX_OWNERS) + // approvals vec
        1 // did_execute
    }

    /// New pending proposal, approved by its proposer
    #[must_use]
    pub fn new(
        multisig: Pubkey,
        proposer: Pubkey,
        target_program: Pubkey,
        target_accounts: Vec<ProposalAccount>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            multisig,
            proposer,
            target_program,
            target_accounts,
            payload,
            approvals: vec![proposer],
            did_execute: false,
        }
    }

    #[must_use]
    pub fn has_approved(&self, key: &Pubkey) -> bool {
        self.approvals.contains(key)
    }

    /// Record an approval from `owner`, checked against the live owner set.
    ///
    /// When the approval list is full, approvals from identities that are no
    /// longer owners are pruned to make room.
    pub fn record_approval(&mut self, owner: Pubkey, owners: &[Pubkey]) -> Result<()> {
        require!(!self.did_execute, MultisigError::AlreadyExecuted);
        require!(owners.contains(&owner), MultisigError::UnauthorizedApprover);
        require!(!self.has_approved(&owner), MultisigError::DuplicateApproval);

        if self.approvals.len() >= MAX_OWNERS {
            let pruned = quorum::prune_stale(&mut self.approvals, owners);
            msg!("Pruned {} approvals from removed owners", pruned);
        }

        self.approvals.push(owner);
        Ok(())
    }

    /// Approvals that still belong to a current owner
    #[must_use]
    pub fn live_approvals(&self, owners: &[Pubkey]) -> u64 {
        quorum::live_approvals(&self.approvals, owners)
    }

    /// Build the instruction to invoke, with `signer` marked as signing
    /// wherever it appears in the account list
    #[must_use]
    pub fn signed_instruction(&self, signer: &Pubkey) -> Instruction {
        let mut ix = Instruction::from(self);
        for meta in &mut ix.accounts {
            if meta.pubkey == *signer {
                meta.is_signer = true;
            }
        }
        ix
    }
}

impl From<&Proposal> for Instruction {
    fn from(proposal: &Proposal) -> Self {
        Self {
            program_id: proposal.target_program,
            accounts: proposal.target_accounts.iter().map(Into::into).collect(),
            data: proposal.payload.clone(),
        }
    }
}
