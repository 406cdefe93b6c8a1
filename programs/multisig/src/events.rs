use anchor_lang::prelude::*;

// ================================
// Registry Events
// ================================

/// Emitted when a multisig is created
#[event]
pub struct MultisigCreated {
    pub multisig: Pubkey,
    pub signer: Pubkey,       // Derived signer acting for the multisig
    pub owners: Vec<Pubkey>,
    pub threshold: u64,
}

/// Emitted when governance replaces the owner set
#[event]
pub struct OwnersChanged {
    pub multisig: Pubkey,
    pub owners: Vec<Pubkey>,
}

/// Emitted when governance changes the threshold
#[event]
pub struct ThresholdChanged {
    pub multisig: Pubkey,
    pub previous: u64,
    pub threshold: u64,
}

// ================================
// Proposal Events
// ================================

#[event]
pub struct ProposalCreated {
    pub multisig: Pubkey,
    pub proposal: Pubkey,
    pub proposer: Pubkey,
    pub target_program: Pubkey,
}

#[event]
pub struct ProposalApproved {
    pub multisig: Pubkey,
    pub proposal: Pubkey,
    pub owner: Pubkey,
    pub live_approvals: u64,  // Approvals from current owners
}

/// Emitted after the target instruction ran under the multisig signer
#[event]
pub struct ProposalExecuted {
    pub multisig: Pubkey,
    pub proposal: Pubkey,
    pub target_program: Pubkey,
    pub live_approvals: u64,
}
