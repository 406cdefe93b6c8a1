// State management modules for the multisig program

// Account types (on-chain state)
mod multisig;
mod proposal;

// Re-exports
pub use multisig::Multisig;
pub use proposal::{Proposal, ProposalAccount};
