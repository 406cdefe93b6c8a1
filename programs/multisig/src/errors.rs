// Error codes for the multisig program
//
// Every handler fails the whole instruction on the first violated
// precondition, so callers always see one of these specific codes and the
// runtime discards any writes made before the failure.
//
// Codes are grouped by the component that raises them.

use anchor_lang::prelude::*;

#[error_code]
pub enum MultisigError {
    // ===== Registry Errors =====
    #[msg("Owners must be non-empty, unique and within the maximum owner count")]
    InvalidOwners, // 6000

    #[msg("Threshold must be at least one and at most the number of owners")]
    InvalidThreshold, // 6001

    #[msg("Nonce does not derive a valid multisig signer address")]
    InvalidSignerNonce, // 6002

    #[msg("Registry mutations must be signed by the multisig signer")]
    UnauthorizedGovernanceCall, // 6003

    // ===== Proposal Errors =====
    #[msg("The proposer is not an owner of this multisig")]
    UnauthorizedProposer, // 6004

    #[msg("The approver is not an owner of this multisig")]
    UnauthorizedApprover, // 6005

    #[msg("This owner has already approved the proposal")]
    DuplicateApproval, // 6006

    #[msg("The proposal does not belong to this multisig")]
    RegistryMismatch, // 6007

    #[msg("Proposal exceeds the account or payload size limits")]
    ProposalTooLarge, // 6008

    // ===== Execution Errors =====
    #[msg("The proposal has already been executed")]
    AlreadyExecuted, // 6009

    #[msg("Not enough current owners approved this proposal")]
    ThresholdNotMet, // 6010

    #[msg("The target instruction failed")]
    InvocationFailed, // 6011
}
