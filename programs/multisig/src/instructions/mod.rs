// Instruction module for the multisig program
// Exports all instruction handlers and their contexts

pub mod approve;
pub mod create_multisig;
pub mod create_proposal;
pub mod execute_proposal;
pub mod governance;

pub use approve::*;
pub use create_multisig::*;
pub use create_proposal::*;
pub use execute_proposal::*;
pub use governance::*;
