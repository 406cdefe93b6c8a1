// Multisig registry account
use anchor_lang::prelude::*;
use crate::{errors::MultisigError, validation, MAX_OWNERS};

// ================================
// Multisig Account
// ================================

/// Owner set and threshold controlling one custodial signer.
///
/// The signer is the program address derived from this account's key and
/// `nonce`, so it is never stored: anyone holding the multisig address can
/// recompute it with [`Multisig::signer_address`].
#[account]
#[derive(Default, Debug)]
pub struct Multisig {
    /// Owners allowed to propose and approve
    pub owners: Vec<Pubkey>,
    /// Approvals from current owners required for execution
    pub threshold: u64,
    /// Bump used to derive the multisig signer, fixed at creation
    pub nonce: u8,
}

impl Multisig {
    /// Space allocated at creation, large enough for `MAX_OWNERS` owners
    pub const SIZE: usize = 8 + // discriminator
        4 + (32 * MAX_OWNERS) + // owners vec
        8 + // threshold
        1; // nonce

    /// Derive the signer address for a multisig account and nonce
    pub fn signer_address(multisig: &Pubkey, nonce: u8) -> Result<Pubkey> {
        Pubkey::create_program_address(&[multisig.as_ref(), &[nonce]], &crate::ID)
            .map_err(|_| error!(MultisigError::InvalidSignerNonce))
    }

    /// Build a validated multisig
    pub fn new(owners: Vec<Pubkey>, threshold: u64, nonce: u8) -> Result<Self> {
        validation::validate_owners(&owners)?;
        validation::validate_threshold(threshold, owners.len())?;
        Ok(Self { owners, threshold, nonce })
    }

    #[must_use]
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owners.contains(key)
    }

    /// Replace the owner set, keeping the current threshold
    pub fn set_owners(&mut self, owners: Vec<Pubkey>) -> Result<()> {
        validation::validate_owners(&owners)?;
        validation::validate_threshold(self.threshold, owners.len())?;
        self.owners = owners;
        Ok(())
    }

    /// Change the threshold, keeping the current owners
    pub fn change_threshold(&mut self, threshold: u64) -> Result<()> {
        validation::validate_threshold(threshold, self.owners.len())?;
        self.threshold = threshold;
        Ok(())
    }

    /// Replace owners and threshold together
    pub fn reconfigure(&mut self, owners: Vec<Pubkey>, threshold: u64) -> Result<()> {
        validation::validate_owners(&owners)?;
        validation::validate_threshold(threshold, owners.len())?;
        self.owners = owners;
        self.threshold = threshold;
        Ok(())
    }
}
