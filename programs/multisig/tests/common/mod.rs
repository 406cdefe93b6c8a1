#![allow(dead_code)]

use anchor_lang::solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};
use anchor_lang::{AccountDeserialize, Event, InstructionData, ToAccountMetas};
use base64::Engine;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    system_program,
    transaction::{Transaction, TransactionError},
};

use multisig::{Multisig, MultisigError, Proposal, ProposalAccount};

/// Lamports given to every funded test keypair
pub const FUNDING_LAMPORTS: u64 = 5_000_000_000;

// Anchor's entrypoint ties the slice and account lifetimes together
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    multisig::entry(program_id, accounts, data)
}

/// A created multisig and its derived signer
#[derive(Clone, Copy, Debug)]
pub struct MultisigHandle {
    pub address: Pubkey,
    pub signer: Pubkey,
    pub nonce: u8,
}

pub struct TestContext {
    pub context: ProgramTestContext,
    pub program_id: Pubkey,
}

impl TestContext {
    pub async fn new() -> Self {
        let program_id = multisig::PROGRAM_ID;
        let program_test = ProgramTest::new("multisig", program_id, processor!(process_instruction));
        let context = program_test.start_with_context().await;

        Self { context, program_id }
    }

    /// Send a transaction paid for by the context payer
    pub async fn send_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let tx = self.signed_transaction(instructions, signers).await;
        self.context.banks_client.process_transaction(tx).await
    }

    /// Send a transaction and keep its program logs, including on failure
    pub async fn send_transaction_with_logs(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> (Result<(), BanksClientError>, Vec<String>) {
        let tx = self.signed_transaction(instructions, signers).await;
        let outcome = self
            .context
            .banks_client
            .process_transaction_with_metadata(tx)
            .await
            .expect("banks client");
        let logs = outcome
            .metadata
            .map(|metadata| metadata.log_messages)
            .unwrap_or_default();
        (outcome.result.map_err(BanksClientError::from), logs)
    }

    async fn signed_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Transaction {
        // A fresh blockhash keeps repeated identical transactions from being deduplicated
        let blockhash = self
            .context
            .get_new_latest_blockhash()
            .await
            .expect("blockhash");

        let payer = &self.context.payer;
        let mut all_signers: Vec<&Keypair> = vec![payer];
        all_signers.extend_from_slice(signers);

        Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &all_signers,
            blockhash,
        )
    }

    pub async fn transfer(&mut self, to: &Pubkey, lamports: u64) {
        let ix = system_instruction::transfer(&self.context.payer.pubkey(), to, lamports);
        self.send_transaction(&[ix], &[]).await.expect("transfer");
    }

    pub async fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.transfer(&keypair.pubkey(), FUNDING_LAMPORTS).await;
        keypair
    }

    pub async fn funded_keypairs<const N: usize>(&mut self) -> [Keypair; N] {
        let mut keypairs = Vec::with_capacity(N);
        for _ in 0..N {
            keypairs.push(self.funded_keypair().await);
        }
        keypairs.try_into().unwrap_or_else(|_| unreachable!())
    }

    pub async fn balance(&mut self, address: &Pubkey) -> u64 {
        self.context
            .banks_client
            .get_balance(*address)
            .await
            .expect("balance")
    }

    // ================================
    // Program Instructions
    // ================================

    pub async fn create_multisig_with_nonce(
        &mut self,
        multisig: &Keypair,
        owners: Vec<Pubkey>,
        threshold: u64,
        nonce: u8,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: multisig::accounts::CreateMultisig {
                multisig: multisig.pubkey(),
                payer: self.context.payer.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: multisig::instruction::CreateMultisig { owners, threshold, nonce }.data(),
        };

        self.send_transaction(&[ix], &[multisig]).await
    }

    pub async fn create_multisig(
        &mut self,
        owners: Vec<Pubkey>,
        threshold: u64,
    ) -> Result<MultisigHandle, BanksClientError> {
        let multisig = Keypair::new();
        let (signer, nonce) =
            Pubkey::find_program_address(&[multisig.pubkey().as_ref()], &self.program_id);

        self.create_multisig_with_nonce(&multisig, owners, threshold, nonce).await?;

        Ok(MultisigHandle {
            address: multisig.pubkey(),
            signer,
            nonce,
        })
    }

    pub async fn create_proposal(
        &mut self,
        multisig: &Pubkey,
        proposer: &Keypair,
        target_program: Pubkey,
        target_accounts: Vec<ProposalAccount>,
        payload: Vec<u8>,
    ) -> Result<Pubkey, BanksClientError> {
        let proposal = Keypair::new();
        self.create_proposal_at(&proposal, multisig, proposer, target_program, target_accounts, payload)
            .await
    }

    /// Create a proposal at a caller-chosen address, for proposals that name themselves
    pub async fn create_proposal_at(
        &mut self,
        proposal: &Keypair,
        multisig: &Pubkey,
        proposer: &Keypair,
        target_program: Pubkey,
        target_accounts: Vec<ProposalAccount>,
        payload: Vec<u8>,
    ) -> Result<Pubkey, BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: multisig::accounts::CreateProposal {
                multisig: *multisig,
                proposal: proposal.pubkey(),
                proposer: proposer.pubkey(),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: multisig::instruction::CreateProposal {
                target_program,
                target_accounts,
                payload,
            }
            .data(),
        };

        self.send_transaction(&[ix], &[proposal, proposer]).await?;
        Ok(proposal.pubkey())
    }

    pub async fn approve(
        &mut self,
        multisig: &Pubkey,
        proposal: &Pubkey,
        owner: &Keypair,
    ) -> Result<(), BanksClientError> {
        let ix = self.approve_instruction(multisig, proposal, &owner.pubkey());
        self.send_transaction(&[ix], &[owner]).await
    }

    /// Approve and return the program logs of the successful transaction
    pub async fn approve_with_logs(
        &mut self,
        multisig: &Pubkey,
        proposal: &Pubkey,
        owner: &Keypair,
    ) -> Vec<String> {
        let ix = self.approve_instruction(multisig, proposal, &owner.pubkey());
        let (result, logs) = self.send_transaction_with_logs(&[ix], &[owner]).await;
        result.expect("approve");
        logs
    }

    fn approve_instruction(&self, multisig: &Pubkey, proposal: &Pubkey, owner: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: multisig::accounts::Approve {
                multisig: *multisig,
                proposal: *proposal,
                owner: *owner,
            }
            .to_account_metas(None),
            data: multisig::instruction::Approve {}.data(),
        }
    }

    /// Execute with caller-chosen remaining accounts
    pub async fn execute_with_accounts(
        &mut self,
        handle: &MultisigHandle,
        proposal: &Pubkey,
        remaining_accounts: Vec<AccountMeta>,
    ) -> Result<(), BanksClientError> {
        let ix = self.execute_instruction(handle, proposal, remaining_accounts);
        self.send_transaction(&[ix], &[]).await
    }

    /// Execute passing every account the stored proposal needs, keeping the logs
    pub async fn execute_with_logs(
        &mut self,
        handle: &MultisigHandle,
        proposal: &Pubkey,
    ) -> (Result<(), BanksClientError>, Vec<String>) {
        let stored = self.fetch_proposal(proposal).await;
        let remaining = execution_accounts(&stored, &handle.signer);
        let ix = self.execute_instruction(handle, proposal, remaining);
        self.send_transaction_with_logs(&[ix], &[]).await
    }

    fn execute_instruction(
        &self,
        handle: &MultisigHandle,
        proposal: &Pubkey,
        remaining_accounts: Vec<AccountMeta>,
    ) -> Instruction {
        let mut accounts = multisig::accounts::ExecuteProposal {
            multisig: handle.address,
            multisig_signer: handle.signer,
            proposal: *proposal,
        }
        .to_account_metas(None);
        accounts.extend(remaining_accounts);

        Instruction {
            program_id: self.program_id,
            accounts,
            data: multisig::instruction::ExecuteProposal {}.data(),
        }
    }

    /// Execute passing every account the stored proposal needs
    pub async fn execute(
        &mut self,
        handle: &MultisigHandle,
        proposal: &Pubkey,
    ) -> Result<(), BanksClientError> {
        let stored = self.fetch_proposal(proposal).await;
        let remaining = execution_accounts(&stored, &handle.signer);
        self.execute_with_accounts(handle, proposal, remaining).await
    }

    // ================================
    // Account Fetching
    // ================================

    pub async fn fetch_multisig(&mut self, address: &Pubkey) -> Multisig {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .expect("get_account")
            .expect("multisig account exists");
        Multisig::try_deserialize(&mut account.data.as_slice()).expect("multisig data")
    }

    pub async fn fetch_proposal(&mut self, address: &Pubkey) -> Proposal {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .expect("get_account")
            .expect("proposal account exists");
        Proposal::try_deserialize(&mut account.data.as_slice()).expect("proposal data")
    }
}

// ================================
// Instruction Builders
// ================================

/// Remaining accounts for executing `proposal`: its target accounts with the
/// multisig signer demoted to non-signer at the transaction level, followed
/// by the target program
pub fn execution_accounts(proposal: &Proposal, signer: &Pubkey) -> Vec<AccountMeta> {
    let mut metas: Vec<AccountMeta> = proposal
        .target_accounts
        .iter()
        .map(|account| {
            let meta = AccountMeta::from(account);
            if meta.pubkey == *signer {
                AccountMeta { is_signer: false, ..meta }
            } else {
                meta
            }
        })
        .collect();
    metas.push(AccountMeta::new_readonly(proposal.target_program, false));
    metas
}

pub fn proposal_accounts(metas: &[AccountMeta]) -> Vec<ProposalAccount> {
    metas
        .iter()
        .map(|meta| ProposalAccount {
            pubkey: meta.pubkey,
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect()
}

/// Account descriptors for a governance call against `handle`
pub fn governance_accounts(handle: &MultisigHandle) -> Vec<ProposalAccount> {
    let metas = multisig::accounts::Auth {
        multisig: handle.address,
        multisig_signer: handle.signer,
    }
    .to_account_metas(None);
    proposal_accounts(&metas)
}

/// Account descriptors for an `execute_proposal` call on `proposal`
pub fn execute_accounts(handle: &MultisigHandle, proposal: &Pubkey) -> Vec<ProposalAccount> {
    let metas = multisig::accounts::ExecuteProposal {
        multisig: handle.address,
        multisig_signer: handle.signer,
        proposal: *proposal,
    }
    .to_account_metas(None);
    proposal_accounts(&metas)
}

pub fn set_owners_payload(owners: Vec<Pubkey>) -> Vec<u8> {
    multisig::instruction::SetOwners { owners }.data()
}

pub fn change_threshold_payload(threshold: u64) -> Vec<u8> {
    multisig::instruction::ChangeThreshold { threshold }.data()
}

pub fn reconfigure_payload(owners: Vec<Pubkey>, threshold: u64) -> Vec<u8> {
    multisig::instruction::SetOwnersAndChangeThreshold { owners, threshold }.data()
}

// ================================
// Log Helpers
// ================================

/// The log line `emit!` writes for `event`
pub fn event_log<E: Event>(event: &E) -> String {
    format!(
        "Program data: {}",
        base64::engine::general_purpose::STANDARD.encode(event.data())
    )
}

// ================================
// Error Helpers
// ================================

/// Whether the logs carry an Anchor error report for `error`
pub fn logged_error(logs: &[String], error: &MultisigError) -> bool {
    let needle = format!("Error Code: {error:?}.");
    logs.iter().any(|line| line.contains(&needle))
}

pub fn error_code(error: MultisigError) -> u32 {
    anchor_lang::error::ERROR_CODE_OFFSET + error as u32
}

/// Extract the custom program error code from a failed transaction
pub fn custom_error_code(err: BanksClientError) -> u32 {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        ))
        | BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        } => code,
        other => panic!("expected a custom program error, got {other:?}"),
    }
}

pub fn assert_multisig_error(result: Result<(), BanksClientError>, expected: MultisigError) {
    let expected_code = error_code(expected);
    match result {
        Ok(()) => panic!("expected error code {expected_code}, transaction succeeded"),
        Err(err) => assert_eq!(custom_error_code(err), expected_code),
    }
}
