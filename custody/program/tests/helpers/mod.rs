#![allow(dead_code)] // needed because cargo doesn't understand test usage

use {
    solana_program_test::*,
    solana_sdk::{
        account::Account as SolanaAccount,
        program_error::ProgramError,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        transaction::{Transaction, TransactionError},
    },
    spl_associated_token_account_client::address::get_associated_token_address,
    token_custody::{id, instruction, processor::Processor, try_find_custody_address_and_bump},
};

pub mod metadata;
pub use metadata::*;

pub use token::*;

pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new("token_custody", id(), processor!(Processor::process));
    program_test.prefer_bpf(false);

    program_test
}

// both programs plus the metadata stand-in, for scenarios that cross the
// issuance/custody boundary
pub fn program_test_with_issuance() -> ProgramTest {
    let mut program_test = program_test();

    program_test.add_program(
        "token_issuance",
        token_issuance::id(),
        processor!(token_issuance::processor::Processor::process),
    );
    program_test.add_program(
        "mpl_token_metadata",
        token_issuance::inline_mpl_token_metadata::id(),
        processor!(metadata::process_instruction),
    );

    program_test
}

#[derive(Debug)]
pub struct CustodyAccounts {
    pub base: Keypair,
    pub custody: Pubkey,
    pub bump_seed: u8,
}
impl CustodyAccounts {
    pub async fn initialize(&self, context: &mut ProgramTestContext, funding_lamports: u64) {
        let transaction = Transaction::new_signed_with_payer(
            &[instruction::initialize_custody(
                &id(),
                &context.payer.pubkey(),
                &self.base.pubkey(),
                funding_lamports,
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer],
            context.last_blockhash,
        );

        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
    }

    pub fn holding_address(&self, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(&self.custody, mint)
    }
}
impl Default for CustodyAccounts {
    fn default() -> Self {
        let base = Keypair::new();
        let (custody, bump_seed) = try_find_custody_address_and_bump(&id(), &base.pubkey()).unwrap();

        Self {
            base,
            custody,
            bump_seed,
        }
    }
}

pub async fn transfer_from_custody(
    context: &mut ProgramTestContext,
    base: &Pubkey,
    mint: &Pubkey,
    destination_holding: &Pubkey,
    amount: u64,
) -> Result<(), BanksClientError> {
    let transaction = Transaction::new_signed_with_payer(
        &[instruction::transfer_from_custody(
            &id(),
            base,
            mint,
            destination_holding,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(transaction).await
}

pub async fn refresh_blockhash(context: &mut ProgramTestContext) {
    context.last_blockhash = context
        .banks_client
        .get_new_latest_blockhash(&context.last_blockhash)
        .await
        .unwrap();
}

pub async fn get_account(banks_client: &mut BanksClient, pubkey: &Pubkey) -> SolanaAccount {
    banks_client
        .get_account(*pubkey)
        .await
        .expect("client error")
        .expect("account not found")
}

pub fn check_error<T: Clone + std::fmt::Debug>(got: BanksClientError, expected: T)
where
    ProgramError: TryFrom<T>,
{
    // banks error -> transaction error -> instruction error -> program error
    let got_p: ProgramError = if let TransactionError::InstructionError(_, e) = got.unwrap() {
        e.try_into().unwrap()
    } else {
        panic!(
            "couldn't convert {:?} to ProgramError (expected {:?})",
            got, expected
        );
    };

    let expected_p = match expected.clone().try_into() {
        Ok(v) => v,
        Err(_) => panic!("could not unwrap {:?}", expected),
    };

    if got_p != expected_p {
        panic!(
            "error comparison failed!\n\nGOT: {:#?} / ({:?})\n\nEXPECTED: {:#?} / ({:?})\n\n",
            got, got_p, expected, expected_p
        );
    }
}
