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
    token_issuance::{id, inline_mpl_token_metadata, instruction, processor::Processor},
};

pub mod metadata;
pub use metadata::*;

pub use token::*;

pub const TOKEN_NAME: &str = "Homer Token";
pub const TOKEN_SYMBOL: &str = "HOMR";
pub const TOKEN_URI: &str = "https://example.com/homer.json";
pub const TOKEN_DECIMALS: u8 = 9;

pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new("token_issuance", id(), processor!(Processor::process));

    program_test.add_program(
        "mpl_token_metadata",
        inline_mpl_token_metadata::id(),
        processor!(metadata::process_instruction),
    );
    program_test.prefer_bpf(false);

    program_test
}

#[derive(Debug)]
pub struct IssuanceAccounts {
    pub registry: Keypair,
    pub mint: Keypair,
    pub mint_authority: Keypair,
    pub user: Keypair,
    pub user_holding: Pubkey,
}
impl IssuanceAccounts {
    // creates the registry record and the token with its metadata, leaving
    // everything ready for minting
    pub async fn initialize(&self, context: &mut ProgramTestContext) {
        self.initialize_registry(context).await;
        self.create_token(context).await;
    }

    pub async fn initialize_registry(&self, context: &mut ProgramTestContext) {
        let transaction = Transaction::new_signed_with_payer(
            &[instruction::initialize_registry(
                &id(),
                &context.payer.pubkey(),
                &self.registry.pubkey(),
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer, &self.registry],
            context.last_blockhash,
        );

        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
    }

    pub async fn create_token(&self, context: &mut ProgramTestContext) {
        let transaction = Transaction::new_signed_with_payer(
            &[instruction::create_token(
                &id(),
                &self.registry.pubkey(),
                &context.payer.pubkey(),
                &self.mint.pubkey(),
                &self.mint_authority.pubkey(),
                Some(&self.mint_authority.pubkey()),
                TOKEN_DECIMALS,
                TOKEN_NAME.to_string(),
                TOKEN_SYMBOL.to_string(),
                TOKEN_URI.to_string(),
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer, &self.mint, &self.mint_authority],
            context.last_blockhash,
        );

        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
    }

    pub async fn mint_to(&self, context: &mut ProgramTestContext, owner: &Pubkey, amount: u64) {
        let transaction = Transaction::new_signed_with_payer(
            &[instruction::mint_to(
                &id(),
                &self.registry.pubkey(),
                &context.payer.pubkey(),
                &self.mint.pubkey(),
                owner,
                &self.mint_authority.pubkey(),
                amount,
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer, &self.mint_authority],
            context.last_blockhash,
        );

        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
    }
}
impl Default for IssuanceAccounts {
    fn default() -> Self {
        let mint = Keypair::new();
        let user = Keypair::new();
        let user_holding = get_associated_token_address(&user.pubkey(), &mint.pubkey());

        Self {
            registry: Keypair::new(),
            mint,
            mint_authority: Keypair::new(),
            user,
            user_holding,
        }
    }
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
