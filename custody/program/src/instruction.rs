//! Instruction types

use {
    crate::{find_custody_address, try_find_custody_address_and_bump},
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account_client::address::get_associated_token_address,
};

/// Instructions supported by the Custody program.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum CustodyInstruction {
    ///   Initialize a custodial account at the address derived from the base
    ///   address, record the bump seed needed to later prove authority over
    ///   it, and fund it with lamports from the payer. The funding amount
    ///   must cover at least the rent-exempt minimum for the custody record;
    ///   any amount above it stays with the account.
    ///
    ///   0. `[w,s]` Payer (funding source)
    ///   1. `[]` Base address the custody address is derived from
    ///   2. `[w]` Custody account
    ///   3. `[]` System program
    InitializeCustody {
        /// Lamports to move from the payer into the custody account
        funding_lamports: u64,
        /// Bump seed that must reproduce the custody address
        bump_seed: u8,
    },

    ///   Transfer tokens out of the custody's holding account to an arbitrary
    ///   destination holding account. Authority is proven by re-deriving the
    ///   custody address from the stored base address and bump seed; no
    ///   private key is involved at any point.
    ///
    ///   0. `[]` Custody account
    ///   1. `[]` Token mint
    ///   2. `[w]` Source holding account, owned by the custody address
    ///   3. `[w]` Destination holding account
    ///   4. `[]` Token program
    TransferFromCustody {
        /// Amount of token base units to move
        amount: u64,
    },
}

/// Creates an `InitializeCustody` instruction.
pub fn initialize_custody(
    program_id: &Pubkey,
    payer: &Pubkey,
    base_address: &Pubkey,
    funding_lamports: u64,
) -> Instruction {
    let (custody_address, bump_seed) =
        try_find_custody_address_and_bump(program_id, base_address).unwrap();

    let data = borsh::to_vec(&CustodyInstruction::InitializeCustody {
        funding_lamports,
        bump_seed,
    })
    .unwrap();
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*base_address, false),
        AccountMeta::new(custody_address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

/// Creates a `TransferFromCustody` instruction. The source holding account is
/// the custody's associated token account for the mint.
pub fn transfer_from_custody(
    program_id: &Pubkey,
    base_address: &Pubkey,
    mint: &Pubkey,
    destination_holding: &Pubkey,
    amount: u64,
) -> Instruction {
    let custody_address = find_custody_address(program_id, base_address);
    let source_holding = get_associated_token_address(&custody_address, mint);

    let data = borsh::to_vec(&CustodyInstruction::TransferFromCustody { amount }).unwrap();
    let accounts = vec![
        AccountMeta::new_readonly(custody_address, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(source_holding, false),
        AccountMeta::new(*destination_holding, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}
