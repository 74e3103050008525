//! Instruction types

#![allow(clippy::too_many_arguments)]

use {
    crate::inline_mpl_token_metadata::{self, pda::find_metadata_account},
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account_client::address::get_associated_token_address,
};

/// Instructions supported by the Issuance program.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum IssuanceInstruction {
    ///   Create the registry record that anchors all later instructions. The
    ///   record address is a fresh keypair supplied by the caller; creating an
    ///   occupied address fails with the system program's own collision rule.
    ///
    ///   0. `[w,s]` Payer
    ///   1. `[w,s]` Registry account
    ///   2. `[]` System program
    InitializeRegistry,

    ///   Create a new token mint and write an immutable metadata record for
    ///   it. The metadata account must be the metadata address derived from
    ///   the mint; an occupied metadata account means the token identity has
    ///   already been used and the call fails without touching it.
    ///
    ///   0. `[]` Registry account
    ///   1. `[w,s]` Payer
    ///   2. `[w,s]` Mint
    ///   3. `[s]` Mint authority (also the metadata update authority)
    ///   4. `[w]` Metadata account
    ///   5. `[]` Metadata program
    ///   6. `[]` Token program
    ///   7. `[]` System program
    CreateToken {
        /// Authority allowed to freeze holding accounts, if any
        freeze_authority: Option<Pubkey>,
        /// Decimal precision of the token
        decimals: u8,
        /// Name of the token
        name: String,
        /// Symbol of the token
        symbol: String,
        /// URI of the token metadata
        uri: String,
    },

    ///   Mint token base units into the holding account for an owner,
    ///   creating the holding account first if it does not exist. The mint
    ///   authority must sign; minting zero validates authority and leaves the
    ///   balance unchanged.
    ///
    ///   0. `[]` Registry account
    ///   1. `[w,s]` Payer
    ///   2. `[w]` Mint
    ///   3. `[w]` Holding account (associated token account of the owner)
    ///   4. `[]` Owner of the holding account
    ///   5. `[s]` Mint authority
    ///   6. `[]` Token program
    ///   7. `[]` Associated token program
    ///   8. `[]` System program
    MintTo {
        /// Amount of token base units to mint
        amount: u64,
    },
}

/// Creates an `InitializeRegistry` instruction.
pub fn initialize_registry(program_id: &Pubkey, payer: &Pubkey, registry: &Pubkey) -> Instruction {
    let data = borsh::to_vec(&IssuanceInstruction::InitializeRegistry).unwrap();
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(*registry, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

/// Creates a `CreateToken` instruction.
pub fn create_token(
    program_id: &Pubkey,
    registry: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    name: String,
    symbol: String,
    uri: String,
) -> Instruction {
    let (metadata_account, _) = find_metadata_account(mint);

    let data = borsh::to_vec(&IssuanceInstruction::CreateToken {
        freeze_authority: freeze_authority.copied(),
        decimals,
        name,
        symbol,
        uri,
    })
    .unwrap();
    let accounts = vec![
        AccountMeta::new_readonly(*registry, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*mint, true),
        AccountMeta::new_readonly(*mint_authority, true),
        AccountMeta::new(metadata_account, false),
        AccountMeta::new_readonly(inline_mpl_token_metadata::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}

/// Creates a `MintTo` instruction. The holding account is the associated
/// token account for the owner and mint.
pub fn mint_to(
    program_id: &Pubkey,
    registry: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Instruction {
    let holding_account = get_associated_token_address(owner, mint);

    let data = borsh::to_vec(&IssuanceInstruction::MintTo { amount }).unwrap();
    let accounts = vec![
        AccountMeta::new_readonly(*registry, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*mint, false),
        AccountMeta::new(holding_account, false),
        AccountMeta::new_readonly(*owner, false),
        AccountMeta::new_readonly(*mint_authority, true),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data,
    }
}
