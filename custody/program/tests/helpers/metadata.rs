#![allow(dead_code)]

//! Minimal stand-in for the MPL token metadata program, registered in the
//! test runtime at the real metadata program id. It understands exactly the
//! one instruction the issuance program sends and enforces the same address
//! derivation and collision rules.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        entrypoint::ProgramResult,
        program::invoke_signed,
        program_error::ProgramError,
        rent::Rent,
        system_instruction,
        sysvar::Sysvar,
    },
    solana_program_test::BanksClient,
    solana_sdk::{borsh1::try_from_slice_unchecked, pubkey::Pubkey},
    token_issuance::inline_mpl_token_metadata::{
        pda::find_metadata_account, state::CreateMetadataAccountArgsV3,
    },
};

/// On-chain metadata record, in the field order the real program writes
#[derive(Clone, BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub key: u8,
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<u8>>,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
}

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let (discriminator, args_data) = input
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    // CreateMetadataAccountV3 is the only instruction the protocol issues
    if *discriminator != 33 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let args = CreateMetadataAccountArgsV3::try_from_slice(args_data)?;

    let account_info_iter = &mut accounts.iter();
    let metadata_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let update_authority_info = next_account_info(account_info_iter)?;
    let _system_program_info = next_account_info(account_info_iter)?;

    if !mint_authority_info.is_signer || !payer_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (expected_metadata, bump_seed) = find_metadata_account(mint_info.key);
    if expected_metadata != *metadata_info.key {
        return Err(ProgramError::InvalidSeeds);
    }

    let metadata = Metadata {
        key: 4,
        update_authority: *update_authority_info.key,
        mint: *mint_info.key,
        name: args.data.name,
        symbol: args.data.symbol,
        uri: args.data.uri,
        seller_fee_basis_points: args.data.seller_fee_basis_points,
        creators: None,
        primary_sale_happened: false,
        is_mutable: args.is_mutable,
    };
    let data = borsh::to_vec(&metadata)?;

    // the system program enforces the collision rule for occupied addresses
    let rent = Rent::get()?;
    invoke_signed(
        &system_instruction::create_account(
            payer_info.key,
            metadata_info.key,
            rent.minimum_balance(data.len()),
            data.len() as u64,
            program_id,
        ),
        &[payer_info.clone(), metadata_info.clone()],
        &[&[
            b"metadata",
            program_id.as_ref(),
            mint_info.key.as_ref(),
            &[bump_seed],
        ]],
    )?;

    metadata_info.data.borrow_mut().copy_from_slice(&data);

    Ok(())
}

pub async fn get_metadata_account(banks_client: &mut BanksClient, token_mint: &Pubkey) -> Metadata {
    let (token_metadata, _) = find_metadata_account(token_mint);
    let token_metadata_account = banks_client
        .get_account(token_metadata)
        .await
        .unwrap()
        .unwrap();
    try_from_slice_unchecked(token_metadata_account.data.as_slice()).unwrap()
}
