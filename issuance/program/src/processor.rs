//! Program state processor

use {
    crate::{
        error::IssuanceError,
        inline_mpl_token_metadata::{
            self, instruction::create_metadata_accounts_v3, pda::find_metadata_account,
        },
        instruction::IssuanceInstruction,
        state::{IssuanceAccountType, IssuanceRegistry},
    },
    borsh::BorshDeserialize,
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        borsh1::get_packed_len,
        entrypoint::ProgramResult,
        msg,
        program::invoke,
        program_error::ProgramError,
        program_option::COption,
        program_pack::Pack,
        pubkey::Pubkey,
        rent::Rent,
        system_instruction, system_program,
        sysvar::Sysvar,
    },
    spl_associated_token_account_client::address::get_associated_token_address,
    spl_token::state::Mint,
};

/// Check MPL metadata account address for the mint
fn check_mpl_metadata_account_address(
    metadata_address: &Pubkey,
    mint: &Pubkey,
) -> Result<(), ProgramError> {
    let (metadata_account_pubkey, _) = find_metadata_account(mint);
    if metadata_account_pubkey != *metadata_address {
        Err(IssuanceError::InvalidMetadataAccount.into())
    } else {
        Ok(())
    }
}

/// Check system program address
fn check_system_program(program_id: &Pubkey) -> Result<(), ProgramError> {
    if *program_id != system_program::id() {
        msg!(
            "Expected system program {}, received {}",
            system_program::id(),
            program_id
        );
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// Check token program address
fn check_token_program(address: &Pubkey) -> Result<(), ProgramError> {
    if *address != spl_token::id() {
        msg!(
            "Incorrect token program, expected {}, received {}",
            spl_token::id(),
            address
        );
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// Check associated token program address
fn check_associated_token_program(address: &Pubkey) -> Result<(), ProgramError> {
    if *address != spl_associated_token_account::id() {
        msg!(
            "Incorrect associated token program, expected {}, received {}",
            spl_associated_token_account::id(),
            address
        );
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// Check MPL metadata program
fn check_mpl_metadata_program(program_id: &Pubkey) -> Result<(), ProgramError> {
    if *program_id != inline_mpl_token_metadata::id() {
        msg!(
            "Expected MPL metadata program {}, received {}",
            inline_mpl_token_metadata::id(),
            program_id
        );
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// Program state handler.
pub struct Processor {}
impl Processor {
    fn process_initialize_registry(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let payer_info = next_account_info(account_info_iter)?;
        let registry_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        check_system_program(system_program_info.key)?;

        if !payer_info.is_signer || !registry_info.is_signer {
            msg!("Payer and registry must both sign registry initialization");
            return Err(IssuanceError::SignatureMissing.into());
        }

        // the system program rejects an occupied address, so a registry can
        // only ever be created once
        let registry_space = get_packed_len::<IssuanceRegistry>();
        let rent = Rent::get()?;

        invoke(
            &system_instruction::create_account(
                payer_info.key,
                registry_info.key,
                rent.minimum_balance(registry_space),
                registry_space as u64,
                program_id,
            ),
            &[payer_info.clone(), registry_info.clone()],
        )?;

        let registry = IssuanceRegistry {
            account_type: IssuanceAccountType::Registry,
            authority: *payer_info.key,
        };
        borsh::to_writer(&mut registry_info.data.borrow_mut()[..], &registry)?;

        Ok(())
    }

    fn process_create_token(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        freeze_authority: Option<Pubkey>,
        decimals: u8,
        name: String,
        symbol: String,
        uri: String,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let registry_info = next_account_info(account_info_iter)?;
        let payer_info = next_account_info(account_info_iter)?;
        let mint_info = next_account_info(account_info_iter)?;
        let mint_authority_info = next_account_info(account_info_iter)?;
        let metadata_info = next_account_info(account_info_iter)?;
        let mpl_token_metadata_program_info = next_account_info(account_info_iter)?;
        let token_program_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        IssuanceRegistry::from_account_info(registry_info, program_id)?;

        check_token_program(token_program_info.key)?;
        check_system_program(system_program_info.key)?;
        check_mpl_metadata_program(mpl_token_metadata_program_info.key)?;
        check_mpl_metadata_account_address(metadata_info.key, mint_info.key)?;

        if !payer_info.is_signer || !mint_info.is_signer || !mint_authority_info.is_signer {
            msg!("Payer, mint, and mint authority must all sign token creation");
            return Err(IssuanceError::SignatureMissing.into());
        }

        // metadata addresses derive from the mint, so an occupied metadata
        // account means this token identity has already been used. checked
        // before any account is touched
        if metadata_info.data_len() != 0 {
            return Err(IssuanceError::MetadataTargetCollision.into());
        }

        let rent = Rent::get()?;

        invoke(
            &system_instruction::create_account(
                payer_info.key,
                mint_info.key,
                rent.minimum_balance(Mint::LEN),
                Mint::LEN as u64,
                token_program_info.key,
            ),
            &[payer_info.clone(), mint_info.clone()],
        )?;

        invoke(
            &spl_token::instruction::initialize_mint2(
                token_program_info.key,
                mint_info.key,
                mint_authority_info.key,
                freeze_authority.as_ref(),
                decimals,
            )?,
            &[mint_info.clone()],
        )?;

        let new_metadata_instruction = create_metadata_accounts_v3(
            *mpl_token_metadata_program_info.key,
            *metadata_info.key,
            *mint_info.key,
            *mint_authority_info.key,
            *payer_info.key,
            *mint_authority_info.key,
            name,
            symbol,
            uri,
        );

        invoke(
            &new_metadata_instruction,
            &[
                metadata_info.clone(),
                mint_info.clone(),
                mint_authority_info.clone(),
                payer_info.clone(),
                system_program_info.clone(),
            ],
        )?;

        Ok(())
    }

    fn process_mint_to(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let registry_info = next_account_info(account_info_iter)?;
        let payer_info = next_account_info(account_info_iter)?;
        let mint_info = next_account_info(account_info_iter)?;
        let holding_info = next_account_info(account_info_iter)?;
        let owner_info = next_account_info(account_info_iter)?;
        let mint_authority_info = next_account_info(account_info_iter)?;
        let token_program_info = next_account_info(account_info_iter)?;
        let associated_token_program_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        IssuanceRegistry::from_account_info(registry_info, program_id)?;

        check_token_program(token_program_info.key)?;
        check_associated_token_program(associated_token_program_info.key)?;
        check_system_program(system_program_info.key)?;

        if *holding_info.key != get_associated_token_address(owner_info.key, mint_info.key) {
            return Err(IssuanceError::InvalidHoldingAccount.into());
        }

        if !mint_authority_info.is_signer {
            msg!("Mint authority did not sign minting");
            return Err(IssuanceError::SignatureMissing.into());
        }

        // authority is validated before any CPI, even for a zero amount, so a
        // failed attempt leaves the holding account untouched
        let mint = Mint::unpack(&mint_info.try_borrow_data()?)?;
        if mint.mint_authority != COption::Some(*mint_authority_info.key) {
            msg!("Signer is not the mint authority of the token");
            return Err(IssuanceError::Unauthorized.into());
        }

        // the holding account is created lazily on first use
        if holding_info.data_len() == 0 {
            invoke(
                &spl_associated_token_account::instruction::create_associated_token_account_idempotent(
                    payer_info.key,
                    owner_info.key,
                    mint_info.key,
                    token_program_info.key,
                ),
                &[
                    payer_info.clone(),
                    holding_info.clone(),
                    owner_info.clone(),
                    mint_info.clone(),
                    system_program_info.clone(),
                    token_program_info.clone(),
                ],
            )?;
        }

        invoke(
            &spl_token::instruction::mint_to(
                token_program_info.key,
                mint_info.key,
                holding_info.key,
                mint_authority_info.key,
                &[],
                amount,
            )?,
            &[
                mint_info.clone(),
                holding_info.clone(),
                mint_authority_info.clone(),
            ],
        )?;

        Ok(())
    }

    /// Processes [Instruction](enum.Instruction.html).
    pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], input: &[u8]) -> ProgramResult {
        let instruction = IssuanceInstruction::try_from_slice(input)?;
        match instruction {
            IssuanceInstruction::InitializeRegistry => {
                msg!("Instruction: InitializeRegistry");
                Self::process_initialize_registry(program_id, accounts)
            }
            IssuanceInstruction::CreateToken {
                freeze_authority,
                decimals,
                name,
                symbol,
                uri,
            } => {
                msg!("Instruction: CreateToken");
                Self::process_create_token(
                    program_id,
                    accounts,
                    freeze_authority,
                    decimals,
                    name,
                    symbol,
                    uri,
                )
            }
            IssuanceInstruction::MintTo { amount } => {
                msg!("Instruction: MintTo");
                Self::process_mint_to(program_id, accounts, amount)
            }
        }
    }
}
