//! Program state processor

use {
    crate::{
        error::CustodyError,
        instruction::CustodyInstruction,
        state::{Custody, CustodyAccountType},
        try_find_custody_address_and_bump, verify_custody_authority, CUSTODY_PREFIX,
    },
    borsh::BorshDeserialize,
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        borsh1::{get_packed_len, try_from_slice_unchecked},
        entrypoint::ProgramResult,
        msg,
        program::{invoke, invoke_signed},
        program_error::ProgramError,
        program_pack::Pack,
        pubkey::Pubkey,
        rent::Rent,
        system_instruction, system_program,
        sysvar::Sysvar,
    },
    spl_token::state::{Account, Mint},
};

/// Check the custody account address against the canonical derivation for the
/// base address, returning the canonical bump seed
fn check_custody_address(
    program_id: &Pubkey,
    base_address: &Pubkey,
    check_address: &Pubkey,
) -> Result<u8, ProgramError> {
    let (derived_address, bump_seed) = try_find_custody_address_and_bump(program_id, base_address)?;
    if *check_address != derived_address {
        msg!(
            "Incorrect custody address for base {}: expected {}, received {}",
            base_address,
            derived_address,
            check_address,
        );
        Err(CustodyError::InvalidProof.into())
    } else {
        Ok(bump_seed)
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

/// Program state handler.
pub struct Processor {}
impl Processor {
    fn process_initialize_custody(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        funding_lamports: u64,
        bump_seed: u8,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let payer_info = next_account_info(account_info_iter)?;
        let base_address_info = next_account_info(account_info_iter)?;
        let custody_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        check_system_program(system_program_info.key)?;

        if !payer_info.is_signer {
            msg!("Payer did not sign custody initialization");
            return Err(CustodyError::SignatureMissing.into());
        }

        // the supplied bump must reproduce the supplied address, and must be
        // the canonical bump, so exactly one custody address exists per base
        let canonical_bump_seed =
            check_custody_address(program_id, base_address_info.key, custody_info.key)?;
        if bump_seed != canonical_bump_seed {
            msg!(
                "Supplied bump seed {} does not prove the custody address, expected {}",
                bump_seed,
                canonical_bump_seed,
            );
            return Err(CustodyError::InvalidProof.into());
        }

        if custody_info.data_len() != 0 {
            return Err(CustodyError::CustodyAlreadyInitialized.into());
        }

        // the custody account pays its own storage rent out of the funding
        let custody_space = get_packed_len::<Custody>();
        let rent = Rent::get()?;
        if funding_lamports < rent.minimum_balance(custody_space) {
            msg!(
                "Funding of {} lamports is below the rent-exempt minimum of {}",
                funding_lamports,
                rent.minimum_balance(custody_space),
            );
            return Err(CustodyError::FundingTooSmall.into());
        }

        invoke(
            &system_instruction::transfer(payer_info.key, custody_info.key, funding_lamports),
            &[payer_info.clone(), custody_info.clone()],
        )?;

        let custody_seeds = &[
            CUSTODY_PREFIX,
            base_address_info.key.as_ref(),
            &[bump_seed],
        ];
        let custody_signers = &[&custody_seeds[..]];

        invoke_signed(
            &system_instruction::allocate(custody_info.key, custody_space as u64),
            &[custody_info.clone()],
            custody_signers,
        )?;

        invoke_signed(
            &system_instruction::assign(custody_info.key, program_id),
            &[custody_info.clone()],
            custody_signers,
        )?;

        let mut custody = try_from_slice_unchecked::<Custody>(&custody_info.data.borrow())?;
        custody.account_type = CustodyAccountType::Custody;
        custody.base_address = *base_address_info.key;
        custody.bump_seed = bump_seed;
        borsh::to_writer(&mut custody_info.data.borrow_mut()[..], &custody)?;

        Ok(())
    }

    fn process_transfer_from_custody(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        amount: u64,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let custody_info = next_account_info(account_info_iter)?;
        let mint_info = next_account_info(account_info_iter)?;
        let source_holding_info = next_account_info(account_info_iter)?;
        let destination_holding_info = next_account_info(account_info_iter)?;
        let token_program_info = next_account_info(account_info_iter)?;

        check_token_program(token_program_info.key)?;

        let custody = Custody::from_account_info(custody_info, program_id)?;

        // re-derive the custody address from the stored pair; this is the
        // authority proof, in place of any signature
        verify_custody_authority(
            program_id,
            &custody.base_address,
            custody.bump_seed,
            custody_info.key,
        )?;

        let source_holding = Account::unpack(&source_holding_info.try_borrow_data()?)?;
        if source_holding.owner != *custody_info.key || source_holding.mint != *mint_info.key {
            return Err(CustodyError::InvalidHoldingAccount.into());
        }

        if source_holding.amount < amount {
            msg!(
                "Holding account balance {} does not cover transfer of {}",
                source_holding.amount,
                amount,
            );
            return Err(CustodyError::InsufficientBalance.into());
        }

        let decimals = Mint::unpack(&mint_info.try_borrow_data()?)?.decimals;

        let custody_seeds = &[
            CUSTODY_PREFIX,
            custody.base_address.as_ref(),
            &[custody.bump_seed],
        ];
        let custody_signers = &[&custody_seeds[..]];

        invoke_signed(
            &spl_token::instruction::transfer_checked(
                token_program_info.key,
                source_holding_info.key,
                mint_info.key,
                destination_holding_info.key,
                custody_info.key,
                &[],
                amount,
                decimals,
            )?,
            &[
                source_holding_info.clone(),
                mint_info.clone(),
                destination_holding_info.clone(),
                custody_info.clone(),
            ],
            custody_signers,
        )?;

        Ok(())
    }

    /// Processes [Instruction](enum.Instruction.html).
    pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], input: &[u8]) -> ProgramResult {
        let instruction = CustodyInstruction::try_from_slice(input)?;
        match instruction {
            CustodyInstruction::InitializeCustody {
                funding_lamports,
                bump_seed,
            } => {
                msg!("Instruction: InitializeCustody");
                Self::process_initialize_custody(program_id, accounts, funding_lamports, bump_seed)
            }
            CustodyInstruction::TransferFromCustody { amount } => {
                msg!("Instruction: TransferFromCustody");
                Self::process_transfer_from_custody(program_id, accounts, amount)
            }
        }
    }
}
