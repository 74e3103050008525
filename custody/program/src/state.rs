//! State transition types

use {
    crate::error::CustodyError,
    borsh::{BorshDeserialize, BorshSchema, BorshSerialize},
    solana_program::{
        account_info::AccountInfo, borsh1::try_from_slice_unchecked, program_error::ProgramError,
        pubkey::Pubkey,
    },
};

/// Custody account type
#[derive(Clone, Debug, Default, PartialEq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub enum CustodyAccountType {
    /// Uninitialized account
    #[default]
    Uninitialized,
    /// Custodial account
    Custody,
}

/// Custodial account record. This is the program's long-lived registry entry:
/// it is stored in the custodial account itself, at the derived address, and
/// carries everything needed to re-prove authority over that address.
#[derive(Clone, Debug, Default, PartialEq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct Custody {
    /// Account type, reserved for future compat
    pub account_type: CustodyAccountType,
    /// The base address the custody address was derived from
    pub base_address: Pubkey,
    /// The bump seed chosen at derivation time; must be supplied on every
    /// operation that proves authority over the custody address
    pub bump_seed: u8,
}
impl Custody {
    /// Create a Custody struct from its account info
    pub fn from_account_info(
        account_info: &AccountInfo,
        program_id: &Pubkey,
    ) -> Result<Self, ProgramError> {
        // custody is allocated and owned by this program
        if account_info.data_len() == 0 || account_info.owner != program_id {
            return Err(CustodyError::InvalidCustodyAccount.into());
        }

        let custody = try_from_slice_unchecked::<Custody>(&account_info.data.borrow())?;

        // custody is well-typed
        if custody.account_type != CustodyAccountType::Custody {
            return Err(CustodyError::InvalidCustodyAccount.into());
        }

        Ok(custody)
    }
}
