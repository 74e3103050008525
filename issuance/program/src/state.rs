//! State transition types

use {
    crate::error::IssuanceError,
    borsh::{BorshDeserialize, BorshSchema, BorshSerialize},
    solana_program::{
        account_info::AccountInfo, borsh1::try_from_slice_unchecked, program_error::ProgramError,
        pubkey::Pubkey,
    },
};

/// Issuance account type
#[derive(Clone, Debug, Default, PartialEq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub enum IssuanceAccountType {
    /// Uninitialized account
    #[default]
    Uninitialized,
    /// Registry record
    Registry,
}

/// Registry record for the issuance program, created exactly once and
/// referenced by every later instruction
#[derive(Clone, Debug, Default, PartialEq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct IssuanceRegistry {
    /// Account type, reserved for future compat
    pub account_type: IssuanceAccountType,
    /// The wallet that created the registry
    pub authority: Pubkey,
}
impl IssuanceRegistry {
    /// Create an IssuanceRegistry struct from its account info
    pub fn from_account_info(
        account_info: &AccountInfo,
        program_id: &Pubkey,
    ) -> Result<Self, ProgramError> {
        // registry is allocated and owned by this program
        if account_info.data_len() == 0 || account_info.owner != program_id {
            return Err(IssuanceError::InvalidRegistryAccount.into());
        }

        let registry = try_from_slice_unchecked::<IssuanceRegistry>(&account_info.data.borrow())?;

        // registry is well-typed
        if registry.account_type != IssuanceAccountType::Registry {
            return Err(IssuanceError::InvalidRegistryAccount.into());
        }

        Ok(registry)
    }
}
