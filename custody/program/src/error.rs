//! Error types

use {
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    thiserror::Error,
};

/// Errors that may be returned by the Custody program.
#[derive(Clone, Debug, Eq, Error, num_derive::FromPrimitive, PartialEq)]
pub enum CustodyError {
    // 0.
    /// No bump seed in the valid range produced an address off the ed25519
    /// curve for the given base address.
    #[error("DerivationExhausted")]
    DerivationExhausted,
    /// Supplied bump seed does not reproduce the supplied custody address, or
    /// is not the canonical bump for it.
    #[error("InvalidProof")]
    InvalidProof,
    /// Attempted to initialize a custody account that is already initialized.
    #[error("CustodyAlreadyInitialized")]
    CustodyAlreadyInitialized,
    /// Funding amount does not cover the rent-exempt minimum for the custody
    /// record.
    #[error("FundingTooSmall")]
    FundingTooSmall,
    /// Provided custody account is uninitialized, owned by another program, or
    /// otherwise invalid.
    #[error("InvalidCustodyAccount")]
    InvalidCustodyAccount,

    // 5.
    /// Provided holding account is not a token account owned by the custody
    /// address for the expected mint.
    #[error("InvalidHoldingAccount")]
    InvalidHoldingAccount,
    /// The stored seed and bump do not reproduce the custody address, so the
    /// authority proof fails.
    #[error("Unauthorized")]
    Unauthorized,
    /// The source holding account balance does not cover the requested
    /// transfer amount.
    #[error("InsufficientBalance")]
    InsufficientBalance,
    /// Required signature is missing.
    #[error("SignatureMissing")]
    SignatureMissing,
}
impl From<CustodyError> for ProgramError {
    fn from(e: CustodyError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
impl<T> DecodeError<T> for CustodyError {
    fn type_of() -> &'static str {
        "Custody Error"
    }
}
impl PrintProgramError for CustodyError {
    fn print<E>(&self)
    where
        E: 'static
            + std::error::Error
            + DecodeError<E>
            + PrintProgramError
            + num_traits::FromPrimitive,
    {
        match self {
            CustodyError::DerivationExhausted => {
                msg!("Error: No bump seed produced an off-curve address for the given base address.")
            }
            CustodyError::InvalidProof => {
                msg!("Error: Supplied bump seed does not reproduce the supplied custody address.")
            }
            CustodyError::CustodyAlreadyInitialized => {
                msg!("Error: Attempted to initialize a custody account that is already initialized.")
            }
            CustodyError::FundingTooSmall => {
                msg!("Error: Funding amount does not cover the rent-exempt minimum for the custody record.")
            }
            CustodyError::InvalidCustodyAccount => {
                msg!("Error: Provided custody account is uninitialized, owned by another program, or otherwise invalid.")
            }
            CustodyError::InvalidHoldingAccount => {
                msg!("Error: Provided holding account is not a token account owned by the custody address for the expected mint.")
            }
            CustodyError::Unauthorized => {
                msg!("Error: The stored seed and bump do not reproduce the custody address.")
            }
            CustodyError::InsufficientBalance => {
                msg!("Error: The source holding account balance does not cover the requested transfer amount.")
            }
            CustodyError::SignatureMissing => msg!("Error: Required signature is missing."),
        }
    }
}
