//! Error types

use {
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    thiserror::Error,
};

/// Errors that may be returned by the Issuance program.
#[derive(Clone, Debug, Eq, Error, num_derive::FromPrimitive, PartialEq)]
pub enum IssuanceError {
    // 0.
    /// Provided registry account is uninitialized, owned by another program,
    /// or otherwise invalid.
    #[error("InvalidRegistryAccount")]
    InvalidRegistryAccount,
    /// Provided metadata account does not match the metadata address derived
    /// for the mint.
    #[error("InvalidMetadataAccount")]
    InvalidMetadataAccount,
    /// The metadata account for the mint is already occupied, so the token
    /// identity has already been used.
    #[error("MetadataTargetCollision")]
    MetadataTargetCollision,
    /// Provided holding account does not match the associated token address
    /// derived for the owner and mint.
    #[error("InvalidHoldingAccount")]
    InvalidHoldingAccount,
    /// Signer is not the mint authority of the token.
    #[error("Unauthorized")]
    Unauthorized,

    // 5.
    /// Required signature is missing.
    #[error("SignatureMissing")]
    SignatureMissing,
}
impl From<IssuanceError> for ProgramError {
    fn from(e: IssuanceError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
impl<T> DecodeError<T> for IssuanceError {
    fn type_of() -> &'static str {
        "Issuance Error"
    }
}
impl PrintProgramError for IssuanceError {
    fn print<E>(&self)
    where
        E: 'static
            + std::error::Error
            + DecodeError<E>
            + PrintProgramError
            + num_traits::FromPrimitive,
    {
        match self {
            IssuanceError::InvalidRegistryAccount => {
                msg!("Error: Provided registry account is uninitialized, owned by another program, or otherwise invalid.")
            }
            IssuanceError::InvalidMetadataAccount => {
                msg!("Error: Provided metadata account does not match the metadata address derived for the mint.")
            }
            IssuanceError::MetadataTargetCollision => {
                msg!("Error: The metadata account for the mint is already occupied.")
            }
            IssuanceError::InvalidHoldingAccount => {
                msg!("Error: Provided holding account does not match the associated token address derived for the owner and mint.")
            }
            IssuanceError::Unauthorized => {
                msg!("Error: Signer is not the mint authority of the token.")
            }
            IssuanceError::SignatureMissing => msg!("Error: Required signature is missing."),
        }
    }
}
