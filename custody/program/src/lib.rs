#![deny(missing_docs)]

//! A program for holding tokens in a custodial account with no private key,
//! authorized by seed derivation instead of a signature

pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

// export current sdk types for downstream users building with a different sdk
// version
pub use solana_program;
use {crate::error::CustodyError, solana_program::pubkey::Pubkey};

solana_program::declare_id!("5Ye5FgCuEjqUhjWo34mdkpickdof4iz6eUH37hGXybLL");

const CUSTODY_PREFIX: &[u8] = b"custody";

fn find_custody_address_and_bump(program_id: &Pubkey, base_address: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_PREFIX, base_address.as_ref()], program_id)
}

/// Find the canonical custody address for a given base address.
pub fn find_custody_address(program_id: &Pubkey, base_address: &Pubkey) -> Pubkey {
    find_custody_address_and_bump(program_id, base_address).0
}

/// Find the canonical custody address and bump seed for a given base address,
/// surfacing `DerivationExhausted` if every bump seed produces an address on
/// the ed25519 curve. Deterministic over its inputs.
pub fn try_find_custody_address_and_bump(
    program_id: &Pubkey,
    base_address: &Pubkey,
) -> Result<(Pubkey, u8), CustodyError> {
    Pubkey::try_find_program_address(&[CUSTODY_PREFIX, base_address.as_ref()], program_id)
        .ok_or(CustodyError::DerivationExhausted)
}

/// Verify that a base address and bump seed together reproduce the given
/// custody address. This is the entire authority proof for the custodial
/// account: anyone holding the stored pair can demonstrate that the address
/// has no corresponding private key and is controlled by this program alone.
pub fn verify_custody_authority(
    program_id: &Pubkey,
    base_address: &Pubkey,
    bump_seed: u8,
    custody_address: &Pubkey,
) -> Result<(), CustodyError> {
    let derived = Pubkey::create_program_address(
        &[CUSTODY_PREFIX, base_address.as_ref(), &[bump_seed]],
        program_id,
    )
    .map_err(|_| CustodyError::Unauthorized)?;

    if derived == *custody_address {
        Ok(())
    } else {
        Err(CustodyError::Unauthorized)
    }
}
