#![deny(missing_docs)]

//! A program for issuing fungible tokens with metadata and minting them into
//! associated holding accounts

pub mod error;
pub mod inline_mpl_token_metadata;
pub mod instruction;
pub mod processor;
pub mod state;

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

// export current sdk types for downstream users building with a different sdk
// version
pub use solana_program;

solana_program::declare_id!("44tzSJMQzjq7qs4H3E7tszE6Y3GScYbNQWJb2sJFZgWe");
