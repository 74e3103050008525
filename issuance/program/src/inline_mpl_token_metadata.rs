//! Inlined MPL token metadata types to avoid a dependency on the full
//! `mpl-token-metadata` crate; only the one instruction this program issues
//! is reproduced here.

solana_program::declare_id!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Instruction builders
pub mod instruction {
    use {
        super::state::{CreateMetadataAccountArgsV3, DataV2},
        solana_program::{
            instruction::{AccountMeta, Instruction},
            pubkey::Pubkey,
            system_program,
        },
    };

    /// Creates a `CreateMetadataAccountV3` instruction
    #[allow(clippy::too_many_arguments)]
    pub fn create_metadata_accounts_v3(
        program_id: Pubkey,
        metadata_account: Pubkey,
        mint: Pubkey,
        mint_authority: Pubkey,
        payer: Pubkey,
        update_authority: Pubkey,
        name: String,
        symbol: String,
        uri: String,
    ) -> Instruction {
        let mut data = vec![33]; // CreateMetadataAccountV3
        data.append(
            &mut borsh::to_vec(&CreateMetadataAccountArgsV3 {
                data: DataV2 {
                    name,
                    symbol,
                    uri,
                    seller_fee_basis_points: 0,
                    creators: None,
                    collection: None,
                    uses: None,
                },
                is_mutable: false,
                collection_details: None,
            })
            .unwrap(),
        );
        Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new(metadata_account, false),
                AccountMeta::new_readonly(mint, false),
                AccountMeta::new_readonly(mint_authority, true),
                AccountMeta::new(payer, true),
                AccountMeta::new_readonly(update_authority, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }
}

/// PDA lookups
pub mod pda {
    use solana_program::pubkey::Pubkey;

    const PREFIX: &str = "metadata";

    /// Find the metadata account address for the given mint
    pub fn find_metadata_account(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PREFIX.as_bytes(), super::id().as_ref(), mint.as_ref()],
            &super::id(),
        )
    }
}

/// Serialized argument types
pub mod state {
    use borsh::{BorshDeserialize, BorshSerialize};

    /// On-chain metadata fields
    #[derive(BorshSerialize, BorshDeserialize, PartialEq, Debug, Clone)]
    pub struct DataV2 {
        /// The name of the asset
        pub name: String,
        /// The symbol for the asset
        pub symbol: String,
        /// URI pointing to JSON representing the asset
        pub uri: String,
        /// Royalty basis points that go to creators in secondary sales
        /// (0-10000)
        pub seller_fee_basis_points: u16,
        /// UNSUPPORTED Array of creators, should be None
        pub creators: Option<u8>,
        /// UNSUPPORTED Collection, should be None
        pub collection: Option<u8>,
        /// UNSUPPORTED Uses, should be None
        pub uses: Option<u8>,
    }

    /// Args for create call
    #[derive(BorshSerialize, BorshDeserialize, PartialEq, Debug, Clone)]
    pub struct CreateMetadataAccountArgsV3 {
        /// Note that unique metadatas are disabled for now
        pub data: DataV2,
        /// Whether you want your metadata to be updateable in the future
        pub is_mutable: bool,
        /// UNSUPPORTED Collection details, should be None
        pub collection_details: Option<u8>,
    }
}
