pub mod pyth_batch;

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::state::Mint;
use solana_program::program_pack::Pack;

use crate::utils::consts::{NATIVE_ASSET_DECIMALS, NATIVE_ASSET_ID};
use crate::{warn, PricecasterError, PricecasterResult};

pub fn check_context<T>(ctx: &Context<T>) -> Result<()> {
    //make sure there are no extra accounts
    if !ctx.remaining_accounts.is_empty() {
        return err!(PricecasterError::UnexpectedAccount);
    }

    Ok(())
}

/// Source of the number of decimals of an asset, `None` when the asset is unknown.
pub trait AssetDecimals {
    fn decimals(&self, asset_id: u64) -> Option<u8>;
}

impl AssetDecimals for BTreeMap<u64, u8> {
    fn decimals(&self, asset_id: u64) -> Option<u8> {
        self.get(&asset_id).copied()
    }
}

/// Decimals of `asset_id`, the native asset is never looked up.
pub fn resolve_decimals(lookup: &impl AssetDecimals, asset_id: u64) -> PricecasterResult<u8> {
    if asset_id == NATIVE_ASSET_ID {
        return Ok(NATIVE_ASSET_DECIMALS);
    }
    lookup.decimals(asset_id).ok_or_else(|| {
        warn!("No decimals provided for asset {}", asset_id);
        PricecasterError::UnknownAssetDecimals
    })
}

/// Asset id of an SPL mint: little-endian integer made of the first 8 bytes of its address
pub fn asset_id_from_mint(mint: &Pubkey) -> u64 {
    let bytes = mint.to_bytes();
    u64::from_le_bytes(*arrayref::array_ref![bytes, 0, 8])
}

/// Decimals read from the SPL mints given as remaining accounts of an instruction.
#[derive(Debug, Default)]
pub struct MintDecimals {
    decimals: BTreeMap<u64, u8>,
}

impl MintDecimals {
    pub fn from_accounts(mints: &[AccountInfo]) -> Result<Self> {
        let mut decimals = BTreeMap::new();
        for mint_account_info in mints {
            if mint_account_info.owner != &anchor_spl::token::ID {
                warn!(
                    "Account {} is not owned by the token program",
                    mint_account_info.key()
                );
                return err!(PricecasterError::UnexpectedAccount);
            }
            let mint_decimals = {
                let mint_borrow = mint_account_info.data.borrow();
                Mint::unpack(&mint_borrow)
                    .map_err(|_| {
                        warn!("Account {} is not a mint", mint_account_info.key());
                        PricecasterError::UnableToDeserializeAccount
                    })?
                    .decimals
            };
            decimals.insert(asset_id_from_mint(mint_account_info.key), mint_decimals);
        }
        Ok(Self { decimals })
    }
}

impl AssetDecimals for MintDecimals {
    fn decimals(&self, asset_id: u64) -> Option<u8> {
        self.decimals.get(&asset_id).copied()
    }
}
