#![allow(clippy::result_large_err)] //Needed because we can't change Anchor result type
pub mod errors;
pub mod oracles;
pub mod price_update;
pub mod program_id;
pub mod states;
pub mod utils;

mod handlers;

pub use anchor_lang;
use anchor_lang::prelude::*;
use handlers::*;
pub use num_enum;
use program_id::PROGRAM_ID;

pub use crate::{
    errors::*,
    handlers::handler_update_configuration::UpdateConfigurationMode,
    price_update::{AssetSlot, AttestationOutcome, SkipReason, StoreReport, UpdatePolicy},
    states::{Configuration, PriceStore, SlotRecord, SlotStore},
};

declare_id!(PROGRAM_ID);

// Note: Need to be directly integer value to not confuse the IDL generator
pub const SLOT_SIZE: usize = 92;
// Note: Need to be directly integer value to not confuse the IDL generator
pub const MAX_DATA_SLOTS: usize = 85;
// 63 * 127 bytes, data slots followed by the system slot
pub const SLOT_REGION_SIZE: usize = 8001;

#[program]
pub mod pricecaster {

    use super::*;

    pub fn bootstrap(
        ctx: Context<Bootstrap>,
        feed_name: String,
        trusted_relay: Pubkey,
    ) -> Result<()> {
        handler_bootstrap::process(ctx, feed_name, trusted_relay)
    }

    /// `assignments` gives the asset and slot of each attestation of `payload`, in order.
    /// The transaction must also call the trusted relay.
    pub fn store_prices<'info>(
        ctx: Context<'_, '_, '_, 'info, StorePrices<'info>>,
        feed_name: String,
        assignments: Vec<AssetSlot>,
        payload: Vec<u8>,
    ) -> Result<()> {
        // `feed_name` is used in `StorePrices` for computing the seeds of the Configuration account
        let _ = feed_name;
        handler_store_prices::process(ctx, &assignments, &payload)
    }

    pub fn allocate_slot(ctx: Context<AllocateSlot>, feed_name: String, asset_id: u64) -> Result<()> {
        let _ = feed_name;
        handler_allocate_slot::process(ctx, asset_id)
    }

    pub fn reset_store(ctx: Context<ResetStore>, feed_name: String) -> Result<()> {
        handler_reset_store::process(ctx, feed_name)
    }

    pub fn set_flags(ctx: Context<SetFlags>, feed_name: String, flags: u8) -> Result<()> {
        let _ = feed_name;
        handler_set_flags::process(ctx, flags)
    }

    pub fn update_configuration(
        ctx: Context<UpdateConfiguration>,
        feed_name: String,
        mode: u64,
        value: u64,
    ) -> Result<()> {
        let _ = feed_name;
        handler_update_configuration::process(ctx, mode, value)
    }
}
