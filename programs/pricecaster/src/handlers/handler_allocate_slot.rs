use anchor_lang::prelude::*;

use crate::{
    oracles::check_context,
    states::SlotStore,
    utils::{budget::ComputeBudget, pdas::seeds},
};

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct AllocateSlot<'info> {
    pub owner: Signer<'info>,

    #[account(seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, has_one = owner, has_one = price_store)]
    pub configuration: AccountLoader<'info, crate::Configuration>,

    #[account(mut)]
    pub price_store: AccountLoader<'info, crate::PriceStore>,
}

pub fn process(ctx: Context<AllocateSlot>, asset_id: u64) -> Result<()> {
    check_context(&ctx)?;

    let fee_ceiling = ctx.accounts.configuration.load()?.fee_ceiling;
    let mut budget = ComputeBudget::for_call(fee_ceiling);

    let mut price_store = ctx.accounts.price_store.load_mut()?;
    let mut store = SlotStore::new(&mut price_store.region)?;
    let index = store.allocate(asset_id, &mut budget)?;

    msg!(
        "Allocated slot {} for asset {}, {} slots in use",
        index,
        asset_id,
        store.entry_count()
    );

    Ok(())
}
