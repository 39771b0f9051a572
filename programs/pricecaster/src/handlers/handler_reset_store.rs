use anchor_lang::prelude::*;

use crate::{oracles::check_context, states::SlotStore, utils::pdas::seeds};

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct ResetStore<'info> {
    pub owner: Signer<'info>,

    #[account(seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, has_one = owner, has_one = price_store)]
    pub configuration: AccountLoader<'info, crate::Configuration>,

    #[account(mut)]
    pub price_store: AccountLoader<'info, crate::PriceStore>,
}

pub fn process(ctx: Context<ResetStore>, feed_name: String) -> Result<()> {
    check_context(&ctx)?;

    let mut price_store = ctx.accounts.price_store.load_mut()?;
    let mut store = SlotStore::new(&mut price_store.region)?;

    msg!(
        "Resetting store of feed {}, discarding {} slots",
        feed_name,
        store.entry_count()
    );
    store.zero_all();

    Ok(())
}
