use anchor_lang::prelude::*;

use crate::{
    oracles::check_context,
    states::SlotStore,
    utils::{list_set_bit_positions, pdas::seeds},
};

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct SetFlags<'info> {
    pub owner: Signer<'info>,

    #[account(seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, has_one = owner, has_one = price_store)]
    pub configuration: AccountLoader<'info, crate::Configuration>,

    #[account(mut)]
    pub price_store: AccountLoader<'info, crate::PriceStore>,
}

pub fn process(ctx: Context<SetFlags>, flags: u8) -> Result<()> {
    check_context(&ctx)?;

    let mut price_store = ctx.accounts.price_store.load_mut()?;
    let mut store = SlotStore::new(&mut price_store.region)?;

    msg!(
        "Setting flags from {:#010b} to {:#010b} == positions {:?}",
        store.read_flags(),
        flags,
        list_set_bit_positions(flags)
    );
    store.set_flags(flags);

    Ok(())
}
