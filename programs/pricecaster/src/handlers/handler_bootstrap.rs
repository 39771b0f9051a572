use anchor_lang::prelude::*;

use crate::{states::SlotStore, utils::pdas::seeds};

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct Bootstrap<'info> {
    /// CHECK: At creation owner can be anyone, this ix can't override an existing feed
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    // The ability to create multiple feeds is mostly useful for tests
    #[account(init, seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, payer = owner, space = 8 + std::mem::size_of::<crate::Configuration>())]
    pub configuration: AccountLoader<'info, crate::Configuration>,

    // Account is pre-reserved/paid outside the program
    #[account(zero)]
    pub price_store: AccountLoader<'info, crate::PriceStore>,
}

pub fn process(ctx: Context<Bootstrap>, feed_name: String, trusted_relay: Pubkey) -> Result<()> {
    let mut price_store = ctx.accounts.price_store.load_init()?;
    SlotStore::new(&mut price_store.region)?.zero_all();

    let owner = ctx.accounts.owner.key();
    let mut configuration = ctx.accounts.configuration.load_init()?;
    configuration.init(owner, trusted_relay, ctx.accounts.price_store.key());

    msg!(
        "Bootstrapped feed {} owner {} trusted relay {}",
        feed_name,
        owner,
        trusted_relay
    );

    Ok(())
}
