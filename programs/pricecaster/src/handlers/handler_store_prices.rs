use anchor_lang::prelude::*;
use solana_program::sysvar::instructions::ID as SYSVAR_INSTRUCTIONS_ID;

use crate::{
    oracles::MintDecimals,
    price_update::{self, AssetSlot, UpdatePolicy},
    states::SlotStore,
    utils::{batch_auth, budget::ComputeBudget, pdas::seeds},
};

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct StorePrices<'info> {
    pub owner: Signer<'info>,

    // Owner is checked against the configuration with the rest of the transaction
    #[account(seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, has_one = price_store)]
    pub configuration: AccountLoader<'info, crate::Configuration>,

    #[account(mut)]
    pub price_store: AccountLoader<'info, crate::PriceStore>,

    /// CHECK: Sysvar fixed address
    #[account(address = SYSVAR_INSTRUCTIONS_ID)]
    pub instruction_sysvar_account_info: AccountInfo<'info>,
    // Note: use remaining accounts as the mints of the updated assets
}

pub fn process<'info>(
    ctx: Context<'_, '_, '_, 'info, StorePrices<'info>>,
    assignments: &[AssetSlot],
    payload: &[u8],
) -> Result<()> {
    let (current_index, instructions) =
        batch_auth::load_transaction_instructions(&ctx.accounts.instruction_sysvar_account_info)?;

    let configuration = ctx.accounts.configuration.load()?;
    let authorization = batch_auth::authorize_store(
        ctx.accounts.owner.key,
        &configuration.owner,
        &configuration.trusted_relay,
        current_index,
        &instructions,
    )?;

    let decimals = MintDecimals::from_accounts(ctx.remaining_accounts)?;
    let policy = UpdatePolicy {
        max_attestations: configuration.max_attestations.into(),
    };
    let mut budget = ComputeBudget::for_call(configuration.fee_ceiling);

    let mut price_store = ctx.accounts.price_store.load_mut()?;
    let mut store = SlotStore::new(&mut price_store.region)?;

    let report = price_update::store_prices(
        &mut store,
        &authorization,
        payload,
        assignments,
        &decimals,
        &policy,
        &mut budget,
    )?;

    msg!(
        "Stored {} prices, skipped {}, auxiliary ops {} fees {}",
        report.stored_count(),
        report.skipped_count(),
        budget.auxiliary_issued(),
        budget.fees_paid()
    );

    Ok(())
}
