use anchor_lang::prelude::*;
use num_enum::TryFromPrimitive;

use crate::{
    oracles::check_context, utils::pdas::seeds, PricecasterError, PricecasterResult, MAX_DATA_SLOTS,
};

#[derive(TryFromPrimitive, PartialEq, Eq, Clone, Copy, Debug)]
#[repr(u64)]
pub enum UpdateConfigurationMode {
    MaxAttestations = 0,
    FeeCeiling = 1,
}

impl UpdateConfigurationMode {
    pub fn to_u64(self) -> u64 {
        self as u64
    }
}

#[derive(Accounts)]
#[instruction(feed_name: String)]
pub struct UpdateConfiguration<'info> {
    pub owner: Signer<'info>,

    #[account(mut, seeds = [seeds::CONFIG, feed_name.as_bytes()], bump, has_one = owner)]
    pub configuration: AccountLoader<'info, crate::Configuration>,
}

pub fn process(ctx: Context<UpdateConfiguration>, mode: u64, value: u64) -> Result<()> {
    check_context(&ctx)?;

    let mode = mode_from_u64(mode)?;
    let mut configuration = ctx.accounts.configuration.load_mut()?;

    match mode {
        UpdateConfigurationMode::MaxAttestations => {
            let max_attestations = max_attestations_from_value(value)?;
            msg!(
                "Setting max attestations from {} to {}",
                configuration.max_attestations,
                max_attestations
            );
            configuration.max_attestations = max_attestations;
        }
        UpdateConfigurationMode::FeeCeiling => {
            msg!(
                "Setting fee ceiling from {} to {}",
                configuration.fee_ceiling,
                value
            );
            configuration.fee_ceiling = value;
        }
    }

    Ok(())
}

fn mode_from_u64(mode: u64) -> PricecasterResult<UpdateConfigurationMode> {
    UpdateConfigurationMode::try_from(mode).map_err(|_| {
        msg!("Unknown configuration mode {}", mode);
        PricecasterError::InvalidConfigurationMode
    })
}

/// A batch can't hold more attestations than there are data slots
fn max_attestations_from_value(value: u64) -> PricecasterResult<u16> {
    u16::try_from(value)
        .ok()
        .filter(|v| (1..=MAX_DATA_SLOTS as u16).contains(v))
        .ok_or(PricecasterError::InvalidConfigurationMode)
}
