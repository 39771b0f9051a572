use anchor_lang::prelude::*;

use crate::utils::consts::CONFIGURATION_SIZE;

static_assertions::const_assert_eq!(CONFIGURATION_SIZE, std::mem::size_of::<Configuration>());
static_assertions::const_assert_eq!(0, std::mem::size_of::<Configuration>() % 8);
// Configuration account of the program
#[account(zero_copy)]
pub struct Configuration {
    pub owner: Pubkey,
    /// Program that must appear next to every store instruction
    pub trusted_relay: Pubkey,
    pub price_store: Pubkey,
    /// Maximum fee paid for auxiliary budget in a single call
    pub fee_ceiling: u64,
    pub max_attestations: u16,
    _padding0: [u8; 6],
    _padding: [u64; 34],
}

impl Configuration {
    pub fn init(&mut self, owner: Pubkey, trusted_relay: Pubkey, price_store: Pubkey) {
        self.owner = owner;
        self.trusted_relay = trusted_relay;
        self.price_store = price_store;
        self.fee_ceiling = crate::utils::consts::DEFAULT_FEE_CEILING;
        self.max_attestations = crate::utils::consts::DEFAULT_MAX_ATTESTATIONS;
    }
}
