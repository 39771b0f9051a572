use anchor_lang::prelude::*;

use crate::{utils::consts::PRICE_STORE_SIZE, SLOT_REGION_SIZE};

static_assertions::const_assert_eq!(PRICE_STORE_SIZE, std::mem::size_of::<PriceStore>());
static_assertions::const_assert_eq!(0, std::mem::size_of::<PriceStore>() % 8);
// Slot region holding the published prices, see `SlotStore` for the layout
#[account(zero_copy)]
pub struct PriceStore {
    pub region: [u8; SLOT_REGION_SIZE],
    _padding: [u8; 7],
}
