use crate::{MAX_DATA_SLOTS, SLOT_REGION_SIZE, SLOT_SIZE};

pub const CONFIGURATION_SIZE: usize = 384;
pub const PRICE_STORE_SIZE: usize = 8008;

/// Index of the trailing system slot, right after the last data slot
pub const SYSTEM_SLOT_INDEX: usize = MAX_DATA_SLOTS;
pub const SYSTEM_SLOT_OFFSET: usize = SYSTEM_SLOT_INDEX * SLOT_SIZE;
pub const SYSTEM_SLOT_COUNT_BYTE: usize = SYSTEM_SLOT_OFFSET;
pub const SYSTEM_SLOT_FLAGS_BYTE: usize = SYSTEM_SLOT_OFFSET + 1;

static_assertions::const_assert!((SYSTEM_SLOT_INDEX + 1) * SLOT_SIZE <= SLOT_REGION_SIZE);
static_assertions::const_assert!(MAX_DATA_SLOTS <= u8::MAX as usize);

/// Normalized prices are expressed in 10^-12 units of the quote currency
pub const PICO_DECIMALS: u8 = 12;
pub const MAX_EXPONENT_MAGNITUDE: u32 = 12;
pub const MAX_ASSET_DECIMALS: u8 = 19;

pub const NATIVE_ASSET_ID: u64 = 0;
pub const NATIVE_ASSET_DECIMALS: u8 = 6;

pub const DEFAULT_MAX_ATTESTATIONS: u16 = 5;

// Execution budget model, expressed in abstract host units
pub const BASE_CALL_BUDGET: u64 = 700;
pub const AUXILIARY_UNIT_BUDGET: u64 = 700;
pub const AUXILIARY_FEE: u64 = 1_000;
pub const DEFAULT_FEE_CEILING: u64 = 16 * AUXILIARY_FEE;
pub const STORE_COST_PER_ATTESTATION: u64 = 1_000;
pub const SCAN_COST_PER_SLOT: u64 = 40;
