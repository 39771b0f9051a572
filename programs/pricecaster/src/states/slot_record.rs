use arrayref::array_ref;
use bytemuck::{Pod, Zeroable};

use crate::oracles::pyth_batch::{Attestation, PRICE_BLOCK_SIZE, TIME_BLOCK_SIZE};
use crate::SLOT_SIZE;

static_assertions::const_assert_eq!(SLOT_SIZE, std::mem::size_of::<SlotRecord>());

/// One data slot of the price store, all integers are big-endian.
///
/// The price and time blocks are verbatim copies of the matching attestation ranges.
#[derive(Pod, Zeroable, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct SlotRecord {
    pub asset_id: [u8; 8],
    pub normalized_price: [u8; 8],
    pub price_block: [u8; PRICE_BLOCK_SIZE],
    pub time_block: [u8; TIME_BLOCK_SIZE],
}

impl SlotRecord {
    /// Freshly allocated slot, only the asset id is set
    pub fn allocated(asset_id: u64) -> Self {
        Self {
            asset_id: asset_id.to_be_bytes(),
            ..Self::zeroed()
        }
    }

    pub fn from_attestation(
        asset_id: u64,
        normalized_price: u64,
        attestation: &Attestation<'_>,
    ) -> Self {
        Self {
            asset_id: asset_id.to_be_bytes(),
            normalized_price: normalized_price.to_be_bytes(),
            price_block: *attestation.price_block(),
            time_block: *attestation.time_block(),
        }
    }

    pub fn as_bytes(&self) -> &[u8; SLOT_SIZE] {
        bytemuck::cast_ref(self)
    }

    pub fn asset_id(&self) -> u64 {
        u64::from_be_bytes(self.asset_id)
    }

    pub fn normalized_price(&self) -> u64 {
        u64::from_be_bytes(self.normalized_price)
    }

    pub fn price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.price_block, 0, 8])
    }

    pub fn confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.price_block, 8, 8])
    }

    pub fn exponent(&self) -> i32 {
        i32::from_be_bytes(*array_ref![self.price_block, 16, 4])
    }

    pub fn ema_price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.price_block, 20, 8])
    }

    pub fn ema_confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.price_block, 28, 8])
    }

    pub fn attestation_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.time_block, 0, 8])
    }

    /// Zero until the first price is written
    pub fn publish_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.time_block, 8, 8])
    }

    pub fn prev_publish_time(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.time_block, 16, 8])
    }

    pub fn prev_price(&self) -> i64 {
        i64::from_be_bytes(*array_ref![self.time_block, 24, 8])
    }

    pub fn prev_confidence(&self) -> u64 {
        u64::from_be_bytes(*array_ref![self.time_block, 32, 8])
    }
}

impl std::fmt::Debug for SlotRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotRecord")
            .field("asset_id", &self.asset_id())
            .field("normalized_price", &self.normalized_price())
            .field("price", &self.price())
            .field("confidence", &self.confidence())
            .field("exponent", &self.exponent())
            .field("ema_price", &self.ema_price())
            .field("ema_confidence", &self.ema_confidence())
            .field("attestation_time", &self.attestation_time())
            .field("publish_time", &self.publish_time())
            .field("prev_publish_time", &self.prev_publish_time())
            .field("prev_price", &self.prev_price())
            .field("prev_confidence", &self.prev_confidence())
            .finish()
    }
}
