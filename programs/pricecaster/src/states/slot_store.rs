//! Slot based view over the price store region.
//!
//! The region holds [`MAX_DATA_SLOTS`] data slots of [`SLOT_SIZE`] bytes followed by the system
//! slot. Byte 0 of the system slot is the number of allocated data slots, byte 1 holds the
//! configuration flags. Slots are allocated sequentially and never freed, only [`SlotStore::zero_all`]
//! discards them.

use arrayref::array_mut_ref;

use crate::states::slot_record::SlotRecord;
use crate::utils::budget::ComputeBudget;
use crate::utils::consts::{
    SCAN_COST_PER_SLOT, SYSTEM_SLOT_COUNT_BYTE, SYSTEM_SLOT_FLAGS_BYTE, SYSTEM_SLOT_INDEX,
};
use crate::{PricecasterError, PricecasterResult, MAX_DATA_SLOTS, SLOT_REGION_SIZE, SLOT_SIZE};

pub struct SlotStore<'a> {
    region: &'a mut [u8; SLOT_REGION_SIZE],
}

impl<'a> SlotStore<'a> {
    pub fn new(region: &'a mut [u8]) -> PricecasterResult<Self> {
        let region = <&mut [u8; SLOT_REGION_SIZE]>::try_from(region)
            .map_err(|_| PricecasterError::BadStoreRegionSize)?;
        Ok(Self { region })
    }

    pub fn entry_count(&self) -> u8 {
        self.region[SYSTEM_SLOT_COUNT_BYTE]
    }

    pub fn read_flags(&self) -> u8 {
        self.region[SYSTEM_SLOT_FLAGS_BYTE]
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.region[SYSTEM_SLOT_FLAGS_BYTE] = flags;
    }

    /// Allocate the next data slot for `asset_id` and return its index.
    ///
    /// The new slot only carries the asset id, its price fields stay zero until the first update.
    pub fn allocate(&mut self, asset_id: u64, budget: &mut ComputeBudget) -> PricecasterResult<u8> {
        let index = self.entry_count();
        if usize::from(index) >= MAX_DATA_SLOTS {
            return Err(PricecasterError::StoreCapacityExceeded);
        }
        if let Some(existing) = self.find_by_asset(asset_id, budget)? {
            crate::warn!("Asset {} already allocated at slot {}", asset_id, existing);
            return Err(PricecasterError::DuplicateAsset);
        }

        *self.slot_mut(usize::from(index)) = *SlotRecord::allocated(asset_id).as_bytes();
        self.region[SYSTEM_SLOT_COUNT_BYTE] = index + 1;

        Ok(index)
    }

    /// Raw slot at `index`, the index is only checked against the region bounds
    pub fn read(&self, index: usize) -> PricecasterResult<&SlotRecord> {
        if index > SYSTEM_SLOT_INDEX {
            return Err(PricecasterError::SlotIndexOutOfRange);
        }
        let start = index * SLOT_SIZE;
        Ok(bytemuck::from_bytes(&self.region[start..start + SLOT_SIZE]))
    }

    pub fn write(&mut self, index: usize, data: &[u8]) -> PricecasterResult {
        let data: &[u8; SLOT_SIZE] = data
            .try_into()
            .map_err(|_| PricecasterError::BadSlotDataLength)?;
        if index >= usize::from(self.entry_count()) {
            return Err(PricecasterError::SlotNotAllocated);
        }
        *self.slot_mut(index) = *data;
        Ok(())
    }

    /// Linear scan of the allocated slots for `asset_id`, budget is ensured for the whole
    /// scan before it starts.
    pub fn find_by_asset(
        &self,
        asset_id: u64,
        budget: &mut ComputeBudget,
    ) -> PricecasterResult<Option<u8>> {
        let count = self.entry_count();
        budget.ensure_budget(u64::from(count) * SCAN_COST_PER_SLOT)?;

        let key = asset_id.to_be_bytes();
        for index in 0..count {
            budget.consume(SCAN_COST_PER_SLOT)?;
            let start = usize::from(index) * SLOT_SIZE;
            if self.region[start..start + 8] == key {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Allocated data slots, in allocation order
    pub fn allocated_slots(&self) -> impl Iterator<Item = &SlotRecord> + '_ {
        (0..usize::from(self.entry_count())).map(move |index| {
            let start = index * SLOT_SIZE;
            bytemuck::from_bytes::<SlotRecord>(&self.region[start..start + SLOT_SIZE])
        })
    }

    pub fn zero_all(&mut self) {
        self.region.fill(0);
    }

    fn slot_mut(&mut self, index: usize) -> &mut [u8; SLOT_SIZE] {
        array_mut_ref![self.region, index * SLOT_SIZE, SLOT_SIZE]
    }
}
