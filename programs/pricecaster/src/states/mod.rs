pub mod configuration;
pub mod price_store;
pub mod slot_record;
pub mod slot_store;

pub use configuration::Configuration;
pub use price_store::PriceStore;
pub use slot_record::SlotRecord;
pub use slot_store::SlotStore;
