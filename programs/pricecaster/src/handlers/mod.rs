pub mod handler_allocate_slot;
pub mod handler_bootstrap;
pub mod handler_reset_store;
pub mod handler_set_flags;
pub mod handler_store_prices;
pub mod handler_update_configuration;

pub use handler_allocate_slot::*;
pub use handler_bootstrap::*;
pub use handler_reset_store::*;
pub use handler_set_flags::*;
pub use handler_store_prices::*;
pub use handler_update_configuration::*;
