pub mod helper;
pub mod instructions;
pub mod payload;
pub mod store_proxy;
