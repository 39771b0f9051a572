pub mod batch_auth;
pub mod budget;
pub mod consts;
pub mod macros;
pub mod math;
pub mod pdas;

pub use decimal_wad;
use intbits::Bits;

/// Lists the bit positions (where LSB == 0) of all the set bits of the store flags.
/// NOTE: Only used for logging, flags have no meaning for this program.
pub fn list_set_bit_positions(flags: u8) -> Vec<u64> {
    let bits = u64::from(flags);
    (0..u8::N_BITS as u64).filter(|i| bits.bit(*i)).collect()
}
