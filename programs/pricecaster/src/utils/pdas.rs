use anchor_lang::prelude::*;

pub mod seeds {
    pub const CONFIG: &[u8] = b"conf";
}

pub fn config_pubkey(feed_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::CONFIG, feed_name.as_bytes()], &crate::id())
}
