use anchor_lang::prelude::Pubkey;
use solana_program::pubkey;

#[cfg(all(feature = "mainnet", feature = "localnet"))]
compile_error!("'mainnet' and 'localnet' features are mutually exclusive");

#[cfg(all(feature = "mainnet", feature = "devnet"))]
compile_error!("'mainnet' and 'devnet' features are mutually exclusive");

#[cfg(all(feature = "localnet", feature = "devnet"))]
compile_error!("'localnet' and 'devnet' features are mutually exclusive");

#[cfg(all(feature = "mainnet", feature = "staging"))]
compile_error!("'mainnet' and 'staging' features are mutually exclusive");

#[cfg(all(feature = "localnet", feature = "staging"))]
compile_error!("'localnet' and 'staging' features are mutually exclusive");

#[cfg(all(feature = "devnet", feature = "staging"))]
compile_error!("'devnet' and 'staging' features are mutually exclusive");

cfg_if::cfg_if! {
    if #[cfg(feature = "mainnet")] {
        pub const PROGRAM_ID:Pubkey = pubkey!("CwQ9x4rKrib3TwiFmhbPzmWt6dVxkiU8S8ekaxQWJBxH");
    }
    else if #[cfg(feature = "staging")] {
        pub const PROGRAM_ID:Pubkey = pubkey!("HRhzRamXtNaG9CWr5N6KYZD5F2cNibGrDF3QH4EJQSxL");
    }
    else if #[cfg(feature = "localnet")] {
        pub const PROGRAM_ID:Pubkey = pubkey!("6i9gAWbN76ocESZ9RW2RTY2JFMaJkV5DXg33S8Xq8EXF");
    } else if #[cfg(feature = "devnet")] {
        pub const PROGRAM_ID:Pubkey = pubkey!("9uYR6Uks11aY9nddoU4kaoHp1tywXzVheCDd3m31Qbwn");
    } else {
        compile_error!("At least one of 'mainnet', 'staging', 'localnet' or 'devnet' feature need to be set");
    }
}
