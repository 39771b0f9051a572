/// Log a warning, through `tracing` when the feature is enabled (off-chain users of the crate)
/// or the program log otherwise.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::warn!($($arg)*);
        }
        #[cfg(not(feature = "tracing"))]
        {
            ::anchor_lang::prelude::msg!($($arg)*);
        }
    };
}

