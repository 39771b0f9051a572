use decimal_wad::decimal::U192;

use crate::utils::consts::{MAX_ASSET_DECIMALS, MAX_EXPONENT_MAGNITUDE, PICO_DECIMALS};
use crate::{PricecasterError, PricecasterResult};

/// Convert a feed price into picounits of quote currency per base unit of the asset.
///
/// `price * 10^exponent` is the price of one whole token, `10^decimals` base units make a token:
///
/// - `exponent >= 0`: `price * 10^12 * 10^exponent / 10^decimals`
/// - `exponent < 0`:  `price * 10^12 / (10^decimals * 10^|exponent|)`
///
/// Intermediate values are computed on 192 bits so that nothing is truncated before the final
/// division. The result must fit in a `u64`.
pub fn normalize_price(price: i64, exponent: i32, decimals: u8) -> PricecasterResult<u64> {
    if exponent.unsigned_abs() > MAX_EXPONENT_MAGNITUDE {
        return Err(PricecasterError::ExponentOutOfRange);
    }
    if decimals > MAX_ASSET_DECIMALS {
        return Err(PricecasterError::DecimalsOutOfRange);
    }
    let price = u64::try_from(price).map_err(|_| PricecasterError::NegativePrice)?;
    // Checked above, fits in a u8
    let exponent_abs = exponent.unsigned_abs() as u8;

    let normalized = if exponent >= 0 {
        scale_up(price, exponent_abs, decimals)
    } else {
        scale_down(price, exponent_abs, decimals)
    };

    u192_to_u64(normalized)
}

fn scale_up(price: u64, exponent: u8, decimals: u8) -> U192 {
    let numerator =
        U192::from(price) * U192::from(ten_pow(PICO_DECIMALS)) * U192::from(ten_pow(exponent));
    numerator / U192::from(ten_pow(decimals))
}

fn scale_down(price: u64, exponent: u8, decimals: u8) -> U192 {
    let numerator = U192::from(price) * U192::from(ten_pow(PICO_DECIMALS));
    numerator / (U192::from(ten_pow(decimals)) * U192::from(ten_pow(exponent)))
}

fn u192_to_u64(value: U192) -> PricecasterResult<u64> {
    if value > U192::from(u64::MAX) {
        return Err(PricecasterError::MathOverflow);
    }
    Ok(value.as_u64())
}

pub fn ten_pow(exponent: u8) -> u128 {
    let value: u128 = match exponent {
        30 => 1_000_000_000_000_000_000_000_000_000_000,
        29 => 100_000_000_000_000_000_000_000_000_000,
        28 => 10_000_000_000_000_000_000_000_000_000,
        27 => 1_000_000_000_000_000_000_000_000_000,
        26 => 100_000_000_000_000_000_000_000_000,
        25 => 10_000_000_000_000_000_000_000_000,
        24 => 1_000_000_000_000_000_000_000_000,
        23 => 100_000_000_000_000_000_000_000,
        22 => 10_000_000_000_000_000_000_000,
        21 => 1_000_000_000_000_000_000_000,
        20 => 100_000_000_000_000_000_000,
        19 => 10_000_000_000_000_000_000,
        18 => 1_000_000_000_000_000_000,
        17 => 100_000_000_000_000_000,
        16 => 10_000_000_000_000_000,
        15 => 1_000_000_000_000_000,
        14 => 100_000_000_000_000,
        13 => 10_000_000_000_000,
        12 => 1_000_000_000_000,
        11 => 100_000_000_000,
        10 => 10_000_000_000,
        9 => 1_000_000_000,
        8 => 100_000_000,
        7 => 10_000_000,
        6 => 1_000_000,
        5 => 100_000,
        4 => 10_000,
        3 => 1_000,
        2 => 100,
        1 => 10,
        0 => 1,
        _ => panic!("no support for exponent: {exponent}"),
    };

    value
}
