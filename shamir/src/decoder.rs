//! arbitrary radix decoding of share values

use crate::error::{RecoveryError, Result};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::ops::RangeInclusive;

pub const SUPPORTED_BASES: RangeInclusive<u32> = 2..=36;

fn check_base(base: u32) -> Result<()> {
    if SUPPORTED_BASES.contains(&base) {
        Ok(())
    } else {
        Err(RecoveryError::InvalidBase { base })
    }
}

/// Decodes `encoded_value` written in `base` into an exact integer.
///
/// Digits above 9 are the letters `a`..`z` in either case. The value is
/// accumulated in a `BigInt`, so arbitrarily long strings keep every digit.
pub fn decode(encoded_value: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;

    if encoded_value.is_empty() {
        return Err(RecoveryError::MalformedInput(format!(
            "empty value for base {base}"
        )));
    }

    let radix = BigInt::from(base);

    encoded_value
        .chars()
        .try_fold(BigInt::zero(), |accumulator, digit| {
            let value = digit
                .to_digit(base)
                .ok_or(RecoveryError::InvalidDigit { digit, base })?;

            Ok(accumulator * &radix + value)
        })
}

/// Writes `value` in `base` using lowercase digits.
pub fn encode(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;

    if value.is_negative() {
        return Err(RecoveryError::MalformedInput(format!(
            "negative value {value} has no share encoding"
        )));
    }

    Ok(value.to_str_radix(base))
}
