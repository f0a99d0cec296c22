// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for handling fixed-scale decimal arithmetic.
//!
//! This module provides constants and functions that enforce a fixed-scale strategy, ensuring
//! every derived money amount carries exactly [`MONEY_SCALE`] fractional digits. Digits beyond
//! the scale are truncated towards zero, never rounded.
//!
//! Operands are widened to 256-bit integers so each result is computed exactly before it is
//! truncated. A [`Decimal`] operation would first round to its 96-bit mantissa.

use alloy_primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy};
use sterling_core::correctness::check_in_range_inclusive_u8;

/// The number of fractional digits retained by every arithmetic result.
pub const MONEY_SCALE: u32 = 14;

/// The maximum number of fractional digits a [`Decimal`] can represent.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Checks a currency `precision` does not exceed [`MONEY_SCALE`].
///
/// # Errors
///
/// Returns an error if `precision` exceeds [`MONEY_SCALE`].
pub fn check_fixed_precision(precision: u8) -> anyhow::Result<()> {
    check_in_range_inclusive_u8(precision, 0, MONEY_SCALE as u8, "precision")
}

/// Truncates `value` towards zero at [`MONEY_SCALE`] fractional digits.
///
/// Values which already have fewer fractional digits are returned unchanged.
#[must_use]
pub fn truncate_to_scale(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero)
}

/// Returns the exact sum `lhs + rhs` truncated to [`MONEY_SCALE`].
///
/// Both operands must be non-negative. Returns `None` if the result does not fit a
/// [`Decimal`] at [`MONEY_SCALE`].
#[must_use]
pub fn add_truncated(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (a, a_scale) = widen(lhs);
    let (b, b_scale) = widen(rhs);
    let scale = a_scale.max(b_scale);
    let a = a.checked_mul(pow10(scale - a_scale))?;
    let b = b.checked_mul(pow10(scale - b_scale))?;
    narrow(a.checked_add(b)?, scale)
}

/// Returns the exact difference `lhs - rhs` truncated to [`MONEY_SCALE`].
///
/// Both operands must be non-negative. Returns `None` if `rhs` exceeds `lhs` or the result
/// does not fit a [`Decimal`] at [`MONEY_SCALE`].
#[must_use]
pub fn sub_truncated(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (a, a_scale) = widen(lhs);
    let (b, b_scale) = widen(rhs);
    let scale = a_scale.max(b_scale);
    let a = a.checked_mul(pow10(scale - a_scale))?;
    let b = b.checked_mul(pow10(scale - b_scale))?;
    narrow(a.checked_sub(b)?, scale)
}

/// Returns the exact product `lhs * rhs` truncated to [`MONEY_SCALE`].
///
/// Both operands must be non-negative. Returns `None` if the result does not fit a
/// [`Decimal`] at [`MONEY_SCALE`].
#[must_use]
pub fn mul_truncated(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (a, a_scale) = widen(lhs);
    let (b, b_scale) = widen(rhs);
    narrow(a.checked_mul(b)?, a_scale + b_scale)
}

/// Returns the quotient `lhs / rhs` truncated to [`MONEY_SCALE`].
///
/// Both operands must be non-negative. Returns `None` if `rhs` is zero or the result does
/// not fit a [`Decimal`] at [`MONEY_SCALE`].
#[must_use]
pub fn div_truncated(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (a, a_scale) = widen(lhs);
    let (b, b_scale) = widen(rhs);
    // (a / 10^a_scale) / (b / 10^b_scale) * 10^MONEY_SCALE
    let numerator = a.checked_mul(pow10(b_scale + MONEY_SCALE))?;
    let denominator = b.checked_mul(pow10(a_scale))?;
    narrow(numerator.checked_div(denominator)?, MONEY_SCALE)
}

fn widen(value: Decimal) -> (U256, u32) {
    (U256::from(value.mantissa().unsigned_abs()), value.scale())
}

fn pow10(exp: u32) -> U256 {
    U256::from(10u8).pow(U256::from(exp))
}

// Converts the exact value `raw / 10^scale` to a decimal at the money scale.
fn narrow(raw: U256, scale: u32) -> Option<Decimal> {
    let fixed = if scale >= MONEY_SCALE {
        raw / pow10(scale - MONEY_SCALE)
    } else {
        raw.checked_mul(pow10(MONEY_SCALE - scale))?
    };

    // Decimal mantissas are 96 bits wide
    if fixed.bit_len() > 96 {
        return None;
    }
    let limbs = fixed.as_limbs();
    let mantissa = (i128::from(limbs[1]) << 64) | i128::from(limbs[0]);
    Decimal::try_from_i128_with_scale(mantissa, MONEY_SCALE).ok()
}
