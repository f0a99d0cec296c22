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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! A condition is a predicate which must be true just prior to the execution of some section of
//! code for correct behavior as per the design specification.
//!
//! Each check returns an `anyhow::Result` whose error message is prefixed with [`FAILED`], so
//! callers can either propagate the failure with `?` or escalate it with `.expect(FAILED)`.

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` is a valid identifier-like value.
///
/// # Errors
///
/// Returns an error if `s`:
/// - Is empty.
/// - Consists solely of whitespace characters.
/// - Contains one or more non-ASCII characters.
#[inline(always)]
pub fn check_valid_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        anyhow::bail!("{FAILED}: invalid string for '{param}', was empty")
    } else if s.chars().all(char::is_whitespace) {
        anyhow::bail!("{FAILED}: invalid string for '{param}', was all whitespace")
    } else if !s.is_ascii() {
        anyhow::bail!("{FAILED}: invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    }
    Ok(())
}

/// Checks the string `s` is not empty.
///
/// # Errors
///
/// Returns an error if `s` is empty.
#[inline(always)]
pub fn check_nonempty_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        anyhow::bail!("{FAILED}: invalid string for '{param}', was empty")
    }
    Ok(())
}

/// Checks the `u8` value is in the inclusive range [`l`, `r`].
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_in_range_inclusive_u8(value: u8, l: u8, r: u8, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("{FAILED}: invalid u8 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the string `s` is already trimmed and uppercase.
///
/// # Errors
///
/// Returns an error if `s` has surrounding whitespace or lowercase ASCII characters.
#[inline(always)]
pub fn check_trimmed_uppercase(s: &str, param: &str) -> anyhow::Result<()> {
    if s.trim() != s {
        anyhow::bail!("{FAILED}: invalid string for '{param}' had surrounding whitespace, was '{s}'")
    }
    if s.bytes().any(|b| b.is_ascii_lowercase()) {
        anyhow::bail!("{FAILED}: invalid string for '{param}' was not uppercase, was '{s}'")
    }
    Ok(())
}
