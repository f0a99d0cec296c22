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

//! Core parsing functions.

/// Returns `true` if `s` is a plain unsigned decimal literal.
///
/// The accepted form is one or more ASCII digits, optionally followed by a single `.` and one
/// or more ASCII digits. Signs, whitespace, exponents, radix prefixes (`0x`, `0o`, `0b`),
/// digit separators and bare-dot forms such as `".5"` or `"5."` are all rejected.
#[must_use]
pub fn is_decimal_str(s: &str) -> bool {
    let (integer, fraction) = match s.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (s, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(integer) && fraction.is_none_or(all_digits)
}

/// Returns the number of fractional digits in the decimal string `s`.
///
/// Clamped to `u8::MAX` for very long fractions.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn precision_from_str(s: &str) -> u8 {
    match s.trim().split_once('.') {
        Some((_, fraction)) => fraction.len().min(u8::MAX as usize) as u8,
        None => 0,
    }
}
