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

//! Errors raised when constructing or operating on [`Money`](crate::types::Money).

use ustr::Ustr;

/// An invalid argument supplied to a money operation.
///
/// Every variant is an invalid-argument failure; the variant names the violated rule and the
/// message identifies the offending value.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MoneyError {
    /// The value is malformed, not strictly positive, or starts with `'0'` or `'-'`.
    #[error("Invalid argument: value '{0}' is not a positive number")]
    NotPositiveNumber(String),
    /// The normalized currency code is absent from the registry.
    #[error("Invalid argument: unknown currency '{0}'")]
    UnknownCurrency(String),
    /// The operands are denominated in different currencies.
    #[error("Invalid argument: currency {other} is not equal to {expected}")]
    CurrencyMismatch {
        /// The currency code of the receiver.
        expected: Ustr,
        /// The currency code of the other operand.
        other: Ustr,
    },
    /// The subtrahend exceeds the minuend.
    #[error("Invalid argument: result can not be negative, subtracting {subtrahend} from {minuend}")]
    NegativeResult {
        /// The amount being subtracted from.
        minuend: String,
        /// The amount being subtracted.
        subtrahend: String,
    },
    /// The value exceeds the precision or range of the decimal representation.
    #[error("Invalid argument: value '{0}' is not representable at the fixed money scale")]
    OutOfRange(String),
}
