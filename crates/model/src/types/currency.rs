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

//! Represents a medium of exchange identified by a currency code.

use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use sterling_core::correctness::{FAILED, check_nonempty_string, check_valid_string};
use ustr::Ustr;

use super::fixed::check_fixed_precision;
use crate::{
    enums::CurrencyType,
    error::MoneyError,
    registry::{BUILTIN_CURRENCIES, CurrencyRegistry},
};

/// Represents a medium of exchange identified by a currency code.
///
/// Equality and hashing consider the `code` only, so two descriptors for the same code compare
/// equal even if their other fields differ.
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    /// The currency code (e.g., "USD", "EUR", "BTC").
    pub code: Ustr,
    /// The number of minor-unit digits, informational only (arithmetic always uses the fixed
    /// money scale).
    pub precision: u8,
    /// The ISO 4217 numeric code, zero when none is assigned.
    pub iso4217: u16,
    /// The full name of the currency.
    pub name: Ustr,
    /// The currency type, indicating its category (e.g. Fiat, Crypto).
    pub currency_type: CurrencyType,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not a valid string.
    /// - `name` is the empty string.
    /// - `precision` exceeds [`MONEY_SCALE`](super::fixed::MONEY_SCALE).
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        precision: u8,
        iso4217: u16,
        name: T,
        currency_type: CurrencyType,
    ) -> anyhow::Result<Self> {
        let code = code.as_ref();
        let name = name.as_ref();
        check_valid_string(code, "code")?;
        check_nonempty_string(name, "name")?;
        check_fixed_precision(precision)?;
        Ok(Self {
            code: Ustr::from(code),
            precision,
            iso4217,
            name: Ustr::from(name),
            currency_type,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(
        code: T,
        precision: u8,
        iso4217: u16,
        name: T,
        currency_type: CurrencyType,
    ) -> Self {
        Self::new_checked(code, precision, iso4217, name, currency_type).expect(FAILED)
    }

    /// Looks up the currency for `code` in the given `registry`.
    ///
    /// The code is normalized first (see [`normalize_code`]).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if the normalized code is not registered.
    pub fn from_registry<R>(code: &str, registry: &R) -> Result<Self, MoneyError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let code = normalize_code(code);
        registry
            .get(&code)
            .ok_or(MoneyError::UnknownCurrency(code))
    }

    /// Returns `true` if this is a fiat currency.
    #[must_use]
    pub fn is_fiat(&self) -> bool {
        self.currency_type == CurrencyType::Fiat
    }

    /// Returns `true` if this is a cryptocurrency.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.currency_type == CurrencyType::Crypto
    }

    /// Returns `true` if this is a commodity-backed currency (such as a precious metal).
    #[must_use]
    pub fn is_commodity_backed(&self) -> bool {
        self.currency_type == CurrencyType::CommodityBacked
    }
}

/// Returns the normalized form of a currency `code`: surrounding whitespace trimmed and ASCII
/// letters uppercased.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={}, iso4217={}, name='{}', currency_type={})",
            stringify!(Currency),
            self.code,
            self.precision,
            self.iso4217,
            self.name,
            self.currency_type,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Parses a currency code against the built-in currency table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_registry(s, &*BUILTIN_CURRENCIES)
    }
}
