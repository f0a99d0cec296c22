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

//! Registries of valid currency codes consulted when constructing [`Money`](crate::types::Money).
//!
//! A registry is read-only once shared: [`CurrencyRegistry`] only hands out shared references,
//! and a [`CurrencyTable`] is populated through `&mut self` before it is handed to callers.

use std::{
    rc::Rc,
    sync::{Arc, LazyLock},
};

use ahash::AHashMap;
use sterling_core::correctness::check_trimmed_uppercase;

use crate::{currencies::builtin_currencies, types::Currency};

/// The built-in table of currencies, initialized on first use and read-only thereafter.
pub static BUILTIN_CURRENCIES: LazyLock<CurrencyTable> = LazyLock::new(CurrencyTable::builtin);

/// Provides the set of valid currencies keyed by normalized currency code.
pub trait CurrencyRegistry {
    /// Returns all registered currencies keyed by code.
    fn all(&self) -> &AHashMap<String, Currency>;

    /// Returns the currency registered for the exact `code`, if any.
    fn get(&self, code: &str) -> Option<Currency> {
        self.all().get(code).copied()
    }

    /// Returns `true` if a currency is registered for the exact `code`.
    fn contains(&self, code: &str) -> bool {
        self.all().contains_key(code)
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for &R {
    fn all(&self) -> &AHashMap<String, Currency> {
        (**self).all()
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for Arc<R> {
    fn all(&self) -> &AHashMap<String, Currency> {
        (**self).all()
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for Rc<R> {
    fn all(&self) -> &AHashMap<String, Currency> {
        (**self).all()
    }
}

/// An owned table of currencies implementing [`CurrencyRegistry`].
#[derive(Clone, Debug, Default)]
pub struct CurrencyTable {
    currencies: AHashMap<String, Currency>,
}

impl CurrencyTable {
    /// Creates a new empty [`CurrencyTable`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`CurrencyTable`] holding every built-in currency.
    #[must_use]
    pub fn builtin() -> Self {
        let currencies = builtin_currencies()
            .into_iter()
            .map(|currency| (currency.code.to_string(), currency))
            .collect();
        Self { currencies }
    }

    /// Creates a new [`CurrencyTable`] from the given `currencies`.
    ///
    /// Later entries for the same code replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if any currency code is not normalized (see [`CurrencyTable::register`]).
    pub fn from_currencies<I>(currencies: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Currency>,
    {
        let mut table = Self::new();
        for currency in currencies {
            table.register(currency, true)?;
        }
        Ok(table)
    }

    /// Registers the given `currency` in the table.
    ///
    /// - If `overwrite` is `true`, any existing currency with the same code will be replaced.
    /// - If `overwrite` is `false` and the code already exists, the operation is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is not already normalized (trimmed and uppercase),
    /// since such a code could never match a normalized lookup.
    pub fn register(&mut self, currency: Currency, overwrite: bool) -> anyhow::Result<()> {
        let code = currency.code.as_str();
        check_trimmed_uppercase(code, "code")?;

        match self.currencies.get(code) {
            Some(_) if !overwrite => {
                log::debug!("Currency {code} already registered, skipping");
                return Ok(());
            }
            Some(existing) => {
                log::warn!("Overwriting registered currency {existing:?} with {currency:?}");
            }
            None => log::debug!("Registering currency {code}"),
        }

        self.currencies.insert(code.to_string(), currency);
        Ok(())
    }

    /// Removes the currency registered for `code`, returning it if present.
    pub fn remove(&mut self, code: &str) -> Option<Currency> {
        self.currencies.remove(code)
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns `true` if no currencies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Returns the registered currency codes in sorted order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl CurrencyRegistry for CurrencyTable {
    fn all(&self) -> &AHashMap<String, Currency> {
        &self.currencies
    }
}
