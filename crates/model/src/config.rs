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

//! Configuration for building a custom [`CurrencyTable`].
//!
//! A configuration is a TOML document of the form:
//!
//! ```toml
//! include_builtin = true
//! exclude = ["RUB"]
//!
//! [[currencies]]
//! code = "KES"
//! precision = 2
//! iso4217 = 404
//! name = "Kenyan shilling"
//! currency_type = "FIAT"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sterling_core::{correctness::check_trimmed_uppercase, env::get_env_var_opt};

use crate::{enums::CurrencyType, registry::CurrencyTable, types::Currency};

/// The environment variable holding the path of a currency table configuration file.
pub const CURRENCY_CONFIG_ENV_VAR: &str = "STERLING_CURRENCY_CONFIG";

/// Configuration for a single currency registered by a [`CurrencyTableConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    /// The currency code, already trimmed and uppercase.
    pub code: String,
    /// The number of minor-unit digits.
    pub precision: u8,
    /// The ISO 4217 numeric code, zero when none is assigned.
    #[serde(default)]
    pub iso4217: u16,
    /// The full name of the currency.
    pub name: String,
    /// The currency type.
    pub currency_type: CurrencyType,
}

impl CurrencyConfig {
    /// Converts the configuration into a validated [`Currency`].
    ///
    /// # Errors
    ///
    /// Returns an error if a field fails [`Currency::new_checked`].
    pub fn to_currency(&self) -> anyhow::Result<Currency> {
        Currency::new_checked(
            self.code.as_str(),
            self.precision,
            self.iso4217,
            self.name.as_str(),
            self.currency_type,
        )
        .with_context(|| format!("invalid currency config for '{}'", self.code))
    }
}

/// Configuration for [`CurrencyTable`] instances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyTableConfig {
    /// If the built-in currencies should seed the table.
    pub include_builtin: bool,
    /// Currency codes removed from the built-in set.
    pub exclude: Vec<String>,
    /// Additional currencies, replacing any built-in currency with the same code.
    pub currencies: Vec<CurrencyConfig>,
}

impl Default for CurrencyTableConfig {
    /// Creates a new default [`CurrencyTableConfig`] instance.
    fn default() -> Self {
        Self {
            include_builtin: true,
            exclude: Vec::new(),
            currencies: Vec::new(),
        }
    }
}

impl CurrencyTableConfig {
    /// Parses a [`CurrencyTableConfig`] from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match the schema.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse currency table config")
    }

    /// Reads a [`CurrencyTableConfig`] from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("Loading currency table config from {}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read currency table config {}", path.display()))?;
        Self::from_toml_str(&data)
            .with_context(|| format!("invalid currency table config {}", path.display()))
    }

    /// Reads a [`CurrencyTableConfig`] from the file named by the
    /// [`CURRENCY_CONFIG_ENV_VAR`] environment variable.
    ///
    /// Returns `Ok(None)` if the variable is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or parsed.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        Self::from_env_value(get_env_var_opt(CURRENCY_CONFIG_ENV_VAR))
    }

    /// Reads a [`CurrencyTableConfig`] from the file at `path`, the value of the
    /// [`CURRENCY_CONFIG_ENV_VAR`] environment variable.
    ///
    /// Returns `Ok(None)` if `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or parsed.
    pub fn from_env_value(path: Option<String>) -> anyhow::Result<Option<Self>> {
        match path {
            Some(path) => Self::from_file(path).map(Some),
            None => {
                log::debug!("{CURRENCY_CONFIG_ENV_VAR} not set, no currency table config loaded");
                Ok(None)
            }
        }
    }

    /// Builds a [`CurrencyTable`] from this configuration.
    ///
    /// Built-in currencies are added first (when enabled), then exclusions are removed,
    /// then configured currencies are registered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An excluded or configured code is not trimmed and uppercase.
    /// - A configured currency fails validation.
    pub fn build(&self) -> anyhow::Result<CurrencyTable> {
        let mut table = if self.include_builtin {
            CurrencyTable::builtin()
        } else {
            CurrencyTable::new()
        };

        for code in &self.exclude {
            check_trimmed_uppercase(code, "exclude")?;
            match table.remove(code) {
                Some(_) => log::debug!("Excluded currency {code}"),
                None => log::warn!("Excluded currency {code} was not registered"),
            }
        }

        for config in &self.currencies {
            table.register(config.to_currency()?, true)?;
        }

        log::info!("Built currency table with {} currencies", table.len());
        Ok(table)
    }
}
