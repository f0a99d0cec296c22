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

//! Test fixtures for money and currency registries.

use rstest::fixture;

use crate::{
    registry::CurrencyTable,
    types::{Currency, Money},
};

/// `1.05 USD`.
#[fixture]
pub fn money_usd_1_05() -> Money {
    Money::new("1.05", "USD")
}

/// `2.2 USD`.
#[fixture]
pub fn money_usd_2_2() -> Money {
    Money::new("2.2", "USD")
}

/// `10 EUR`.
#[fixture]
pub fn money_eur_10() -> Money {
    Money::new("10", "EUR")
}

/// A registry holding only `EUR` and `JPY`.
#[fixture]
pub fn restricted_registry() -> CurrencyTable {
    CurrencyTable::from_currencies([Currency::EUR(), Currency::JPY()]).expect("valid currencies")
}
