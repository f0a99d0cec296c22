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

//! Money and currency domain model for Sterling.
//!
//! The `sterling-model` crate provides an immutable [`Money`](types::Money) value type with
//! exact decimal arithmetic at a fixed scale of fourteen fractional digits, together with the
//! currency registry consulted when money is constructed:
//!
//! - [`types::Money`] and [`types::Difference`] for validated amounts and subtraction results.
//! - [`types::Currency`] descriptors and the built-in [`currencies`] constants.
//! - [`registry::CurrencyRegistry`] with the read-only [`registry::BUILTIN_CURRENCIES`] table.
//! - [`config::CurrencyTableConfig`] for building custom registries from TOML.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod currencies;
pub mod enums;
pub mod error;
pub mod registry;
pub mod types;

pub use error::MoneyError;
