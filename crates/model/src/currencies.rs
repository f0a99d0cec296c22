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

//! Common `Currency` constants.
//!
//! Each constant is initialized once on first access and copied out thereafter. The full set
//! populates [`BUILTIN_CURRENCIES`](crate::registry::BUILTIN_CURRENCIES).

use std::sync::OnceLock;

use ustr::Ustr;

use crate::{enums::CurrencyType, types::Currency};

macro_rules! builtin_currencies {
    ($($name:ident => ($code:literal, $precision:literal, $iso4217:literal, $full_name:literal, $currency_type:ident)),+ $(,)?) => {
        impl Currency {
            $(
                #[doc = concat!("Returns the built-in `", $code, "` currency (", $full_name, ").")]
                #[allow(non_snake_case)]
                #[must_use]
                pub fn $name() -> Self {
                    static LOCK: OnceLock<Currency> = OnceLock::new();
                    *LOCK.get_or_init(|| Self {
                        code: Ustr::from($code),
                        precision: $precision,
                        iso4217: $iso4217,
                        name: Ustr::from($full_name),
                        currency_type: CurrencyType::$currency_type,
                    })
                }
            )+
        }

        /// Returns every built-in currency.
        #[must_use]
        pub fn builtin_currencies() -> Vec<Currency> {
            vec![$(Currency::$name()),+]
        }
    };
}

builtin_currencies! {
    // Fiat currencies
    AED => ("AED", 2, 784, "United Arab Emirates dirham", Fiat),
    ARS => ("ARS", 2, 32, "Argentine peso", Fiat),
    AUD => ("AUD", 2, 36, "Australian dollar", Fiat),
    BRL => ("BRL", 2, 986, "Brazilian real", Fiat),
    CAD => ("CAD", 2, 124, "Canadian dollar", Fiat),
    CHF => ("CHF", 2, 756, "Swiss franc", Fiat),
    CLP => ("CLP", 0, 152, "Chilean peso", Fiat),
    CNY => ("CNY", 2, 156, "Chinese yuan", Fiat),
    CNH => ("CNH", 2, 0, "Chinese yuan (offshore)", Fiat),
    COP => ("COP", 2, 170, "Colombian peso", Fiat),
    CZK => ("CZK", 2, 203, "Czech koruna", Fiat),
    DKK => ("DKK", 2, 208, "Danish krone", Fiat),
    EGP => ("EGP", 2, 818, "Egyptian pound", Fiat),
    EUR => ("EUR", 2, 978, "Euro", Fiat),
    GBP => ("GBP", 2, 826, "British pound", Fiat),
    HKD => ("HKD", 2, 344, "Hong Kong dollar", Fiat),
    HUF => ("HUF", 2, 348, "Hungarian forint", Fiat),
    IDR => ("IDR", 2, 360, "Indonesian rupiah", Fiat),
    ILS => ("ILS", 2, 376, "Israeli new shekel", Fiat),
    INR => ("INR", 2, 356, "Indian rupee", Fiat),
    JPY => ("JPY", 0, 392, "Japanese yen", Fiat),
    KRW => ("KRW", 0, 410, "South Korean won", Fiat),
    KWD => ("KWD", 3, 414, "Kuwaiti dinar", Fiat),
    MXN => ("MXN", 2, 484, "Mexican peso", Fiat),
    NGN => ("NGN", 2, 566, "Nigerian naira", Fiat),
    NOK => ("NOK", 2, 578, "Norwegian krone", Fiat),
    NZD => ("NZD", 2, 554, "New Zealand dollar", Fiat),
    PHP => ("PHP", 2, 608, "Philippine peso", Fiat),
    PLN => ("PLN", 2, 985, "Polish złoty", Fiat),
    RUB => ("RUB", 2, 643, "Russian ruble", Fiat),
    SAR => ("SAR", 2, 682, "Saudi riyal", Fiat),
    SEK => ("SEK", 2, 752, "Swedish krona", Fiat),
    SGD => ("SGD", 2, 702, "Singapore dollar", Fiat),
    THB => ("THB", 2, 764, "Thai baht", Fiat),
    TRY => ("TRY", 2, 949, "Turkish lira", Fiat),
    TWD => ("TWD", 2, 901, "New Taiwan dollar", Fiat),
    UAH => ("UAH", 2, 980, "Ukrainian hryvnia", Fiat),
    USD => ("USD", 2, 840, "United States dollar", Fiat),
    VND => ("VND", 0, 704, "Vietnamese đồng", Fiat),
    ZAR => ("ZAR", 2, 710, "South African rand", Fiat),
    // Commodity backed currencies
    XAG => ("XAG", 2, 961, "Silver (one troy ounce)", CommodityBacked),
    XAU => ("XAU", 2, 959, "Gold (one troy ounce)", CommodityBacked),
    XPT => ("XPT", 2, 962, "Platinum (one troy ounce)", CommodityBacked),
    // Crypto currencies
    ADA => ("ADA", 6, 0, "Cardano", Crypto),
    BTC => ("BTC", 8, 0, "Bitcoin", Crypto),
    DOGE => ("DOGE", 8, 0, "Dogecoin", Crypto),
    ETH => ("ETH", 8, 0, "Ethereum", Crypto),
    LTC => ("LTC", 8, 0, "Litecoin", Crypto),
    SOL => ("SOL", 8, 0, "Solana", Crypto),
    USDC => ("USDC", 8, 0, "USD Coin", Crypto),
    USDT => ("USDT", 8, 0, "Tether", Crypto),
    XRP => ("XRP", 6, 0, "XRP", Crypto),
}
