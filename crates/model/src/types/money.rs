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

//! Represents a strictly positive amount of money in a specified currency denomination.
//!
//! Amounts are exact decimals. Every arithmetic result is truncated towards zero at
//! [`MONEY_SCALE`](super::fixed::MONEY_SCALE) fractional digits and rendered with exactly
//! that many digits.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rust_decimal::Decimal;
use sterling_core::{
    correctness::FAILED,
    parsing::{is_decimal_str, precision_from_str},
};

use super::fixed::{
    MAX_DECIMAL_SCALE, add_truncated, div_truncated, mul_truncated, sub_truncated,
    truncate_to_scale,
};
use crate::{
    error::MoneyError,
    registry::{BUILTIN_CURRENCIES, CurrencyRegistry},
    types::Currency,
};

/// Represents a strictly positive amount of money in a specified currency denomination.
///
/// Instances are immutable: every operation returns a new value.
#[derive(Clone, Copy, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// The result of [`Money::subtract`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difference {
    /// The minuend exceeds the subtrahend by this amount.
    Positive(Money),
    /// The operands cancel exactly at the money scale.
    Zero,
}

impl Difference {
    /// Returns `true` if the operands cancelled exactly.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Returns the remaining money, or `None` if the operands cancelled exactly.
    #[must_use]
    pub fn into_money(self) -> Option<Money> {
        match self {
            Self::Positive(money) => Some(money),
            Self::Zero => None,
        }
    }
}

impl Money {
    /// Creates a new [`Money`] instance, resolving `currency` against the given `registry`.
    ///
    /// The currency code is trimmed and uppercased before lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is not a positive number (see [`parse_positive_number`]).
    /// - `amount` is not exactly representable as a decimal.
    /// - The normalized `currency` code is not registered.
    pub fn with_registry<R>(amount: &str, currency: &str, registry: &R) -> Result<Self, MoneyError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let amount = parse_positive_number(amount)?;
        let currency = Currency::from_registry(currency, registry)?;
        Ok(Self { amount, currency })
    }

    /// Creates a new [`Money`] instance, resolving `currency` against the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if a correctness check fails. See [`Money::with_registry`].
    pub fn new_checked(amount: &str, currency: &str) -> Result<Self, MoneyError> {
        Self::with_registry(amount, currency, &*BUILTIN_CURRENCIES)
    }

    /// Creates a new [`Money`] instance, resolving `currency` against the built-in table.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Money::with_registry`].
    #[must_use]
    pub fn new(amount: &str, currency: &str) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Returns the amount as a decimal string.
    ///
    /// Constructed values render exactly as supplied. Derived values carry exactly
    /// [`MONEY_SCALE`](super::fixed::MONEY_SCALE) fractional digits.
    #[must_use]
    pub fn amount(&self) -> String {
        self.amount.to_string()
    }

    /// Returns the currency of this money.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the normalized currency code.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        self.currency.code.as_str()
    }

    /// Returns the amount as an exact [`Decimal`].
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.amount
    }

    /// Returns `true` if `other` is denominated in the same currency.
    #[must_use]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Adds `other` to this money.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The currencies differ.
    /// - The sum is not representable at the money scale.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_same_currency(other)?;
        let sum = add_truncated(self.amount, other.amount)
            .ok_or_else(|| MoneyError::OutOfRange(format!("{} + {}", self.amount, other.amount)))?;
        self.derive(sum)
    }

    /// Subtracts `other` from this money.
    ///
    /// Magnitudes are compared at the money scale before currencies are checked. Operands
    /// which are equal at that scale yield [`Difference::Zero`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `other` is greater than this money.
    /// - The currencies differ.
    /// - The operands differ at the money scale but their exact difference truncates to zero.
    pub fn subtract(&self, other: &Self) -> Result<Difference, MoneyError> {
        let minuend = truncate_to_scale(self.amount);
        let subtrahend = truncate_to_scale(other.amount);

        match subtrahend.cmp(&minuend) {
            Ordering::Greater => {
                return Err(MoneyError::NegativeResult {
                    minuend: self.amount(),
                    subtrahend: other.amount(),
                });
            }
            Ordering::Equal => {
                self.check_same_currency(other)?;
                return Ok(Difference::Zero);
            }
            Ordering::Less => self.check_same_currency(other)?,
        }

        let difference = sub_truncated(self.amount, other.amount)
            .ok_or_else(|| MoneyError::OutOfRange(format!("{} - {}", self.amount, other.amount)))?;
        self.derive(difference).map(Difference::Positive)
    }

    /// Multiplies this money by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `factor` is not a positive number (see [`parse_positive_number`]).
    /// - The product is not representable at the money scale.
    pub fn multiply(&self, factor: &str) -> Result<Self, MoneyError> {
        let factor = parse_positive_number(factor)?;
        let product = mul_truncated(self.amount, factor)
            .ok_or_else(|| MoneyError::OutOfRange(format!("{} * {factor}", self.amount)))?;
        self.derive(product)
    }

    /// Divides this money by `divisor`, truncating the quotient at the money scale.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `divisor` is not a positive number (see [`parse_positive_number`]).
    /// - The quotient truncates to zero.
    /// - The quotient is not representable at the money scale.
    pub fn divide(&self, divisor: &str) -> Result<Self, MoneyError> {
        let divisor = parse_positive_number(divisor)?;
        let quotient = div_truncated(self.amount, divisor)
            .ok_or_else(|| MoneyError::OutOfRange(format!("{} / {divisor}", self.amount)))?;
        self.derive(quotient)
    }

    fn check_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code,
                other: other.currency.code,
            })
        }
    }

    // Derived amounts are checked for value, not for their leading character.
    fn derive(&self, amount: Decimal) -> Result<Self, MoneyError> {
        if amount <= Decimal::ZERO {
            return Err(MoneyError::NotPositiveNumber(amount.to_string()));
        }
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }
}

/// Parses `value` as a strictly positive decimal.
///
/// The value must be a plain decimal literal (`digits[.digits]`) whose first character is
/// neither `'0'` nor `'-'`.
///
/// # Errors
///
/// Returns [`MoneyError::NotPositiveNumber`] if `value` is malformed or starts with `'0'`,
/// or [`MoneyError::OutOfRange`] if it cannot be held exactly as a [`Decimal`].
pub fn parse_positive_number(value: &str) -> Result<Decimal, MoneyError> {
    if !is_decimal_str(value) || value.starts_with(['0', '-']) {
        return Err(MoneyError::NotPositiveNumber(value.to_string()));
    }
    if u32::from(precision_from_str(value)) > MAX_DECIMAL_SCALE {
        return Err(MoneyError::OutOfRange(value.to_string()));
    }
    Decimal::from_str_exact(value).map_err(|_| MoneyError::OutOfRange(value.to_string()))
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses `"<amount> <currency>"` against the built-in currency table.
    ///
    /// The amount is validated like any caller-supplied amount, so a derived amount below
    /// one renders through [`Display`] but does not parse back.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let (amount, currency) = value
            .split_once(char::is_whitespace)
            .unwrap_or((value, ""));
        Self::new_checked(amount, currency)
    }
}

impl<T: AsRef<str>> From<T> for Money {
    fn from(value: T) -> Self {
        Self::from_str(value.as_ref()).expect(FAILED)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", stringify!(Money), self.amount, self.currency)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use ahash::AHashSet;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        registry::CurrencyTable,
        types::fixed::MONEY_SCALE,
        types::stubs::{money_eur_10, money_usd_1_05, money_usd_2_2, restricted_registry},
    };

    #[rstest]
    fn test_debug() {
        let money = Money::new("1010.12", "USD");
        assert_eq!(format!("{money:?}"), "Money(1010.12, USD)");
    }

    #[rstest]
    fn test_display() {
        let money = Money::new("1010.12", "usd");
        assert_eq!(format!("{money}"), "1010.12 USD");
    }

    #[rstest]
    #[case("1.05")]
    #[case("3")]
    #[case("10.00")]
    #[case("1.0000000000000000000000000001")]
    #[case("79228162514264337593543950335")]
    fn test_amount_is_verbatim(#[case] amount: &str) {
        let money = Money::new(amount, "USD");
        assert_eq!(money.amount(), amount);
    }

    #[rstest]
    #[case("usd")]
    #[case("uSd")]
    #[case(" usd   ")]
    #[case("USD")]
    fn test_currency_is_normalized(#[case] currency: &str) {
        let money = Money::new("1", currency);
        assert_eq!(money.currency_code(), "USD");
        assert_eq!(money.currency(), Currency::USD());
    }

    #[rstest]
    #[case("asdk")]
    #[case("0123")]
    #[case("0")]
    #[case("0.5")]
    #[case("0b11111111")]
    #[case("0x1A")]
    #[case("0o123")]
    #[case("-123")]
    #[case("+123")]
    #[case("1e5")]
    #[case(".5")]
    #[case("5.")]
    #[case(" 5")]
    #[case("5 ")]
    #[case("1_000")]
    #[case("")]
    fn test_invalid_amount(#[case] amount: &str) {
        let err = Money::new_checked(amount, "USD").unwrap_err();
        assert_eq!(err, MoneyError::NotPositiveNumber(amount.to_string()));
    }

    #[rstest]
    #[case("79228162514264337593543950336")]
    #[case("1.00000000000000000000000000001")]
    #[case("9.9999999999999999999999999999")]
    fn test_amount_out_of_range(#[case] amount: &str) {
        let err = Money::new_checked(amount, "USD").unwrap_err();
        assert_eq!(err, MoneyError::OutOfRange(amount.to_string()));
    }

    #[rstest]
    fn test_unknown_currency() {
        let err = Money::new_checked("1", "islam").unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("ISLAM".to_string()));
        assert_eq!(err.to_string(), "Invalid argument: unknown currency 'ISLAM'");
    }

    #[rstest]
    fn test_amount_checked_before_currency() {
        let err = Money::new_checked("-1", "islam").unwrap_err();
        assert!(matches!(err, MoneyError::NotPositiveNumber(_)));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_on_invalid_amount() {
        let _ = Money::new("0", "USD");
    }

    #[rstest]
    fn test_with_registry(restricted_registry: CurrencyTable) {
        let money = Money::with_registry("5", " eur ", &restricted_registry).unwrap();
        assert_eq!(money.currency_code(), "EUR");

        let err = Money::with_registry("5", "GBP", &restricted_registry).unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("GBP".to_string()));
    }

    #[rstest]
    fn test_add(money_usd_1_05: Money, money_usd_2_2: Money) {
        let sum = money_usd_1_05.add(&money_usd_2_2).unwrap();
        assert_eq!(sum.amount(), "3.25000000000000");
        assert_eq!(sum.currency_code(), "USD");
        // Operands are untouched
        assert_eq!(money_usd_1_05.amount(), "1.05");
        assert_eq!(money_usd_2_2.amount(), "2.2");
    }

    #[rstest]
    fn test_add_truncates_excess_digits() {
        let a = Money::new("1.000000000000009", "USD");
        let b = Money::new("1.000000000000009", "USD");
        assert_eq!(a.add(&b).unwrap().amount(), "2.00000000000001");
    }

    #[rstest]
    fn test_add_truncates_instead_of_rounding() {
        let a = Money::new("5", "USD");
        let b = Money::new("4.9999999999999999999999999999", "USD");
        assert_eq!(a.add(&b).unwrap().amount(), "9.99999999999999");
    }

    #[rstest]
    fn test_add_different_currency(money_usd_1_05: Money, money_eur_10: Money) {
        let err = money_usd_1_05.add(&money_eur_10).unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch {
                expected: "USD".into(),
                other: "EUR".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid argument: currency EUR is not equal to USD"
        );
    }

    #[rstest]
    fn test_add_beyond_fixed_scale_range() {
        let a = Money::new("79228162514264337593543950", "USD");
        let err = a.add(&Money::new("1", "USD")).unwrap_err();
        assert!(matches!(err, MoneyError::OutOfRange(_)));
    }

    #[rstest]
    fn test_subtract() {
        let a = Money::new("3.05", "USD");
        let b = Money::new("2.02", "USD");
        let result = a.subtract(&b).unwrap();
        assert!(!result.is_zero());
        assert_eq!(result.into_money().unwrap().amount(), "1.03000000000000");
    }

    #[rstest]
    fn test_subtract_result_below_one() {
        let a = Money::new("1.5", "USD");
        let b = Money::new("1", "USD");
        let result = a.subtract(&b).unwrap().into_money().unwrap();
        assert_eq!(result.amount(), "0.50000000000000");
    }

    #[rstest]
    #[case("3", "3")]
    #[case("3", "3.00")]
    #[case("1.000000000000001", "1.000000000000009")]
    fn test_subtract_equal_is_zero(#[case] a: &str, #[case] b: &str) {
        let a = Money::new(a, "USD");
        let b = Money::new(b, "USD");
        let result = a.subtract(&b).unwrap();
        assert_eq!(result, Difference::Zero);
        assert!(result.into_money().is_none());
    }

    #[rstest]
    fn test_subtract_difference_truncating_to_zero() {
        // Unequal at the money scale, so no zero sentinel
        let a = Money::new("1.00000000000001", "USD");
        let b = Money::new("1.000000000000009", "USD");
        assert_eq!(
            a.subtract(&b).unwrap_err(),
            MoneyError::NotPositiveNumber("0.00000000000000".to_string())
        );
    }

    #[rstest]
    fn test_subtract_truncates_exact_difference() {
        let a = Money::new("10", "USD");
        let b = Money::new("1.0000000000000000000000000001", "USD");
        let result = a.subtract(&b).unwrap().into_money().unwrap();
        assert_eq!(result.amount(), "8.99999999999999");
    }

    #[rstest]
    fn test_subtract_negative_result() {
        let a = Money::new("2.02", "USD");
        let b = Money::new("3.05", "USD");
        let err = a.subtract(&b).unwrap_err();
        assert_eq!(
            err,
            MoneyError::NegativeResult {
                minuend: "2.02".to_string(),
                subtrahend: "3.05".to_string(),
            }
        );
    }

    #[rstest]
    fn test_subtract_negative_result_precedes_currency_check() {
        let a = Money::new("1", "USD");
        let b = Money::new("2", "EUR");
        let err = a.subtract(&b).unwrap_err();
        assert!(matches!(err, MoneyError::NegativeResult { .. }));
    }

    #[rstest]
    #[case("3", "2")]
    #[case("3", "3")]
    fn test_subtract_different_currency(#[case] a: &str, #[case] b: &str) {
        let a = Money::new(a, "USD");
        let b = Money::new(b, "EUR");
        let err = a.subtract(&b).unwrap_err();
        assert!(matches!(err, MoneyError::CurrencyMismatch { .. }));
    }

    #[rstest]
    #[case("10.02", "2", "20.04000000000000")]
    #[case("1.5", "1.5", "2.25000000000000")]
    #[case("3", "1.000000000000009", "3.00000000000002")]
    fn test_multiply_by_factor(#[case] amount: &str, #[case] factor: &str, #[case] expected: &str) {
        let money = Money::new(amount, "EUR");
        let product = money.multiply(factor).unwrap();
        assert_eq!(product.amount(), expected);
        assert_eq!(product.currency_code(), "EUR");
    }

    #[rstest]
    fn test_multiply_truncates_instead_of_rounding() {
        let money = Money::new("1.4285714285714285714285714285", "USD");
        assert_eq!(money.multiply("7").unwrap().amount(), "9.99999999999999");
    }

    #[rstest]
    #[case("0")]
    #[case("0.5")]
    #[case("-2")]
    #[case("abc")]
    #[case("")]
    fn test_multiply_invalid_factor(#[case] factor: &str) {
        let err = Money::new("10.02", "USD").multiply(factor).unwrap_err();
        assert_eq!(err, MoneyError::NotPositiveNumber(factor.to_string()));
    }

    #[rstest]
    #[case("10.02", "2", "5.01000000000000")]
    #[case("1", "3", "0.33333333333333")]
    #[case("2", "3", "0.66666666666666")]
    #[case("100", "8", "12.50000000000000")]
    fn test_divide(#[case] amount: &str, #[case] divisor: &str, #[case] expected: &str) {
        let quotient = Money::new(amount, "USD").divide(divisor).unwrap();
        assert_eq!(quotient.amount(), expected);
        assert_eq!(quotient.currency_code(), "USD");
    }

    #[rstest]
    #[case("0")]
    #[case("00")]
    #[case("-2")]
    #[case("two")]
    fn test_divide_invalid_divisor(#[case] divisor: &str) {
        let err = Money::new("10.02", "USD").divide(divisor).unwrap_err();
        assert_eq!(err, MoneyError::NotPositiveNumber(divisor.to_string()));
    }

    #[rstest]
    fn test_divide_truncates_instead_of_rounding() {
        let quotient = Money::new("14", "USD")
            .divide("7.0000000000000000000000000001")
            .unwrap();
        assert_eq!(quotient.amount(), "1.99999999999999");
    }

    #[rstest]
    fn test_divide_truncating_to_zero() {
        let err = Money::new("1", "USD").divide("1000000000000000").unwrap_err();
        assert_eq!(
            err,
            MoneyError::NotPositiveNumber("0.00000000000000".to_string())
        );
    }

    #[rstest]
    fn test_derived_amount_below_one_is_usable() {
        let half = Money::new("1", "USD").divide("2").unwrap();
        assert_eq!(half.amount(), "0.50000000000000");
        assert_eq!(half.multiply("3").unwrap().amount(), "1.50000000000000");
        assert_eq!(half.add(&half).unwrap().amount(), "1.00000000000000");
    }

    #[rstest]
    fn test_equality_is_numeric() {
        let a = Money::new("3", "USD");
        let b = Money::new("3.00", "USD");
        let c = Money::new("3", "EUR");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: AHashSet<Money> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_comparisons() {
        let small = Money::new("1.05", "USD");
        let large = Money::new("2.2", "USD");
        assert!(small < large);
        assert!(large >= small);
        assert_eq!(small.partial_cmp(&Money::new("1.05", "EUR")), None);
    }

    #[rstest]
    fn test_as_decimal_and_same_currency(money_usd_1_05: Money, money_eur_10: Money) {
        assert_eq!(money_usd_1_05.as_decimal(), dec!(1.05));
        assert!(money_usd_1_05.is_same_currency(&Money::new("7", "usd")));
        assert!(!money_usd_1_05.is_same_currency(&money_eur_10));
    }

    #[rstest]
    #[case("1.05 USD", "1.05", "USD")]
    #[case("  20 eur ", "20", "EUR")]
    #[case("7\tbtc", "7", "BTC")]
    fn test_from_str(#[case] input: &str, #[case] amount: &str, #[case] code: &str) {
        let money = Money::from_str(input).unwrap();
        assert_eq!(money.amount(), amount);
        assert_eq!(money.currency_code(), code);
        assert_eq!(Money::from(input), money);
    }

    #[rstest]
    #[case("1.05", MoneyError::UnknownCurrency(String::new()))]
    #[case("USD 1.05", MoneyError::NotPositiveNumber("USD".to_string()))]
    #[case("0 USD", MoneyError::NotPositiveNumber("0".to_string()))]
    #[case("1 XYZ", MoneyError::UnknownCurrency("XYZ".to_string()))]
    fn test_from_str_invalid(#[case] input: &str, #[case] expected: MoneyError) {
        assert_eq!(Money::from_str(input).unwrap_err(), expected);
    }

    #[rstest]
    fn test_derived_amount_below_one_does_not_parse_back() {
        let half = Money::new("1", "USD").divide("2").unwrap();
        let rendered = half.to_string();
        assert_eq!(rendered, "0.50000000000000 USD");
        assert_eq!(
            Money::from_str(&rendered).unwrap_err(),
            MoneyError::NotPositiveNumber("0.50000000000000".to_string())
        );
    }

    #[rstest]
    fn test_parse_positive_number() {
        assert_eq!(parse_positive_number("1.05").unwrap(), dec!(1.05));
        assert_eq!(parse_positive_number("1.05").unwrap().scale(), 2);
        assert!(parse_positive_number("0.1").is_err());
    }

    #[rstest]
    fn test_money_scale() {
        let sum = Money::new("1", "USD").add(&Money::new("1", "USD")).unwrap();
        assert_eq!(sum.as_decimal().scale(), MONEY_SCALE);
    }

    fn amount_strategy() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,7}(\\.[0-9]{1,6})?"
    }

    proptest! {
        #[test]
        fn prop_construct_keeps_amount(amount in amount_strategy()) {
            let money = Money::new_checked(&amount, "usd").unwrap();
            prop_assert_eq!(money.amount(), amount);
            prop_assert_eq!(money.currency_code(), "USD");
        }

        #[test]
        fn prop_add_is_commutative(a in amount_strategy(), b in amount_strategy()) {
            let a = Money::new(&a, "USD");
            let b = Money::new(&b, "USD");
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_subtract_undoes_add(a in amount_strategy(), b in amount_strategy()) {
            let a = Money::new(&a, "USD");
            let b = Money::new(&b, "USD");
            let sum = a.add(&b).unwrap();
            prop_assert_eq!(sum.subtract(&b).unwrap(), Difference::Positive(a));
            prop_assert_eq!(sum.subtract(&a).unwrap(), Difference::Positive(b));
        }

        #[test]
        fn prop_subtract_self_is_zero(a in amount_strategy()) {
            let a = Money::new(&a, "USD");
            prop_assert!(a.subtract(&a).unwrap().is_zero());
        }

        #[test]
        fn prop_divide_undoes_multiply(a in amount_strategy(), factor in 1u32..1_000_000) {
            let a = Money::new(&a, "USD");
            let factor = factor.to_string();
            let product = a.multiply(&factor).unwrap();
            prop_assert_eq!(product.divide(&factor).unwrap(), a);
        }

        #[test]
        fn prop_results_have_money_scale(a in amount_strategy(), b in amount_strategy()) {
            let a = Money::new(&a, "USD");
            let b = Money::new(&b, "USD");
            prop_assert_eq!(a.add(&b).unwrap().as_decimal().scale(), MONEY_SCALE);
            prop_assert_eq!(a.multiply("3").unwrap().as_decimal().scale(), MONEY_SCALE);
            prop_assert_eq!(a.divide("7").unwrap().as_decimal().scale(), MONEY_SCALE);
        }
    }
}
