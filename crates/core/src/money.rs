//! Money value object.
//!
//! Amounts are stored as signed integer minor units (cents) in an `i128`.
//! Prices and quantities are `i64`, so a single `price × quantity` product
//! always fits exactly. Sums saturate at the `i128` bounds instead of
//! overflowing; amounts stay exact as long as running totals remain below
//! `i128::MAX` cents.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const CENTS_PER_UNIT: i128 = 100;

/// An exact decimal amount in minor units (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i128);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents as i128)
    }

    /// Whole currency units, e.g. `from_units(2500)` is 2500.00.
    pub const fn from_units(units: i64) -> Self {
        Self(units as i128 * CENTS_PER_UNIT)
    }

    /// Multiply a unit amount by a quantity (price × stock, price × sold).
    pub const fn times(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(quantity as i128))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u128;
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"2500"`, `"2500.5"`, `"2500.50"` or `"-3.10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (digits, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("malformed amount: {s:?}")));
        }

        let frac_cents = match frac {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(DomainError::validation(format!(
                    "amount must have one or two decimal places: {s:?}"
                )));
            }
            Some(f) => {
                let value: i128 = f
                    .parse()
                    .map_err(|_| DomainError::validation(format!("malformed amount: {s:?}")))?;
                if f.len() == 1 { value * 10 } else { value }
            }
        };

        let cents = whole
            .parse::<i128>()
            .ok()
            .and_then(|w| w.checked_mul(CENTS_PER_UNIT))
            .and_then(|w| w.checked_add(frac_cents))
            .ok_or_else(|| DomainError::validation(format!("amount out of range: {s:?}")))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_units(2500).to_string(), "2500.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-310).to_string(), "-3.10");
    }

    #[test]
    fn times_multiplies_by_quantity() {
        let price = Money::from_units(120);
        assert_eq!(price.times(20), Money::from_units(2400));
        assert_eq!(price.times(0), Money::ZERO);
        assert_eq!(price.times(-3), Money::from_units(-360));
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("2500".parse::<Money>().unwrap(), Money::from_units(2500));
        assert_eq!("2500.5".parse::<Money>().unwrap(), Money::from_cents(250_050));
        assert_eq!(" 19.99 ".parse::<Money>().unwrap(), Money::from_cents(1999));
        assert_eq!("-3.10".parse::<Money>().unwrap(), Money::from_cents(-310));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", "-", "abc", "1.234", "1.", ".5", "1,50", "1.-5"] {
            match input.parse::<Money>() {
                Err(DomainError::Validation(_)) => {}
                other => panic!("Expected Validation error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn price_times_quantity_is_exact_beyond_i64() {
        let price = Money::from_cents(i64::MAX / 10);
        let expected = (i64::MAX / 10) as i128 * 20;
        assert_eq!(price.times(20), Money(expected));
        assert_eq!(price.times(20) - price.times(1), price.times(19));
    }

    #[test]
    fn sums_amounts() {
        let total: Money = [Money::from_units(1), Money::from_cents(50), Money::from_cents(-25)]
            .iter()
            .sum();
        assert_eq!(total, Money::from_cents(125));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: rendering then parsing an amount yields the same amount.
        #[test]
        fn display_parses_back(cents in any::<i64>()) {
            let money = Money::from_cents(cents);
            let parsed: Money = money.to_string().parse().unwrap();
            prop_assert_eq!(parsed, money);
        }
    }
}
