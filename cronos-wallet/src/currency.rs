// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Module to help with currency conversions.

use std::fmt;
use std::ops::{Add, Deref, Sub};
use std::str::FromStr;

use crate::Error;

/// The underlying unit of CRO
pub type Wei = u128;

/// Number of decimals between [Cro] and [Wei]
pub const DECIMALS: u32 = 18;

/// Amount of [Wei] in one CRO
pub const WEI_PER_CRO: Wei = 10u128.pow(DECIMALS);

/// Denomination for CRO
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cro(Wei);

impl Cro {
    /// The smallest value that can be represented by CRO currency
    pub const MIN: Cro = Cro(0);
    /// The largest value that can be represented by CRO currency
    pub const MAX: Cro = Cro(Wei::MAX);

    /// Returns a new Cro based on the [Wei] given
    pub const fn new(wei: Wei) -> Cro {
        Self(wei)
    }

    /// Returns the amount of whole CRO
    pub const fn whole(&self) -> Wei {
        self.0 / WEI_PER_CRO
    }

    /// Returns the fractional part, expressed in [Wei]
    pub const fn fraction(&self) -> Wei {
        self.0 % WEI_PER_CRO
    }
}

/// Addition
impl Add for Cro {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Add<Wei> for Cro {
    type Output = Self;
    fn add(self, other: Wei) -> Self {
        Self(self.0 + other)
    }
}

/// Subtraction
impl Sub for Cro {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Sub<Wei> for Cro {
    type Output = Self;
    fn sub(self, other: Wei) -> Self {
        Self(self.0 - other)
    }
}

impl PartialEq<Wei> for Cro {
    fn eq(&self, other: &Wei) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<Wei> for Cro {
    fn partial_cmp(&self, other: &Wei) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

/// Wei represent CRO in their underlying unit type
impl From<Wei> for Cro {
    fn from(wei: Wei) -> Self {
        Self(wei)
    }
}

impl From<Cro> for Wei {
    fn from(cro: Cro) -> Wei {
        cro.0
    }
}

/// Strings are parsed as exact decimal CRO values
impl FromStr for Cro {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAmount(s.to_string());

        let trimmed = s.trim();
        let (int, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if int.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > DECIMALS as usize {
            return Err(invalid());
        }

        // only digits are left, parsing can fail on overflow alone
        let int: Wei = match int {
            "" => 0,
            int => int.parse().map_err(|_| Error::AmountTooLarge)?,
        };
        let frac: Wei = match frac {
            "" => 0,
            frac => {
                let scale = 10u128.pow(DECIMALS - frac.len() as u32);
                frac.parse::<Wei>().map_err(|_| invalid())? * scale
            }
        };

        int.checked_mul(WEI_PER_CRO)
            .and_then(|wei| wei.checked_add(frac))
            .map(Cro)
            .ok_or(Error::AmountTooLarge)
    }
}

/// Cro derefs into its underlying Wei amount
impl Deref for Cro {
    type Target = Wei;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Display
/// Prints the decimal value without trailing zeros
impl fmt::Display for Cro {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let whole = self.whole();
        match self.fraction() {
            0 => write!(f, "{whole}"),
            frac => {
                let frac = format!("{frac:018}");
                write!(f, "{whole}.{}", frac.trim_end_matches('0'))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        let one = Cro::from_str("1").unwrap();
        assert_eq!(one, WEI_PER_CRO);
        assert_eq!(one, 1_000_000_000_000_000_000u128);
        assert_eq!(Cro::MIN, 0u128);
        assert_eq!(Cro::MIN, Cro::from_str("0").unwrap());
        let dec = Cro::from_str("2.25").unwrap();
        assert_eq!(dec, 2_250_000_000_000_000_000u128);
    }

    #[test]
    fn fractions() {
        assert_eq!(Cro::from_str("0.000000000000000001").unwrap(), 1u128);
        assert_eq!(Cro::from_str(".5").unwrap(), WEI_PER_CRO / 2);
        assert_eq!(Cro::from_str("3.").unwrap(), 3 * WEI_PER_CRO);
        assert_eq!(Cro::from_str(" 0.1 ").unwrap(), WEI_PER_CRO / 10);
    }

    #[test]
    fn invalid_amounts() {
        for input in ["", ".", "-1", "+1", "1e18", "abc", "1.2.3", "1,5"] {
            assert!(
                matches!(Cro::from_str(input), Err(Error::InvalidAmount(_))),
                "{input} should be rejected"
            );
        }
        // more decimals than wei can represent
        assert!(matches!(
            Cro::from_str("0.0000000000000000001"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn overflow() {
        let too_large = "1000000000000000000000";
        assert!(matches!(
            Cro::from_str(too_large),
            Err(Error::AmountTooLarge)
        ));
        let max_whole = (Wei::MAX / WEI_PER_CRO).to_string();
        assert!(Cro::from_str(&max_whole).is_ok());
    }

    #[test]
    fn compare_cro() {
        let one = Cro::from_str("1").unwrap();
        let two = Cro::from_str("2").unwrap();
        let dec_a = Cro::from_str("0.00025").unwrap();
        let dec_b = Cro::from_str("0.00190").unwrap();
        assert!(one != two);
        assert!(one < two);
        assert!(dec_a < dec_b);
        assert!(one > dec_b);
        assert_eq!(one + one, two);
        assert_eq!(two - one, one);
    }

    #[test]
    fn display() {
        assert_eq!(Cro::from(0u128).to_string(), "0");
        assert_eq!(Cro::from(WEI_PER_CRO).to_string(), "1");
        assert_eq!(Cro::from_str("69.420").unwrap().to_string(), "69.42");
        assert_eq!(Cro::from(1u128).to_string(), "0.000000000000000001");
    }

    #[test]
    #[should_panic]
    fn negative_result() {
        let one = Cro::from_str("1").unwrap();
        let two = Cro::from_str("2").unwrap();
        let _ = one - two;
    }
}
