// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::Error;

/// Size in bytes of an account address
const ADDRESS_SIZE: usize = 20;

/// Account address for which to perform transactions with.
/// It may be owned by the provider managed account or be a plain receiver.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Returns the raw bytes of the address
    pub fn to_bytes(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    /// Mixed-case checksummed form of the address (EIP-55)
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = Keccak256::digest(lower.as_bytes());

        let checksummed: String = lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = match i % 2 {
                    0 => hash[i / 2] >> 4,
                    _ => hash[i / 2] & 0x0f,
                };
                match nibble >= 8 {
                    true => c.to_ascii_uppercase(),
                    false => c,
                }
            })
            .collect();

        format!("0x{checksummed}")
    }

    /// A trimmed version of the address to display as preview
    pub fn preview(&self) -> String {
        let addr = self.to_string();
        format!("{}...{}", &addr[..7], &addr[addr.len() - 5..])
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Addresses are `0x` prefixed hex strings. Single-case strings are taken
/// as they are, mixed-case ones must carry a valid checksum.
impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .ok_or(Error::BadAddress)?;

        let mut bytes = [0u8; ADDRESS_SIZE];
        hex::decode_to_slice(hex_part, &mut bytes)
            .map_err(|_| Error::BadAddress)?;

        let address = Self(bytes);

        let has_lower = hex_part.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hex_part.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *hex_part {
            return Err(Error::BadAddress);
        }

        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x6a9e4e2b1c39b7c3f8d5a0e7b9b8f3e2d1c0b4a5";

    #[test]
    fn parse_and_display() {
        let addr = Address::from_str(ADDR).unwrap();
        assert_eq!(addr.to_string(), ADDR);

        let upper = ADDR.replacen("0x", "0X", 1).to_uppercase();
        assert_eq!(Address::from_str(&upper).unwrap(), addr);
    }

    #[test]
    fn reject_malformed() {
        for input in [
            "",
            "0x",
            "6a9e4e2b1c39b7c3f8d5a0e7b9b8f3e2d1c0b4a5",
            "0x6a9e4e2b1c39b7c3f8d5a0e7b9b8f3e2d1c0b4",
            "0x6a9e4e2b1c39b7c3f8d5a0e7b9b8f3e2d1c0b4a5ff",
            "0xzz9e4e2b1c39b7c3f8d5a0e7b9b8f3e2d1c0b4a5",
        ] {
            assert!(
                matches!(Address::from_str(input), Err(Error::BadAddress)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn checksum() {
        // EIP-55 test vectors
        for checksummed in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let addr = Address::from_str(checksummed).unwrap();
            assert_eq!(addr.to_checksum(), checksummed);
            assert_eq!(addr.to_string(), checksummed.to_lowercase());
        }
    }

    #[test]
    fn reject_bad_checksum() {
        let bad = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert!(matches!(Address::from_str(bad), Err(Error::BadAddress)));

        // single-case forms carry no checksum
        let lower = bad.to_lowercase();
        let upper = format!("0x{}", bad[2..].to_uppercase());
        assert_eq!(
            Address::from_str(&lower).unwrap(),
            Address::from_str(&upper).unwrap()
        );
    }

    #[test]
    fn preview() {
        let addr = Address::from_str(ADDR).unwrap();
        assert_eq!(addr.preview(), "0x6a9e4...0b4a5");
    }

    #[test]
    fn serializes_as_string() {
        let addr = Address::from_str(ADDR).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ADDR}\""));
    }
}
