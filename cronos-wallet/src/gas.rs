// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! This library contains the primitive related to the gas used for
//! transactions on the Cronos network.

use crate::currency::Wei;

/// The gas limit attached to every value transfer
pub const TRANSFER_LIMIT: u64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gas price and limit for any transaction
pub struct Gas {
    /// The gas price in [Wei]
    pub price: Wei,
    /// The gas limit
    pub limit: u64,
}

impl Gas {
    /// Gas with the given limit and a zero price, to be filled in with the
    /// network price
    pub fn new(limit: u64) -> Self {
        Gas { price: 0, limit }
    }

    /// Set the price and return the Gas
    pub fn with_price<T>(mut self, price: T) -> Self
    where
        T: Into<Wei>,
    {
        self.price = price.into();
        self
    }

    /// Maximum fee this gas allows to be paid
    pub fn fee(&self) -> Wei {
        self.price.saturating_mul(self.limit as Wei)
    }
}

impl Default for Gas {
    fn default() -> Self {
        Self::new(TRANSFER_LIMIT)
    }
}
