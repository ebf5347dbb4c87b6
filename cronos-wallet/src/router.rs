// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::debug;

use crate::HOME_ROUTE;

/// Something able to move the user to another page
pub trait Navigator {
    /// Navigate to the given path
    fn push(&mut self, path: &str);
}

/// In-memory page history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    history: Vec<String>,
}

impl Router {
    /// A router sitting on the given route
    pub fn new<S: Into<String>>(initial: S) -> Self {
        Self {
            history: vec![initial.into()],
        }
    }

    /// Route currently displayed
    pub fn current(&self) -> &str {
        // history is never empty, see `new`
        self.history.last().map(String::as_str).unwrap_or(HOME_ROUTE)
    }

    /// Every route visited, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

impl Navigator for Router {
    fn push(&mut self, path: &str) {
        debug!(from = self.current(), to = path, "navigate");
        self.history.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_history() {
        let mut router = Router::new("/callback");
        assert_eq!(router.current(), "/callback");

        router.push("/");
        assert_eq!(router.current(), "/");
        assert_eq!(router.history(), ["/callback", "/"]);
    }

    #[test]
    fn default_is_home() {
        assert_eq!(Router::default().current(), HOME_ROUTE);
    }
}
