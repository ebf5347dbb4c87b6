// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::debug;
use url::Url;

use crate::{AuthClient, HOME_ROUTE, Navigator};

/// Placeholder shown while the login completes
pub const LOADING: &str = "Loading...";

/// Lifecycle of the callback page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallbackState {
    /// Not displayed yet
    #[default]
    Unmounted,
    /// Login request in flight
    Loading,
    /// Login settled and navigation performed
    Done,
}

/// Page the provider redirects to after the user clicked the login link.
///
/// Mounting it completes the login, then sends the user home whatever the
/// outcome: a failed login is not reported.
pub struct CallbackView<A, N> {
    auth: A,
    navigator: N,
    state: CallbackState,
}

impl<A, N> CallbackView<A, N>
where
    A: AuthClient,
    N: Navigator,
{
    /// A callback page not yet displayed
    pub fn new(auth: A, navigator: N) -> Self {
        Self {
            auth,
            navigator,
            state: CallbackState::Unmounted,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> CallbackState {
        self.state
    }

    /// The page only ever shows the loading placeholder
    pub fn render(&self) -> &'static str {
        LOADING
    }

    /// Navigator the view was built with
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Gives the navigator back once the page is gone
    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Display the page for the given URL.
    ///
    /// Only the first call has an effect.
    pub async fn mount(&mut self, page_url: &Url) {
        if self.state != CallbackState::Unmounted {
            return;
        }
        self.state = CallbackState::Loading;

        match self.auth.login_with_credential(page_url).await {
            Ok(_) => debug!("login completed"),
            Err(err) => debug!("login not completed: {err}"),
        }

        self.navigator.push(HOME_ROUTE);
        self.state = CallbackState::Done;
    }
}
