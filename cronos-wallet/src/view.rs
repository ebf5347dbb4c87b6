// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Page components, free of any rendering engine.
//!
//! Each view owns its state and the collaborators it was built with. Frontends
//! feed user events in and draw whatever `render` returns.

mod callback;
mod transfer;

pub use callback::{CallbackState, CallbackView, LOADING};
pub use transfer::{
    FormState, LINK_TEXT, Link, SEND_LABEL, SUBMITTED_LABEL, SubmitButton,
    Submission, TransferForm, TransferRender, TransferView,
};
