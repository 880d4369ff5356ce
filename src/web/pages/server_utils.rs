// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::services::ServiceClient;
use crate::web::state::AppState;
use leptos::prelude::*;
use std::sync::Arc;

/// Gets the client for the backend services.
/// Must be used from a server function; relies on the server's context.
pub fn get_service_client() -> Arc<ServiceClient> {
	let state: AppState = expect_context();
	Arc::clone(&state.services)
}
