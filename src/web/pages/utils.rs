// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dashboard::controller::{DashboardState, FetchToken};
use crate::dashboard::ticket_form::CreateTicketFailure;
use crate::model::{Ticket, User};
use leptos::prelude::*;
use leptos_router::params::Params;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct ViewParam {
	pub view: Option<String>,
}

impl ViewParam {
	pub fn view_name(&self) -> &str {
		self.view.as_deref().unwrap_or_default()
	}
}

/// Gets all tickets from the ticket service, in the order the service returns them.
#[server]
pub async fn list_tickets() -> Result<Vec<Ticket>, ServerFnError> {
	use super::server_utils::get_service_client;

	let services = get_service_client();
	match services.fetch_tickets().await {
		Ok(tickets) => Ok(tickets),
		Err(error) => {
			tracing::warn!(source = ?error, "Failed to fetch tickets");
			Err(ServerFnError::ServerError(error.to_string()))
		}
	}
}

#[server]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
	use super::server_utils::get_service_client;

	let services = get_service_client();
	match services.fetch_users().await {
		Ok(users) => Ok(users),
		Err(error) => {
			tracing::warn!(source = ?error, "Failed to fetch users");
			Err(ServerFnError::ServerError(error.to_string()))
		}
	}
}

/// Creates a new open ticket.
///
/// On failure, the error message is the one to show the user.
#[server]
pub async fn create_ticket(issue: String, raised_by: i64) -> Result<(), ServerFnError> {
	use super::server_utils::get_service_client;
	use crate::model::NewTicket;

	let services = get_service_client();
	let ticket = NewTicket::new(issue, raised_by);
	match services.create_ticket(&ticket).await {
		Ok(()) => Ok(()),
		Err(error) => {
			tracing::warn!(source = ?error, "Failed to create ticket");
			Err(ServerFnError::ServerError(error.create_ticket_failure().to_string()))
		}
	}
}

/// Message for the user when `create_ticket` fails
pub fn create_ticket_failure_message(error: &ServerFnError) -> String {
	match error {
		ServerFnError::ServerError(message) => message.clone(),
		_ => CreateTicketFailure::Network.to_string(),
	}
}

/// Fetches tickets into the dashboard state. A failed fetch leaves the state with no tickets.
pub async fn load_tickets(state: RwSignal<DashboardState>, token: FetchToken) {
	let result = list_tickets().await;
	state.update(|state| {
		if !state.complete_ticket_fetch(token, result) {
			tracing::debug!("Dropped ticket list from a superseded fetch");
		}
	});
}

/// Re-fetches tickets in the background, keeping the current ones shown until the new list arrives
pub fn refresh_tickets(state: RwSignal<DashboardState>) {
	if let Some(token) = state.try_update(|state| state.begin_ticket_refresh()) {
		leptos::task::spawn_local(load_tickets(state, token));
	}
}

/// Shows a blocking alert in the browser
pub fn show_alert(message: &str) {
	if window().alert_with_message(message).is_err() {
		tracing::error!(alert = message, "Failed to show alert");
	}
}
