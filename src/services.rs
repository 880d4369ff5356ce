// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for the ticket and user services behind the API gateway.

use crate::dashboard::ticket_form::CreateTicketFailure;
use crate::model::{NewTicket, Ticket, User};
use miette::Diagnostic;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const TICKET_SERVICE_PATH: &str = "/ticket-service/tickets";
pub const USER_SERVICE_PATH: &str = "/user-micro-service/users";

#[derive(Debug, Diagnostic, Error)]
pub enum ServiceError {
	#[error("request to {url} failed")]
	#[diagnostic(code(conquest::service::transport))]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{url} returned {status}")]
	#[diagnostic(code(conquest::service::status))]
	Status { url: String, status: StatusCode },
	#[error("couldn't decode the response from {url}")]
	#[diagnostic(code(conquest::service::decode))]
	Decode {
		url: String,
		#[source]
		source: reqwest::Error,
	},
}

impl ServiceError {
	/// The HTTP status, if the service answered with a non-success one
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// What to tell the user when creating a ticket failed with this error
	pub fn create_ticket_failure(&self) -> CreateTicketFailure {
		CreateTicketFailure::from_status(self.status().map(|status| status.as_u16()))
	}
}

/// Issues requests against one gateway base origin. There are no retries; the first attempt is final.
#[derive(Clone, Debug)]
pub struct ServiceClient {
	client: Client,
	api_base: String,
}

impl ServiceClient {
	pub fn new(api_base: &str) -> Self {
		Self {
			client: Client::new(),
			api_base: api_base.trim_end_matches('/').to_string(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.api_base, path)
	}

	pub async fn fetch_tickets(&self) -> Result<Vec<Ticket>, ServiceError> {
		self.fetch_json(&self.url(TICKET_SERVICE_PATH)).await
	}

	pub async fn fetch_users(&self) -> Result<Vec<User>, ServiceError> {
		self.fetch_json(&self.url(USER_SERVICE_PATH)).await
	}

	/// Posts a new ticket. Any success status counts as created.
	pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<(), ServiceError> {
		let url = self.url(TICKET_SERVICE_PATH);
		let response = self
			.client
			.post(&url)
			.json(ticket)
			.send()
			.await
			.map_err(|source| ServiceError::Transport {
				url: url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(ServiceError::Status { url, status });
		}

		tracing::debug!(%url, %status, "ticket created");
		Ok(())
	}

	async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(|source| ServiceError::Transport {
				url: url.to_string(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(ServiceError::Status {
				url: url.to_string(),
				status,
			});
		}

		response.json::<T>().await.map_err(|source| ServiceError::Decode {
			url: url.to_string(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::TicketStatus;
	use mockito::Matcher;
	use serde_json::json;

	#[tokio::test]
	async fn fetches_tickets_in_service_order() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("GET", TICKET_SERVICE_PATH)
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(
				json!([
					{ "id": 9, "issue": "VPN down", "status": "CLOSED", "raisedBy": 2 },
					{ "id": 4, "issue": "Printer jam", "raisedBy": 3 }
				])
				.to_string(),
			)
			.create_async()
			.await;

		let client = ServiceClient::new(&server.url());
		let tickets = client.fetch_tickets().await.unwrap();

		mock.assert_async().await;
		assert_eq!(tickets.iter().map(|ticket| ticket.id).collect::<Vec<_>>(), vec![9, 4]);
		assert_eq!(tickets[0].status, TicketStatus::Closed);
		assert_eq!(tickets[1].status, TicketStatus::Open);
	}

	#[tokio::test]
	async fn server_error_status_is_reported() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server
			.mock("GET", TICKET_SERVICE_PATH)
			.with_status(500)
			.create_async()
			.await;

		let client = ServiceClient::new(&server.url());
		let error = client.fetch_tickets().await.unwrap_err();
		assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
	}

	#[tokio::test]
	async fn malformed_user_list_is_a_decode_error() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server
			.mock("GET", USER_SERVICE_PATH)
			.with_status(200)
			.with_body("<html>gateway timeout</html>")
			.create_async()
			.await;

		let client = ServiceClient::new(&server.url());
		let error = client.fetch_users().await.unwrap_err();
		assert!(matches!(error, ServiceError::Decode { .. }));
	}

	#[tokio::test]
	async fn unreachable_service_is_a_transport_error() {
		// Nothing listens on the discard port
		let client = ServiceClient::new("http://127.0.0.1:9");
		let error = client.fetch_users().await.unwrap_err();
		assert!(matches!(error, ServiceError::Transport { .. }));
		assert_eq!(error.status(), None);
	}

	#[tokio::test]
	async fn posts_new_ticket_as_json() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("POST", TICKET_SERVICE_PATH)
			.match_header("content-type", "application/json")
			.match_body(Matcher::Json(json!({
				"issue": "Printer jam",
				"raisedBy": 3,
				"status": "OPEN"
			})))
			.with_status(201)
			.create_async()
			.await;

		let client = ServiceClient::new(&format!("{}/", server.url()));
		client
			.create_ticket(&NewTicket::new(String::from("Printer jam"), 3))
			.await
			.unwrap();
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn rejected_ticket_reports_status() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server
			.mock("POST", TICKET_SERVICE_PATH)
			.with_status(400)
			.create_async()
			.await;

		let client = ServiceClient::new(&server.url());
		let error = client
			.create_ticket(&NewTicket::new(String::from("Printer jam"), 3))
			.await
			.unwrap_err();
		assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
	}

	#[tokio::test]
	async fn server_error_on_create_names_the_status() {
		let mut server = mockito::Server::new_async().await;
		let _mock = server
			.mock("POST", TICKET_SERVICE_PATH)
			.with_status(500)
			.create_async()
			.await;

		let client = ServiceClient::new(&server.url());
		let error = client
			.create_ticket(&NewTicket::new(String::from("Printer jam"), 3))
			.await
			.unwrap_err();
		assert_eq!(
			error.create_ticket_failure().to_string(),
			"Failed to create ticket. Server returned 500"
		);
	}

	#[tokio::test]
	async fn unreachable_service_on_create_is_a_network_failure() {
		let client = ServiceClient::new("http://127.0.0.1:9");
		let error = client
			.create_ticket(&NewTicket::new(String::from("Printer jam"), 3))
			.await
			.unwrap_err();
		assert_eq!(error.create_ticket_failure(), CreateTicketFailure::Network);
		assert_eq!(error.create_ticket_failure().to_string(), "Network error creating ticket.");
	}
}
