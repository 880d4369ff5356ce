// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A support ticket as returned by the ticket service
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
	pub id: i64,
	#[serde(default)]
	pub issue: Option<String>,
	#[serde(default)]
	pub status: TicketStatus,
	#[serde(default)]
	pub raised_by: Option<i64>,
	#[serde(default)]
	pub raised_on: Option<String>,
	#[serde(default)]
	pub assigned_to: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TicketStatus {
	#[default]
	Open,
	Assigned,
	Closed,
	/// A status this dashboard doesn't know about; displayed as-is
	Other(String),
}

impl TicketStatus {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Open => "OPEN",
			Self::Assigned => "ASSIGNED",
			Self::Closed => "CLOSED",
			Self::Other(status) => status,
		}
	}
}

impl From<Option<String>> for TicketStatus {
	fn from(value: Option<String>) -> Self {
		match value.as_deref() {
			None | Some("") | Some("OPEN") => Self::Open,
			Some("ASSIGNED") => Self::Assigned,
			Some("CLOSED") => Self::Closed,
			Some(_) => Self::Other(value.unwrap_or_default()),
		}
	}
}

impl From<TicketStatus> for String {
	fn from(value: TicketStatus) -> Self {
		match value {
			TicketStatus::Other(status) => status,
			status => status.as_str().to_string(),
		}
	}
}

impl fmt::Display for TicketStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A registered user as returned by the user service
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
	pub id: i64,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub role: UserRole,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum UserRole {
	Customer,
	/// Any other role; empty when the service sent none
	Other(String),
}

impl Default for UserRole {
	fn default() -> Self {
		Self::Other(String::new())
	}
}

impl UserRole {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Customer => "CUSTOMER",
			Self::Other(role) => role,
		}
	}
}

impl From<Option<String>> for UserRole {
	fn from(value: Option<String>) -> Self {
		match value {
			Some(role) if role == "CUSTOMER" => Self::Customer,
			Some(role) => Self::Other(role),
			None => Self::default(),
		}
	}
}

impl From<UserRole> for String {
	fn from(value: UserRole) -> Self {
		match value {
			UserRole::Customer => String::from("CUSTOMER"),
			UserRole::Other(role) => role,
		}
	}
}

impl fmt::Display for UserRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Request body for creating a ticket
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
	pub issue: String,
	pub raised_by: i64,
	pub status: TicketStatus,
}

impl NewTicket {
	pub fn new(issue: String, raised_by: i64) -> Self {
		Self {
			issue,
			raised_by,
			status: TicketStatus::Open,
		}
	}
}
