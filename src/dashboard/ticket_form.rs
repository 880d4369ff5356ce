// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::NewTicket;
use std::time::Duration;
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Create Ticket";
pub const SUBMITTING_LABEL: &str = "Creating...";

/// How long the fade-out runs before the overlay is hidden
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(200);

/// Lifecycle of the create-ticket modal.
///
/// Opening is split over two steps so the overlay is unhidden one frame before its transition styles apply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ModalPhase {
	#[default]
	Closed,
	Opening,
	Open,
	Submitting,
	Closing,
}

impl ModalPhase {
	/// Unhides the overlay
	pub fn open(self) -> Self {
		match self {
			Self::Closed | Self::Closing => Self::Opening,
			phase => phase,
		}
	}

	/// Runs on the animation frame after `open`; starts the fade/slide-in
	pub fn frame(self) -> Self {
		match self {
			Self::Opening => Self::Open,
			phase => phase,
		}
	}

	/// Starts the fade-out. A submission in flight keeps the modal open.
	pub fn close(self) -> Self {
		match self {
			Self::Opening | Self::Open => Self::Closing,
			phase => phase,
		}
	}

	/// Runs once the fade-out has finished
	pub fn finish_close(self) -> Self {
		match self {
			Self::Closing => Self::Closed,
			phase => phase,
		}
	}

	/// Returns `None` if the form can't be submitted in this phase
	pub fn begin_submit(self) -> Option<Self> {
		match self {
			Self::Open => Some(Self::Submitting),
			_ => None,
		}
	}

	pub fn submit_succeeded(self) -> Self {
		match self {
			Self::Submitting => Self::Closing,
			phase => phase,
		}
	}

	/// The modal stays open with the form as entered so the user can retry
	pub fn submit_failed(self) -> Self {
		match self {
			Self::Submitting => Self::Open,
			phase => phase,
		}
	}

	/// Whether the overlay element carries the `hidden` class
	pub fn is_hidden(self) -> bool {
		self == Self::Closed
	}

	/// Whether the fade/slide-in styles are applied
	pub fn is_shown(self) -> bool {
		matches!(self, Self::Open | Self::Submitting)
	}

	pub fn is_submitting(self) -> bool {
		self == Self::Submitting
	}

	pub fn submit_label(self) -> &'static str {
		if self.is_submitting() {
			SUBMITTING_LABEL
		} else {
			SUBMIT_LABEL
		}
	}

	pub fn overlay_style(self) -> &'static str {
		if self.is_shown() { "opacity: 1;" } else { "opacity: 0;" }
	}

	pub fn body_style(self) -> &'static str {
		if self.is_shown() {
			"transform: translateY(0);"
		} else {
			"transform: translateY(10px);"
		}
	}
}

/// Values entered in the create-ticket form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TicketForm {
	pub issue: String,
	pub raised_by: String,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum TicketFormError {
	#[error("\"Raised by\" must be a user ID number, got {0:?}")]
	InvalidRaisedBy(String),
}

impl TicketForm {
	pub fn to_new_ticket(&self) -> Result<NewTicket, TicketFormError> {
		let raised_by = self
			.raised_by
			.trim()
			.parse::<i64>()
			.map_err(|_| TicketFormError::InvalidRaisedBy(self.raised_by.clone()))?;
		Ok(NewTicket::new(self.issue.clone(), raised_by))
	}
}

/// Why a ticket couldn't be created, as shown to the user
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CreateTicketFailure {
	#[error("Failed to create ticket. Server returned {0}")]
	Status(u16),
	#[error("Network error creating ticket.")]
	Network,
}

impl CreateTicketFailure {
	/// A service that answered gets its status reported; anything else is a network error
	pub fn from_status(status: Option<u16>) -> Self {
		match status {
			Some(status) => Self::Status(status),
			None => Self::Network,
		}
	}
}
