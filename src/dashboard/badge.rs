// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{TicketStatus, UserRole};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BadgeStyle {
	Open,
	Urgent,
	Closed,
}

impl BadgeStyle {
	pub fn for_ticket_status(status: &TicketStatus) -> Self {
		match status {
			TicketStatus::Closed => Self::Closed,
			TicketStatus::Assigned => Self::Urgent,
			TicketStatus::Open | TicketStatus::Other(_) => Self::Open,
		}
	}

	pub fn for_user_role(role: &UserRole) -> Self {
		match role {
			UserRole::Customer => Self::Open,
			UserRole::Other(_) => Self::Closed,
		}
	}

	/// The full class list for a badge element
	pub fn class_list(self) -> &'static str {
		match self {
			Self::Open => "badge badge-open",
			Self::Urgent => "badge badge-urgent",
			Self::Closed => "badge badge-closed",
		}
	}
}
