// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::stats::TicketStats;
use crate::model::Ticket;

/// Shown in place of a missing value
pub const MISSING_VALUE: &str = "–";
pub const NO_ISSUE_DESCRIPTION: &str = "No issue description";
pub const USER_SERVICE_UNAVAILABLE: &str = "Could not load users. Make sure User Service is running on port 9001.";

pub fn issue_text(ticket: &Ticket) -> String {
	match ticket.issue.as_deref() {
		Some(issue) if !issue.is_empty() => issue.to_string(),
		_ => String::from(NO_ISSUE_DESCRIPTION),
	}
}

/// A user ID that refers to someone; 0 is the services' "nobody"
pub fn assigned_user(user_id: Option<i64>) -> Option<i64> {
	user_id.filter(|&id| id != 0)
}

/// "User #N", or a dash when there's no user
pub fn user_reference(user_id: Option<i64>) -> String {
	match assigned_user(user_id) {
		Some(id) => format!("User #{}", id),
		None => format!("User #{}", MISSING_VALUE),
	}
}

pub fn optional_text(value: Option<&str>) -> String {
	match value {
		Some(value) if !value.is_empty() => value.to_string(),
		_ => String::from(MISSING_VALUE),
	}
}

/// Text for one stat card; a dash until the numbers are loaded
pub fn stat_text(stats: Option<TicketStats>, pick: fn(&TicketStats) -> usize) -> String {
	match stats {
		Some(stats) => pick(&stats).to_string(),
		None => String::from(MISSING_VALUE),
	}
}
