// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// A named screen of the dashboard.
///
/// Any name is a valid view; names other than the built-in screens get the "under development" placeholder.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum View {
	Dashboard,
	Tickets,
	Users,
	Placeholder(String),
}

impl View {
	pub fn from_name(name: &str) -> Self {
		match name {
			"" | "dashboard" => Self::Dashboard,
			"tickets" => Self::Tickets,
			"users" => Self::Users,
			other => Self::Placeholder(other.to_string()),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Dashboard => "dashboard",
			Self::Tickets => "tickets",
			Self::Users => "users",
			Self::Placeholder(name) => name,
		}
	}

	/// Whether showing this view starts a fresh ticket fetch
	pub fn fetches_tickets(&self) -> bool {
		matches!(self, Self::Dashboard)
	}

	/// The page path for this view
	pub fn url(&self) -> String {
		match self {
			Self::Dashboard => String::from("/"),
			view => format!("/{}", view.name()),
		}
	}
}

impl Default for View {
	fn default() -> Self {
		Self::Dashboard
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// An entry in the side navigation menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavEntry {
	pub view_name: &'static str,
	pub label: &'static str,
}

impl NavEntry {
	/// Element ID for the entry's link
	pub fn element_id(&self) -> String {
		format!("nav-{}", self.view_name)
	}
}

pub const NAV_ENTRIES: &[NavEntry] = &[
	NavEntry {
		view_name: "dashboard",
		label: "Dashboard",
	},
	NavEntry {
		view_name: "tickets",
		label: "Tickets",
	},
	NavEntry {
		view_name: "users",
		label: "Users",
	},
	NavEntry {
		view_name: "reports",
		label: "Reports",
	},
	NavEntry {
		view_name: "settings",
		label: "Settings",
	},
];

/// Title for the placeholder page: the view name with its first character uppercased
pub fn placeholder_title(view_name: &str) -> String {
	let mut chars = view_name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
