// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::stats::{TicketStats, recent_tickets};
use super::view::View;
use crate::model::Ticket;

/// Identifies one ticket fetch. Only the token from the most recent fetch is accepted on completion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct FetchToken(u64);

/// The dashboard's application state: the active view and the last-fetched tickets.
#[derive(Clone, Debug)]
pub struct DashboardState {
	view: View,
	tickets: Vec<Ticket>,
	generation: u64,
	loading: bool,
}

impl DashboardState {
	pub fn new() -> Self {
		Self::with_view(View::Dashboard.name())
	}

	/// State for a page opened directly on `view_name`. Nothing is loaded until the first navigation.
	pub fn with_view(view_name: &str) -> Self {
		Self {
			view: View::from_name(view_name),
			tickets: Vec::new(),
			generation: 0,
			loading: true,
		}
	}

	pub fn view(&self) -> &View {
		&self.view
	}

	pub fn tickets(&self) -> &[Ticket] {
		&self.tickets
	}

	/// Switches to the named view.
	///
	/// Returns a token when the view needs a fresh ticket fetch. The first navigation always fetches, since nothing
	/// has been loaded yet.
	pub fn navigate(&mut self, view_name: &str) -> Option<FetchToken> {
		self.view = View::from_name(view_name);
		if self.view.fetches_tickets() || self.generation == 0 {
			Some(self.begin_ticket_fetch())
		} else {
			None
		}
	}

	/// Whether the nav entry for `view_name` is the active one
	pub fn is_active_nav(&self, view_name: &str) -> bool {
		self.view.name() == view_name
	}

	/// Starts a fetch that replaces whatever is shown with the loading state until it completes
	pub fn begin_ticket_fetch(&mut self) -> FetchToken {
		self.loading = true;
		self.next_token()
	}

	/// Starts a fetch that keeps the current tickets on screen until the new ones arrive
	pub fn begin_ticket_refresh(&mut self) -> FetchToken {
		self.next_token()
	}

	fn next_token(&mut self) -> FetchToken {
		self.generation += 1;
		FetchToken(self.generation)
	}

	/// Applies the result of a ticket fetch.
	///
	/// A failed fetch empties the collection. Results for a token older than the latest fetch are dropped; returns
	/// whether the result was applied.
	pub fn complete_ticket_fetch<E>(&mut self, token: FetchToken, result: Result<Vec<Ticket>, E>) -> bool {
		if token.0 != self.generation {
			return false;
		}
		self.tickets = result.unwrap_or_default();
		self.loading = false;
		true
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Every held ticket for the ticket list, or `None` while loading
	pub fn ticket_list(&self) -> Option<&[Ticket]> {
		if self.loading { None } else { Some(&self.tickets) }
	}

	/// Stat card values, or `None` while the numbers are still loading
	pub fn dashboard_stats(&self) -> Option<TicketStats> {
		if self.loading {
			None
		} else {
			Some(TicketStats::from_tickets(&self.tickets))
		}
	}

	/// The dashboard's recent ticket list, or `None` while loading
	pub fn recent_tickets(&self) -> Option<&[Ticket]> {
		if self.loading {
			None
		} else {
			Some(recent_tickets(&self.tickets))
		}
	}
}

impl Default for DashboardState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::TicketStatus;

	fn ticket(id: i64, status: TicketStatus) -> Ticket {
		Ticket {
			id,
			issue: Some(format!("Issue {}", id)),
			status,
			raised_by: Some(1),
			raised_on: None,
			assigned_to: None,
		}
	}

	#[test]
	fn starts_on_dashboard() {
		let state = DashboardState::new();
		assert_eq!(state.view(), &View::Dashboard);
		assert!(state.tickets().is_empty());
		assert!(state.is_active_nav("dashboard"));
	}

	#[test]
	fn opened_page_is_loading_until_first_navigation() {
		let mut state = DashboardState::with_view("users");
		assert_eq!(state.view(), &View::Users);
		assert_eq!(state.dashboard_stats(), None);

		let token = state.navigate("users").unwrap();
		assert!(state.complete_ticket_fetch::<()>(token, Ok(Vec::new())));
		assert_eq!(state.dashboard_stats(), Some(TicketStats::default()));
		assert!(state.navigate("users").is_none());
	}

	#[test]
	fn exactly_one_nav_entry_is_active() {
		let mut state = DashboardState::new();
		let _ = state.navigate("tickets");
		assert!(state.is_active_nav("tickets"));
		assert!(!state.is_active_nav("dashboard"));
		assert!(!state.is_active_nav("users"));
	}

	#[test]
	fn unknown_view_has_no_matching_nav_entry_and_does_not_fail() {
		let mut state = DashboardState::new();
		let _ = state.navigate("dashboard");
		assert!(state.navigate("reports").is_none());
		assert_eq!(state.view(), &View::Placeholder(String::from("reports")));
		assert!(!state.is_active_nav("dashboard"));
	}

	#[test]
	fn dashboard_navigation_always_fetches() {
		let mut state = DashboardState::new();
		let first = state.navigate("dashboard").unwrap();
		assert!(state.complete_ticket_fetch::<()>(first, Ok(vec![ticket(1, TicketStatus::Open)])));
		assert!(state.navigate("tickets").is_none());
		assert!(state.navigate("dashboard").is_some());
	}

	#[test]
	fn first_navigation_loads_tickets_for_any_view() {
		let mut state = DashboardState::new();
		assert!(state.navigate("tickets").is_some());
	}

	#[test]
	fn stats_are_unknown_while_loading() {
		let mut state = DashboardState::new();
		let token = state.navigate("dashboard").unwrap();
		assert_eq!(state.dashboard_stats(), None);
		assert_eq!(state.recent_tickets(), None);

		let tickets = vec![
			ticket(1, TicketStatus::Open),
			ticket(2, TicketStatus::Assigned),
			ticket(3, TicketStatus::Closed),
		];
		assert!(state.complete_ticket_fetch::<()>(token, Ok(tickets)));
		let stats = state.dashboard_stats().unwrap();
		assert_eq!((stats.total, stats.open, stats.closed, stats.assigned), (3, 2, 1, 1));
		assert_eq!(state.recent_tickets().map(|recent| recent.len()), Some(3));
	}

	#[test]
	fn failed_fetch_discards_previous_tickets() {
		let mut state = DashboardState::new();
		let token = state.begin_ticket_fetch();
		assert!(state.complete_ticket_fetch::<()>(token, Ok(vec![ticket(1, TicketStatus::Closed)])));
		assert_eq!(state.tickets().len(), 1);

		let token = state.begin_ticket_fetch();
		assert!(state.complete_ticket_fetch(token, Err("HTTP 500")));
		assert!(state.tickets().is_empty());
		assert_eq!(state.dashboard_stats(), Some(TicketStats::default()));
	}

	#[test]
	fn refresh_keeps_loaded_tickets_on_screen() {
		let mut state = DashboardState::new();
		let token = state.navigate("dashboard").unwrap();
		assert!(state.complete_ticket_fetch::<()>(token, Ok(vec![ticket(1, TicketStatus::Open)])));

		let refresh = state.begin_ticket_refresh();
		assert!(!state.is_loading());
		assert_eq!(state.dashboard_stats().map(|stats| stats.total), Some(1));
		assert_eq!(state.recent_tickets().map(|recent| recent.len()), Some(1));
		assert_eq!(state.ticket_list().map(|tickets| tickets.len()), Some(1));

		let tickets = vec![ticket(2, TicketStatus::Open), ticket(1, TicketStatus::Open)];
		assert!(state.complete_ticket_fetch::<()>(refresh, Ok(tickets)));
		assert_eq!(state.dashboard_stats().map(|stats| stats.total), Some(2));
		assert_eq!(state.recent_tickets().map(|recent| recent[0].id), Some(2));
	}

	#[test]
	fn refresh_supersedes_an_earlier_fetch() {
		let mut state = DashboardState::new();
		let navigation = state.navigate("dashboard").unwrap();
		let refresh = state.begin_ticket_refresh();
		assert!(!state.complete_ticket_fetch::<()>(navigation, Ok(Vec::new())));
		assert!(state.is_loading());
		assert!(state.complete_ticket_fetch::<()>(refresh, Ok(vec![ticket(3, TicketStatus::Closed)])));
		assert!(!state.is_loading());
	}

	#[test]
	fn ticket_list_is_loading_until_first_fetch() {
		let mut state = DashboardState::with_view("tickets");
		assert_eq!(state.ticket_list(), None);

		let token = state.navigate("tickets").unwrap();
		assert_eq!(state.ticket_list(), None);
		assert!(state.complete_ticket_fetch::<()>(token, Ok(Vec::new())));
		assert_eq!(state.ticket_list(), Some(&[][..]));
	}

	#[test]
	fn stale_fetch_results_are_dropped() {
		let mut state = DashboardState::new();
		let slow = state.begin_ticket_fetch();
		let fast = state.begin_ticket_fetch();

		assert!(state.complete_ticket_fetch::<()>(fast, Ok(vec![ticket(2, TicketStatus::Open)])));
		assert!(!state.complete_ticket_fetch::<()>(slow, Ok(vec![ticket(1, TicketStatus::Open)])));
		assert_eq!(state.tickets()[0].id, 2);
	}

	#[test]
	fn newer_fetch_keeps_loading_state_until_it_completes() {
		let mut state = DashboardState::new();
		let old = state.begin_ticket_fetch();
		let _new = state.begin_ticket_fetch();
		assert!(!state.complete_ticket_fetch::<()>(old, Ok(Vec::new())));
		assert!(state.is_loading());
	}
}
