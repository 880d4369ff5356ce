// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{Ticket, TicketStatus};

/// Number of tickets shown in the dashboard's recent list
pub const RECENT_TICKET_COUNT: usize = 5;

/// Aggregates shown on the dashboard stat cards.
///
/// `open` is `total - closed`, so assigned tickets are counted both as open and as assigned.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TicketStats {
	pub total: usize,
	pub open: usize,
	pub closed: usize,
	pub assigned: usize,
}

impl TicketStats {
	pub fn from_tickets(tickets: &[Ticket]) -> Self {
		let total = tickets.len();
		let closed = tickets
			.iter()
			.filter(|ticket| ticket.status == TicketStatus::Closed)
			.count();
		let assigned = tickets
			.iter()
			.filter(|ticket| ticket.status == TicketStatus::Assigned)
			.count();

		Self {
			total,
			open: total - closed,
			closed,
			assigned,
		}
	}
}

/// The first tickets in fetch order; the service decides what "recent" means.
pub fn recent_tickets(tickets: &[Ticket]) -> &[Ticket] {
	&tickets[..tickets.len().min(RECENT_TICKET_COUNT)]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ticket(id: i64, status: TicketStatus) -> Ticket {
		Ticket {
			id,
			issue: None,
			status,
			raised_by: None,
			raised_on: None,
			assigned_to: None,
		}
	}

	#[test]
	fn assigned_tickets_still_count_as_open() {
		let tickets = vec![
			ticket(1, TicketStatus::Open),
			ticket(2, TicketStatus::Assigned),
			ticket(3, TicketStatus::Assigned),
			ticket(4, TicketStatus::Closed),
			ticket(5, TicketStatus::Other(String::from("PENDING"))),
		];
		let stats = TicketStats::from_tickets(&tickets);
		assert_eq!(
			stats,
			TicketStats {
				total: 5,
				open: 4,
				closed: 1,
				assigned: 2,
			}
		);
	}

	#[test]
	fn empty_collection_is_all_zero() {
		assert_eq!(TicketStats::from_tickets(&[]), TicketStats::default());
	}

	#[test]
	fn recent_keeps_fetch_order_and_caps_at_five() {
		let tickets: Vec<Ticket> = (10..18).rev().map(|id| ticket(id, TicketStatus::Open)).collect();
		let recent: Vec<i64> = recent_tickets(&tickets).iter().map(|ticket| ticket.id).collect();
		assert_eq!(recent, vec![17, 16, 15, 14, 13]);
	}

	#[test]
	fn recent_with_fewer_than_five() {
		let tickets = vec![ticket(1, TicketStatus::Closed), ticket(2, TicketStatus::Open)];
		assert_eq!(recent_tickets(&tickets).len(), 2);
		assert!(recent_tickets(&[]).is_empty());
	}
}
