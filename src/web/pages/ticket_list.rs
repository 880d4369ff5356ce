// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::create_ticket::NewTicketButton;
use crate::dashboard::badge::BadgeStyle;
use crate::dashboard::controller::DashboardState;
use crate::dashboard::display::{assigned_user, issue_text, user_reference};
use crate::model::Ticket;
use leptos::prelude::*;

/// Every ticket from the last fetch, without pagination
#[component]
pub fn TicketList() -> impl IntoView {
	let state = expect_context::<RwSignal<DashboardState>>();

	view! {
		<header class="flex-between page_header">
			<h1>"All Tickets"</h1>
			<NewTicketButton />
		</header>
		{
			move || match state.read().ticket_list() {
				None => view! {
					<div class="card empty_panel">"Loading..."</div>
				}.into_any(),
				Some([]) => view! {
					<div class="card empty_panel">"No tickets found."</div>
				}.into_any(),
				Some(tickets) => tickets
					.iter()
					.map(|ticket| view! { <TicketCard ticket={ticket.clone()} /> })
					.collect::<Vec<_>>()
					.into_any(),
			}
		}
	}
}

#[component]
fn TicketCard(ticket: Ticket) -> impl IntoView {
	let badge = BadgeStyle::for_ticket_status(&ticket.status);

	view! {
		<div class="card ticket_card">
			<div class="flex-between ticket_card_header">
				<h3>{issue_text(&ticket)}</h3>
				<span class={badge.class_list()}>{ticket.status.to_string()}</span>
			</div>
			<div class="ticket_card_details">
				<span>{format!("Ticket #{}", ticket.id)}</span>
				<span class="separator">"·"</span>
				<span>"Raised by "{user_reference(ticket.raised_by)}</span>
				{
					ticket.raised_on.clone().map(|raised_on| view! {
						<span class="separator">"·"</span>
						<span>{raised_on}</span>
					})
				}
				{
					assigned_user(ticket.assigned_to).map(|assigned_to| view! {
						<span class="separator">"·"</span>
						<span>"Assigned to "{user_reference(Some(assigned_to))}</span>
					})
				}
			</div>
		</div>
	}
}
