// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::create_ticket::NewTicketButton;
use crate::dashboard::badge::BadgeStyle;
use crate::dashboard::controller::DashboardState;
use crate::dashboard::display::{issue_text, stat_text, user_reference};
use crate::dashboard::view::View;
use crate::model::Ticket;
use leptos::prelude::*;

#[component]
pub fn Dashboard() -> impl IntoView {
	let state = expect_context::<RwSignal<DashboardState>>();
	let stats = Memo::new(move |_| state.read().dashboard_stats());

	view! {
		<header class="flex-between page_header">
			<div>
				<h1>"Overview"</h1>
				<p>"Welcome back. Here's what's happening today."</p>
			</div>
			<NewTicketButton />
		</header>
		<div class="grid-3 stat_cards">
			<div class="card">
				<span class="label">"Total Tickets"</span>
				<h2 id="stat-total-tickets">{move || stat_text(stats.get(), |stats| stats.total)}</h2>
			</div>
			<div class="card">
				<span class="label">"Open / Assigned"</span>
				<h2 id="stat-open-tickets" class="stat_warning">{move || stat_text(stats.get(), |stats| stats.open)}</h2>
				<span id="stat-assigned-tickets" class="stat_detail">
					{move || stat_text(stats.get(), |stats| stats.assigned)}
					" assigned"
				</span>
			</div>
			<div class="card">
				<span class="label">"Closed"</span>
				<h2 id="stat-closed-tickets" class="stat_success">{move || stat_text(stats.get(), |stats| stats.closed)}</h2>
			</div>
		</div>
		<section>
			<div class="flex-between">
				<h3>"Recent Tickets"</h3>
				<a href={View::Tickets.url()} class="view_all_link">"View all →"</a>
			</div>
			<div id="recent-tickets-list">
				{
					move || match state.read().recent_tickets() {
						None => view! {
							<div class="card empty_panel">"Loading..."</div>
						}.into_any(),
						Some([]) => view! {
							<div class="card empty_panel">"No tickets yet. Create one to get started."</div>
						}.into_any(),
						Some(recent) => recent
							.iter()
							.map(|ticket| view! { <RecentTicket ticket={ticket.clone()} /> })
							.collect::<Vec<_>>()
							.into_any(),
					}
				}
			</div>
		</section>
	}
}

#[component]
fn RecentTicket(ticket: Ticket) -> impl IntoView {
	let badge = BadgeStyle::for_ticket_status(&ticket.status);

	view! {
		<div class="card flex-between recent_ticket">
			<div>
				<h4>{issue_text(&ticket)}</h4>
				<p class="recent_ticket_details">
					{format!("Ticket #{}", ticket.id)}
					" · Raised by "
					{user_reference(ticket.raised_by)}
					{ticket.raised_on.clone().map(|raised_on| format!(" · {}", raised_on))}
				</p>
			</div>
			<span class={badge.class_list()}>{ticket.status.to_string()}</span>
		</div>
	}
}
