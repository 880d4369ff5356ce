// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{create_ticket, create_ticket_failure_message, refresh_tickets, show_alert};
use crate::dashboard::controller::DashboardState;
use crate::dashboard::ticket_form::{CLOSE_TRANSITION, ModalPhase, TicketForm};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NewTicketButton() -> impl IntoView {
	let modal = expect_context::<RwSignal<ModalPhase>>();
	let open_modal = move |_: MouseEvent| modal.update(|phase| *phase = phase.open());

	view! {
		<button class="btn btn-primary" on:click=open_modal>"+ New Ticket"</button>
	}
}

#[component]
pub fn CreateTicketModal() -> impl IntoView {
	let state = expect_context::<RwSignal<DashboardState>>();
	let modal = expect_context::<RwSignal<ModalPhase>>();

	let (issue, set_issue) = signal(String::new());
	let (raised_by, set_raised_by) = signal(String::new());

	Effect::new(move |_| match modal.get() {
		ModalPhase::Opening => {
			request_animation_frame(move || modal.update(|phase| *phase = phase.frame()));
		}
		ModalPhase::Closing => {
			set_timeout(
				move || modal.update(|phase| *phase = phase.finish_close()),
				CLOSE_TRANSITION,
			);
		}
		_ => (),
	});

	let close_modal = move |_: MouseEvent| modal.update(|phase| *phase = phase.close());

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let form = TicketForm {
			issue: issue.get_untracked(),
			raised_by: raised_by.get_untracked(),
		};
		let new_ticket = match form.to_new_ticket() {
			Ok(ticket) => ticket,
			Err(error) => {
				show_alert(&error.to_string());
				return;
			}
		};

		let Some(submitting) = modal.get_untracked().begin_submit() else {
			return;
		};
		modal.set(submitting);

		spawn_local(async move {
			match create_ticket(new_ticket.issue, new_ticket.raised_by).await {
				Ok(()) => {
					modal.update(|phase| *phase = phase.submit_succeeded());
					set_issue.set(String::new());
					set_raised_by.set(String::new());
					refresh_tickets(state);
				}
				Err(error) => {
					modal.update(|phase| *phase = phase.submit_failed());
					show_alert(&create_ticket_failure_message(&error));
				}
			}
		});
	};

	view! {
		<div
			id="modal-overlay"
			class="modal-overlay"
			class:hidden=move || modal.get().is_hidden()
			style=move || modal.get().overlay_style()
		>
			<div class="modal-body" style=move || modal.get().body_style()>
				<h2>"New Ticket"</h2>
				<form id="create-ticket-form" on:submit=form_submit>
					<label>
						<span class="label">"Issue"</span>
						<input
							id="ticket-issue"
							type="text"
							required
							bind:value=(issue, set_issue)
						/>
					</label>
					<label>
						<span class="label">"Raised by (user ID)"</span>
						<input
							id="ticket-raisedby"
							type="number"
							min="1"
							required
							bind:value=(raised_by, set_raised_by)
						/>
					</label>
					<div class="flex-between modal_actions">
						<button type="button" class="btn" on:click=close_modal>"Cancel"</button>
						<button
							type="submit"
							class="btn btn-primary"
							disabled=move || modal.get().is_submitting()
						>
							{move || modal.get().submit_label()}
						</button>
					</div>
				</form>
			</div>
		</div>
	}
}
