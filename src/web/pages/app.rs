// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::create_ticket::CreateTicketModal;
use super::dashboard::Dashboard;
use super::errors::not_found::NotFound;
use super::header::NavMenu;
use super::placeholder::Placeholder;
use super::ticket_list::TicketList;
use super::users::UserDirectory;
use super::utils::{ViewParam, load_tickets};
use crate::dashboard::controller::DashboardState;
use crate::dashboard::ticket_form::ModalPhase;
use crate::dashboard::view::View;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params;
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/conquest-dashboard.css" />
		<Title text="Conquest" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/:view?") view=MainPage />
			</Routes>
		</Router>
	}
}

/// The dashboard layout: navigation, the active view, and the create-ticket modal.
///
/// Owns the dashboard state for as long as the user stays on the page.
#[component]
fn MainPage() -> impl IntoView {
	let params = use_params::<ViewParam>();
	let requested_view = Memo::new(move |_| {
		params
			.read()
			.as_ref()
			.map(|params| params.view_name().to_string())
			.unwrap_or_default()
	});

	let state = RwSignal::new(DashboardState::with_view(&requested_view.get_untracked()));
	let modal = RwSignal::new(ModalPhase::default());
	provide_context(state);
	provide_context(modal);

	// Runs in the browser only, so the first fetch happens after hydration
	Effect::new(move |_| {
		let view_name = requested_view.get();
		if let Some(token) = state.try_update(|state| state.navigate(&view_name)).flatten() {
			leptos::task::spawn_local(load_tickets(state, token));
		}
	});

	let active_view = Memo::new(move |_| state.read().view().clone());

	view! {
		<div id="app_layout">
			<NavMenu />
			<main id="main-content">
				{
					move || match active_view.get() {
						View::Dashboard => view! { <Dashboard /> }.into_any(),
						View::Tickets => view! { <TicketList /> }.into_any(),
						View::Users => view! { <UserDirectory /> }.into_any(),
						View::Placeholder(view_name) => view! { <Placeholder view_name /> }.into_any(),
					}
				}
			</main>
			<CreateTicketModal />
		</div>
	}
}
