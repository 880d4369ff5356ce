// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dashboard::controller::DashboardState;
use crate::dashboard::view::{NAV_ENTRIES, View};
use leptos::prelude::*;

#[component]
pub fn NavMenu() -> impl IntoView {
	let state = expect_context::<RwSignal<DashboardState>>();

	view! {
		<nav id="sidebar">
			<div id="sidebar_brand">"Conquest"</div>
			{
				NAV_ENTRIES
					.iter()
					.map(|entry| {
						let view_name = entry.view_name;
						view! {
							<a
								id={entry.element_id()}
								href={View::from_name(view_name).url()}
								class:active=move || state.read().is_active_nav(view_name)
							>
								{entry.label}
							</a>
						}
					})
					.collect::<Vec<_>>()
			}
		</nav>
	}
}
