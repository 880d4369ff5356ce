// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dashboard::view::placeholder_title;
use leptos::prelude::*;

/// Shown for any view without a screen of its own
#[component]
pub fn Placeholder(view_name: String) -> impl IntoView {
	view! {
		<header class="page_header">
			<h1>{placeholder_title(&view_name)}</h1>
			<p>"This section is under development."</p>
		</header>
	}
}
