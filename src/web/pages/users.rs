// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::list_users;
use crate::dashboard::badge::BadgeStyle;
use crate::dashboard::directory::DirectoryContent;
use crate::dashboard::display::{USER_SERVICE_UNAVAILABLE, optional_text};
use leptos::prelude::*;

/// The user directory. Fetches a fresh user list every time it's shown.
#[component]
pub fn UserDirectory() -> impl IntoView {
	let users = OnceResource::new(list_users());

	view! {
		<Transition fallback=|| view! {
			<header class="page_header">
				<h1>"User Directory"</h1>
				<p>"All registered users across the system."</p>
			</header>
			<div class="card empty_panel">"Loading users..."</div>
		}>
			{
				move || match users.read().as_ref().map(DirectoryContent::from_result) {
					Some(DirectoryContent::Table { summary, users }) => view! {
						<header class="page_header">
							<h1>"User Directory"</h1>
							<p>{summary}</p>
						</header>
						<div class="card table_card">
							<table class="data-table">
								<thead>
									<tr>
										<th>"ID"</th>
										<th>"Name"</th>
										<th>"Email"</th>
										<th>"Phone"</th>
										<th>"Role"</th>
									</tr>
								</thead>
								<tbody>
									{
										users.iter().map(|user| {
											let badge = BadgeStyle::for_user_role(&user.role);
											view! {
												<tr>
													<td>{format!("#{}", user.id)}</td>
													<td class="user_name">{user.name.clone()}</td>
													<td>{user.email.clone()}</td>
													<td>{optional_text(user.phone.as_deref())}</td>
													<td>
														<span class={badge.class_list()}>{optional_text(Some(user.role.as_str()))}</span>
													</td>
												</tr>
											}
										}).collect::<Vec<_>>()
									}
								</tbody>
							</table>
						</div>
					}.into_any(),
					Some(DirectoryContent::Unavailable) => view! {
						<header class="page_header">
							<h1>"User Directory"</h1>
						</header>
						<div class="card error_panel">{USER_SERVICE_UNAVAILABLE}</div>
					}.into_any(),
					None => ().into_any(),
				}
			}
		</Transition>
	}
}
