// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::User;

/// What the user directory shows once its fetch has finished
#[derive(Debug, Eq, PartialEq)]
pub enum DirectoryContent<'a> {
	Table { summary: String, users: &'a [User] },
	/// Any failure, whether the service was down or sent something unreadable
	Unavailable,
}

impl<'a> DirectoryContent<'a> {
	pub fn from_result<E>(result: &'a Result<Vec<User>, E>) -> Self {
		match result {
			Ok(users) => Self::Table {
				summary: format!("{} users registered.", users.len()),
				users,
			},
			Err(_) => Self::Unavailable,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::UserRole;

	fn user(id: i64, role: UserRole) -> User {
		User {
			id,
			name: format!("User {}", id),
			email: format!("user{}@example.com", id),
			phone: None,
			role,
		}
	}

	#[test]
	fn loaded_users_fill_the_table() {
		let result: Result<Vec<User>, ()> = Ok(vec![
			user(1, UserRole::Customer),
			user(2, UserRole::Other(String::from("AGENT"))),
		]);
		match DirectoryContent::from_result(&result) {
			DirectoryContent::Table { summary, users } => {
				assert_eq!(summary, "2 users registered.");
				assert_eq!(users.iter().map(|user| user.id).collect::<Vec<_>>(), vec![1, 2]);
			}
			DirectoryContent::Unavailable => panic!("expected a table"),
		}
	}

	#[test]
	fn failed_fetch_shows_no_table() {
		let result: Result<Vec<User>, &str> = Err("connection refused");
		assert_eq!(DirectoryContent::from_result(&result), DirectoryContent::Unavailable);
	}

	#[test]
	fn empty_directory_is_still_a_table() {
		let result: Result<Vec<User>, ()> = Ok(Vec::new());
		assert_eq!(
			DirectoryContent::from_result(&result),
			DirectoryContent::Table {
				summary: String::from("0 users registered."),
				users: &[],
			}
		);
	}
}
