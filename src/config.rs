// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{Diagnostic, IntoDiagnostic};
use thiserror::Error;
use tokio::fs::read_to_string;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_API_BASE: &str = "http://localhost:9090";

#[derive(Debug, Diagnostic, Error)]
pub enum ConfigError {
	#[error("config value `{0}` must be a string")]
	#[diagnostic(code(conquest::config::not_a_string), help("Quote the value, e.g. {0} \"...\""))]
	NotAString(&'static str),
	#[error("config value `api_base` must be an http(s) URL, got {0:?}")]
	#[diagnostic(code(conquest::config::api_base))]
	InvalidApiBase(String),
}

#[derive(Debug)]
pub struct ConfigData {
	/// Address the web server listens on
	pub bind_addr: String,
	/// Base origin of the API gateway in front of the ticket and user services
	pub api_base: String,
}

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_str(&config_file_contents)
}

pub fn parse_config_str(config_file_contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let bind_addr = string_value(&document, "bind_addr")?.unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));
	let api_base = string_value(&document, "api_base")?.unwrap_or_else(|| String::from(DEFAULT_API_BASE));

	if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
		return Err(ConfigError::InvalidApiBase(api_base).into());
	}

	Ok(ConfigData { bind_addr, api_base })
}

fn string_value(document: &KdlDocument, name: &'static str) -> Result<Option<String>, ConfigError> {
	match document.get_arg(name) {
		Some(value) => match value.as_string() {
			Some(value) => Ok(Some(value.to_string())),
			None => Err(ConfigError::NotAString(name)),
		},
		None => Ok(None),
	}
}
