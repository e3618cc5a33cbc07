use log::{debug, error, info};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::FamilyNode;

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("HTTP error! status: {0}")]
	Status(u16),
	#[error("request failed: {0}")]
	Network(String),
	#[error("invalid JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

impl From<JsValue> for LoadError {
	fn from(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|err| String::from(err.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{value:?}"));
		LoadError::Network(message)
	}
}

/// Turns a fetched response into the root node. A `null` document is `Ok(None)`.
pub fn decode(status: u16, body: &str) -> Result<Option<FamilyNode>, LoadError> {
	if !(200..300).contains(&status) {
		return Err(LoadError::Status(status));
	}
	Ok(serde_json::from_str(body)?)
}

/// Fetches and parses the document at `path`. Single attempt.
pub async fn fetch_family_tree(path: &str) -> Result<Option<FamilyNode>, LoadError> {
	info!("Attempting to load file: {path}");
	let result = fetch_text(path)
		.await
		.and_then(|(status, body)| decode(status, &body));
	match &result {
		Ok(Some(root)) => debug!("Parsed family tree with {} members", root.count()),
		Ok(None) => debug!("Family tree document at {path} is empty"),
		Err(err) => error!("Error loading family tree data: {err}"),
	}
	result
}

async fn fetch_text(path: &str) -> Result<(u16, String), LoadError> {
	let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;
	let response: Response = JsFuture::from(window.fetch_with_str(path))
		.await?
		.dyn_into()?;
	let status = response.status();
	if !response.ok() {
		return Err(LoadError::Status(status));
	}
	let body = JsFuture::from(response.text()?).await?;
	Ok((status, body.as_string().unwrap_or_default()))
}
