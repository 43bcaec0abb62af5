//! Helpers over the browser environment: viewport sizing, entropy and
//! JSON embedded in the page.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::error::{Result, VizError};

/// Half of the screen's available area, the space each chart takes up.
pub fn half_screen(window: &Window) -> Result<(f64, f64)> {
	let screen = window
		.screen()
		.map_err(|e| VizError::Js(format!("{e:?}")))?;
	let width = screen
		.avail_width()
		.map_err(|e| VizError::Js(format!("{e:?}")))?;
	let height = screen
		.avail_height()
		.map_err(|e| VizError::Js(format!("{e:?}")))?;
	Ok((width as f64 / 2.0, height as f64 / 2.0))
}

/// Seeds a generator from the browser's `Math.random`.
pub fn browser_rng() -> StdRng {
	StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Reads and parses the JSON text of the `<script>` element with the given id.
pub fn load_json_script<T: DeserializeOwned>(id: &str) -> Result<T> {
	let missing = || VizError::MissingElement(id.to_string());
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(missing)?;
	let script: HtmlScriptElement = document
		.get_element_by_id(id)
		.ok_or_else(missing)?
		.dyn_into()
		.map_err(|_| missing())?;
	let text = script
		.text()
		.map_err(|e| VizError::Js(format!("{e:?}")))?;
	let value = serde_json::from_str(&text)?;
	info!("house-viz: loaded #{} ({} bytes)", id, text.len());
	Ok(value)
}
