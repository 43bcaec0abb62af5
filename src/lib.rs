//! house-viz: interactive views of the U.S. House of Representatives.
//!
//! This crate renders two WASM visualizations side by side: a
//! force-directed seat plot of members grouped by party, and a choropleth
//! of congressional districts with per-party seat counts.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod browser;
pub mod components;
pub mod data;
pub mod error;

pub use components::district_map::{DistrictMap, FeatureCollection};
pub use components::seat_plot::{SeatPlotCanvas, SeatPlotConfig, SeatPlotState, SeatTheme};
pub use data::{Party, SeatData, SeatLink, SeatNode, link_delegations, random_graph};
pub use error::VizError;

/// Id of the `<script type="application/json">` holding the seat graph.
pub const SEAT_DATA_ID: &str = "seat-data";
/// Id of the `<script type="application/json">` holding the district map.
pub const MAP_DATA_ID: &str = "map-data";

/// Vertices in the placeholder graph shown when no seat data is embedded.
pub const PLACEHOLDER_VERTICES: usize = 10;
/// Edges in the placeholder graph.
pub const PLACEHOLDER_EDGES: usize = 15;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("house-viz: logging initialized");
}

/// Prepares seat data for the plot. Datasets without links get delegation
/// links; a missing dataset is replaced by a random placeholder graph.
pub fn prepare_seat_data(loaded: error::Result<SeatData>, rng: &mut impl rand::Rng) -> SeatData {
	match loaded {
		Ok(mut data) => {
			if data.links.is_empty() {
				let count = link_delegations(&mut data);
				info!("house-viz: linked {} delegation members", count);
			}
			data
		}
		Err(e) => {
			warn!("house-viz: no seat data ({}), using a placeholder graph", e);
			random_graph(rng, PLACEHOLDER_VERTICES, Some(PLACEHOLDER_EDGES)).unwrap_or_default()
		}
	}
}

fn load_seat_data() -> SeatData {
	let mut rng = browser::browser_rng();
	prepare_seat_data(browser::load_json_script(SEAT_DATA_ID), &mut rng)
}

fn load_map_data() -> FeatureCollection {
	browser::load_json_script(MAP_DATA_ID).unwrap_or_else(|e| {
		warn!("house-viz: no map data ({}), map will be empty", e);
		FeatureCollection::default()
	})
}

/// Main application component.
/// Loads both datasets from the DOM and renders the two charts.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let seat_data = load_seat_data();
	let seat_signal = Signal::derive(move || seat_data.clone());
	let map_data = load_map_data();
	let map_signal = Signal::derive(move || map_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="House of Representatives" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="charts">
			<section class="chart">
				<h2>"Seats"</h2>
				<p class="subtitle">"Click to toggle delegation links. Scroll to shuffle parties."</p>
				<SeatPlotCanvas data=seat_signal />
			</section>
			<section class="chart">
				<h2>"Districts"</h2>
				<DistrictMap data=map_signal />
			</section>
		</main>
	}
}
