//! Leptos component rendering the district map as SVG.

use leptos::prelude::*;
use log::{info, warn};

use super::geojson::FeatureCollection;
use super::projection::AlbersUsa;
use super::tally::tally;
use crate::browser::half_screen;
use crate::data::Party;

/// Fill and stroke for district shapes.
#[derive(Clone, Debug)]
pub struct MapStyle {
	/// Fill for Republican-held districts.
	pub republican_fill: String,
	/// Fill for every district not held by a Republican.
	pub other_fill: String,
	/// Outline color between districts.
	pub stroke: String,
	/// Outline width in pixels.
	pub stroke_width: f64,
}

impl Default for MapStyle {
	fn default() -> Self {
		Self {
			republican_fill: "#ba0c00".into(),
			other_fill: "#0739ff".into(),
			stroke: "#fff".into(),
			stroke_width: 0.5,
		}
	}
}

impl MapStyle {
	/// Fill for a district held by `party`.
	pub fn fill(&self, party: Party) -> &str {
		match party {
			Party::Republican => &self.republican_fill,
			Party::Democrat => &self.other_fill,
		}
	}
}

/// A projected district ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictShape {
	/// SVG path data. Empty for features without a geometry.
	pub d: String,
	/// Inline fill and stroke.
	pub style: String,
	/// `"District – Incumbent"`, shown as the path's `<title>`.
	pub title: String,
}

/// Projects every feature into the `width × height` frame, one shape per
/// feature in collection order.
pub fn district_shapes(
	collection: &FeatureCollection,
	width: f64,
	height: f64,
	style: &MapStyle,
) -> Vec<DistrictShape> {
	let mut projection = AlbersUsa::default();
	projection.fit_extent([[0.0, 0.0], [width, height]], collection);
	collection
		.features
		.iter()
		.map(|feature| DistrictShape {
			d: feature
				.geometry
				.as_ref()
				.map(|geometry| projection.path(geometry))
				.unwrap_or_default(),
			style: format!(
				"fill: {}; stroke: {}; stroke-width: {}",
				style.fill(feature.properties.party()),
				style.stroke,
				style.stroke_width
			),
			title: feature.properties.title(),
		})
		.collect()
}

/// Renders districts filled by party, plus the per-party seat counts.
///
/// Each district path carries a `<title>` tooltip; hovering also shows the
/// same text under the map.
#[component]
pub fn DistrictMap(
	#[prop(into)] data: Signal<FeatureCollection>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let (w, h) = match (width, height) {
		(Some(w), Some(h)) => (w, h),
		_ => {
			let (sw, sh) = web_sys::window()
				.ok_or_else(|| crate::error::VizError::Js("no window".into()))
				.and_then(|win| half_screen(&win))
				.unwrap_or_else(|e| {
					warn!("house-viz: using default map size: {}", e);
					(800.0, 600.0)
				});
			(width.unwrap_or(sw), height.unwrap_or(sh))
		}
	};

	let style = MapStyle::default();
	let shapes = Memo::new(move |_| {
		let shapes = data.with(|collection| district_shapes(collection, w, h, &style));
		info!("house-viz: projected {} districts", shapes.len());
		shapes
	});
	let counts = Memo::new(move |_| data.with(tally));
	let hovered = RwSignal::new(None::<String>);

	view! {
		<div class="svg-container">
			<svg id="geographic-svg" width=w.to_string() height=h.to_string()>
				{move || {
					shapes
						.get()
						.into_iter()
						.map(|shape| {
							let hover = shape.title.clone();
							view! {
								<path
									d=shape.d
									style=shape.style
									on:mouseenter=move |_| hovered.set(Some(hover.clone()))
									on:mouseleave=move |_| hovered.set(None)
								>
									<title>{shape.title}</title>
								</path>
							}
						})
						.collect_view()
				}}
			</svg>
			<p class="district-label">{move || hovered.get().unwrap_or_default()}</p>
			<p id="republicans">{move || counts.get().republicans_label()}</p>
			<p id="democrats">{move || counts.get().democrats_label()}</p>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shapes_carry_party_fill_and_title() {
		let json = r#"{"features": [
			{"properties": {"party": "(R)", "District": 4, "Incumbent": "Steve King"},
			 "geometry": {"type": "Polygon", "coordinates": [[[-96.0, 42.0], [-95.0, 42.0], [-95.0, 43.0]]]}},
			{"properties": {"party": "(D)", "District": 2, "Incumbent": "Dave Loebsack"},
			 "geometry": {"type": "Polygon", "coordinates": [[[-91.0, 41.0], [-90.0, 41.0], [-90.0, 42.0]]]}},
			{"properties": {"party": "(D)"}, "geometry": null}
		]}"#;
		let collection: FeatureCollection = serde_json::from_str(json).unwrap();
		let shapes = district_shapes(&collection, 400.0, 300.0, &MapStyle::default());

		assert_eq!(shapes.len(), collection.features.len());
		assert!(shapes[0].style.starts_with("fill: #ba0c00;"));
		assert!(shapes[1].style.starts_with("fill: #0739ff;"));
		assert!(shapes[0].style.ends_with("stroke: #fff; stroke-width: 0.5"));
		assert_eq!(shapes[0].title, "4 – Steve King");
		assert_eq!(shapes[1].title, "2 – Dave Loebsack");
		assert!(shapes[..2].iter().all(|s| s.d.starts_with('M') && s.d.ends_with('Z')));
	}

	#[test]
	fn district_without_geometry_keeps_its_path() {
		let json = r#"{"features": [
			{"properties": {"party": "(R)", "District": 1, "Incumbent": "Rod Blum"},
			 "geometry": {"type": "Polygon", "coordinates": [[[-92.0, 42.0], [-91.0, 42.0], [-91.0, 43.0]]]}},
			{"properties": {"party": "R", "District": 3, "Incumbent": "David Young"}, "geometry": null}
		]}"#;
		let collection: FeatureCollection = serde_json::from_str(json).unwrap();
		let shapes = district_shapes(&collection, 400.0, 300.0, &MapStyle::default());

		assert_eq!(shapes.len(), 2);
		assert_eq!(shapes[1].d, "");
		assert_eq!(shapes[1].title, "3 – David Young");
		assert!(shapes[1].style.starts_with("fill: #0739ff;"));
	}
}
