//! GeoJSON input for the district map.
//!
//! Only the parts the map needs are modelled: polygon geometries and the
//! district properties. Other geometry types deserialize to
//! [`Geometry::Unsupported`] and draw nothing.

use std::fmt;

use serde::Deserialize;

use crate::data::Party;

/// A `[longitude, latitude, ...]` position. Extra members are ignored.
pub type Position = Vec<f64>;

/// The district map: one feature per district.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
	/// Districts in drawing order.
	#[serde(default)]
	pub features: Vec<Feature>,
}

/// A single district.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
	/// Outline; `null` in the source for districts without a shape.
	pub geometry: Option<Geometry>,
	/// Party and labels.
	#[serde(default)]
	pub properties: DistrictProperties,
}

/// Polygonal district outline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
	/// Outer ring followed by holes.
	Polygon {
		/// Rings of positions.
		coordinates: Vec<Vec<Position>>,
	},
	/// Several polygons, e.g. a district with islands.
	MultiPolygon {
		/// Polygons, each a list of rings.
		coordinates: Vec<Vec<Vec<Position>>>,
	},
	/// Any other geometry type; draws nothing.
	#[serde(other)]
	Unsupported,
}

impl Geometry {
	/// Every ring of every polygon in this geometry.
	pub fn rings(&self) -> Vec<&[Position]> {
		match self {
			Geometry::Polygon { coordinates } => coordinates.iter().map(Vec::as_slice).collect(),
			Geometry::MultiPolygon { coordinates } => coordinates
				.iter()
				.flatten()
				.map(Vec::as_slice)
				.collect(),
			Geometry::Unsupported => Vec::new(),
		}
	}
}

/// A district number, given as text or as a number depending on the source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DistrictLabel {
	/// Numeric district, e.g. `4`.
	Number(serde_json::Number),
	/// Textual district, e.g. `"Iowa 4"`.
	Text(String),
}

impl fmt::Display for DistrictLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DistrictLabel::Number(n) => write!(f, "{}", n),
			DistrictLabel::Text(s) => f.write_str(s),
		}
	}
}

/// Properties attached to each district feature.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DistrictProperties {
	/// Party label, e.g. `(R)` or `(D)`.
	#[serde(default)]
	pub party: String,
	/// District number within the state.
	#[serde(rename = "District")]
	pub district: Option<DistrictLabel>,
	/// Name of the sitting member.
	#[serde(rename = "Incumbent")]
	pub incumbent: Option<String>,
}

/// Map label of a Republican-held district. Any other label is Democratic.
pub const REPUBLICAN_LABEL: &str = "(R)";

impl DistrictProperties {
	/// Holding party. Only the exact `(R)` label is Republican.
	pub fn party(&self) -> Party {
		if self.party == REPUBLICAN_LABEL {
			Party::Republican
		} else {
			Party::Democrat
		}
	}

	/// `"<District> – <Incumbent>"`, with whichever parts are present.
	pub fn title(&self) -> String {
		match (&self.district, &self.incumbent) {
			(Some(d), Some(i)) => format!("{} – {}", d, i),
			(Some(d), None) => d.to_string(),
			(None, Some(i)) => i.clone(),
			(None, None) => String::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_district_features() {
		let json = r#"{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"properties": {"party": "(R)", "District": "Iowa 4", "Incumbent": "Steve King", "STATEFP": "19"},
					"geometry": {"type": "Polygon", "coordinates": [[[-96.0, 42.0], [-95.0, 42.0], [-95.0, 43.0, 0.0]]]}
				},
				{
					"type": "Feature",
					"properties": {"party": "(D)", "District": 2, "Incumbent": "Dave Loebsack"},
					"geometry": {"type": "MultiPolygon", "coordinates": [[[[-91.0, 41.0], [-90.0, 41.0], [-90.0, 42.0]]], [[[-92.0, 40.0], [-91.5, 40.0], [-91.5, 40.5]]]]}
				},
				{
					"type": "Feature",
					"properties": {"party": "(D)"},
					"geometry": {"type": "Point", "coordinates": [-90.0, 40.0]}
				}
			]
		}"#;
		let collection: FeatureCollection = serde_json::from_str(json).unwrap();
		assert_eq!(collection.features.len(), 3);

		let first = &collection.features[0];
		assert_eq!(first.properties.party(), Party::Republican);
		assert_eq!(first.properties.title(), "Iowa 4 – Steve King");
		assert_eq!(first.geometry.as_ref().unwrap().rings().len(), 1);

		let second = &collection.features[1];
		assert_eq!(second.properties.title(), "2 – Dave Loebsack");
		assert_eq!(second.geometry.as_ref().unwrap().rings().len(), 2);

		let third = &collection.features[2];
		assert_eq!(third.geometry, Some(Geometry::Unsupported));
		assert_eq!(third.properties.title(), "");
	}
}
