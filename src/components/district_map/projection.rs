//! Albers USA: a composite conic equal-area projection.
//!
//! The lower 48 states, Alaska and Hawaii each get their own conic
//! equal-area projection. Alaska is shrunk and both are moved into the
//! lower-left corner of the frame. Parallels, rotations, centres and insets
//! use the conventional values, so maps line up with other Albers USA
//! renderings of the same data.
//!
//! # Coordinate spaces
//!
//! - **Geographic**: degrees of longitude/latitude, as in GeoJSON.
//! - **Screen**: pixels, y pointing down. `scale` and `translate` map unit
//!   projected coordinates into this space.

use super::geojson::{FeatureCollection, Geometry, Position};

const DEFAULT_SCALE: f64 = 1070.0;
const DEFAULT_TRANSLATE: (f64, f64) = (480.0, 250.0);
/// Reference scale used while measuring bounds in [`AlbersUsa::fit_extent`].
const FIT_SCALE: f64 = 150.0;

/// One conic equal-area projection with a longitude rotation and a centre.
#[derive(Clone, Debug)]
struct ConicEqualArea {
	n: f64,
	c: f64,
	r0: f64,
	/// Degrees added to every longitude before projecting.
	rotate: f64,
	/// Raw projection of the centre, subtracted so the centre lands at origin.
	center: (f64, f64),
}

impl ConicEqualArea {
	fn new(parallels: (f64, f64), rotate: f64, center: (f64, f64)) -> Self {
		let (phi0, phi1) = (parallels.0.to_radians(), parallels.1.to_radians());
		let sy0 = phi0.sin();
		let n = (sy0 + phi1.sin()) / 2.0;
		let c = 1.0 + sy0 * (2.0 * n - sy0);
		let r0 = c.sqrt() / n;
		let mut projection = Self {
			n,
			c,
			r0,
			rotate,
			center: (0.0, 0.0),
		};
		// The centre is given in the rotated frame.
		projection.center = projection.raw(center.0.to_radians(), center.1.to_radians());
		projection
	}

	fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
		let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
		let theta = lambda * self.n;
		(r * theta.sin(), self.r0 - r * theta.cos())
	}

	/// Unit-scale coordinates relative to the centre, y pointing down.
	fn unit(&self, lon: f64, lat: f64) -> (f64, f64) {
		let lambda = wrap_degrees(lon + self.rotate).to_radians();
		let (x, y) = self.raw(lambda, lat.to_radians());
		(x - self.center.0, -(y - self.center.1))
	}
}

fn wrap_degrees(lon: f64) -> f64 {
	if lon > 180.0 {
		lon - 360.0
	} else if lon < -180.0 {
		lon + 360.0
	} else {
		lon
	}
}

/// Which inset a geographic point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
	/// Contiguous states.
	Lower48,
	/// Alaska inset, lower left.
	Alaska,
	/// Hawaii inset, beside Alaska.
	Hawaii,
}

impl Region {
	/// Picks the inset for a point. The Aleutians cross the antimeridian, so
	/// far-eastern longitudes at Alaskan latitudes count as Alaska.
	pub fn of(lon: f64, lat: f64) -> Self {
		if lat >= 50.0 && (lon <= -129.0 || lon >= 170.0) {
			Region::Alaska
		} else if lat < 26.0 && (-179.0..=-154.0).contains(&lon) {
			Region::Hawaii
		} else {
			Region::Lower48
		}
	}
}

/// Composite projection for the United States.
#[derive(Clone, Debug)]
pub struct AlbersUsa {
	/// Lower-48 scale; the insets are sized relative to it.
	pub scale: f64,
	/// Screen position of the projection centre.
	pub translate: (f64, f64),
	lower48: ConicEqualArea,
	alaska: ConicEqualArea,
	hawaii: ConicEqualArea,
}

impl Default for AlbersUsa {
	fn default() -> Self {
		Self {
			scale: DEFAULT_SCALE,
			translate: DEFAULT_TRANSLATE,
			lower48: ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7)),
			alaska: ConicEqualArea::new((55.0, 65.0), 154.0, (-2.0, 58.5)),
			hawaii: ConicEqualArea::new((8.0, 18.0), 157.0, (-3.0, 19.9)),
		}
	}
}

impl AlbersUsa {
	/// Projects a longitude/latitude pair to screen coordinates.
	pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
		let k = self.scale;
		let (tx, ty) = self.translate;
		match Region::of(lon, lat) {
			Region::Lower48 => {
				let (x, y) = self.lower48.unit(lon, lat);
				(tx + k * x, ty + k * y)
			}
			Region::Alaska => {
				let (x, y) = self.alaska.unit(lon, lat);
				let ka = 0.35 * k;
				(tx - 0.307 * k + ka * x, ty + 0.201 * k + ka * y)
			}
			Region::Hawaii => {
				let (x, y) = self.hawaii.unit(lon, lat);
				(tx - 0.205 * k + k * x, ty + 0.212 * k + k * y)
			}
		}
	}

	fn project_position(&self, position: &Position) -> Option<(f64, f64)> {
		match position.as_slice() {
			[lon, lat, ..] => Some(self.project(*lon, *lat)),
			_ => None,
		}
	}

	/// Screen-space bounding box `((x0, y0), (x1, y1))` of every position in
	/// the collection, or `None` when it has no positions.
	pub fn bounds(&self, collection: &FeatureCollection) -> Option<((f64, f64), (f64, f64))> {
		let mut bounds: Option<((f64, f64), (f64, f64))> = None;
		let geometries = collection.features.iter().filter_map(|f| f.geometry.as_ref());
		for ring in geometries.flat_map(Geometry::rings) {
			for (x, y) in ring.iter().filter_map(|p| self.project_position(p)) {
				bounds = Some(match bounds {
					None => ((x, y), (x, y)),
					Some(((x0, y0), (x1, y1))) => ((x0.min(x), y0.min(y)), (x1.max(x), y1.max(y))),
				});
			}
		}
		bounds
	}

	/// Sets scale and translate so the collection fills `extent`
	/// (`[[x0, y0], [x1, y1]]`) as tightly as possible, centred on the slack
	/// axis. Leaves the projection untouched when there is nothing to fit.
	pub fn fit_extent(&mut self, extent: [[f64; 2]; 2], collection: &FeatureCollection) {
		let previous = (self.scale, self.translate);
		self.scale = FIT_SCALE;
		self.translate = (0.0, 0.0);

		let Some(((bx0, by0), (bx1, by1))) = self.bounds(collection) else {
			(self.scale, self.translate) = previous;
			return;
		};
		let [[x0, y0], [x1, y1]] = extent;
		let (w, h) = (x1 - x0, y1 - y0);
		let k = (w / (bx1 - bx0)).min(h / (by1 - by0));
		if !k.is_finite() || k <= 0.0 {
			(self.scale, self.translate) = previous;
			return;
		}

		self.scale = FIT_SCALE * k;
		self.translate = (
			x0 + (w - k * (bx1 + bx0)) / 2.0,
			y0 + (h - k * (by1 + by0)) / 2.0,
		);
	}

	/// SVG path data for a geometry: one closed subpath per ring.
	pub fn path(&self, geometry: &Geometry) -> String {
		let mut d = String::new();
		for ring in geometry.rings() {
			let points: Vec<(f64, f64)> = ring
				.iter()
				.filter_map(|p| self.project_position(p))
				.collect();
			if points.len() < 2 {
				continue;
			}
			for (i, (x, y)) in points.iter().enumerate() {
				d.push(if i == 0 { 'M' } else { 'L' });
				d.push_str(&format!("{:.2},{:.2}", x, y));
			}
			d.push('Z');
		}
		d
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::district_map::geojson::{DistrictProperties, Feature};

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
	}

	fn polygon(ring: &[(f64, f64)]) -> Geometry {
		Geometry::Polygon {
			coordinates: vec![ring.iter().map(|&(x, y)| vec![x, y]).collect()],
		}
	}

	fn collection(geometries: Vec<Geometry>) -> FeatureCollection {
		FeatureCollection {
			features: geometries
				.into_iter()
				.map(|g| Feature {
					geometry: Some(g),
					properties: DistrictProperties::default(),
				})
				.collect(),
		}
	}

	#[test]
	fn centre_maps_to_translate() {
		let projection = AlbersUsa::default();
		assert!(close(projection.project(-96.6, 38.7), DEFAULT_TRANSLATE));
	}

	#[test]
	fn orientation() {
		let projection = AlbersUsa::default();
		let san_francisco = projection.project(-122.42, 37.77);
		let new_york = projection.project(-74.0, 40.71);
		let seattle = projection.project(-122.33, 47.61);
		let miami = projection.project(-80.19, 25.76);
		assert!(new_york.0 > san_francisco.0);
		assert!(seattle.1 < miami.1);
	}

	#[test]
	fn insets_sit_lower_left() {
		let projection = AlbersUsa::default();
		let (cx, cy) = DEFAULT_TRANSLATE;
		for (lon, lat) in [(-149.9, 61.2), (-157.86, 21.3), (178.0, 51.8)] {
			let (x, y) = projection.project(lon, lat);
			assert!(x < cx && y > cy, "({lon}, {lat}) -> ({x}, {y})");
		}
	}

	#[test]
	fn regions() {
		assert_eq!(Region::of(-149.9, 61.2), Region::Alaska);
		assert_eq!(Region::of(178.0, 51.8), Region::Alaska);
		assert_eq!(Region::of(-157.86, 21.3), Region::Hawaii);
		assert_eq!(Region::of(-81.78, 24.55), Region::Lower48);
		assert_eq!(Region::of(-122.33, 47.61), Region::Lower48);
	}

	#[test]
	fn fit_fills_extent() {
		let districts = collection(vec![
			polygon(&[(-102.0, 37.0), (-94.6, 37.0), (-94.6, 40.0), (-102.0, 40.0)]),
			polygon(&[(-104.0, 41.0), (-102.0, 41.0), (-102.0, 45.0)]),
		]);
		let mut projection = AlbersUsa::default();
		let extent = [[10.0, 20.0], [410.0, 220.0]];
		projection.fit_extent(extent, &districts);

		let ((x0, y0), (x1, y1)) = projection.bounds(&districts).unwrap();
		let eps = 1e-6;
		assert!(x0 >= 10.0 - eps && x1 <= 410.0 + eps);
		assert!(y0 >= 20.0 - eps && y1 <= 220.0 + eps);
		let (w, h) = (x1 - x0, y1 - y0);
		assert!((w - 400.0).abs() < 1e-6 || (h - 200.0).abs() < 1e-6);
		// Centred on both axes.
		assert!(((x0 + x1) / 2.0 - 210.0).abs() < 1e-6);
		assert!(((y0 + y1) / 2.0 - 120.0).abs() < 1e-6);
	}

	#[test]
	fn fit_without_positions_is_a_no_op() {
		let mut projection = AlbersUsa::default();
		projection.fit_extent([[0.0, 0.0], [100.0, 100.0]], &FeatureCollection::default());
		assert_eq!(projection.scale, DEFAULT_SCALE);
		assert_eq!(projection.translate, DEFAULT_TRANSLATE);
	}

	#[test]
	fn path_has_one_subpath_per_ring() {
		let projection = AlbersUsa::default();
		let triangle = polygon(&[(-96.6, 38.7), (-95.0, 38.7), (-95.0, 40.0)]);
		let d = projection.path(&triangle);
		assert!(d.starts_with("M480.00,250.00L"));
		assert_eq!(d.matches('L').count(), 2);
		assert!(d.ends_with('Z'));

		let two = Geometry::MultiPolygon {
			coordinates: vec![
				vec![vec![vec![-96.0, 38.0], vec![-95.0, 38.0], vec![-95.0, 39.0]]],
				vec![vec![vec![-90.0, 38.0], vec![-89.0, 38.0], vec![-89.0, 39.0]]],
			],
		};
		assert_eq!(projection.path(&two).matches('M').count(), 2);
		assert_eq!(projection.path(&Geometry::Unsupported), "");
	}
}
