//! Seat counts by party.

use super::geojson::FeatureCollection;
use crate::data::Party;

/// District counts per party.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartyTally {
	/// Districts labelled `(R)`.
	pub republicans: usize,
	/// Every district not labelled `(R)`.
	pub democrats: usize,
}

impl PartyTally {
	/// `"N Republicans"`.
	pub fn republicans_label(&self) -> String {
		format!("{} Republicans", self.republicans)
	}

	/// `"N Democrats"`.
	pub fn democrats_label(&self) -> String {
		format!("{} Democrats", self.democrats)
	}
}

/// Counts districts by party. Anything not labelled `(R)` counts as a
/// Democratic seat.
pub fn tally(collection: &FeatureCollection) -> PartyTally {
	collection
		.features
		.iter()
		.fold(PartyTally::default(), |mut t, feature| {
			match feature.properties.party() {
				Party::Republican => t.republicans += 1,
				Party::Democrat => t.democrats += 1,
			}
			t
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::district_map::geojson::{DistrictProperties, Feature};

	fn district(party: &str) -> Feature {
		Feature {
			geometry: None,
			properties: DistrictProperties {
				party: party.into(),
				district: None,
				incumbent: None,
			},
		}
	}

	#[test]
	fn counts_by_party() {
		let collection = FeatureCollection {
			features: vec![
				district("(R)"),
				district("(D)"),
				district("(R)"),
				district("(I)"),
				district(""),
			],
		};
		let t = tally(&collection);
		assert_eq!(t, PartyTally {
			republicans: 2,
			democrats: 3
		});
		assert_eq!(t.republicans_label(), "2 Republicans");
		assert_eq!(t.democrats_label(), "3 Democrats");
	}

	#[test]
	fn empty_map() {
		let t = tally(&FeatureCollection::default());
		assert_eq!(t.republicans_label(), "0 Republicans");
		assert_eq!(t.democrats_label(), "0 Democrats");
	}

	#[test]
	fn only_exact_republican_label_counts() {
		let collection = FeatureCollection {
			features: vec![district("R"), district(" (R)"), district("r"), district("(R)")],
		};
		assert_eq!(tally(&collection), PartyTally {
			republicans: 1,
			democrats: 3
		});
	}
}
