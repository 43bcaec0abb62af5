//! Seat graph data structures, as embedded in the page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Party affiliation of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Party {
	/// Republican.
	#[serde(rename = "r", alias = "(R)")]
	Republican,
	/// Democrat.
	#[serde(rename = "d", alias = "(D)")]
	Democrat,
}

impl Party {
	/// The opposing party.
	pub fn flip(self) -> Self {
		match self {
			Party::Republican => Party::Democrat,
			Party::Democrat => Party::Republican,
		}
	}

	/// Named CSS color used for seats of this party.
	pub fn css_color(self) -> &'static str {
		match self {
			Party::Republican => "red",
			Party::Democrat => "blue",
		}
	}
}

impl fmt::Display for Party {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Party::Republican => "Republican",
			Party::Democrat => "Democrat",
		})
	}
}

/// A member seat in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SeatNode {
	/// Unique identifier, referenced by links. Usually the member's name.
	pub id: String,
	/// Party affiliation; seats without one are drawn unaffiliated.
	pub party: Option<Party>,
	/// Two-letter home state, used to group delegations.
	pub state: Option<String>,
	/// Optional CSS fill. Falls back to the party color.
	pub color: Option<String>,
	/// Display radius hint in pixels.
	pub radius: Option<f64>,
}

impl SeatNode {
	/// Flips party and color together so the pair never disagrees.
	pub fn flip_party(&mut self) {
		let party = self.party.map(Party::flip).unwrap_or(Party::Republican);
		self.party = Some(party);
		self.color = Some(party.css_color().to_string());
	}
}

/// An undirected edge between two seats.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeatLink {
	/// Id of one endpoint seat.
	pub source: String,
	/// Id of the other endpoint seat.
	pub target: String,
}

/// Complete seat graph: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SeatData {
	/// Every seat, in display order.
	pub nodes: Vec<SeatNode>,
	/// Links between seats by id. May be absent from the JSON.
	#[serde(default)]
	pub links: Vec<SeatLink>,
}
