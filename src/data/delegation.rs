//! Links members of the same state delegation.
//!
//! Datasets that ship members without links get a star per state: every
//! member points at the first member listed for that state.

use std::collections::HashMap;

use super::types::{SeatData, SeatLink};

/// Replaces `data.links` with one spanning star per state. Returns the
/// number of links created. Members with no state stay unlinked.
pub fn link_delegations(data: &mut SeatData) -> usize {
	let mut hubs: HashMap<&str, &str> = HashMap::new();
	let mut links = Vec::new();

	for node in &data.nodes {
		let Some(state) = node.state.as_deref() else {
			continue;
		};
		match hubs.get(state) {
			Some(&hub) => links.push(SeatLink {
				source: hub.to_string(),
				target: node.id.clone(),
			}),
			None => {
				hubs.insert(state, node.id.as_str());
			}
		}
	}

	let count = links.len();
	data.links = links;
	count
}
