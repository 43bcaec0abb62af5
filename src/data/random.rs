//! Placeholder seat graphs for when no dataset is embedded in the page.

use rand::Rng;
use rand::seq::index;

use super::types::{SeatData, SeatLink, SeatNode};
use crate::error::{Result, VizError};

/// Display radius given to every generated vertex.
pub const GENERATED_RADIUS: f64 = 2.0;

/// Number of distinct unordered pairs among `n` vertices.
pub fn max_edges(n: usize) -> usize {
	n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Creates a simple graph with `n` vertices and `k` edges.
///
/// `k` defaults to the complete-graph count `n·(n−1)/2`. Endpoints are drawn
/// from `[0, n)`, so every edge references a real vertex. Requesting more
/// edges than there are distinct pairs fails with
/// [`VizError::InfeasibleEdgeCount`].
///
/// Pairs are chosen by sampling `k` distinct ranks out of the full pair
/// space without replacement, so generation always terminates.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, n: usize, k: Option<usize>) -> Result<SeatData> {
	let available = max_edges(n);
	let k = k.unwrap_or(available);
	if k > available {
		return Err(VizError::InfeasibleEdgeCount {
			requested: k,
			vertices: n,
			available,
		});
	}

	let nodes = (0..n)
		.map(|i| SeatNode {
			id: i.to_string(),
			party: None,
			state: None,
			color: None,
			radius: Some(GENERATED_RADIUS),
		})
		.collect();

	let links = index::sample(rng, available, k)
		.into_iter()
		.map(|rank| {
			let (i, j) = unrank_pair(n, rank);
			SeatLink {
				source: i.to_string(),
				target: j.to_string(),
			}
		})
		.collect();

	Ok(SeatData { nodes, links })
}

/// Maps `rank` in `0..max_edges(n)` to the pair `(i, j)`, `i < j`, in
/// lexicographic order.
fn unrank_pair(n: usize, rank: usize) -> (usize, usize) {
	let mut rest = rank;
	let mut i = 0;
	loop {
		let row = n - 1 - i;
		if rest < row {
			return (i, i + 1 + rest);
		}
		rest -= row;
		i += 1;
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn endpoints(link: &SeatLink) -> (usize, usize) {
		(link.source.parse().unwrap(), link.target.parse().unwrap())
	}

	fn assert_simple(data: &SeatData, n: usize, k: usize) {
		assert_eq!(data.nodes.len(), n);
		for (i, node) in data.nodes.iter().enumerate() {
			assert_eq!(node.id, i.to_string());
			assert_eq!(node.radius, Some(GENERATED_RADIUS));
		}
		assert_eq!(data.links.len(), k);

		let mut seen = HashSet::new();
		for link in &data.links {
			let (a, b) = endpoints(link);
			assert_ne!(a, b, "self-loop {a}");
			assert!(a < n && b < n, "endpoint outside [0, {n})");
			assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge {a}-{b}");
		}
	}

	#[test]
	fn no_edges() {
		let mut rng = StdRng::seed_from_u64(1);
		let data = random_graph(&mut rng, 5, Some(0)).unwrap();
		assert_simple(&data, 5, 0);
	}

	#[test]
	fn ten_vertices_five_edges() {
		let mut rng = StdRng::seed_from_u64(2);
		let data = random_graph(&mut rng, 10, Some(5)).unwrap();
		assert_simple(&data, 10, 5);
	}

	#[test]
	fn single_vertex() {
		let mut rng = StdRng::seed_from_u64(3);
		let data = random_graph(&mut rng, 1, None).unwrap();
		assert_simple(&data, 1, 0);
		assert!(random_graph(&mut rng, 1, Some(1)).is_err());
	}

	#[test]
	fn default_is_complete() {
		let mut rng = StdRng::seed_from_u64(4);
		let data = random_graph(&mut rng, 7, None).unwrap();
		assert_simple(&data, 7, 21);
	}

	#[test]
	fn shape_holds_across_runs() {
		let mut rng = StdRng::seed_from_u64(5);
		for n in 2..30 {
			let k = rng.gen_range(0..=max_edges(n));
			let data = random_graph(&mut rng, n, Some(k)).unwrap();
			assert_simple(&data, n, k);
		}
	}

	#[test]
	fn rejects_infeasible_edge_count() {
		let mut rng = StdRng::seed_from_u64(6);
		let err = random_graph(&mut rng, 10, Some(46)).unwrap_err();
		match err {
			VizError::InfeasibleEdgeCount {
				requested,
				vertices,
				available,
			} => {
				assert_eq!(requested, 46);
				assert_eq!(vertices, 10);
				assert_eq!(available, 45);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn same_seed_same_graph() {
		let a = random_graph(&mut StdRng::seed_from_u64(7), 12, Some(20)).unwrap();
		let b = random_graph(&mut StdRng::seed_from_u64(7), 12, Some(20)).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn unrank_covers_every_pair() {
		let n = 6;
		let pairs: HashSet<_> = (0..max_edges(n)).map(|r| unrank_pair(n, r)).collect();
		assert_eq!(pairs.len(), 15);
		assert!(pairs.iter().all(|&(i, j)| i < j && j < n));
	}
}
