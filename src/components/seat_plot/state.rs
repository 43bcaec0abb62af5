//! Seat plot scene state.
//!
//! Wraps the `force_graph` physics simulation with per-seat metadata, the
//! layout alpha that drives the positioning forces, link visibility and
//! hover tracking. The component owns one [`SeatPlotState`] and hands it to
//! each event handler; nothing else holds layout state.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use super::config::SeatPlotConfig;
use super::theme::SeatTheme;
use crate::data::{Party, SeatData, SeatNode};

/// Per-seat display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Position of this seat in [`SeatPlotState::data`].
	pub seat: usize,
	/// Text drawn next to the seat on hover.
	pub label: String,
	/// Current party, updated by shuffles.
	pub party: Option<Party>,
	/// CSS fill.
	pub color: String,
	/// Drawn radius in pixels.
	pub radius: f64,
}

/// The seat plot scene: simulation, dataset and interaction state.
pub struct SeatPlotState {
	/// Physics simulation. Carries edges only while links are visible.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// The dataset, kept in sync with shuffled parties.
	pub data: SeatData,
	/// Layout and display parameters.
	pub config: SeatPlotConfig,
	/// Colors.
	pub theme: SeatTheme,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Layout energy; positioning forces scale with it.
	pub alpha: f64,
	/// Whether links are drawn and pulled on.
	pub links_visible: bool,
	/// Seat under the pointer.
	pub hovered: Option<usize>,
	/// Completed pointer releases, which drive the link toggle.
	releases: u32,
	/// Links as seat index pairs.
	links: Vec<(usize, usize)>,
	rng: StdRng,
}

impl SeatPlotState {
	/// Places the seats on a ring around the centre and starts the layout at full energy.
	pub fn new(
		data: SeatData,
		width: f64,
		height: f64,
		config: SeatPlotConfig,
		theme: SeatTheme,
		rng: StdRng,
	) -> Self {
		let links = resolve_links(&data);

		let count = data.nodes.len().max(1) as f64;
		let positions: Vec<(f32, f32)> = (0..data.nodes.len())
			.map(|i| {
				let angle = (i as f64) * 2.0 * PI / count;
				(
					(width / 2.0 + 100.0 * angle.cos()) as f32,
					(height / 2.0 + 100.0 * angle.sin()) as f32,
				)
			})
			.collect();

		let mut state = Self {
			graph: ForceGraph::new(config.physics.parameters()),
			data,
			config,
			theme,
			width,
			height,
			alpha: 1.0,
			links_visible: true,
			hovered: None,
			releases: 0,
			links,
			rng,
		};
		state.rebuild(&positions);
		info!(
			"house-viz: seat plot with {} seats, {} links",
			state.data.nodes.len(),
			state.links.len()
		);
		state
	}

	fn node_info(&self, seat: usize, node: &SeatNode) -> NodeInfo {
		let color = node
			.color
			.clone()
			.or_else(|| node.party.map(|p| p.css_color().to_string()))
			.unwrap_or_else(|| self.theme.unaffiliated.to_css());
		NodeInfo {
			seat,
			label: node.id.clone(),
			party: node.party,
			color,
			radius: node.radius.unwrap_or(self.config.node_radius),
		}
	}

	/// Replaces the simulation with one holding every seat at `positions`,
	/// plus the links when they are visible.
	fn rebuild(&mut self, positions: &[(f32, f32)]) {
		let mut graph = ForceGraph::new(self.config.physics.parameters());
		let mut indices: Vec<DefaultNodeIdx> = Vec::with_capacity(self.data.nodes.len());

		for (seat, node) in self.data.nodes.iter().enumerate() {
			let (x, y) = positions[seat];
			indices.push(graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: self.node_info(seat, node),
			}));
		}

		if self.links_visible {
			for &(src, tgt) in &self.links {
				graph.add_edge(indices[src], indices[tgt], EdgeData::default());
			}
		}

		self.graph = graph;
	}

	/// Current seat positions, ordered like `data.nodes`.
	pub fn positions(&self) -> Vec<(f32, f32)> {
		let mut positions = vec![(0.0, 0.0); self.data.nodes.len()];
		self.graph.visit_nodes(|node| {
			positions[node.data.user_data.seat] = (node.x(), node.y());
		});
		positions
	}

	/// Links that resolved to two distinct seats.
	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	/// Horizontal target for a seat: Republicans gather at two thirds of the
	/// width, everyone else at one third.
	pub fn party_target_x(&self, party: Option<Party>) -> f64 {
		match party {
			Some(Party::Republican) => 2.0 * self.width / 3.0,
			_ => self.width / 3.0,
		}
	}

	/// True until alpha drops below `alpha_min`.
	pub fn is_running(&self) -> bool {
		self.alpha >= self.config.alpha_min
	}

	/// Reheats the layout so it relaxes again from full energy.
	pub fn restart(&mut self) {
		self.alpha = 1.0;
	}

	/// Advances the layout one step and decays alpha. No-op once settled.
	pub fn tick(&mut self, dt: f32) {
		if !self.is_running() {
			return;
		}
		self.graph.update(dt);
		self.apply_position_forces();
		self.alpha -= self.alpha * self.config.alpha_decay;
	}

	fn apply_position_forces(&mut self) {
		let forces = self.config.forces.clone();
		let alpha = self.alpha;
		let center_y = self.height / 2.0;
		let (left, right) = (self.party_target_x(None), self.party_target_x(Some(Party::Republican)));

		self.graph.visit_nodes_mut(|node| {
			let target_x = match node.data.user_data.party {
				Some(Party::Republican) => right,
				_ => left,
			};
			let (x, y) = (node.data.x as f64, node.data.y as f64);
			node.data.x = (x + (target_x - x) * forces.x_strength * alpha) as f32;
			node.data.y = (y + (center_y - y) * forces.y_strength * alpha) as f32;
		});

		let mut positions = self.positions();
		if resolve_collisions(&mut positions, forces.collide_radius, forces.collide_strength) {
			self.graph.visit_nodes_mut(|node| {
				let (x, y) = positions[node.data.user_data.seat];
				node.data.x = x;
				node.data.y = y;
			});
		}
	}

	/// Handles a pointer release anywhere on the plot. Odd releases hide the
	/// links and drop their attraction; even releases restore both. Returns
	/// whether links are now visible.
	pub fn toggle_links(&mut self) -> bool {
		self.releases += 1;
		self.links_visible = self.releases % 2 == 0;
		let positions = self.positions();
		self.rebuild(&positions);
		self.restart();
		info!(
			"house-viz: links {}",
			if self.links_visible { "shown" } else { "hidden" }
		);
		self.links_visible
	}

	/// Flips the party of a random number of randomly chosen seats (with
	/// replacement), then reheats the layout so seats drift to their new
	/// columns. Returns the number of flips performed.
	pub fn shuffle_parties(&mut self) -> usize {
		let n = self.data.nodes.len();
		if n == 0 {
			return 0;
		}
		let switches = self.rng.gen_range(0..n);
		for _ in 0..switches {
			let seat = self.rng.gen_range(0..n);
			self.data.nodes[seat].flip_party();
		}

		let infos: Vec<NodeInfo> = self
			.data
			.nodes
			.iter()
			.enumerate()
			.map(|(seat, node)| self.node_info(seat, node))
			.collect();
		self.graph.visit_nodes_mut(|node| {
			let seat = node.data.user_data.seat;
			node.data.user_data = infos[seat].clone();
		});

		self.restart();
		debug!("house-viz: flipped {} seats", switches);
		switches
	}

	/// Seat under the given canvas position, if any.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let hit = self.config.hit_radius;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			let radius = hit.max(node.data.user_data.radius);
			if (dx * dx + dy * dy).sqrt() < radius {
				found = Some(node.data.user_data.seat);
			}
		});
		found
	}

	/// Marks `seat` as hovered, or clears the hover.
	pub fn set_hover(&mut self, seat: Option<usize>) {
		self.hovered = seat;
	}
}

/// Maps links to seat index pairs, dropping self-loops and links whose
/// endpoints are not in the dataset.
fn resolve_links(data: &SeatData) -> Vec<(usize, usize)> {
	let index: HashMap<&str, usize> = data
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| (node.id.as_str(), i))
		.collect();
	data.links
		.iter()
		.filter_map(|link| {
			match (index.get(link.source.as_str()), index.get(link.target.as_str())) {
				(Some(&src), Some(&tgt)) if src != tgt => Some((src, tgt)),
				_ => {
					debug!(
						"house-viz: skipping link {} -> {}",
						link.source, link.target
					);
					None
				}
			}
		})
		.collect()
}

/// Pushes apart every pair of seats closer than `2 * radius`, moving each by
/// half the overlap scaled by `strength`. Returns whether anything moved.
pub fn resolve_collisions(positions: &mut [(f32, f32)], radius: f64, strength: f64) -> bool {
	let min_dist = 2.0 * radius;
	let mut moved = false;

	for i in 0..positions.len() {
		for j in (i + 1)..positions.len() {
			let (xi, yi) = (positions[i].0 as f64, positions[i].1 as f64);
			let (xj, yj) = (positions[j].0 as f64, positions[j].1 as f64);
			let (mut dx, mut dy) = (xj - xi, yj - yi);
			let mut dist = (dx * dx + dy * dy).sqrt();
			if dist >= min_dist {
				continue;
			}
			if dist < 1e-6 {
				// Coincident seats: separate along a fixed, index-dependent axis.
				let angle = (i * 7 + j) as f64;
				(dx, dy, dist) = (angle.cos(), angle.sin(), 1.0);
			}
			let push = (min_dist - dist.min(min_dist)) / 2.0 * strength;
			let (ux, uy) = (dx / dist, dy / dist);
			positions[i] = ((xi - ux * push) as f32, (yi - uy * push) as f32);
			positions[j] = ((xj + ux * push) as f32, (yj + uy * push) as f32);
			moved = true;
		}
	}
	moved
}
