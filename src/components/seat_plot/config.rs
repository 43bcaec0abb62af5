//! Layout and display parameters for the seat plot.
//!
//! The `force_graph` simulation supplies mutual repulsion and the spring
//! along links. The positioning forces layered on top follow the usual
//! alpha-driven model: every tick each force is scaled by the layout's
//! `alpha`, which decays toward zero until the layout settles.

use force_graph::SimulationParameters;

/// Parameters handed to the `force_graph` physics.
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
	/// Mutual repulsion between seats.
	pub force_charge: f32,
	/// Spring pull along visible links.
	pub force_spring: f32,
	/// Cap on the force applied to a single seat per step.
	pub force_max: f32,
	/// Velocity scale applied to the accumulated force.
	pub node_speed: f32,
	/// Velocity kept between steps (0..=1).
	pub damping_factor: f32,
}

impl PhysicsConfig {
	/// Builds simulation parameters. With links hidden the spring is unused,
	/// since no edges are added to the simulation.
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Party and centering pulls plus overlap resolution.
#[derive(Clone, Debug)]
pub struct PositionForces {
	/// Fraction of the distance to the party column closed per tick at alpha 1.
	pub x_strength: f64,
	/// Fraction of the distance to the vertical centre closed per tick at alpha 1.
	pub y_strength: f64,
	/// Minimum centre-to-centre half distance between two seats.
	pub collide_radius: f64,
	/// How much of an overlap is resolved per pass (0..=1).
	pub collide_strength: f64,
}

/// Complete seat plot configuration.
#[derive(Clone, Debug)]
pub struct SeatPlotConfig {
	/// Simulation parameters.
	pub physics: PhysicsConfig,
	/// Party pull, centering and collision.
	pub forces: PositionForces,
	/// Seat radius when the dataset gives no radius hint.
	pub node_radius: f64,
	/// Hover hit radius around a seat centre.
	pub hit_radius: f64,
	/// Stroke width of visible links.
	pub link_width: f64,
	/// Canvas font for the hover label.
	pub label_font: String,
	/// Alpha lost per tick, as a fraction of the remaining distance to zero.
	pub alpha_decay: f64,
	/// The layout stops ticking once alpha drops below this.
	pub alpha_min: f64,
}

impl Default for SeatPlotConfig {
	fn default() -> Self {
		let alpha_min: f64 = 0.001;
		Self {
			physics: PhysicsConfig {
				force_charge: 150.0,
				force_spring: 0.05,
				force_max: 100.0,
				node_speed: 3000.0,
				damping_factor: 0.9,
			},
			forces: PositionForces {
				x_strength: 0.1,
				y_strength: 0.1,
				collide_radius: 7.0,
				collide_strength: 0.7,
			},
			node_radius: 5.0,
			hit_radius: 8.0,
			link_width: 2.0,
			label_font: "11px sans-serif".to_string(),
			// Settles in ~300 ticks.
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			alpha_min,
		}
	}
}
