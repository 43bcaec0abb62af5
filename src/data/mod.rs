//! Seat graph data: the embedded dataset model, placeholder generation and
//! delegation linking.

mod delegation;
mod random;
mod types;

pub use delegation::link_delegations;
pub use random::{GENERATED_RADIUS, max_edges, random_graph};
pub use types::{Party, SeatData, SeatLink, SeatNode};
