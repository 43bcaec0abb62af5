//! Force-directed seat plot.
//!
//! Renders one circle per House member on an HTML canvas with:
//! - Repulsion between seats and attraction along links via `force_graph`
//! - A horizontal pull toward a column per party and a vertical pull to centre
//! - Overlap resolution so seats never stack
//! - Link toggling on pointer release and party shuffling on scroll
//!
//! # Example
//!
//! ```ignore
//! use house_viz::{SeatPlotCanvas, SeatData};
//!
//! let data = SeatData::default();
//! view! { <SeatPlotCanvas data=Signal::derive(move || data.clone()) /> }
//! ```

mod component;
pub mod config;
mod render;
mod state;
pub mod theme;

pub use component::SeatPlotCanvas;
pub use config::SeatPlotConfig;
pub use state::{NodeInfo, SeatPlotState};
pub use theme::SeatTheme;
