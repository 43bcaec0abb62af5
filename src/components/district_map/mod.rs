//! Choropleth map of congressional districts.
//!
//! Fits the districts to the frame with an Albers USA projection, fills each
//! by the party holding it and tallies seats per party.

mod component;
pub mod geojson;
pub mod projection;
mod tally;

pub use component::{DistrictMap, DistrictShape, MapStyle, district_shapes};
pub use geojson::{DistrictProperties, Feature, FeatureCollection, Geometry};
pub use projection::AlbersUsa;
pub use tally::{PartyTally, tally};
