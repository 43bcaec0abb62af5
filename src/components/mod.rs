//! UI components: the seat plot and the district map.

pub mod district_map;
pub mod seat_plot;
