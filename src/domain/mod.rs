pub mod cell;
pub mod params;
