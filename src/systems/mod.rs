pub mod coloring;
pub mod waves;
