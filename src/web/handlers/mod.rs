pub mod aggregates;
pub mod geometry;
pub mod status;
