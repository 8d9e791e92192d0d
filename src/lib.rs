// misinfo-atlas: aggregate views over a social-media misinformation dataset
//
// This is the library root. The dataset module loads and normalizes the
// records, aggregate derives the statistics, geometry turns them into
// scene parameters, and output/web present them.

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod geometry;
pub mod output;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
