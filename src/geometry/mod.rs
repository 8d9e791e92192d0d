// Geometry derivation — turns aggregates into scene parameters for a 3D
// front-end (violin outlines, bar heights, point sizes and colors).
//
// Everything here is monotonic in its inputs and otherwise cosmetic.

pub mod points;
pub mod violin;

pub use points::{bar_height, engagement_bars, point_color, point_size, scatter_geometry};
pub use violin::{violin_geometry, violin_outline, ExtrudeSettings, ViolinGeometry};
