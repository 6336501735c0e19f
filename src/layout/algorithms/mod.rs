//! Layout algorithms for the word cloud.
//!
//! This module contains all available layout strategies:
//! - `grid`: fixed-column, left-to-right, top-to-bottom block on the z = 0 plane
//! - `sphere`: even Fibonacci distribution over a sphere
//! - `double_helix`: two interleaved helical strands, alternating by rank parity

mod double_helix;
mod grid;
mod sphere;

pub use double_helix::HelixLayout;
pub use grid::GridLayout;
pub use sphere::SphereLayout;
