//! Fibonacci sphere layout.
//!
//! Spreads `total` words evenly over a sphere. The polar angle steps
//! linearly in cos(phi) (uniform-area parametrization, no crowding at the
//! poles) and the azimuth advances by a golden-angle-derived factor so
//! neighboring ranks stay apart.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::layout::{LayoutPoint, LayoutStrategy, Vec3};

/// Sphere placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SphereLayout {
    pub radius: f64,
}

impl Default for SphereLayout {
    fn default() -> Self {
        Self { radius: 15.0 }
    }
}

impl LayoutStrategy for SphereLayout {
    fn place(&self, rank: usize, total: usize) -> LayoutPoint {
        let phi = (-1.0 + 2.0 * rank as f64 / total as f64).acos();
        let theta = (total as f64 * PI).sqrt() * phi;

        let position = Vec3::new(
            self.radius * theta.cos() * phi.sin(),
            self.radius * theta.sin() * phi.sin(),
            self.radius * phi.cos(),
        );

        // The renderer billboards text toward the camera, so no
        // layout-derived orientation here.
        LayoutPoint {
            position,
            orientation: Vec3::ZERO,
        }
    }
}
