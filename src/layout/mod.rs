// Layout strategies for the word cloud.
//
// Each strategy maps a word's rank within the ranked list to a 3D position
// and orientation.
//
// Goals:
// - Deterministic: no randomness, same input -> same layout
// - Pure: strategies hold their parameters, never mutable state
// - Selectable by configuration, never inferred from the data
//
// Submodules:
// - algorithms/grid: fixed-column block on a single plane
// - algorithms/sphere: Fibonacci distribution over a sphere
// - algorithms/double_helix: two interleaved helical strands

use serde::{Deserialize, Serialize};

pub mod algorithms;

pub use algorithms::{GridLayout, HelixLayout, SphereLayout};

/// 3D vector, used for both positions and Euler orientations (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Fully resolved placement for one word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub position: Vec3,
    /// Euler rotation in radians.
    pub orientation: Vec3,
}

/// A layout strategy places the word at `rank` out of `total` ranked words.
///
/// Implementations must be pure: the same `(rank, total)` always yields the
/// same point. Callers never invoke `place` with `total == 0`; the composer
/// substitutes the empty-state sentinel before any strategy runs.
pub trait LayoutStrategy {
    fn place(&self, rank: usize, total: usize) -> LayoutPoint;
}

/// Strategy names the frontend may select, in display order.
pub const STRATEGY_NAMES: &[&str] = &["grid", "sphere", "double_helix"];

/// Which layout strategy the frontend asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Grid,
    Sphere,
    DoubleHelix,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Sphere
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_from_name() {
        let kind: StrategyKind = serde_json::from_str("\"double_helix\"").unwrap();
        assert_eq!(kind, StrategyKind::DoubleHelix);

        let kind: StrategyKind = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(kind, StrategyKind::Grid);
    }

    #[test]
    fn test_strategy_names_cover_kinds() {
        for name in STRATEGY_NAMES {
            let quoted = format!("\"{name}\"");
            assert!(serde_json::from_str::<StrategyKind>(&quoted).is_ok());
        }
    }

    #[test]
    fn test_vec3_length() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }
}
