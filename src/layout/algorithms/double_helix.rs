//! Double-helix layout.
//!
//! Words alternate between two interleaved helical strands (rank parity
//! picks the strand). The second strand is phase-shifted by half a turn so
//! the strands wind around each other instead of overlapping. Each strand
//! makes two full turns across its vertical spread.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::layout::{LayoutPoint, LayoutStrategy, Vec3};

/// Double-helix placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelixLayout {
    pub radius: f64,
    /// Total vertical extent of each strand, centered on the origin.
    pub height_spread: f64,
}

impl Default for HelixLayout {
    fn default() -> Self {
        Self {
            radius: 12.0,
            height_spread: 20.0,
        }
    }
}

impl HelixLayout {
    /// Strand assignment for a rank: (strand, index along the strand).
    pub fn strand_of(rank: usize) -> (usize, usize) {
        (rank % 2, rank / 2)
    }
}

impl LayoutStrategy for HelixLayout {
    fn place(&self, rank: usize, total: usize) -> LayoutPoint {
        let (strand, strand_index) = Self::strand_of(rank);
        let strand_total = total.div_ceil(2);

        // A single-element strand collapses to the bottom of the spread;
        // the max(1) keeps the division defined.
        let denom = strand_total.saturating_sub(1).max(1) as f64;
        let progress = strand_index as f64 / denom;

        let t = progress * 4.0 * PI;
        let angle = t + if strand == 1 { PI } else { 0.0 };

        let position = Vec3::new(
            self.radius * angle.cos(),
            progress * self.height_spread - self.height_spread / 2.0,
            self.radius * angle.sin(),
        );

        // Reading direction tangent to the helix, facing outward.
        let orientation = Vec3::new(0.0, -angle + PI / 2.0, 0.0);

        LayoutPoint {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helix_no_vertical_collisions_within_strand() {
        let helix = HelixLayout::default();
        let total = 20;

        // Even ranks share strand 0; their heights must all differ.
        let heights: Vec<f64> = (0..total)
            .filter(|r| r % 2 == 0)
            .map(|r| helix.place(r, total).position.y)
            .collect();

        for i in 0..heights.len() {
            for j in i + 1..heights.len() {
                assert_ne!(heights[i], heights[j]);
            }
        }
    }

    #[test]
    fn test_helix_single_element_strand() {
        let helix = HelixLayout::default();

        // total = 1: strand_total = 1, the word sits at the bottom of the
        // spread with no NaN anywhere.
        let point = helix.place(0, 1);
        assert_eq!(point.position.y, -helix.height_spread / 2.0);
        assert!(point.position.x.is_finite());
        assert!(point.position.z.is_finite());
        assert!(point.orientation.y.is_finite());
    }

    #[test]
    fn test_helix_strands_phase_shifted() {
        let helix = HelixLayout::default();
        let total = 20;

        // Ranks 0 and 1 share strand_index 0, so they differ only by the
        // half-turn phase shift: diametrically opposite on the circle.
        let a = helix.place(0, total).position;
        let b = helix.place(1, total).position;
        assert!((a.x + b.x).abs() < 1e-9);
        assert!((a.z + b.z).abs() < 1e-9);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_helix_on_cylinder_radius() {
        let helix = HelixLayout::default();
        let total = 15;

        for rank in 0..total {
            let p = helix.place(rank, total).position;
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!((horizontal - helix.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_helix_reading_tangent() {
        let helix = HelixLayout::default();

        // rank 0: angle 0, so the word faces rotation_y = pi/2.
        let first = helix.place(0, 20);
        assert!((first.orientation.y - PI / 2.0).abs() < 1e-9);

        // Orientation tracks -angle across the strand.
        let later = helix.place(4, 20);
        assert!(later.orientation.y < first.orientation.y);
    }

    #[test]
    fn test_helix_two_full_turns() {
        let helix = HelixLayout::default();
        let total = 20;

        // The last word of strand 0 has wound through 4*pi exactly, landing
        // at the same bearing as the first but at the top of the spread.
        let first = helix.place(0, total).position;
        let last = helix.place(2 * (total.div_ceil(2) - 1), total).position;
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.z - last.z).abs() < 1e-9);
        assert_eq!(last.y, helix.height_spread / 2.0);
    }
}
