//! Font size normalization.
//!
//! Raw weights arrive on an arbitrary scale (the analysis service emits
//! tf-idf scores). The renderer wants sizes in a bounded band, linear in
//! weight relative to the list maximum: `min_size ..= min_size + size_range`.

use serde::Deserialize;

/// Linear weight-to-font-size mapping.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SizeScale {
    pub min_size: f64,
    pub size_range: f64,
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            min_size: 1.5,
            size_range: 3.0,
        }
    }
}

impl SizeScale {
    /// Size factor for one weight.
    ///
    /// `max_weight` must come from [`max_weight`](crate::words::max_weight),
    /// which substitutes 1.0 for empty/all-zero lists, so the degenerate
    /// case maps every word to `min_size` instead of dividing by zero.
    pub fn factor(&self, weight: f64, max_weight: f64) -> f64 {
        self.min_size + (weight / max_weight) * self.size_range
    }
}
