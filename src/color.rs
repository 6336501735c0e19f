//! Deterministic color assignment.
//!
//! Colors are a pure function of rank: identical input always yields the
//! identical color string, so renders (and test fixtures) are reproducible.
//! Two schemes:
//! - `HueWheel`: hue rotation around the HSL wheel, stepped so neighboring
//!   ranks land far apart
//! - `StrandPalette`: two disjoint fixed palettes, one per helix strand

use serde::Deserialize;

/// Hue-rotation scheme: `hue = (rank * step) % 360` at fixed
/// saturation/lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HueWheel {
    /// Degrees per rank. 37 is coprime with 360, so the wheel visits 360
    /// distinct hues before repeating.
    pub step: u32,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for HueWheel {
    fn default() -> Self {
        Self {
            step: 37,
            saturation: 70,
            lightness: 65,
        }
    }
}

impl HueWheel {
    pub fn color_for(&self, rank: usize) -> String {
        let hue = (rank as u32).wrapping_mul(self.step) % 360;
        format!("hsl({}, {}%, {}%)", hue, self.saturation, self.lightness)
    }
}

/// Fixed palettes for the two helix strands: cool tones for strand 0, warm
/// tones for strand 1. Disjoint, so the strands stay visually separable no
/// matter how dense the ranks get.
pub const STRAND_PALETTES: [&[&str]; 2] = [
    &["#60a5fa", "#38bdf8", "#22d3ee", "#2dd4bf", "#34d399"],
    &["#f87171", "#fb923c", "#fbbf24", "#f472b6", "#e879f9"],
];

/// Palette color for a word on `strand` at `strand_index` along it.
pub fn strand_color(strand: usize, strand_index: usize) -> &'static str {
    let palette = STRAND_PALETTES[strand % 2];
    palette[strand_index % palette.len()]
}

/// Which color scheme the frontend asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorScheme {
    HueWheel(HueWheel),
    StrandPalette,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::HueWheel(HueWheel::default())
    }
}

impl ColorScheme {
    /// Color for a rank. The strand scheme derives strand membership from
    /// rank parity, matching the double-helix strand assignment.
    pub fn color_for(&self, rank: usize) -> String {
        match self {
            Self::HueWheel(wheel) => wheel.color_for(rank),
            Self::StrandPalette => strand_color(rank % 2, rank / 2).to_string(),
        }
    }
}
