//! Cloud composition.
//!
//! Combines ranking, size normalization, layout strategy, and color
//! assignment into the final render-ready word list. This is the single
//! entry point the boundaries (wasm, native callers) go through.

use serde::Deserialize;

use crate::color::ColorScheme;
use crate::layout::{GridLayout, HelixLayout, LayoutStrategy, SphereLayout, StrategyKind, Vec3};
use crate::output::WordOutput;
use crate::scale::SizeScale;
use crate::words::{max_weight, RankedWord, DEFAULT_MAX_DISPLAYED};

/// Font size of the empty-state sentinel.
const EMPTY_STATE_SIZE: f64 = 2.0;
/// Neutral gray, outside both color schemes.
const EMPTY_STATE_COLOR: &str = "#9ca3af";

/// Everything the composer needs, deserializable from the frontend's config
/// object. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudConfig {
    pub strategy: StrategyKind,
    /// Cap on how many ranked words get laid out.
    pub max_displayed: usize,
    pub grid: GridLayout,
    pub sphere: SphereLayout,
    pub helix: HelixLayout,
    /// When unset, each strategy uses its own size band.
    pub scale: Option<SizeScale>,
    /// When unset, the double helix uses strand palettes and everything
    /// else uses the hue wheel.
    pub colors: Option<ColorScheme>,
    /// Sentinel text shown when there are no words to lay out.
    pub empty_text: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_displayed: DEFAULT_MAX_DISPLAYED,
            grid: GridLayout::default(),
            sphere: SphereLayout::default(),
            helix: HelixLayout::default(),
            scale: None,
            colors: None,
            empty_text: "No words yet".to_string(),
        }
    }
}

impl CloudConfig {
    /// The strategy instance selected by `strategy`.
    pub fn strategy_for(&self) -> Box<dyn LayoutStrategy> {
        match self.strategy {
            StrategyKind::Grid => Box::new(self.grid),
            StrategyKind::Sphere => Box::new(self.sphere),
            StrategyKind::DoubleHelix => Box::new(self.helix),
        }
    }

    /// Size band: explicit override, or the strategy's own defaults.
    pub fn scale_for(&self) -> SizeScale {
        self.scale.unwrap_or(match self.strategy {
            StrategyKind::Grid => SizeScale {
                min_size: 1.5,
                size_range: 3.0,
            },
            StrategyKind::Sphere => SizeScale {
                min_size: 1.0,
                size_range: 3.0,
            },
            StrategyKind::DoubleHelix => SizeScale {
                min_size: 2.0,
                size_range: 6.0,
            },
        })
    }

    /// Color scheme: explicit override, or strand palettes for the helix
    /// and the hue wheel for everything else.
    pub fn colors_for(&self) -> ColorScheme {
        self.colors.unwrap_or(match self.strategy {
            StrategyKind::DoubleHelix => ColorScheme::StrandPalette,
            _ => ColorScheme::default(),
        })
    }
}

/// Compose render-ready words from a ranked list.
///
/// An empty list produces exactly one sentinel word at the origin instead
/// of invoking any layout strategy; an empty cloud is a display state, not
/// an error.
pub fn compose(words: &[RankedWord], cfg: &CloudConfig) -> Vec<WordOutput> {
    if words.is_empty() {
        return vec![WordOutput {
            text: cfg.empty_text.clone(),
            font_size: EMPTY_STATE_SIZE,
            color: EMPTY_STATE_COLOR.to_string(),
            position: Vec3::ZERO,
            orientation: Vec3::ZERO,
        }];
    }

    let strategy = cfg.strategy_for();
    let scale = cfg.scale_for();
    let colors = cfg.colors_for();
    let max = max_weight(words);

    words
        .iter()
        .map(|w| {
            let point = strategy.place(w.rank, words.len());
            WordOutput {
                text: w.word.clone(),
                font_size: scale.factor(w.weight, max),
                color: colors.color_for(w.rank),
                position: point.position,
                orientation: point.orientation,
            }
        })
        .collect()
}
