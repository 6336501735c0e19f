//! cirrus-core: layout engine for the Cirrus 3D word cloud.
//!
//! Turns a weighted word list into render-ready records (position,
//! orientation, font size, color) for the React/three.js frontend. The
//! engine itself is pure and deterministic; the only I/O is the analyze
//! client on native builds and the JSON string boundary on wasm builds.

pub mod color;
pub mod compose;
pub mod layout;
pub mod output;
pub mod scale;
pub mod session;
pub mod words;

#[cfg(not(target_arch = "wasm32"))]
pub mod analyze;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use compose::{compose, CloudConfig};
pub use layout::{LayoutPoint, LayoutStrategy, StrategyKind, Vec3};
pub use output::{CloudOutput, WordOutput};
pub use session::{AnalysisSession, Event, Status};
pub use words::{rank_words, RankedWord, WordWeight};
