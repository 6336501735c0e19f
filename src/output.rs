//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React frontend,
//! which maps them onto three.js text primitives. Field names are camelCase
//! on the wire because that is what the frontend destructures.

use serde::Serialize;

use crate::layout::Vec3;

/// A rendered word ready for React to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOutput {
    pub text: String,
    pub font_size: f64,
    pub color: String,
    pub position: Vec3,
    /// Euler rotation in radians.
    pub orientation: Vec3,
}

/// Error information for the frontend's status line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined output sent to React.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudOutput {
    pub words: Vec<WordOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
