//! WASM bindings for the cirrus-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! The frontend passes and receives JSON strings; failures come back as an
//! `error` field inside the output object, never as an exception across the
//! boundary.

use serde_json::to_string;
use wasm_bindgen::prelude::*;

use crate::compose::{compose, CloudConfig};
use crate::layout::STRATEGY_NAMES;
use crate::output::{CloudOutput, ErrorInfo};
use crate::words::{rank_words, WordWeight};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn error_output(message: String) -> String {
    let output = CloudOutput {
        words: vec![],
        error: Some(ErrorInfo { message }),
    };
    to_string(&output).unwrap_or_else(|_| "{\"words\": []}".to_string())
}

/// Rank and compose a word cloud for the frontend.
///
/// `words_json` is the analysis response's word list,
/// `[{"word": ..., "weight": ...}, ...]`. `config_json` is a `CloudConfig`
/// object; `{}` selects all defaults.
#[wasm_bindgen]
pub fn compose_cloud(words_json: &str, config_json: &str) -> String {
    let words: Vec<WordWeight> = match serde_json::from_str(words_json) {
        Ok(words) => words,
        Err(e) => {
            console_error(&format!("Error parsing word list: {}", e));
            return error_output(format!("Invalid word list: {}", e));
        }
    };
    let config: CloudConfig = match serde_json::from_str(config_json) {
        Ok(config) => config,
        Err(e) => {
            console_error(&format!("Error parsing config: {}", e));
            return error_output(format!("Invalid config: {}", e));
        }
    };

    let ranked = rank_words(words, config.max_displayed);
    let output = CloudOutput {
        words: compose(&ranked, &config),
        error: None,
    };
    to_string(&output).unwrap()
}

/// Selectable layout strategy names, as a JSON array.
#[wasm_bindgen]
pub fn strategy_names() -> String {
    to_string(STRATEGY_NAMES).unwrap_or_else(|_| "[]".to_string())
}
