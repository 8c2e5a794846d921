//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the page model directly. Text is left unescaped; consumers
//! apply their own markup rules.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &GeneratedPage) -> String {
        // Plain strings and bools only, serialization cannot fail
        let mut out = serde_json::to_string_pretty(page).unwrap_or_default();
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
