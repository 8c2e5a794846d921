//! Razor renderer. Fills the page template with escaped page content.
//!
//! The template is plain text with `${title}`, `${summary}` and `${rows}`
//! placeholders. Anything else in it, including the `@if (!Secondary)`
//! heading switch, is emitted verbatim for the Razor compiler to evaluate.

use crate::error::{Error, Result};
use crate::model::*;
use crate::render::{escape, Renderer};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Built-in page template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/page.razor");

/// Placeholders a template must contain.
const REQUIRED_PLACEHOLDERS: &[&str] = &["title", "rows"];

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

pub struct RazorRenderer {
    template: String,
}

impl RazorRenderer {
    /// Use a custom page template.
    pub fn new(template: String) -> Result<Self> {
        for name in REQUIRED_PLACEHOLDERS {
            if !template.contains(&format!("${{{}}}", name)) {
                return Err(Error::Template(format!(
                    "template is missing the ${{{}}} placeholder",
                    name
                )));
            }
        }
        Ok(Self { template })
    }
}

impl Default for RazorRenderer {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Renderer for RazorRenderer {
    fn render(&self, page: &GeneratedPage) -> String {
        let title = escape(&page.title);
        let summary = match page.summary {
            Some(ref text) => format!("<p>{}</p>\n\n", escape(text)),
            None => String::new(),
        };
        let rows: String = page.rows.iter().map(render_row).collect();

        // Single pass, so placeholder-like text inside comments stays literal
        RE_PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures| match &caps[1] {
                "title" => title.clone(),
                "summary" => summary.clone(),
                "rows" => rows.clone(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }

    fn file_extension(&self) -> &str {
        "razor"
    }
}

fn render_row(row: &Row) -> String {
    let name_cell = if row.generic {
        format!("<td style=\"font-weight: bold;\">{}</td>", escape(&row.name))
    } else {
        format!("<td>{}</td>", escape(&row.name))
    };
    let mut out = String::new();
    out.push_str("\t<tr>\n");
    out.push_str(&format!("\t\t{}\n", name_cell));
    out.push_str(&format!("\t\t<td>{}</td>\n", escape(&row.type_name)));
    out.push_str(&format!("\t\t<td>{}</td>\n", escape(&row.description)));
    out.push_str("\t</tr>\n");
    out
}
