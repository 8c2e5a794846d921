//! Page assembly and trait-based format dispatch.
//!
//! [`build_page`] turns a type into a format-agnostic [`GeneratedPage`];
//! a [`Renderer`] turns that page into file contents.

pub mod json;
pub mod razor;

use crate::error::{Error, Result};
use crate::model::*;
use crate::resolve::Resolver;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every generated file name.
pub const FILE_PREFIX: &str = "Doc";

/// Properties documented on every type that has them, whatever the rules say.
const ALWAYS_INCLUDED: &[&str] = &["Ref"];

const CHILD_CONTENT: &str = "ChildContent";

const GENERIC_ARGUMENT_LABEL: &str = "Generic argument";

// Characters rejected in file names on at least one supported platform.
static RE_INVALID_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).unwrap());

/// Trait for rendering a page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &GeneratedPage) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name. `template` overrides the
/// built-in Razor page template.
pub fn create_renderer(format: &str, template: Option<String>) -> Result<Box<dyn Renderer>> {
    match format {
        "razor" => Ok(Box::new(match template {
            Some(t) => razor::RazorRenderer::new(t)?,
            None => razor::RazorRenderer::default(),
        })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

/// Collect everything documented about `ty`.
pub fn build_page(ty: &TypeDescriptor, resolver: &Resolver) -> GeneratedPage {
    let title = ty.display_name();
    let summary = resolver.resolve_type(ty);
    let mut rows = Vec::new();

    if ty.is_generic() {
        for param in &ty.generic_parameters {
            rows.push(Row {
                name: param.name.clone(),
                type_name: GENERIC_ARGUMENT_LABEL.to_string(),
                description: resolver
                    .resolve_generic_param(ty, &param.name)
                    .unwrap_or_default(),
                generic: true,
            });
        }
    }

    for prop in documented_properties(ty, resolver.library()) {
        let mut description = resolver.resolve_member(prop).unwrap_or_default();
        if prop.name == CHILD_CONTENT && description.is_empty() {
            description = format!("Child content of {}", title);
        }
        rows.push(Row {
            name: prop.name.clone(),
            type_name: value_type_name(&prop.value_type),
            description,
            generic: false,
        });
    }

    GeneratedPage {
        title,
        summary,
        rows,
    }
}

/// Properties shown in the member table.
///
/// Components document their parameters; plain types document everything
/// declared inside the library. Always-included properties follow, sorted
/// separately. A property matching both lists appears twice.
pub fn documented_properties<'t>(
    ty: &'t TypeDescriptor,
    library: &Library,
) -> Vec<&'t PropertyDescriptor> {
    let mut selected: Vec<&PropertyDescriptor> = ty
        .properties
        .iter()
        .filter(|p| match ty.kind {
            TypeKind::Component => p.parameter,
            TypeKind::Plain => library.owns(&p.declaring_type),
        })
        .collect();
    selected.sort_by(|a, b| a.name.cmp(&b.name));

    let mut fixed: Vec<&PropertyDescriptor> = ty
        .properties
        .iter()
        .filter(|p| p.public && ALWAYS_INCLUDED.iter().any(|n| n.eq_ignore_ascii_case(&p.name)))
        .collect();
    fixed.sort_by(|a, b| a.name.cmp(&b.name));

    selected.extend(fixed);
    selected
}

/// Display name of a value type: `Dictionary<String,List<Int32>>`.
pub fn value_type_name(ty: &TypeRef) -> String {
    if !ty.is_generic() {
        return ty.name.clone();
    }
    let base = strip_arity(&ty.name);
    if ty.generic_arguments.is_empty() {
        return base.to_string();
    }
    let args: Vec<String> = ty.generic_arguments.iter().map(value_type_name).collect();
    format!("{}<{}>", base, args.join(","))
}

/// Escape free text for HTML markup. Lines are trimmed and joined with `<br/>`.
pub fn escape(text: &str) -> String {
    text.trim()
        .split('\n')
        .map(|line| html_escape(line.trim()))
        .collect::<Vec<_>>()
        .join("<br/>")
}

/// Markup characters become named entities and U+00A0 to U+00FF become
/// numeric ones.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("&#{};", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Remove characters that are not allowed in file names.
pub fn sanitize_file_name(name: &str) -> String {
    RE_INVALID_FILE_CHARS.replace_all(name, "").into_owned()
}

/// "MatSelect" + "razor" → "DocMatSelect.razor"
pub fn page_file_name(title: &str, ext: &str) -> String {
    format!("{}{}.{}", FILE_PREFIX, sanitize_file_name(title), ext)
}
