//! Data model for library metadata and generated pages, format-agnostic.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Marker the host type system appends to generic type names (``List`1``).
pub const ARITY_MARKER: char = '`';

/// A compiled component library as described by the extraction step.
#[derive(Debug, Default, Deserialize)]
pub struct Library {
    pub name: String,
    /// Location of the compiled library; the comment export sits next to it.
    #[serde(default)]
    pub location: Option<PathBuf>,
    /// Exported types in the host's enumeration order.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl Library {
    /// Whether `ty` is defined inside this library.
    pub fn owns(&self, ty: &TypeRef) -> bool {
        ty.library.as_deref() == Some(self.name.as_str())
    }
}

/// Capability flag set by the extraction step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Renderable component; only `[Parameter]` properties are documented.
    Component,
    #[default]
    #[serde(alias = "plain_value")]
    Plain,
}

/// Reference to any type as the host reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeRef {
    /// Simple name, possibly with an arity marker (``Dictionary`2``).
    pub name: String,
    /// Qualified name; absent when the host cannot name the type.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Qualified name of the open generic definition.
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub generic_arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty() || self.name.contains(ARITY_MARKER)
    }

    /// Qualified name of the unbound generic form.
    ///
    /// ``Ns.Foo`1[[System.String, ...]]`` becomes ``Ns.Foo`1``.
    pub fn open_definition_name(&self) -> Option<String> {
        if let Some(ref def) = self.definition {
            return Some(def.clone());
        }
        self.full_name
            .as_deref()
            .map(|full| full.split('[').next().unwrap_or(full).to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenericParameter {
    pub name: String,
}

/// An exported type of the documented library.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub generic_parameters: Vec<GenericParameter>,
    /// Base-type chain, nearest first.
    #[serde(default)]
    pub base_types: Vec<TypeRef>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty() || self.name.contains(ARITY_MARKER)
    }

    /// Heading name: the simple name without its arity marker.
    pub fn display_name(&self) -> String {
        if self.is_generic() {
            strip_arity(&self.name).to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Instance property of a type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: TypeRef,
    pub declaring_type: TypeRef,
    /// Marked as a configurable component parameter.
    #[serde(default)]
    pub parameter: bool,
    #[serde(default = "default_true")]
    pub public: bool,
}

fn default_true() -> bool {
    true
}

/// "MatSelect`1" → "MatSelect"
pub fn strip_arity(name: &str) -> &str {
    name.split(ARITY_MARKER).next().unwrap_or(name)
}

/// One documentation page, ready for a renderer.
#[derive(Debug, Default, Serialize)]
pub struct GeneratedPage {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub rows: Vec<Row>,
}

/// A row of the member table.
#[derive(Debug, Default, Serialize)]
pub struct Row {
    pub name: String,
    pub type_name: String,
    pub description: String,
    /// Generic-argument rows are styled differently.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub generic: bool,
}
