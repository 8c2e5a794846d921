//! Canonical key construction and comment lookup.
//!
//! Keys follow the compiler's documentation ID format: `T:` for types,
//! `P:` for properties, both followed by the qualified name.
//!
//! Type lookups walk the base chain while it stays inside the documented
//! library. Member lookups are a single exact match against the property's
//! declaring type; no other type is tried.

use crate::comments::CommentIndex;
use crate::model::{Library, PropertyDescriptor, TypeDescriptor, TypeRef};

pub struct Resolver<'a> {
    library: &'a Library,
    index: &'a CommentIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(library: &'a Library, index: &'a CommentIndex) -> Self {
        Self { library, index }
    }

    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// Type-level summary, falling back to in-library base types.
    pub fn resolve_type(&self, ty: &TypeDescriptor) -> Option<String> {
        if let Some(text) = ty.full_name.as_deref().and_then(|n| self.summary(&type_key(n))) {
            return Some(text);
        }

        // Each base is keyed by its reported name, not its open generic
        // definition, so constructed generic bases never match.
        for base in &ty.base_types {
            if !self.library.owns(base) {
                break;
            }
            if let Some(text) = base_key(base).and_then(|key| self.summary(&key)) {
                return Some(text);
            }
        }
        None
    }

    /// Property summary, keyed against the declaring type only.
    pub fn resolve_member(&self, prop: &PropertyDescriptor) -> Option<String> {
        self.summary(&member_key(prop))
    }

    /// `<typeparam>` description on the type's own entry.
    pub fn resolve_generic_param(&self, ty: &TypeDescriptor, param: &str) -> Option<String> {
        let key = type_key(ty.full_name.as_deref()?);
        let text = self.index.lookup(&key, "typeparam", Some(param));
        if text.is_none() {
            tracing::debug!(%key, param, "no typeparam description");
        }
        text.map(str::to_string)
    }

    fn summary(&self, key: &str) -> Option<String> {
        let text = self.index.summary(key);
        if text.is_none() {
            tracing::debug!(%key, "no comment entry");
        }
        text.map(str::to_string)
    }
}

pub fn type_key(full_name: &str) -> String {
    format!("T:{}", full_name)
}

fn base_key(base: &TypeRef) -> Option<String> {
    base.full_name.as_deref().map(type_key)
}

/// `P:<declaring type>.<name>`, using the open generic definition when the
/// declaring type is generic.
pub fn member_key(prop: &PropertyDescriptor) -> String {
    let declaring = &prop.declaring_type;
    let qualified = if declaring.is_generic() {
        declaring.open_definition_name()
    } else {
        declaring.full_name.clone()
    };
    let qualified = qualified.unwrap_or_else(|| declaring.name.clone());
    format!("P:{}.{}", qualified, prop.name)
}
