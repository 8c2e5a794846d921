//! Type selection: which exported types get a page.

use crate::model::{Library, TypeDescriptor};

/// Types named `Base*` are abstract building blocks and never documented.
const SKIP_PREFIX: &str = "Base";

/// Exported types worth documenting, in the library's enumeration order.
pub fn select_types(library: &Library) -> Vec<&TypeDescriptor> {
    library
        .types
        .iter()
        .filter(|ty| !ty.name.starts_with(SKIP_PREFIX))
        .collect()
}
