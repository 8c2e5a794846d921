//! razordoc: generate Razor documentation pages for a component library.
//!
//! The pipeline reads the library's type metadata (a JSON manifest) and its
//! XML comment export, then writes one `Doc<Type>.razor` page per exported
//! type:
//!
//! 1. [`select`] picks the documentable types
//! 2. [`comments`] indexes the XML comment export
//! 3. [`resolve`] builds canonical keys and looks up comment text
//! 4. [`render`] assembles the member table and fills the page template
//!
//! [`generator::Generator`] drives a full run.

pub mod comments;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod model;
pub mod render;
pub mod resolve;
pub mod select;

pub use error::{Error, Result};
pub use generator::Generator;
