//! XML comment export index.
//!
//! Loads the documentation file the compiler writes next to a library:
//!
//! ```xml
//! <doc>
//!   <members>
//!     <member name="T:Ns.Widget">
//!       <summary>A widget</summary>
//!       <typeparam name="TValue">Bound value</typeparam>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! Entries are keyed by their canonical `name` attribute. A section body is
//! the concatenated text of everything inside it, so `<see cref="..."/>`
//! disappears and `<c>x</c>` becomes `x`.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One `<member>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub key: String,
    pub sections: Vec<Section>,
}

/// A direct child of `<member>`: `<summary>`, `<typeparam name="T">`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub element: String,
    pub name: Option<String>,
    pub text: String,
}

/// Read-only store of comment entries for one run.
#[derive(Debug, Default)]
pub struct CommentIndex {
    entries: HashMap<String, CommentEntry>,
}

impl CommentIndex {
    /// Load and index a comment export from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound("xml not found".to_string()));
        }
        let xml = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let index = Self::parse(&xml)?;
        tracing::debug!(path = %path.display(), entries = index.len(), "loaded comment export");
        Ok(index)
    }

    /// Index comment export text.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut entries: HashMap<String, CommentEntry> = HashMap::new();
        let mut path: Vec<String> = Vec::new();
        let mut current: Option<CommentEntry> = None;
        let mut section: Option<Section> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e);
                    if is_member(&path, &tag) {
                        current = name_attr(&e)?.map(CommentEntry::new);
                    } else if path.len() == 3 && current.is_some() {
                        section = Some(Section {
                            element: tag.clone(),
                            name: name_attr(&e)?,
                            text: String::new(),
                        });
                    }
                    path.push(tag);
                }
                Event::Empty(e) => {
                    let tag = tag_name(&e);
                    if is_member(&path, &tag) {
                        if let Some(key) = name_attr(&e)? {
                            entries
                                .entry(key.clone())
                                .or_insert_with(|| CommentEntry::new(key));
                        }
                    } else if path.len() == 3 {
                        if let Some(ref mut entry) = current {
                            entry.sections.push(Section {
                                element: tag,
                                name: name_attr(&e)?,
                                text: String::new(),
                            });
                        }
                    }
                }
                Event::Text(t) => {
                    if let Some(ref mut s) = section {
                        s.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(ref mut s) = section {
                        s.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::End(_) => {
                    path.pop();
                    match path.len() {
                        3 => {
                            if let (Some(entry), Some(s)) = (current.as_mut(), section.take()) {
                                entry.sections.push(s);
                            }
                        }
                        2 => {
                            if let Some(entry) = current.take() {
                                // First entry wins on duplicate keys
                                entries.entry(entry.key.clone()).or_insert(entry);
                            }
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CommentEntry> {
        self.entries.get(key)
    }

    /// Exact key match, then the first `element` section (optionally with
    /// a matching `name` attribute).
    pub fn lookup(&self, key: &str, element: &str, name: Option<&str>) -> Option<&str> {
        self.entries.get(key)?.section(element, name)
    }

    /// The `<summary>` of `key`.
    pub fn summary(&self, key: &str) -> Option<&str> {
        self.lookup(key, "summary", None)
    }
}

impl CommentEntry {
    fn new(key: String) -> Self {
        Self {
            key,
            sections: Vec::new(),
        }
    }

    pub fn section(&self, element: &str, name: Option<&str>) -> Option<&str> {
        self.sections
            .iter()
            .filter(|s| s.element == element)
            .find(|s| name.is_none() || s.name.as_deref() == name)
            .map(|s| s.text.as_str())
    }
}

/// `<member>` directly under the root's `<members>`.
fn is_member(path: &[String], tag: &str) -> bool {
    tag == "member" && path.len() == 2 && path[1] == "members"
}

fn tag_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn name_attr(e: &BytesStart) -> Result<Option<String>> {
    match e.try_get_attribute("name")? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
