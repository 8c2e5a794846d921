//! Library manifest loading.
//!
//! The manifest is the JSON description of a compiled library written by
//! the extraction step: exported types, base chains, generic parameters
//! and properties.

use crate::error::{Error, Result};
use crate::model::Library;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the comment export that sits next to the library.
pub const COMMENT_EXPORT_EXTENSION: &str = "xml";

/// Read a manifest. A relative `location` is resolved against the
/// manifest's directory.
pub fn load(path: &Path) -> Result<Library> {
    if !path.is_file() {
        return Err(Error::NotFound(format!(
            "manifest not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut library = parse(&content).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(location) = library.location.take() {
        library.location = Some(if location.is_relative() {
            path.parent().unwrap_or(Path::new("")).join(location)
        } else {
            location
        });
    }
    tracing::debug!(library = %library.name, types = library.types.len(), "loaded manifest");
    Ok(library)
}

pub fn parse(content: &str) -> serde_json::Result<Library> {
    serde_json::from_str(content)
}

/// Where the comment export lives: the library location (or, without one,
/// the manifest itself) with its extension swapped.
pub fn comment_export_path(library: &Library, manifest: &Path) -> PathBuf {
    library
        .location
        .as_deref()
        .unwrap_or(manifest)
        .with_extension(COMMENT_EXPORT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"{
        "name": "Lib",
        "location": "bin/Lib.dll",
        "types": [
            {
                "name": "MatSelect`1",
                "full_name": "Lib.MatSelect`1",
                "kind": "component",
                "generic_parameters": [{ "name": "TValue" }],
                "properties": [
                    {
                        "name": "Value",
                        "type": { "name": "TValue" },
                        "declaring_type": { "name": "MatSelect`1", "library": "Lib" },
                        "parameter": true
                    }
                ]
            },
            { "name": "MatTheme" }
        ]
    }"#;

    #[test]
    fn parse_defaults() {
        let lib = parse(MANIFEST).unwrap();
        assert_eq!(lib.types.len(), 2);
        let select = &lib.types[0];
        assert_eq!(select.kind, TypeKind::Component);
        assert!(select.is_generic());
        assert!(select.properties[0].public);
        let theme = &lib.types[1];
        assert_eq!(theme.kind, TypeKind::Plain);
        assert!(theme.full_name.is_none());
        assert!(theme.properties.is_empty());
    }

    #[test]
    fn load_resolves_relative_location() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();
        let lib = load(file.path()).unwrap();
        let dir = file.path().parent().unwrap();
        assert_eq!(lib.location.as_deref(), Some(dir.join("bin/Lib.dll").as_path()));
        assert_eq!(
            comment_export_path(&lib, file.path()),
            dir.join("bin/Lib.xml")
        );
    }

    #[test]
    fn export_path_without_location() {
        let lib = Library::default();
        assert_eq!(
            comment_export_path(&lib, Path::new("out/Lib.json")),
            PathBuf::from("out/Lib.xml")
        );
    }

    #[test]
    fn load_missing_manifest() {
        let err = load(Path::new("/nonexistent/lib.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn load_malformed_manifest() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(load(file.path()), Err(Error::Manifest { .. })));
    }
}
