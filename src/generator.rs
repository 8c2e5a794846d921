//! One generation run: clean the output directory, index comments, and
//! write a page per documentable type.

use crate::comments::CommentIndex;
use crate::error::{Error, Result};
use crate::model::Library;
use crate::render::{self, razor::RazorRenderer, Renderer};
use crate::resolve::Resolver;
use crate::select::select_types;
use std::fs;
use std::path::PathBuf;

/// Files removed from the output directory before a run.
pub const DEFAULT_CLEAN_PATTERN: &str = "*";

pub struct Generator {
    library: Library,
    comments_path: PathBuf,
    output_dir: PathBuf,
    renderer: Box<dyn Renderer>,
    clean_pattern: String,
}

impl Generator {
    /// Check the run's preconditions. Both inputs must already exist.
    pub fn new(library: Library, comments_path: PathBuf, output_dir: PathBuf) -> Result<Self> {
        if !comments_path.is_file() {
            return Err(Error::NotFound("xml not found".to_string()));
        }
        if !output_dir.is_dir() {
            return Err(Error::NotFound("output path not exists".to_string()));
        }
        Ok(Self {
            library,
            comments_path,
            output_dir,
            renderer: Box::new(RazorRenderer::default()),
            clean_pattern: DEFAULT_CLEAN_PATTERN.to_string(),
        })
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Razor output through a custom page template.
    pub fn with_template(self, template: String) -> Result<Self> {
        Ok(self.with_renderer(Box::new(RazorRenderer::new(template)?)))
    }

    /// Glob (relative to the output directory) of stale files to delete.
    pub fn with_clean_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.clean_pattern = pattern.into();
        self
    }

    /// Run the whole pipeline. Returns the written files in generation order.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        self.clean()?;

        let index = CommentIndex::load(&self.comments_path)?;
        let resolver = Resolver::new(&self.library, &index);
        let ext = self.renderer.file_extension();

        let mut written = Vec::new();
        for ty in select_types(&self.library) {
            if ty.full_name.is_none() {
                tracing::warn!(name = %ty.name, "type has no qualified name, comments unavailable");
            }

            let page = render::build_page(ty, &resolver);
            let out_path = self
                .output_dir
                .join(render::page_file_name(&page.title, ext));
            let output = self.renderer.render(&page);

            fs::write(&out_path, output).map_err(|e| Error::io(&out_path, e))?;
            tracing::info!(name = %page.title, path = %out_path.display(), "generated page");
            written.push(out_path);
        }

        tracing::info!(pages = written.len(), "generation finished");
        Ok(written)
    }

    /// Delete matching top-level files. Subdirectories are left alone.
    fn clean(&self) -> Result<()> {
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.output_dir.to_string_lossy()),
            self.clean_pattern
        );

        for entry in glob::glob(&pattern)? {
            let path = match entry {
                Ok(p) => p,
                Err(e) => {
                    let failed = e.path().to_path_buf();
                    return Err(Error::io(failed, e.into()));
                }
            };
            if !path.is_file() {
                continue;
            }
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            tracing::debug!(path = %path.display(), "removed stale output");
        }
        Ok(())
    }
}
