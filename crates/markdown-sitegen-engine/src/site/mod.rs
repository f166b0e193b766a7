//! # Site Generation
//!
//! Filesystem glue around the pipeline: copies static assets, converts every
//! markdown file under the content directory and writes it through the page
//! template into the output directory, mirroring the content layout.

pub mod template;

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    error::MarkdownError,
    io::{self, IoError},
    parsing::{document_to_tree, extract_title},
};

pub use template::Template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
    #[error("Static directory not found: {0}")]
    MissingStaticDir(PathBuf),
    #[error("Template {path} is missing the {placeholder} placeholder")]
    InvalidTemplate {
        path: PathBuf,
        placeholder: &'static str,
    },
    #[error("Output directory {output} overlaps source {input}")]
    OutputOverlapsSource { output: PathBuf, input: PathBuf },
}

/// Locations and settings for one site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix for root-relative links, always starting and ending with `/`.
    pub base_path: String,
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Copies static assets, then generates every page.
pub fn build_site(options: &SiteOptions) -> Result<BuildReport, SiteError> {
    ensure_disjoint(&options.output_dir, &options.content_dir)?;
    ensure_not_within(&options.template_path, &options.output_dir)?;
    let static_files = copy_static(&options.static_dir, &options.output_dir)?;
    let template = Template::load(&options.template_path)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
    )?;

    log::info!(
        "Built {} pages and copied {static_files} static files into {}",
        pages.len(),
        options.output_dir.display()
    );
    Ok(BuildReport {
        static_files,
        pages,
    })
}

/// Replaces the output directory with a fresh copy of the static directory.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize, SiteError> {
    if !static_dir.is_dir() {
        return Err(SiteError::MissingStaticDir(static_dir.to_path_buf()));
    }
    ensure_disjoint(output_dir, static_dir)?;
    io::reset_dir(output_dir)?;
    Ok(io::copy_dir_recursive(static_dir, output_dir)?)
}

/// Converts one markdown file into a full HTML page at `dest`.
pub fn generate_page(
    source: &Path,
    template: &Template,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::debug!("Generating page from {} to {}", source.display(), dest.display());

    let markdown = io::read_file(source)?;
    let (title, body) = render_document(&markdown).map_err(|err| SiteError::Markdown {
        path: source.to_path_buf(),
        source: err,
    })?;

    io::write_file(dest, &template.render(&title, &body, base_path))?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_dir`, keeping its
/// relative location and swapping the extension for `.html`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut pages = Vec::new();
    for relative in io::scan_markdown_files(content_dir)? {
        let source = relative.to_path(content_dir);
        let dest = relative.with_extension("html").to_path(dest_dir);
        generate_page(&source, template, &dest, base_path)?;
        pages.push(dest);
    }
    Ok(pages)
}

/// The output directory is wiped on every build, so it must not overlap a
/// source directory in either direction.
fn ensure_disjoint(output_dir: &Path, source_dir: &Path) -> Result<(), SiteError> {
    let output = resolve(output_dir);
    let source = resolve(source_dir);
    if output.starts_with(&source) || source.starts_with(&output) {
        return Err(SiteError::OutputOverlapsSource {
            output: output_dir.to_path_buf(),
            input: source_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// A single source file only conflicts when the output directory holds it.
fn ensure_not_within(source_file: &Path, output_dir: &Path) -> Result<(), SiteError> {
    if resolve(source_file).starts_with(resolve(output_dir)) {
        return Err(SiteError::OutputOverlapsSource {
            output: output_dir.to_path_buf(),
            input: source_file.to_path_buf(),
        });
    }
    Ok(())
}

/// Absolute form of `path` with symlinks and `.`/`..` resolved as far as the
/// path exists; the missing tail (e.g. an output directory not yet created)
/// is appended unchanged.
fn resolve(path: &Path) -> PathBuf {
    let absolute = match env::current_dir() {
        Ok(cwd) if path.is_relative() => cwd.join(path),
        _ => path.to_path_buf(),
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return missing
                .iter()
                .rev()
                .fold(canonical, |resolved, part| resolved.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return absolute,
        }
    }
}

/// Title and rendered body of one document.
pub fn render_document(markdown: &str) -> Result<(String, String), MarkdownError> {
    let tree = document_to_tree(markdown)?;
    let title = extract_title(&tree)?;
    Ok((title, tree.render()?))
}
