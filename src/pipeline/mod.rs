//! The extraction pipelines.
//!
//! Two independent pipelines share the same shape: ensure the output
//! directory, walk pages and images in document order, synthesize a
//! filename per image, and write it, isolating per-image failures. They
//! differ in how images are discovered (direct object model versus
//! layout-tree search) and in how the writer labels files on disk.

mod filename;
mod walker;
mod writer;

pub use filename::synthesize_filename;
pub use walker::{first_image, layout_page_images};
pub use writer::{ensure_output_dir, DirectorySink, ImageSink, LayoutImageWriter};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::loader::{LayoutDocument, ObjectModelDocument};

/// Which extraction pipeline produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Direct object-model traversal of page image resources.
    ObjectModel,
    /// Shallow search over per-page layout element trees.
    LayoutTree,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::ObjectModel => write!(f, "object-model"),
            Strategy::LayoutTree => write!(f, "layout-tree"),
        }
    }
}

/// Outcome of one image write.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The full payload was written.
    Written { path: PathBuf },
    /// The write failed; the pipeline continued with the next image.
    Failed { reason: String },
}

/// One discovered image and what happened to it.
#[derive(Debug, Clone, Serialize)]
pub struct ImageOutcome {
    /// 1-based page position
    pub page: u32,
    /// 1-based image position within the page
    pub index: u32,
    /// Synthesized filename
    pub filename: String,
    /// Write outcome
    #[serde(flatten)]
    pub outcome: WriteOutcome,
}

/// Per-item outcomes of one pipeline run.
///
/// Per-image failures are already logged by the time the report is
/// returned; the report exists so callers and tests can observe the
/// continue-on-failure contract, not to surface an aggregate error.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Pipeline that produced this report
    pub strategy: Strategy,
    /// Source PDF path
    pub source: PathBuf,
    /// One entry per discovered image, in walk order
    pub outcomes: Vec<ImageOutcome>,
}

impl ExtractionReport {
    /// Number of images discovered by the walk.
    pub fn discovered(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of images written to disk.
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, WriteOutcome::Written { .. }))
            .count()
    }

    /// Number of per-image write failures.
    pub fn failed_count(&self) -> usize {
        self.discovered() - self.written_count()
    }

    /// Paths of the written artifacts, in walk order.
    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            WriteOutcome::Written { path } => Some(path.as_path()),
            WriteOutcome::Failed { .. } => None,
        })
    }
}

/// Extract images via the direct object model.
///
/// Opens the document, ensures the output directory, then walks pages in
/// document order and their images in resource order. Only document
/// opening and directory setup can fail here; per-image write failures are
/// recorded in the report.
pub fn extract_object_model<P, Q>(pdf_path: P, output_dir: Q) -> Result<ExtractionReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let pdf_path = pdf_path.as_ref();
    let output_dir = output_dir.as_ref();

    let doc = ObjectModelDocument::open(pdf_path)?;
    ensure_output_dir(output_dir)?;

    let mut sink = DirectorySink::new(output_dir);
    let pages = doc.pages().into_iter().map(|p| p.images);
    Ok(walker::walk_and_write(
        Strategy::ObjectModel,
        pdf_path,
        pages,
        &mut sink,
    ))
}

/// Extract images via the layout-tree search.
///
/// Each page's top-level layout elements are searched with the shallow
/// first-child rule (see [`first_image`]); found images are exported with
/// an extension derived from their format.
pub fn extract_layout<P, Q>(pdf_path: P, output_dir: Q) -> Result<ExtractionReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let pdf_path = pdf_path.as_ref();
    let output_dir = output_dir.as_ref();

    let doc = LayoutDocument::open(pdf_path)?;
    ensure_output_dir(output_dir)?;

    let mut writer = LayoutImageWriter::new(output_dir);
    let pages: Vec<Vec<_>> = doc
        .extract_pages()
        .iter()
        .map(|page| layout_page_images(page).into_iter().cloned().collect())
        .collect();
    Ok(walker::walk_and_write(
        Strategy::LayoutTree,
        pdf_path,
        pages,
        &mut writer,
    ))
}

/// Extract images with the given strategy.
pub fn extract_with_strategy<P, Q>(
    strategy: Strategy,
    pdf_path: P,
    output_dir: Q,
) -> Result<ExtractionReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    match strategy {
        Strategy::ObjectModel => extract_object_model(pdf_path, output_dir),
        Strategy::LayoutTree => extract_layout(pdf_path, output_dir),
    }
}
