//! # pdfpluck
//!
//! Extract embedded raster images from PDF documents.
//!
//! Two side-by-side extraction strategies share the same pipeline shape
//! (directory setup, page/image walk, deterministic naming, per-image
//! failure isolation) and differ in how images are discovered:
//!
//! - **Object model**: each page's image XObjects are resolved directly
//!   from its resource dictionary.
//! - **Layout tree**: each page is rendered as a tree of layout elements
//!   and searched with a deliberately shallow first-child rule.
//!
//! PDF parsing, content-stream decoding, and filter decompression are
//! delegated to `lopdf`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpluck::extract_object_model;
//!
//! fn main() -> pdfpluck::Result<()> {
//!     let report = extract_object_model("document.pdf", "./images")?;
//!     println!("{} of {} images written", report.written_count(), report.discovered());
//!     Ok(())
//! }
//! ```
//!
//! Output filenames are `page_{p}_img_{i}_{name}` with 1-based page and
//! image indices and the loader-assigned base name. Names are not
//! sanitized and collisions silently overwrite; a failed write is logged
//! and skipped rather than aborting the run.

pub mod detect;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use loader::{LayoutDocument, ObjectModelDocument, PageImages};
pub use model::{EmbeddedImage, ImageFormat, LayoutElement, LayoutPage, OtherKind};
pub use pipeline::{
    extract_layout, extract_object_model, extract_with_strategy, synthesize_filename,
    ExtractionReport, ImageOutcome, Strategy, WriteOutcome,
};

use std::path::Path;

/// Run both extraction pipelines over one PDF.
///
/// The fixed sequence the original workflow performs: object-model
/// extraction into `<output_root>/object_model`, then layout-tree
/// extraction into `<output_root>/layout`. The two runs are independent;
/// their reports are returned in that order.
pub fn extract_all<P, Q>(pdf_path: P, output_root: Q) -> Result<(ExtractionReport, ExtractionReport)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let pdf_path = pdf_path.as_ref();
    let output_root = output_root.as_ref();

    let object_model = extract_object_model(pdf_path, output_root.join("object_model"))?;
    let layout = extract_layout(pdf_path, output_root.join("layout"))?;
    Ok((object_model, layout))
}
