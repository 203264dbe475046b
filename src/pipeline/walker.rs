//! Page/image walking.
//!
//! The walk is fully sequential: one page at a time, one image at a time,
//! in page-then-image order. Write failures are recorded per image and the
//! walk continues; only document opening is fatal, and that happens before
//! the walk starts.

use std::path::Path;

use crate::model::{EmbeddedImage, LayoutElement, LayoutPage};

use super::filename::synthesize_filename;
use super::writer::ImageSink;
use super::{ExtractionReport, ImageOutcome, Strategy, WriteOutcome};

/// Walk pages in order and write every image through the sink.
///
/// Page and image indices are 1-based. Each write outcome is recorded;
/// failures are logged with the strategy, source path, and synthesized
/// filename, then the walk advances to the next image.
pub(crate) fn walk_and_write<I, S>(
    strategy: Strategy,
    source: &Path,
    pages: I,
    sink: &mut S,
) -> ExtractionReport
where
    I: IntoIterator<Item = Vec<EmbeddedImage>>,
    S: ImageSink,
{
    let mut outcomes = Vec::new();

    for (p, images) in pages.into_iter().enumerate() {
        let page = (p + 1) as u32;
        for (i, image) in images.into_iter().enumerate() {
            let index = (i + 1) as u32;
            let filename = synthesize_filename(page, index, &image.name);

            let outcome = match sink.write(&filename, &image) {
                Ok(path) => WriteOutcome::Written { path },
                Err(e) => {
                    log::error!(
                        "{} extraction of {}: failed to write {}: {}",
                        strategy,
                        source.display(),
                        filename,
                        e
                    );
                    WriteOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            outcomes.push(ImageOutcome {
                page,
                index,
                filename,
                outcome,
            });
        }
    }

    ExtractionReport {
        strategy,
        source: source.to_path_buf(),
        outcomes,
    }
}

/// Shallow first-child image search over a layout element.
///
/// An image leaf is returned directly. A container recurses into its
/// *first child only*; siblings beyond the first child of any container are
/// never visited. Anything else yields nothing.
///
/// The first-child-only recursion is deliberate, carried over from the
/// behavior this tool reproduces. A depth-first search over all children
/// would find more images; do not "fix" this without changing the
/// documented contract.
pub fn first_image(element: &LayoutElement) -> Option<&EmbeddedImage> {
    match element {
        LayoutElement::Image(image) => Some(image),
        LayoutElement::Container(children) => children.first().and_then(first_image),
        LayoutElement::Other(_) => None,
    }
}

/// Images of a layout page, one search per top-level element.
///
/// Results are concatenated in encounter order; elements that yield no
/// image are dropped.
pub fn layout_page_images(page: &LayoutPage) -> Vec<&EmbeddedImage> {
    page.elements.iter().filter_map(first_image).collect()
}
