//! Direct object-model loader.
//!
//! Resolves each page's image XObjects to flat, directly addressable
//! payloads from the page resource dictionary. No content-stream walk is
//! performed; images appear in the order the resource dictionary lists
//! them.

use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};

use crate::error::Result;
use crate::model::EmbeddedImage;

use super::{image_from_stream, load_document, load_document_bytes, resolve_dict};

/// A page and its resolved images.
#[derive(Debug)]
pub struct PageImages {
    /// Page number (1-indexed, document order)
    pub number: u32,
    /// Images in resource-dictionary order
    pub images: Vec<EmbeddedImage>,
}

/// A PDF opened for object-model image extraction.
pub struct ObjectModelDocument {
    doc: LopdfDocument,
}

impl ObjectModelDocument {
    /// Open a PDF file.
    ///
    /// Fails on missing files, non-PDF input, encrypted documents, and
    /// container-level parse errors.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            doc: load_document(path)?,
        })
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            doc: load_document_bytes(data)?,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// All pages in document order, each with its resolved images.
    ///
    /// An XObject that fails to resolve is logged and skipped; it does not
    /// abort the remaining pages.
    pub fn pages(&self) -> Vec<PageImages> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(number, page_id)| PageImages {
                number,
                images: self.page_images(page_id),
            })
            .collect()
    }

    /// Resolve the image XObjects of one page.
    fn page_images(&self, page_id: ObjectId) -> Vec<EmbeddedImage> {
        let mut images = Vec::new();

        let Ok(page_dict) = self.doc.get_dictionary(page_id) else {
            return images;
        };
        let Some(res_dict) = page_dict
            .get(b"Resources")
            .ok()
            .and_then(|res| resolve_dict(&self.doc, res))
        else {
            return images;
        };
        let Some(xobj_dict) = res_dict
            .get(b"XObject")
            .ok()
            .and_then(|x| resolve_dict(&self.doc, x))
        else {
            return images;
        };

        for (key, obj) in xobj_dict.iter() {
            let Ok(obj_ref) = obj.as_reference() else {
                continue;
            };
            let Ok(lopdf::Object::Stream(stream)) = self.doc.get_object(obj_ref) else {
                continue;
            };
            match image_from_stream(stream, key) {
                Ok(mut image) => {
                    // Strategy A names carry a format suffix, the way the
                    // object-model library labels `page.images` entries.
                    image.name = format!("{}.{}", image.name, image.format.extension());
                    images.push(image);
                }
                Err(crate::Error::ImageExtract(_)) => {
                    // Form XObjects and other non-image resources
                }
                Err(e) => {
                    log::warn!(
                        "Skipping unresolvable XObject {}: {}",
                        String::from_utf8_lossy(key),
                        e
                    );
                }
            }
        }

        images
    }
}
