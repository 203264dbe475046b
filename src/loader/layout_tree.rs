//! Layout-tree loader.
//!
//! Renders each page as a tree of layout elements by walking its content
//! stream: `Do` on an image XObject yields an image leaf, `Do` on a Form
//! XObject yields a container over the form's own elements, text objects
//! and path painting yield opaque elements.

use std::collections::HashMap;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::{LayoutElement, LayoutPage, OtherKind};

use super::{image_from_stream, load_document, load_document_bytes, resolve_dict};

/// Forms nesting a form nesting a form this deep are abandoned; PDFs can
/// reference forms cyclically.
const MAX_FORM_DEPTH: usize = 8;

/// A PDF opened for layout-tree image extraction.
pub struct LayoutDocument {
    doc: LopdfDocument,
}

impl LayoutDocument {
    /// Open a PDF file.
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

    /// Render all pages as layout trees, in document order.
    ///
    /// A page whose content stream fails to decode yields an empty page;
    /// the failure is logged and the remaining pages are still rendered.
    pub fn extract_pages(&self) -> Vec<LayoutPage> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(number, page_id)| {
                let mut page = LayoutPage::new(number);
                match self.page_elements(page_id) {
                    Ok(elements) => page.elements = elements,
                    Err(e) => {
                        log::warn!("Failed to render layout of page {}: {}", number, e);
                    }
                }
                page
            })
            .collect()
    }

    /// Build the top-level layout elements of one page.
    fn page_elements(&self, page_id: ObjectId) -> Result<Vec<LayoutElement>> {
        let content = self.page_content(page_id)?;
        let xobjects = self
            .doc
            .get_dictionary(page_id)
            .ok()
            .and_then(|page_dict| page_dict.get(b"Resources").ok())
            .and_then(|res| resolve_dict(&self.doc, res))
            .map(|res_dict| self.xobject_map(res_dict))
            .unwrap_or_default();

        self.elements_from_content(&content, &xobjects, 0)
    }

    /// Decoded content stream bytes of a page (single stream or array).
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// XObject name → object id map from a resource dictionary.
    fn xobject_map(&self, res_dict: &Dictionary) -> HashMap<Vec<u8>, ObjectId> {
        let mut map = HashMap::new();
        if let Some(xobj_dict) = res_dict
            .get(b"XObject")
            .ok()
            .and_then(|x| resolve_dict(&self.doc, x))
        {
            for (key, obj) in xobj_dict.iter() {
                if let Ok(obj_ref) = obj.as_reference() {
                    map.insert(key.clone(), obj_ref);
                }
            }
        }
        map
    }

    /// Walk content operations and emit layout elements in encounter order.
    fn elements_from_content(
        &self,
        data: &[u8],
        xobjects: &HashMap<Vec<u8>, ObjectId>,
        depth: usize,
    ) -> Result<Vec<LayoutElement>> {
        let content =
            lopdf::content::Content::decode(data).map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut elements = Vec::new();
        for op in &content.operations {
            match op.operator.as_str() {
                "Do" => {
                    let name = op.operands.first().and_then(|o| match o {
                        Object::Name(n) => Some(n.as_slice()),
                        _ => None,
                    });
                    if let Some(element) = name
                        .and_then(|n| xobjects.get(n).map(|id| (n, *id)))
                        .and_then(|(n, id)| self.resolve_xobject(n, id, depth))
                    {
                        elements.push(element);
                    }
                }
                "BT" => elements.push(LayoutElement::Other(OtherKind::Text)),
                "S" | "s" | "f" | "F" | "f*" | "B" | "B*" | "b" | "b*" | "sh" => {
                    elements.push(LayoutElement::Other(OtherKind::Graphics));
                }
                _ => {}
            }
        }

        Ok(elements)
    }

    /// Turn an XObject into a layout element, recursing into forms.
    fn resolve_xobject(&self, key: &[u8], id: ObjectId, depth: usize) -> Option<LayoutElement> {
        let Ok(Object::Stream(stream)) = self.doc.get_object(id) else {
            return None;
        };

        match stream
            .dict
            .get(b"Subtype")
            .ok()
            .and_then(|s| s.as_name().ok())
            .and_then(|n| std::str::from_utf8(n).ok())
        {
            Some("Image") => image_from_stream(stream, key).ok().map(LayoutElement::Image),
            Some("Form") => {
                if depth >= MAX_FORM_DEPTH {
                    log::warn!(
                        "Form XObject {} exceeds nesting depth, skipped",
                        String::from_utf8_lossy(key)
                    );
                    return None;
                }
                let content = stream.decompressed_content().ok()?;
                let xobjects = stream
                    .dict
                    .get(b"Resources")
                    .ok()
                    .and_then(|res| resolve_dict(&self.doc, res))
                    .map(|res_dict| self.xobject_map(res_dict))
                    .unwrap_or_default();
                let children = self
                    .elements_from_content(&content, &xobjects, depth + 1)
                    .unwrap_or_default();
                Some(LayoutElement::Container(children))
            }
            _ => None,
        }
    }
}
