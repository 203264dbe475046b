//! Shared fixtures: PDFs synthesized in-memory with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// A minimal but complete JPEG payload (SOI, APP0, EOI).
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

/// An image to embed in a fixture page.
pub struct FixtureImage {
    pub key: &'static str,
    pub data: Vec<u8>,
    pub filter: Option<&'static str>,
}

/// A DCTDecode (JPEG) image XObject.
pub fn jpeg(key: &'static str) -> FixtureImage {
    FixtureImage {
        key,
        data: JPEG_BYTES.to_vec(),
        filter: Some("DCTDecode"),
    }
}

/// An unfiltered image XObject with arbitrary sample data.
pub fn raw(key: &'static str, data: Vec<u8>) -> FixtureImage {
    FixtureImage {
        key,
        data,
        filter: None,
    }
}

fn image_stream(img: &FixtureImage) -> Stream {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => 2,
        "Height" => 2,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };
    if let Some(filter) = img.filter {
        dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    }
    Stream::new(dict, img.data.clone())
}

/// Build a PDF whose pages each contain the given images, referenced from
/// the page resource dictionary and painted by the content stream.
pub fn build_pdf(pages: Vec<Vec<FixtureImage>>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    let page_count = pages.len();
    for images in pages {
        let mut xobjects = Dictionary::new();
        let mut ops: Vec<Operation> = Vec::new();

        for img in &images {
            let img_id = doc.add_object(image_stream(img));
            xobjects.set(img.key.as_bytes().to_vec(), Object::Reference(img_id));
            ops.push(Operation::new(
                "Do",
                vec![Object::Name(img.key.as_bytes().to_vec())],
            ));
        }

        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => Object::Dictionary(xobjects),
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Save a fixture document into a directory and return its path.
pub fn save_pdf(doc: &mut Document, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Filenames present in a directory, sorted.
pub fn dir_filenames(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
