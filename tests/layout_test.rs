//! End-to-end tests for the layout-tree extraction pipeline, including the
//! shallow first-child search over Form XObject containers.

mod common;

use common::{build_pdf, dir_filenames, jpeg, save_pdf};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use pdfpluck::{extract_layout, LayoutDocument, LayoutElement};

fn image_stream(data: Vec<u8>) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 2,
            "Height" => 2,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        data,
    )
}

fn form_stream(xobjects: Dictionary, ops: Vec<Operation>) -> Stream {
    let content = Content { operations: ops };
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
            "Resources" => dictionary! {
                "XObject" => Object::Dictionary(xobjects),
            },
        },
        content.encode().unwrap(),
    )
}

fn do_op(name: &str) -> Operation {
    Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())])
}

/// One page whose only top-level element is a container holding
/// [Container([Image A, Image B]), Image C].
fn nested_container_pdf() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let img_a = doc.add_object(image_stream(common::JPEG_BYTES.to_vec()));
    let img_b = doc.add_object(image_stream(common::JPEG_BYTES.to_vec()));
    let img_c = doc.add_object(image_stream(common::JPEG_BYTES.to_vec()));

    let mut inner_xobjects = Dictionary::new();
    inner_xobjects.set("ImA".as_bytes().to_vec(), Object::Reference(img_a));
    inner_xobjects.set("ImB".as_bytes().to_vec(), Object::Reference(img_b));
    let inner_form = doc.add_object(form_stream(
        inner_xobjects,
        vec![do_op("ImA"), do_op("ImB")],
    ));

    let mut outer_xobjects = Dictionary::new();
    outer_xobjects.set("F1".as_bytes().to_vec(), Object::Reference(inner_form));
    outer_xobjects.set("ImC".as_bytes().to_vec(), Object::Reference(img_c));
    let outer_form = doc.add_object(form_stream(
        outer_xobjects,
        vec![do_op("F1"), do_op("ImC")],
    ));

    let mut page_xobjects = Dictionary::new();
    page_xobjects.set("F0".as_bytes().to_vec(), Object::Reference(outer_form));
    let content = Content {
        operations: vec![do_op("F0")],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => Object::Dictionary(page_xobjects),
        },
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

#[test]
fn test_layout_extraction_derives_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let mut doc = build_pdf(vec![vec![jpeg("Im0")], vec![jpeg("Im0")]]);
    let pdf = save_pdf(&mut doc, tmp.path(), "layout.pdf");

    let out = tmp.path().join("out");
    let report = extract_layout(&pdf, &out).unwrap();

    // Base names are bare XObject keys; the writer appends the extension
    assert_eq!(report.written_count(), 2);
    assert_eq!(
        dir_filenames(&out),
        vec!["page_1_img_1_Im0.jpg", "page_2_img_1_Im0.jpg"]
    );
}

#[test]
fn test_layout_zero_image_pdf() {
    let tmp = tempfile::tempdir().unwrap();
    let mut doc = build_pdf(vec![vec![]]);
    let pdf = save_pdf(&mut doc, tmp.path(), "empty.pdf");

    let out = tmp.path().join("out");
    let report = extract_layout(&pdf, &out).unwrap();

    assert_eq!(report.discovered(), 0);
    assert!(out.is_dir());
    assert!(dir_filenames(&out).is_empty());
}

#[test]
fn test_nested_containers_render_as_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let mut doc = nested_container_pdf();
    let pdf = save_pdf(&mut doc, tmp.path(), "nested.pdf");

    let loaded = LayoutDocument::open(&pdf).unwrap();
    let pages = loaded.extract_pages();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].elements.len(), 1);

    let LayoutElement::Container(children) = &pages[0].elements[0] else {
        panic!("expected a container at top level");
    };
    assert_eq!(children.len(), 2);
    assert!(children[0].is_container());
    assert!(children[1].is_image());
}

#[test]
fn test_shallow_search_finds_only_first_chain_image() {
    let tmp = tempfile::tempdir().unwrap();
    let mut doc = nested_container_pdf();
    let pdf = save_pdf(&mut doc, tmp.path(), "nested.pdf");

    let out = tmp.path().join("out");
    let report = extract_layout(&pdf, &out).unwrap();

    // The search recurses into the first child only: Image A is found,
    // Image B and Image C are never visited.
    assert_eq!(report.discovered(), 1);
    assert_eq!(dir_filenames(&out), vec!["page_1_img_1_ImA.jpg"]);
}
