//! End-to-end extraction over real files on disk.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use lexsift::document::{MediaType, UploadedDocument};
use lexsift::extract::extract;

/// Build a minimal PDF with one page per entry in `page_texts`.
fn make_pdf(page_texts: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Build a minimal DOCX with one paragraph per entry in `paragraphs`.
fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body>
</w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn plain_text_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.txt");
    std::fs::write(&path, "Party A agrees to pay Party B $100 on 2024-01-01.").unwrap();

    let doc = UploadedDocument::from_path(&path).unwrap();
    assert_eq!(doc.media_type, MediaType::PlainText);
    assert_eq!(doc.filename, "contract.txt");
    assert_eq!(
        extract(&doc).unwrap(),
        "Party A agrees to pay Party B $100 on 2024-01-01."
    );
}

#[test]
fn unknown_extension_is_treated_as_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Heading\nBody").unwrap();

    let doc = UploadedDocument::from_path(&path).unwrap();
    assert_eq!(doc.media_type, MediaType::PlainText);
    assert_eq!(extract(&doc).unwrap(), "# Heading\nBody");
}

#[test]
fn docx_file_preserves_paragraph_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agreement.docx");
    std::fs::write(
        &path,
        make_docx(&["Recitals", "Terms and conditions", "Signatures"]),
    )
    .unwrap();

    let doc = UploadedDocument::from_path(&path).unwrap();
    assert_eq!(doc.media_type, MediaType::Docx);
    assert_eq!(
        extract(&doc).unwrap(),
        "Recitals\nTerms and conditions\nSignatures"
    );
}

#[test]
fn pdf_file_preserves_page_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lease.pdf");
    let mut pdf = make_pdf(&["First page clause", "Second page clause"]);
    pdf.save(&path).unwrap();

    let doc = UploadedDocument::from_path(&path).unwrap();
    assert_eq!(doc.media_type, MediaType::Pdf);
    let text = extract(&doc).unwrap();

    let first = text.find("First page clause").unwrap();
    let second = text.find("Second page clause").unwrap();
    assert!(first < second);
}

#[test]
fn empty_pdf_extracts_to_empty_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    let mut pdf = make_pdf(&[]);
    pdf.save(&path).unwrap();

    let doc = UploadedDocument::from_path(&path).unwrap();
    assert_eq!(extract(&doc).unwrap(), "");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = UploadedDocument::from_path(std::path::Path::new("/nonexistent/contract.pdf"))
        .unwrap_err();
    assert!(matches!(err, lexsift::extract::ExtractionError::Io(_)));
}
