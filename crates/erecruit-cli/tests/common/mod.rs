//! lopdf builders for submission-like test PDFs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// One line of text at height `y`.
pub fn text_line(y: i32, text: &str) -> String {
    format!("BT /F1 12 Tf 72 {y} Td ({text}) Tj ET\n")
}

/// A ruled three-column table whose top edge is at `top`; the first row is
/// the header.
pub fn ruled_table(top: i32, rows: &[[&str; 3]]) -> String {
    const XS: [i32; 4] = [72, 192, 392, 492];
    const ROW_HEIGHT: i32 = 20;

    let bottom = top - ROW_HEIGHT * rows.len() as i32;
    let mut content = String::from("1 w\n");
    for i in 0..=rows.len() as i32 {
        let y = top - ROW_HEIGHT * i;
        content.push_str(&format!("{} {y} m {} {y} l S\n", XS[0], XS[3]));
    }
    for x in XS {
        content.push_str(&format!("{x} {top} m {x} {bottom} l S\n"));
    }
    for (i, row) in rows.iter().enumerate() {
        let y = top - ROW_HEIGHT * (i as i32 + 1) + 6;
        for (col, text) in row.iter().enumerate() {
            content.push_str(&format!(
                "BT /F1 10 Tf {} {y} Td ({text}) Tj ET\n",
                XS[col] + 4
            ));
        }
    }
    content
}

/// Page content of a typical submission: name, publication counts and an
/// academic-record table.
pub fn submission_page(name: &str, national: u32, international: u32) -> String {
    let mut content = String::new();
    content.push_str(&text_line(740, &format!("Name : {name}")));
    content.push_str(&text_line(
        720,
        &format!("No. of Publication National : {national}"),
    ));
    content.push_str(&text_line(
        700,
        &format!("No. of Publication International : {international}"),
    ));
    content.push_str(&ruled_table(
        650,
        &[
            ["Level", "Name of Institution", "Result"],
            ["Graduation", "MIT", "3.5/4"],
            ["Postgraduation", "Stanford", "3.9"],
        ],
    ));
    content
}

/// Build a PDF with one page per content stream.
pub fn pdf_with_pages(pages: &[String]) -> Vec<u8> {
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in pages {
        let stream = Stream::new(dictionary! {}, content.clone().into_bytes());
        let content_id = doc.add_object(stream);

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
