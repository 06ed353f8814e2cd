//! lopdf builders for submission-like test PDFs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn text_line(y: i32, text: &str) -> String {
    format!("BT /F1 12 Tf 72 {y} Td ({text}) Tj ET\n")
}

/// A ruled three-column table with its top edge at `top`.
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
        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
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

pub fn write_pdf(dir: &Path, name: &str, pages: &[String]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_with_pages(pages)).unwrap();
    path
}
