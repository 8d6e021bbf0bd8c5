use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{InputType, TaskRequest};

/// Resolve a request payload into plain text.
///
/// - `text`: the content passes through unchanged.
/// - `pdf`: base64-decoded, then page texts are joined with newlines; pages
///   with no extractable text are skipped.
/// - `docx`: base64-decoded, then every paragraph is joined with newlines,
///   including empty paragraphs.
///
/// An unrecognized `input_type` fails before any decoding happens.
pub fn resolve_text(payload: &TaskRequest) -> AppResult<String> {
    let input_type = InputType::from_tag(&payload.input_type).ok_or_else(|| {
        AppError::UnsupportedInputType(format!(
            "Unsupported input type: '{}'",
            payload.input_type
        ))
    })?;

    let text = match input_type {
        InputType::Text => payload.content.clone(),
        InputType::Pdf => {
            let bytes = BASE64.decode(&payload.content)?;
            pdf_text(&bytes)?
        }
        InputType::Docx => {
            let bytes = BASE64.decode(&payload.content)?;
            docx_text(&bytes)?
        }
    };

    debug!("Resolved {} input into {} chars of text", payload.input_type, text.len());
    Ok(text)
}

/// Extract text from PDF bytes, one entry per page with extractable text.
///
/// Pages are visited in document order; pages whose extraction yields only
/// whitespace are dropped from the joined output.
fn pdf_text(bytes: &[u8]) -> AppResult<String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| AppError::Decode(e.to_string()))?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| AppError::Extraction(e.to_string()))?;
        let page_text = page_text.trim_end();
        if !page_text.trim().is_empty() {
            pages.push(page_text.to_string());
        }
    }

    Ok(pages.join("\n"))
}

/// Extract text from DOCX bytes, one entry per paragraph.
///
/// Unlike PDF pages, empty paragraphs are kept and contribute empty lines, so
/// the paragraph structure of the document survives into the joined text.
fn docx_text(bytes: &[u8]) -> AppResult<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| AppError::Decode(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use std::io::Cursor;

    fn request(input_type: &str, content: &str) -> TaskRequest {
        TaskRequest {
            input_type: input_type.to_string(),
            content: content.to_string(),
        }
    }

    /// Build a PDF with one page per entry; `None` pages get an empty
    /// content stream.
    fn pdf_with_pages(page_texts: &[Option<&str>]) -> Vec<u8> {
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
        for page_text in page_texts {
            let operations = match page_text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_texts.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut Cursor::new(&mut bytes)).unwrap();
        bytes
    }

    /// Build a DOCX with three paragraphs, the middle one empty.
    fn three_paragraph_docx() -> Vec<u8> {
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First paragraph")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Third paragraph")));

        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_text_input_is_identity() {
        let payload = request("text", "Hello world");
        assert_eq!(resolve_text(&payload).unwrap(), "Hello world");
    }

    #[test]
    fn test_unsupported_input_type_rejected() {
        let payload = request("html", "whatever");
        match resolve_text(&payload) {
            Err(AppError::UnsupportedInputType(msg)) => assert!(msg.contains("html")),
            other => panic!("expected UnsupportedInputType, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_input_type_rejected() {
        let payload = request("", "whatever");
        assert!(matches!(
            resolve_text(&payload),
            Err(AppError::UnsupportedInputType(_))
        ));
    }

    #[test]
    fn test_malformed_base64_pdf_is_decode_error() {
        let payload = request("pdf", "not-valid-base64!!!");
        assert!(matches!(resolve_text(&payload), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_malformed_base64_docx_is_decode_error() {
        let payload = request("docx", "not-valid-base64!!!");
        assert!(matches!(resolve_text(&payload), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_valid_base64_but_not_a_pdf_is_decode_error() {
        let payload = request("pdf", &BASE64.encode(b"plain bytes, no PDF header"));
        assert!(matches!(resolve_text(&payload), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_pdf_blank_pages_are_skipped() {
        let pdf = pdf_with_pages(&[Some("First page text"), None]);
        let payload = request("pdf", &BASE64.encode(pdf));
        let text = resolve_text(&payload).unwrap();
        assert!(text.contains("First page text"));
        // the blank second page contributes nothing, not even a newline
        assert_eq!(text, text.trim());
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_pdf_surviving_pages_keep_document_order() {
        // a blank page between two text pages drops out without
        // disturbing the order of the pages around it
        let pdf = pdf_with_pages(&[Some("Page one text"), None, Some("Page three text")]);
        let payload = request("pdf", &BASE64.encode(pdf));
        let text = resolve_text(&payload).unwrap();
        assert_eq!(text, "Page one text\nPage three text");
    }

    #[test]
    fn test_docx_keeps_empty_paragraphs() {
        let payload = request("docx", &BASE64.encode(three_paragraph_docx()));
        let text = resolve_text(&payload).unwrap();
        assert_eq!(text, "First paragraph\n\nThird paragraph");
        assert_eq!(text.split('\n').count(), 3);
    }
}
