//! PDF text extraction — reads the selectable text layer, page by page.
//!
//! This is a lossless read of whatever text the document encodes: no OCR, no
//! recovery of text rasterized into images. A scanned PDF with no text layer
//! extracts to an empty string, which is a valid outcome the caller must
//! handle, not an error here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input bytes are not a parseable PDF document.
    #[error("Failed to open document: {0}")]
    DocumentOpen(String),
}

/// Extracts the full text of a PDF supplied as an in-memory byte buffer.
///
/// Pages are walked in stored order. A page is kept iff its text is non-empty
/// after trimming surrounding whitespace; the untrimmed text is what gets
/// kept. Retained pages are joined with a single `"\n"`. Either the whole
/// extraction succeeds or it fails — never a partial result.
pub fn extract(document_bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(document_bytes)
        .map_err(|e| ExtractError::DocumentOpen(e.to_string()))?;
    Ok(join_pages(pages))
}

/// Drops blank pages and joins the rest with `"\n"`.
/// Blank pages contribute nothing, not even an empty segment.
fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assembles a minimal valid PDF with one page per entry. An empty entry
    /// produces a page with an empty content stream (no text layer), which is
    /// how an image-only page looks to the extractor. Cross-reference offsets
    /// are computed from actual byte positions, so the file always parses.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let n = pages.len();
        let kids: Vec<String> = (0..n).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();

        let mut objects: Vec<(usize, Vec<u8>)> = vec![
            (1, b"<< /Type /Catalog /Pages 2 0 R >>".to_vec()),
            (
                2,
                format!(
                    "<< /Type /Pages /Kids [{}] /Count {} >>",
                    kids.join(" "),
                    n
                )
                .into_bytes(),
            ),
            (
                3,
                b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                    .to_vec(),
            ),
        ];

        for (i, text) in pages.iter().enumerate() {
            let page_num = 4 + 2 * i;
            let content_num = page_num + 1;
            objects.push((
                page_num,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {content_num} 0 R >>"
                )
                .into_bytes(),
            ));
            let stream = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
            };
            objects.push((
                content_num,
                format!(
                    "<< /Length {} >>\nstream\n{}\nendstream",
                    stream.len(),
                    stream
                )
                .into_bytes(),
            ));
        }

        let mut buf: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let size = objects.len() + 1;
        let mut offsets = vec![0usize; size];
        for (num, body) in &objects {
            offsets[*num] = buf.len();
            buf.extend_from_slice(format!("{num} 0 obj\n").as_bytes());
            buf.extend_from_slice(body);
            buf.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = buf.len();
        buf.extend_from_slice(format!("xref\n0 {size}\n").as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!("trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
                .as_bytes(),
        );
        buf
    }

    #[test]
    fn test_single_page_text_extracts_unchanged() {
        let pdf = build_pdf(&["Experience: 5 years"]);
        let text = extract(&pdf).unwrap();
        assert_eq!(text.trim(), "Experience: 5 years");
    }

    #[test]
    fn test_blank_second_page_contributes_nothing() {
        let pdf = build_pdf(&["Experience: 5 years", ""]);
        let text = extract(&pdf).unwrap();
        assert_eq!(text.trim(), "Experience: 5 years");
        // No blank-page artifact: nothing after the first page's text.
        assert!(!text.trim().contains('\n'));
    }

    #[test]
    fn test_multi_page_pages_joined_in_order() {
        let pdf = build_pdf(&["First page", "Second page"]);
        let text = extract(&pdf).unwrap();
        let first = text.find("First page").unwrap();
        let second = text.find("Second page").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_document_with_no_text_layer_yields_empty_string() {
        let pdf = build_pdf(&["", ""]);
        let text = extract(&pdf).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_malformed_bytes_fail_to_open() {
        let result = extract(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractError::DocumentOpen(_))));
    }

    #[test]
    fn test_empty_buffer_fails_to_open() {
        let result = extract(b"");
        assert!(matches!(result, Err(ExtractError::DocumentOpen(_))));
    }

    #[test]
    fn test_join_pages_drops_whitespace_only_pages() {
        let pages = vec![
            "Page one".to_string(),
            "   \n\t ".to_string(),
            "Page three".to_string(),
        ];
        assert_eq!(join_pages(pages), "Page one\nPage three");
    }

    #[test]
    fn test_join_pages_keeps_untrimmed_text() {
        let pages = vec!["  padded  ".to_string()];
        assert_eq!(join_pages(pages), "  padded  ");
    }

    #[test]
    fn test_join_pages_all_blank_yields_empty() {
        let pages = vec!["".to_string(), " \n ".to_string()];
        assert_eq!(join_pages(pages), "");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(vec![]), "");
    }
}
