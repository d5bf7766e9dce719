//! PDF text-layer extraction over the `pdf-extract` crate

use crate::domain::{DomainError, PdfParser};

/// Parser that concatenates the embedded text layer of a PDF.
///
/// Pure CPU work on an in-memory byte stream; there is nothing to
/// configure and no state to hold.
#[derive(Debug, Default)]
pub struct PdfExtractParser;

impl PdfExtractParser {
    pub fn new() -> Self {
        Self
    }
}

impl PdfParser for PdfExtractParser {
    fn extract_text(&self, pdf: &[u8]) -> Result<String, DomainError> {
        pdf_extract::extract_text_from_mem(pdf)
            .map_err(|e| DomainError::pdf_parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_a_parse_error() {
        let parser = PdfExtractParser::new();
        let err = parser.extract_text(b"definitely not a pdf").unwrap_err();

        assert!(matches!(err, DomainError::PdfParse { .. }));
    }

    #[test]
    fn test_minimal_pdf_yields_text() {
        // Single-page PDF with "Hi" in its content stream.
        let pdf = minimal_pdf(b"BT /F1 12 Tf 72 712 Td (Hi) Tj ET");
        let parser = PdfExtractParser::new();

        let text = parser.extract_text(&pdf).unwrap();
        assert!(text.contains("Hi"));
    }

    /// Assemble a minimal but structurally valid one-page PDF around the
    /// given content stream, with a correct xref table.
    fn minimal_pdf(content: &[u8]) -> Vec<u8> {
        let objects: Vec<Vec<u8>> = vec![
            b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_vec(),
            b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_vec(),
            b"3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n".to_vec(),
            {
                let mut obj = format!("4 0 obj\n<< /Length {} >>\nstream\n", content.len())
                    .into_bytes();
                obj.extend_from_slice(content);
                obj.extend_from_slice(b"\nendstream\nendobj\n");
                obj
            },
            b"5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
                .to_vec(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for obj in &objects {
            offsets.push(pdf.len());
            pdf.extend_from_slice(obj);
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );

        pdf
    }
}
