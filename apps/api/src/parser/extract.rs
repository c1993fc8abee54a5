//! Document text extraction boundary.
//!
//! The parser itself only consumes text; this module turns uploaded files
//! into UTF-8 text or a typed failure. Unknown formats are
//! `UnsupportedFormat`, never a panic or a silent empty string.

use crate::errors::AppError;

/// Extracts UTF-8 text from an uploaded document, dispatching on extension.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "text" | "md" => Ok(String::from_utf8_lossy(data).into_owned()),
        "pdf" => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            AppError::UnsupportedFormat(format!("PDF text extraction failed: {e}"))
        }),
        "doc" | "docx" => Err(AppError::UnsupportedFormat(
            "Word documents are not supported; upload PDF or plain text".to_string(),
        )),
        "" => Err(AppError::UnsupportedFormat(
            "File has no extension; upload .txt or .pdf".to_string(),
        )),
        other => Err(AppError::UnsupportedFormat(format!(
            "Unsupported file type '.{other}'; upload .txt or .pdf"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_passes_through() {
        let text = extract_text("resume.txt", b"Jane Doe\nEngineer").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(extract_text("RESUME.TXT", b"hello").is_ok());
    }

    #[test]
    fn test_docx_is_unsupported() {
        let err = extract_text("resume.docx", b"PK").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = extract_text("resume.xyz", b"data").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = extract_text("resume", b"data").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_invalid_utf8_txt_is_lossy_not_fatal() {
        let text = extract_text("resume.txt", &[0x4a, 0xff, 0x61]).unwrap();
        assert!(text.contains('J'));
    }
}
