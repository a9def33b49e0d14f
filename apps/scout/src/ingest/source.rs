use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::errors::AppError;
use crate::models::document::RawDocument;

/// Resolves a document path to text lines. Object-safe so the batch runner
/// can run against a stub in tests.
pub trait TextSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<RawDocument, AppError>;
}

/// PDF text extraction via `pdf-extract`. The library can panic on
/// malformed documents, so the call is fenced with `catch_unwind` and a
/// panic is reported as a decode error like any other.
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn load(&self, path: &Path) -> Result<RawDocument, AppError> {
        let owned = path.to_path_buf();
        let result = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(&owned)));

        match result {
            Ok(Ok(text)) => {
                debug!("decoded {} ({} chars)", path.display(), text.len());
                Ok(RawDocument::from_text(normalize(text)))
            }
            Ok(Err(e)) => Err(AppError::Decode(format!("{}: {e}", path.display()))),
            Err(_) => Err(AppError::Decode(format!(
                "{}: extraction panicked (malformed PDF)",
                path.display()
            ))),
        }
    }
}

/// Form feeds at page boundaries become newlines, so line indexing is
/// uniform across pages.
fn normalize(text: String) -> String {
    if text.contains('\u{c}') {
        text.replace('\u{c}', "\n")
    } else {
        text
    }
}
