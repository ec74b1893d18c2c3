use serde::Serialize;
use std::path::Path;

use crate::analysis::SAMPLE_FILE_NAME;

/// File types the upload control lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub const fn accepted() -> [Self; 3] {
        [Self::Pdf, Self::Docx, Self::Txt]
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }

    fn from_extension(extension: &str) -> Option<Self> {
        Self::accepted()
            .into_iter()
            .find(|kind| kind.extension().eq_ignore_ascii_case(extension))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{file_name}' is not a supported document; upload a pdf, docx or txt file")]
pub struct UploadRejected {
    pub file_name: String,
}

/// A file that passed the extension filter. Its contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
}

impl UploadedDocument {
    pub fn accept(file_name: impl Into<String>) -> Result<Self, UploadRejected> {
        let file_name = file_name.into();
        let kind = Path::new(&file_name)
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(DocumentKind::from_extension);

        match kind {
            Some(kind) => Ok(Self { file_name, kind }),
            None => Err(UploadRejected { file_name }),
        }
    }
}

/// What started an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AnalysisTrigger {
    Upload { document: UploadedDocument },
    Sample,
}

impl AnalysisTrigger {
    pub fn upload(document: UploadedDocument) -> Self {
        Self::Upload { document }
    }

    /// Name shown in the "Document: ..." caption once results appear.
    pub fn file_name(&self) -> &str {
        match self {
            Self::Upload { document } => &document.file_name,
            Self::Sample => SAMPLE_FILE_NAME,
        }
    }

    pub const fn spinner_label(&self) -> &'static str {
        match self {
            Self::Upload { .. } => "Analyzing your document...",
            Self::Sample => "Analyzing sample NDA...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions() {
        for (name, kind) in [
            ("contract.pdf", DocumentKind::Pdf),
            ("offer.docx", DocumentKind::Docx),
            ("notes.txt", DocumentKind::Txt),
            ("SCAN.PDF", DocumentKind::Pdf),
        ] {
            let document = UploadedDocument::accept(name).expect("accepted");
            assert_eq!(document.kind, kind);
            assert_eq!(document.file_name, name);
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["slides.pptx", "README", "archive.pdf.zip", ".pdf"] {
            let err = UploadedDocument::accept(name).expect_err("rejected");
            assert_eq!(err.file_name, name);
        }
    }

    #[test]
    fn trigger_file_names() {
        let document = UploadedDocument::accept("nda-v2.txt").expect("accepted");
        assert_eq!(AnalysisTrigger::upload(document).file_name(), "nda-v2.txt");
        assert_eq!(AnalysisTrigger::Sample.file_name(), "Sample_NDA.pdf");
    }
}
