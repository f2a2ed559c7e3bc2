use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::resume::ResumeData;
use crate::error::CoreError;

/// Title substituted when a request arrives with a blank one.
pub const UNTITLED: &str = "Untitled Document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum DocumentType {
    Essay,
    Resume,
    CoverLetter,
    Academic,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Essay => "essay",
            DocumentType::Resume => "resume",
            DocumentType::CoverLetter => "cover-letter",
            DocumentType::Academic => "academic",
        }
    }

    /// Name of the content-generation function that serves this type.
    ///
    /// Academic papers share the essay function; their parameters are
    /// the same shape.
    pub fn endpoint(&self) -> &'static str {
        match self {
            DocumentType::Essay | DocumentType::Academic => "generate-essay",
            DocumentType::Resume => "generate-resume",
            DocumentType::CoverLetter => "generate-cover-letter",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "essay" => Ok(DocumentType::Essay),
            "resume" => Ok(DocumentType::Resume),
            "cover-letter" | "cover_letter" => Ok(DocumentType::CoverLetter),
            "academic" => Ok(DocumentType::Academic),
            _ => Err(CoreError::InvalidDocType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(CoreError::InvalidFormat(s.to_string())),
        }
    }
}

/// The body of a document: free text for essays and letters, a structured
/// record for resumes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentContent {
    Text(String),
    Resume(ResumeData),
}

/// A single export request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentRequest {
    pub title: String,
    pub doc_type: DocumentType,
    pub format: ExportFormat,
    pub content: DocumentContent,
}

impl DocumentRequest {
    pub fn new(
        title: impl Into<String>,
        doc_type: DocumentType,
        format: ExportFormat,
        content: DocumentContent,
    ) -> Self {
        let title = title.into();
        Self {
            title: effective_title(&title).to_string(),
            doc_type,
            format,
            content,
        }
    }

    pub fn essay(title: impl Into<String>, format: ExportFormat, text: impl Into<String>) -> Self {
        Self::new(
            title,
            DocumentType::Essay,
            format,
            DocumentContent::Text(text.into()),
        )
    }

    pub fn resume(title: impl Into<String>, format: ExportFormat, data: ResumeData) -> Self {
        Self::new(
            title,
            DocumentType::Resume,
            format,
            DocumentContent::Resume(data),
        )
    }

    /// The title to print and to name the file after.
    ///
    /// Requests built through [`DocumentRequest::new`] are already normalized;
    /// deserialized ones may not be.
    pub fn effective_title(&self) -> &str {
        effective_title(&self.title)
    }
}

/// Trim `raw`, falling back to [`UNTITLED`] when nothing is left.
pub fn effective_title(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() { UNTITLED } else { trimmed }
}
