//! Line-ending policy and the export artifact.
//!
//! The kernel stores text with LF (`'\n'`) newlines. CRLF input is
//! normalized on load, and the preferred ending is remembered so exports
//! round-trip the convention the document arrived with.

/// File name of the export artifact.
pub const EXPORT_FILE_NAME: &str = "README.md";
/// MIME type of the export artifact.
pub const EXPORT_MIME_TYPE: &str = "text/markdown";

/// The preferred newline sequence for exported text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending of a source text.
    ///
    /// Policy: any CRLF in the input selects [`LineEnding::Crlf`], otherwise
    /// [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize a source text to the kernel's internal LF convention.
    pub fn normalize_to_lf(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// A downloadable export of the current buffer.
///
/// The kernel only builds the artifact; persisting it (file save, browser
/// download) is the host's job. Export never touches history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportArtifact {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of `contents`.
    pub mime_type: String,
    /// The exported text.
    pub contents: String,
}

/// Build the Markdown export artifact for a buffer.
pub fn export_markdown(buffer: &str, line_ending: LineEnding) -> ExportArtifact {
    ExportArtifact {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        contents: line_ending.apply_to_text(buffer),
    }
}
